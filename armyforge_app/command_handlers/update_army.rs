use std::sync::Arc;

use armyforge_types::errors::ApplicationError;

use crate::{
    config::Config,
    cqrs::{CommandHandler, commands::UpdateArmy},
    uow::UnitOfWork,
};

pub struct UpdateArmyCommandHandler {}

impl UpdateArmyCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<UpdateArmy> for UpdateArmyCommandHandler {
    async fn handle(
        &self,
        command: UpdateArmy,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<(), ApplicationError> {
        let repo = uow.armies();

        let mut army = repo.get_by_id(command.id).await?;
        army.apply(command.changes);
        repo.save(&army).await?;

        tracing::debug!(
            army_id = %army.id,
            total_points = army.total_points(),
            "Army updated"
        );
        Ok(())
    }
}
