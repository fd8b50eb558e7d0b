use std::sync::Arc;

use armyforge_game::models::army::Army;
use armyforge_types::errors::ApplicationError;

use crate::{
    config::Config,
    cqrs::{CommandHandler, commands::CreateArmy},
    uow::UnitOfWork,
};

pub struct CreateArmyCommandHandler {}

impl CreateArmyCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<CreateArmy> for CreateArmyCommandHandler {
    async fn handle(
        &self,
        command: CreateArmy,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<(), ApplicationError> {
        let army = Army::new(
            command.id,
            command.name,
            command.game,
            command.faction,
            command.points_limit,
            command.units,
        );

        uow.armies().save(&army).await?;

        tracing::debug!(
            army_id = %army.id,
            total_points = army.total_points(),
            "Army created"
        );
        Ok(())
    }
}
