use std::sync::Arc;

use armyforge_types::errors::ApplicationError;

use crate::{
    config::Config,
    cqrs::{CommandHandler, commands::DeleteFaction},
    uow::UnitOfWork,
};

pub struct DeleteFactionCommandHandler {}

impl DeleteFactionCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<DeleteFaction> for DeleteFactionCommandHandler {
    async fn handle(
        &self,
        command: DeleteFaction,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<(), ApplicationError> {
        uow.factions().remove(command.id).await
    }
}
