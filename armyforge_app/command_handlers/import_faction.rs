use std::sync::Arc;

use armyforge_game::models::faction::parse_faction_document;
use armyforge_types::errors::ApplicationError;

use crate::{
    config::Config,
    cqrs::{
        CommandHandler,
        commands::{FactionImport, ImportFaction},
    },
    uow::UnitOfWork,
};

use super::helpers::upsert_faction;

pub struct ImportFactionCommandHandler {}

impl ImportFactionCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<ImportFaction> for ImportFactionCommandHandler {
    async fn handle(
        &self,
        command: ImportFaction,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<FactionImport, ApplicationError> {
        let data = parse_faction_document(command.document)?;
        upsert_faction(uow, data).await
    }
}
