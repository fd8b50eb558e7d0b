use std::sync::Arc;

use armyforge_game::models::faction::parse_faction_bytes;
use armyforge_types::errors::{AppError, ApplicationError};

use crate::{
    config::Config,
    cqrs::{
        CommandHandler,
        commands::{FactionImport, UploadFaction},
    },
    uow::UnitOfWork,
};

use super::helpers::upsert_faction;

pub struct UploadFactionCommandHandler {}

impl UploadFactionCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<UploadFaction> for UploadFactionCommandHandler {
    async fn handle(
        &self,
        command: UploadFaction,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<FactionImport, ApplicationError> {
        if !command.file_name.ends_with(".json") {
            return Err(AppError::InvalidFileType(command.file_name).into());
        }

        let data = parse_faction_bytes(&command.content)?;
        upsert_faction(uow, data).await
    }
}
