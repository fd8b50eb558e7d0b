use std::sync::Arc;

use armyforge_game::models::faction::Faction;
use armyforge_types::errors::ApplicationError;

use crate::{
    config::Config,
    cqrs::{CommandHandler, commands::CreateFaction},
    uow::UnitOfWork,
};

pub struct CreateFactionCommandHandler {}

impl CreateFactionCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<CreateFaction> for CreateFactionCommandHandler {
    async fn handle(
        &self,
        command: CreateFaction,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<(), ApplicationError> {
        let faction = Faction::new(command.id, command.data);
        uow.factions().save(&faction).await
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use armyforge_game::test_utils::faction_data_factory;

    use super::*;
    use crate::test_utils::tests::MockUnitOfWork;

    #[tokio::test]
    async fn test_create_faction() {
        let config = Arc::new(Config::default());
        let mock_uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(MockUnitOfWork::new());
        let handler = CreateFactionCommandHandler::new();

        let id = Uuid::new_v4();
        let command = CreateFaction {
            id,
            data: faction_data_factory("Orques", "Age of Fantasy"),
        };
        handler.handle(command, &mock_uow, &config).await.unwrap();

        let stored = mock_uow.factions().get_by_id(id).await.unwrap();
        assert_eq!(stored.name(), "Orques");
        assert_eq!(stored.game(), "Age of Fantasy");
    }

    #[tokio::test]
    async fn test_create_does_not_deduplicate() {
        let config = Arc::new(Config::default());
        let mock_uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(MockUnitOfWork::new());
        let handler = CreateFactionCommandHandler::new();

        for _ in 0..2 {
            let command = CreateFaction {
                id: Uuid::new_v4(),
                data: faction_data_factory("Orques", "Age of Fantasy"),
            };
            handler.handle(command, &mock_uow, &config).await.unwrap();
        }

        let factions = mock_uow.factions().list(None).await.unwrap();
        assert_eq!(factions.len(), 2);
    }
}
