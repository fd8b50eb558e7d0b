use std::sync::Arc;

use armyforge_types::errors::ApplicationError;

use crate::{
    config::Config,
    cqrs::{CommandHandler, commands::DeleteArmy},
    uow::UnitOfWork,
};

pub struct DeleteArmyCommandHandler {}

impl DeleteArmyCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<DeleteArmy> for DeleteArmyCommandHandler {
    async fn handle(
        &self,
        command: DeleteArmy,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<(), ApplicationError> {
        uow.armies().remove(command.id).await
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use armyforge_game::test_utils::army_factory;

    use super::*;
    use crate::test_utils::tests::MockUnitOfWork;

    #[tokio::test]
    async fn test_delete_army() {
        let config = Arc::new(Config::default());
        let mock = MockUnitOfWork::new();
        let army = army_factory(Default::default());
        mock.mock_armies().add_army(army.clone());
        let mock_uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(mock);
        let handler = DeleteArmyCommandHandler::new();

        handler
            .handle(DeleteArmy { id: army.id }, &mock_uow, &config)
            .await
            .unwrap();

        let err = mock_uow.armies().get_by_id(army.id).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_delete_unknown_army_fails() {
        let config = Arc::new(Config::default());
        let mock_uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(MockUnitOfWork::new());
        let handler = DeleteArmyCommandHandler::new();

        let err = handler
            .handle(DeleteArmy { id: Uuid::new_v4() }, &mock_uow, &config)
            .await
            .unwrap_err();

        assert!(err.is_not_found());
    }
}
