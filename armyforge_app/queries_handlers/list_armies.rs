use async_trait::async_trait;
use std::sync::Arc;

use armyforge_types::errors::ApplicationError;

use crate::{
    config::Config,
    cqrs::{Query, QueryHandler, queries::ListArmies},
    uow::UnitOfWork,
};

pub struct ListArmiesHandler {}

impl ListArmiesHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl QueryHandler<ListArmies> for ListArmiesHandler {
    async fn handle(
        &self,
        _query: ListArmies,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<<ListArmies as Query>::Output, ApplicationError> {
        uow.armies().list().await
    }
}
