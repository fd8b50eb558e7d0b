use async_trait::async_trait;
use std::sync::Arc;

use armyforge_types::errors::ApplicationError;

use crate::{
    config::Config,
    cqrs::{Query, QueryHandler, queries::ListFactions},
    uow::UnitOfWork,
};

pub struct ListFactionsHandler {}

impl ListFactionsHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl QueryHandler<ListFactions> for ListFactionsHandler {
    async fn handle(
        &self,
        query: ListFactions,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<<ListFactions as Query>::Output, ApplicationError> {
        uow.factions().list(query.game.as_deref()).await
    }
}
