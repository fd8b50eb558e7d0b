use async_trait::async_trait;
use std::sync::Arc;

use armyforge_types::errors::ApplicationError;

use crate::{
    config::Config,
    cqrs::{Query, QueryHandler, queries::GetFactionById},
    uow::UnitOfWork,
};

pub struct GetFactionByIdHandler {}

impl GetFactionByIdHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl QueryHandler<GetFactionById> for GetFactionByIdHandler {
    async fn handle(
        &self,
        query: GetFactionById,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<<GetFactionById as Query>::Output, ApplicationError> {
        uow.factions().get_by_id(query.id).await
    }
}
