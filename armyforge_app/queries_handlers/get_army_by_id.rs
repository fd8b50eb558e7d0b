use async_trait::async_trait;
use std::sync::Arc;

use armyforge_types::errors::ApplicationError;

use crate::{
    config::Config,
    cqrs::{Query, QueryHandler, queries::GetArmyById},
    uow::UnitOfWork,
};

pub struct GetArmyByIdHandler {}

impl GetArmyByIdHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl QueryHandler<GetArmyById> for GetArmyByIdHandler {
    async fn handle(
        &self,
        query: GetArmyById,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<<GetArmyById as Query>::Output, ApplicationError> {
        uow.armies().get_by_id(query.id).await
    }
}
