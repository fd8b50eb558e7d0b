use std::sync::Arc;
use uuid::Uuid;

use armyforge_game::models::faction::Faction;
use armyforge_types::errors::ApplicationError;

use crate::{
    config::Config,
    cqrs::{CommandHandler, commands::SeedCatalog},
    seed::{bundled_factions, load_data_dir},
    uow::UnitOfWork,
};

pub struct SeedCatalogCommandHandler {}

impl SeedCatalogCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<SeedCatalog> for SeedCatalogCommandHandler {
    async fn handle(
        &self,
        _command: SeedCatalog,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        config: &Arc<Config>,
    ) -> Result<usize, ApplicationError> {
        let repo = uow.factions();

        let mut documents = bundled_factions()?;
        if let Some(dir) = &config.data_dir {
            documents.extend(load_data_dir(dir).await);
        }

        let mut inserted = 0;
        for data in documents {
            if repo.find_by_name(&data.faction, &data.game).await?.is_some() {
                tracing::debug!(faction = %data.faction, game = %data.game, "Faction already seeded");
                continue;
            }
            let faction = Faction::new(Uuid::new_v4(), data);
            repo.save(&faction).await?;
            inserted += 1;
        }

        if inserted > 0 {
            tracing::info!(inserted, "Faction catalog seeded");
        }
        Ok(inserted)
    }
}
