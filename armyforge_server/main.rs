use std::sync::Arc;

use armyforge_app::{
    app_bus::AppBus, command_handlers::SeedCatalogCommandHandler, config::Config,
    cqrs::commands::SeedCatalog, uow::UnitOfWorkProvider,
};
use armyforge_db::{
    InMemoryUnitOfWorkProvider, establish_connection_pool, uow::PostgresUnitOfWorkProvider,
};
use armyforge_types::errors::{ApplicationError, Result};
use armyforge_web::{AppState, WebRouter};

mod logs;
use logs::setup_logging;

#[tokio::main]
#[cfg(not(tarpaulin_include))]
async fn main() -> Result<(), ApplicationError> {
    let _log_guard = setup_logging();
    let (config, app_bus) = setup_app().await?;
    let state = AppState::new(app_bus, config.clone());

    WebRouter::serve(state, config.port).await
}

async fn setup_app() -> Result<(Arc<Config>, Arc<AppBus>), ApplicationError> {
    let config = Arc::new(Config::from_env());
    let uow_provider = setup_store(&config).await?;
    let app_bus = Arc::new(AppBus::new(config.clone(), uow_provider));

    seed_catalog(&app_bus).await;

    Ok((config, app_bus))
}

async fn setup_store(config: &Config) -> Result<Arc<dyn UnitOfWorkProvider>, ApplicationError> {
    let Some(database_url) = &config.database_url else {
        tracing::warn!("DATABASE_URL not set, using the in-memory store");
        return Ok(Arc::new(InMemoryUnitOfWorkProvider::new()));
    };

    let db_pool = establish_connection_pool(database_url).await?;
    sqlx::migrate!("../migrations")
        .run(&db_pool)
        .await
        .map_err(|e| ApplicationError::Unknown(e.to_string()))?;
    tracing::info!("Connected to Postgres, migrations applied");

    Ok(Arc::new(PostgresUnitOfWorkProvider::new(db_pool)))
}

/// A failed seed is not fatal: listing factions retries it lazily.
async fn seed_catalog(app_bus: &AppBus) {
    match app_bus
        .execute(SeedCatalog, SeedCatalogCommandHandler::new())
        .await
    {
        Ok(0) => tracing::info!("Faction catalog already seeded. Skipping."),
        Ok(inserted) => tracing::info!("Faction catalog seeded with {inserted} factions."),
        Err(e) => tracing::error!("Error during faction catalog seeding: {e}"),
    }
}
