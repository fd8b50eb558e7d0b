use sqlx::postgres::{PgPool, PgPoolOptions};

use armyforge_types::errors::DbError;

pub type DbPool = PgPool;

pub async fn establish_connection_pool(database_url: &str) -> Result<DbPool, DbError> {
    Ok(PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await?)
}
