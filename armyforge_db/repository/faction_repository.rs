use sqlx::{Postgres, Transaction};
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

use armyforge_app::repository::FactionRepository;
use armyforge_game::models::faction::Faction;
use armyforge_types::errors::{ApplicationError, DbError};

use crate::models as db_models;

#[derive(Clone)]
pub struct PostgresFactionRepository<'a> {
    tx: Arc<Mutex<Transaction<'a, Postgres>>>,
}

impl<'a> PostgresFactionRepository<'a> {
    pub fn new(tx: Arc<Mutex<Transaction<'a, Postgres>>>) -> Self {
        Self { tx }
    }
}

fn into_factions(rows: Vec<db_models::Faction>) -> Result<Vec<Faction>, ApplicationError> {
    Ok(rows
        .into_iter()
        .map(Faction::try_from)
        .collect::<Result<Vec<_>, _>>()?)
}

#[async_trait::async_trait]
impl<'a> FactionRepository for PostgresFactionRepository<'a> {
    async fn list(&self, game: Option<&str>) -> Result<Vec<Faction>, ApplicationError> {
        let mut tx_guard = self.tx.lock().await;
        let rows = sqlx::query_as::<_, db_models::Faction>(
            r#"
            SELECT id, faction, game, document, created_at
            FROM factions
            WHERE $1::TEXT IS NULL OR game = $1
            ORDER BY created_at, id
            "#,
        )
        .bind(game)
        .fetch_all(&mut *tx_guard.as_mut())
        .await
        .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        into_factions(rows)
    }

    async fn get_by_id(&self, faction_id: Uuid) -> Result<Faction, ApplicationError> {
        let mut tx_guard = self.tx.lock().await;
        let row = sqlx::query_as::<_, db_models::Faction>(
            r#"
            SELECT id, faction, game, document, created_at
            FROM factions
            WHERE id = $1
            "#,
        )
        .bind(faction_id)
        .fetch_optional(&mut *tx_guard.as_mut())
        .await
        .map_err(|e| ApplicationError::Db(DbError::Database(e)))?
        .ok_or_else(|| ApplicationError::Db(DbError::FactionNotFound(faction_id.to_string())))?;

        Ok(Faction::try_from(row)?)
    }

    async fn find_by_name(
        &self,
        faction: &str,
        game: &str,
    ) -> Result<Option<Faction>, ApplicationError> {
        let mut tx_guard = self.tx.lock().await;
        let row = sqlx::query_as::<_, db_models::Faction>(
            r#"
            SELECT id, faction, game, document, created_at
            FROM factions
            WHERE faction = $1 AND game = $2
            ORDER BY created_at, id
            LIMIT 1
            "#,
        )
        .bind(faction)
        .bind(game)
        .fetch_optional(&mut *tx_guard.as_mut())
        .await
        .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        Ok(row.map(Faction::try_from).transpose()?)
    }

    async fn save(&self, faction: &Faction) -> Result<(), ApplicationError> {
        let document = serde_json::to_value(&faction.data)?;

        let mut tx_guard = self.tx.lock().await;
        sqlx::query(
            r#"
            INSERT INTO factions (id, faction, game, document)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (id) DO UPDATE
            SET
              faction = $2,
              game = $3,
              document = $4
            "#,
        )
        .bind(faction.id)
        .bind(faction.name())
        .bind(faction.game())
        .bind(document)
        .execute(&mut *tx_guard.as_mut())
        .await
        .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;
        Ok(())
    }

    async fn remove(&self, faction_id: Uuid) -> Result<(), ApplicationError> {
        let mut tx_guard = self.tx.lock().await;
        let result = sqlx::query("DELETE FROM factions WHERE id = $1")
            .bind(faction_id)
            .execute(&mut *tx_guard.as_mut())
            .await
            .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        if result.rows_affected() == 0 {
            return Err(ApplicationError::Db(DbError::FactionNotFound(
                faction_id.to_string(),
            )));
        }
        Ok(())
    }
}
