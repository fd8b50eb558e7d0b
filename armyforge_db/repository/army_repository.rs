use sqlx::{Postgres, Transaction};
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

use armyforge_app::repository::ArmyRepository;
use armyforge_game::models::army::Army;
use armyforge_types::errors::{ApplicationError, DbError};

use crate::models as db_models;

#[derive(Clone)]
pub struct PostgresArmyRepository<'a> {
    tx: Arc<Mutex<Transaction<'a, Postgres>>>,
}

impl<'a> PostgresArmyRepository<'a> {
    pub fn new(tx: Arc<Mutex<Transaction<'a, Postgres>>>) -> Self {
        Self { tx }
    }
}

#[async_trait::async_trait]
impl<'a> ArmyRepository for PostgresArmyRepository<'a> {
    async fn list(&self) -> Result<Vec<Army>, ApplicationError> {
        let mut tx_guard = self.tx.lock().await;
        let rows = sqlx::query_as::<_, db_models::Army>(
            r#"
            SELECT id, name, game, faction, points_limit, units, total_points,
                   created_at, updated_at
            FROM armies
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(&mut *tx_guard.as_mut())
        .await
        .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        let armies = rows
            .into_iter()
            .map(Army::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(armies)
    }

    async fn get_by_id(&self, army_id: Uuid) -> Result<Army, ApplicationError> {
        let mut tx_guard = self.tx.lock().await;
        let row = sqlx::query_as::<_, db_models::Army>(
            r#"
            SELECT id, name, game, faction, points_limit, units, total_points,
                   created_at, updated_at
            FROM armies
            WHERE id = $1
            "#,
        )
        .bind(army_id)
        .fetch_optional(&mut *tx_guard.as_mut())
        .await
        .map_err(|e| ApplicationError::Db(DbError::Database(e)))?
        .ok_or_else(|| ApplicationError::Db(DbError::ArmyNotFound(army_id.to_string())))?;

        Ok(Army::try_from(row)?)
    }

    async fn save(&self, army: &Army) -> Result<(), ApplicationError> {
        let units = serde_json::to_value(army.units())?;

        let mut tx_guard = self.tx.lock().await;
        sqlx::query(
            r#"
            INSERT INTO armies (id, name, game, faction, points_limit, units,
                                total_points, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ON CONFLICT (id) DO UPDATE
            SET
              name = $2,
              game = $3,
              faction = $4,
              points_limit = $5,
              units = $6,
              total_points = $7,
              updated_at = $9
            "#,
        )
        .bind(army.id)
        .bind(&army.name)
        .bind(&army.game)
        .bind(&army.faction)
        .bind(army.points_limit)
        .bind(units)
        .bind(army.total_points())
        .bind(army.created_at)
        .bind(army.updated_at)
        .execute(&mut *tx_guard.as_mut())
        .await
        .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;
        Ok(())
    }

    async fn remove(&self, army_id: Uuid) -> Result<(), ApplicationError> {
        let mut tx_guard = self.tx.lock().await;
        let result = sqlx::query("DELETE FROM armies WHERE id = $1")
            .bind(army_id)
            .execute(&mut *tx_guard.as_mut())
            .await
            .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        if result.rows_affected() == 0 {
            return Err(ApplicationError::Db(DbError::ArmyNotFound(
                army_id.to_string(),
            )));
        }
        Ok(())
    }
}
