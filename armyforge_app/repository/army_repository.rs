use uuid::Uuid;

use armyforge_game::models::army::Army;
use armyforge_types::errors::ApplicationError;

#[async_trait::async_trait]
pub trait ArmyRepository: Send + Sync {
    /// Returns all armies, oldest first.
    async fn list(&self) -> Result<Vec<Army>, ApplicationError>;

    /// Returns army by its ID.
    async fn get_by_id(&self, army_id: Uuid) -> Result<Army, ApplicationError>;

    /// Inserts or replaces the army with the same ID.
    async fn save(&self, army: &Army) -> Result<(), ApplicationError>;

    /// Removes the army, failing with `ArmyNotFound` if it doesn't exist.
    async fn remove(&self, army_id: Uuid) -> Result<(), ApplicationError>;
}
