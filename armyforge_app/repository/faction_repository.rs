use uuid::Uuid;

use armyforge_game::models::faction::Faction;
use armyforge_types::errors::ApplicationError;

#[async_trait::async_trait]
pub trait FactionRepository: Send + Sync {
    /// Returns factions in insertion order, optionally only those of `game`.
    async fn list(&self, game: Option<&str>) -> Result<Vec<Faction>, ApplicationError>;

    async fn get_by_id(&self, faction_id: Uuid) -> Result<Faction, ApplicationError>;

    /// Looks a faction up by its natural `(faction, game)` key.
    async fn find_by_name(
        &self,
        faction: &str,
        game: &str,
    ) -> Result<Option<Faction>, ApplicationError>;

    /// Inserts or replaces the faction with the same ID.
    async fn save(&self, faction: &Faction) -> Result<(), ApplicationError>;

    /// Removes the faction, failing with `FactionNotFound` if it doesn't exist.
    async fn remove(&self, faction_id: Uuid) -> Result<(), ApplicationError>;
}
