use uuid::Uuid;

use armyforge_game::models::faction::Faction;
use armyforge_types::{catalog::FactionData, errors::ApplicationError};

use crate::{cqrs::commands::FactionImport, uow::UnitOfWork};

/// Stores `data`, replacing the record with the same `(faction, game)` pair
/// if there is one. A replaced record keeps its id.
pub async fn upsert_faction(
    uow: &Box<dyn UnitOfWork<'_> + '_>,
    data: FactionData,
) -> Result<FactionImport, ApplicationError> {
    let repo = uow.factions();

    let existing = repo.find_by_name(&data.faction, &data.game).await?;
    let created = existing.is_none();
    let id = existing.map_or_else(Uuid::new_v4, |f| f.id);

    let faction = Faction::new(id, data);
    repo.save(&faction).await?;

    tracing::info!(
        faction_id = %faction.id,
        faction = faction.name(),
        game = faction.game(),
        created,
        "Faction imported"
    );

    Ok(FactionImport {
        id: faction.id,
        faction: faction.name().to_string(),
        created,
        units_count: faction.units_count(),
    })
}
