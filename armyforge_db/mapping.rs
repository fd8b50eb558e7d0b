use armyforge_game::models::{self as game_models};
use armyforge_types::errors::DbError;

use crate::models::{self as db_models};

impl TryFrom<db_models::Army> for game_models::army::Army {
    type Error = DbError;

    /// The stored `total_points` column is informational; points are
    /// recomputed from the unit list.
    fn try_from(row: db_models::Army) -> Result<Self, Self::Error> {
        let units = serde_json::from_value(row.units)?;

        Ok(game_models::army::Army::restore(
            row.id,
            row.name,
            row.game,
            row.faction,
            row.points_limit,
            units,
            row.created_at,
            row.updated_at,
        ))
    }
}

impl TryFrom<db_models::Faction> for game_models::faction::Faction {
    type Error = DbError;

    fn try_from(row: db_models::Faction) -> Result<Self, Self::Error> {
        let mut data: armyforge_types::catalog::FactionData =
            serde_json::from_value(row.document)?;
        // the key columns are authoritative
        data.faction = row.faction;
        data.game = row.game;

        Ok(game_models::faction::Faction::new(row.id, data))
    }
}
