use uuid::Uuid;

use armyforge_game::models::army::ArmyChanges;
use armyforge_types::{catalog::FactionData, roster::RosterUnit};

use crate::cqrs::Command;

#[derive(Debug, Clone)]
pub struct CreateArmy {
    pub id: Uuid,
    pub name: String,
    pub game: String,
    pub faction: String,
    pub points_limit: i64,
    pub units: Vec<RosterUnit>,
}

impl Command for CreateArmy {
    type Output = ();
}

#[derive(Debug, Clone)]
pub struct UpdateArmy {
    pub id: Uuid,
    pub changes: ArmyChanges,
}

impl Command for UpdateArmy {
    type Output = ();
}

#[derive(Debug, Clone)]
pub struct DeleteArmy {
    pub id: Uuid,
}

impl Command for DeleteArmy {
    type Output = ();
}

/// Stores a new faction record, without checking for an existing
/// `(faction, game)` pair.
#[derive(Debug, Clone)]
pub struct CreateFaction {
    pub id: Uuid,
    pub data: FactionData,
}

impl Command for CreateFaction {
    type Output = ();
}

#[derive(Debug, Clone)]
pub struct DeleteFaction {
    pub id: Uuid,
}

impl Command for DeleteFaction {
    type Output = ();
}

/// Upserts a faction record by its `(faction, game)` pair.
#[derive(Debug, Clone)]
pub struct ImportFaction {
    pub document: serde_json::Value,
}

impl Command for ImportFaction {
    type Output = FactionImport;
}

/// Upserts a faction record from an uploaded `.json` file.
#[derive(Debug, Clone)]
pub struct UploadFaction {
    pub file_name: String,
    pub content: Vec<u8>,
}

impl Command for UploadFaction {
    type Output = FactionImport;
}

/// Outcome of an import or upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactionImport {
    pub id: Uuid,
    pub faction: String,
    /// `false` when an existing record was replaced.
    pub created: bool,
    pub units_count: usize,
}

/// Loads the seed dataset into an empty (or partial) catalog.
#[derive(Debug, Clone, Default)]
pub struct SeedCatalog;

impl Command for SeedCatalog {
    /// Number of records inserted.
    type Output = usize;
}
