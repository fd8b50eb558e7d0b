use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use armyforge_types::{catalog::FactionData, errors::AppError};

/// A stored faction catalog record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Faction {
    pub id: Uuid,
    #[serde(flatten)]
    pub data: FactionData,
}

impl Faction {
    pub fn new(id: Uuid, data: FactionData) -> Self {
        Self { id, data }
    }

    pub fn name(&self) -> &str {
        &self.data.faction
    }

    pub fn game(&self) -> &str {
        &self.data.game
    }

    pub fn units_count(&self) -> usize {
        self.data.units.len()
    }
}

/// Parses a free-form faction document into the catalog schema.
///
/// The document must be an object carrying both `faction` and `game`; the
/// rest is checked against [`FactionData`].
pub fn parse_faction_document(document: Value) -> Result<FactionData, AppError> {
    let has_key_fields = document
        .as_object()
        .is_some_and(|obj| obj.contains_key("faction") && obj.contains_key("game"));
    if !has_key_fields {
        return Err(AppError::MissingFactionFields);
    }

    serde_json::from_value(document).map_err(|e| AppError::InvalidFactionData(e.to_string()))
}

/// Parses raw uploaded bytes (UTF-8 JSON) into the catalog schema.
pub fn parse_faction_bytes(content: &[u8]) -> Result<FactionData, AppError> {
    let document: Value =
        serde_json::from_slice(content).map_err(|e| AppError::InvalidJson(e.to_string()))?;
    parse_faction_document(document)
}
