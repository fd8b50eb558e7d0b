use serde::Serialize;
use uuid::Uuid;

use armyforge_types::errors::{ApplicationError, DbError};

use crate::error::ApiError;

/// Body of write endpoints: `{"id": ..., "message": ...}`, `id` omitted
/// when there is nothing to point at.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub units_count: Option<usize>,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            id: None,
            message: message.into(),
            units_count: None,
        }
    }

    pub fn with_id(id: Uuid, message: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            ..Self::new(message)
        }
    }
}

/// Ids that are not UUIDs cannot name a stored record.
pub fn parse_army_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw)
        .map_err(|_| ApiError::from(ApplicationError::Db(DbError::ArmyNotFound(raw.to_string()))))
}

pub fn parse_faction_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| {
        ApiError::from(ApplicationError::Db(DbError::FactionNotFound(
            raw.to_string(),
        )))
    })
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use super::*;

    #[test]
    fn test_malformed_ids_are_not_found() {
        let err = parse_faction_id("non-existent").unwrap_err();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);

        let err = parse_army_id("42").unwrap_err();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);

        let id = Uuid::new_v4();
        assert_eq!(parse_army_id(&id.to_string()).unwrap(), id);
    }

    #[test]
    fn test_message_response_skips_empty_fields() {
        let value = serde_json::to_value(MessageResponse::new("Army deleted successfully")).unwrap();

        assert_eq!(value, serde_json::json!({"message": "Army deleted successfully"}));
    }
}
