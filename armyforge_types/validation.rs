use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    /// Reserved for advisory rules; does not affect validity.
    Warning,
}

/// A single rule finding about a roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    #[serde(rename = "type")]
    pub severity: Severity,
    pub message: String,
    /// The offending roster entry, `None` for army-level findings.
    pub unit_id: Option<String>,
}

impl ValidationError {
    pub fn error(message: String, unit_id: Option<String>) -> Self {
        Self {
            severity: Severity::Error,
            message,
            unit_id,
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<ValidationError>,
    pub total_points: i64,
    pub max_hero_count: i64,
    pub current_hero_count: i64,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_validation_error_wire_format() {
        let err = ValidationError::error("too expensive".to_string(), Some("u1".to_string()));

        assert_eq!(
            serde_json::to_value(&err).unwrap(),
            json!({"type": "error", "message": "too expensive", "unit_id": "u1"})
        );
    }

    #[test]
    fn test_army_level_finding_has_null_unit_id() {
        let err = ValidationError {
            severity: Severity::Warning,
            message: "advisory".to_string(),
            unit_id: None,
        };

        assert!(!err.is_error());
        assert_eq!(serde_json::to_value(&err).unwrap()["unit_id"], json!(null));
    }
}
