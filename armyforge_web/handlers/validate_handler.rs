use axum::{Json, extract::State, extract::rejection::JsonRejection};
use serde::Deserialize;

use armyforge_types::{roster::RosterUnit, validation::ValidationResult};

use crate::{error::ApiError, http::AppState};

fn default_points_limit() -> i64 {
    1000
}

#[derive(Debug, Deserialize)]
pub struct ValidateRequest {
    #[serde(default = "default_points_limit")]
    pub points_limit: i64,
    #[serde(default)]
    pub units: Vec<RosterUnit>,
}

/// Checks a roster against the configured rules. Findings are part of the
/// result, never an error status.
pub async fn validate_army(
    State(state): State<AppState>,
    payload: Result<Json<ValidateRequest>, JsonRejection>,
) -> Result<Json<ValidationResult>, ApiError> {
    let Json(request) = payload?;

    let result = state
        .config
        .roster_rules()
        .validate(request.points_limit, &request.units);

    tracing::debug!(
        points_limit = request.points_limit,
        total_points = result.total_points,
        valid = result.valid,
        "Roster validated"
    );
    Ok(Json(result))
}
