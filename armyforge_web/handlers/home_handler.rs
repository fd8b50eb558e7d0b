use axum::Json;
use chrono::Utc;
use serde_json::{Value, json};

pub async fn root() -> Json<Value> {
    Json(json!({ "message": "OPR Army Forge API" }))
}

pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": Utc::now().to_rfc3339(),
    }))
}
