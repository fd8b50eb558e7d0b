use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow)]
pub struct Army {
    pub id: Uuid,
    pub name: String,
    pub game: String,
    pub faction: String,
    pub points_limit: i64,
    pub units: serde_json::Value,
    pub total_points: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow)]
pub struct Faction {
    pub id: Uuid,
    pub faction: String,
    pub game: String,
    pub document: serde_json::Value,
    pub created_at: DateTime<Utc>,
}
