use axum::{
    Json,
    extract::{Multipart, Path, Query, State, rejection::JsonRejection},
};
use serde::Deserialize;
use uuid::Uuid;

use armyforge_app::{
    command_handlers::{
        CreateFactionCommandHandler, DeleteFactionCommandHandler, ImportFactionCommandHandler,
        SeedCatalogCommandHandler, UploadFactionCommandHandler,
    },
    cqrs::{
        commands::{
            CreateFaction, DeleteFaction, ImportFaction, SeedCatalog, UploadFaction,
        },
        queries::{GetFactionById, ListFactions},
    },
    queries_handlers::{GetFactionByIdHandler, ListFactionsHandler},
};
use armyforge_game::models::faction::Faction;
use armyforge_types::catalog::FactionData;

use crate::{
    error::ApiError,
    handlers::helpers::{MessageResponse, parse_faction_id},
    http::AppState,
};

#[derive(Debug, Deserialize)]
pub struct FactionFilter {
    pub game: Option<String>,
}

/// Lists factions, seeding the catalog first if nothing matches.
pub async fn list_factions(
    State(state): State<AppState>,
    Query(filter): Query<FactionFilter>,
) -> Result<Json<Vec<Faction>>, ApiError> {
    // an empty `?game=` means no filter
    let game = filter.game.filter(|g| !g.is_empty());

    let factions = state
        .app_bus
        .query(ListFactions { game: game.clone() }, ListFactionsHandler::new())
        .await?;
    if !factions.is_empty() {
        return Ok(Json(factions));
    }

    let inserted = state
        .app_bus
        .execute(SeedCatalog, SeedCatalogCommandHandler::new())
        .await?;
    if inserted == 0 {
        return Ok(Json(factions));
    }

    let factions = state
        .app_bus
        .query(ListFactions { game }, ListFactionsHandler::new())
        .await?;
    Ok(Json(factions))
}

pub async fn get_faction(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Faction>, ApiError> {
    let id = parse_faction_id(&id)?;
    let faction = state
        .app_bus
        .query(GetFactionById { id }, GetFactionByIdHandler::new())
        .await?;
    Ok(Json(faction))
}

pub async fn create_faction(
    State(state): State<AppState>,
    payload: Result<Json<FactionData>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Json(data) = payload?;

    let id = Uuid::new_v4();
    state
        .app_bus
        .execute(CreateFaction { id, data }, CreateFactionCommandHandler::new())
        .await?;

    Ok(Json(MessageResponse::with_id(
        id,
        "Faction created successfully",
    )))
}

pub async fn delete_faction(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_faction_id(&id)?;

    state
        .app_bus
        .execute(DeleteFaction { id }, DeleteFactionCommandHandler::new())
        .await?;

    Ok(Json(MessageResponse::new("Faction deleted successfully")))
}

pub async fn import_faction(
    State(state): State<AppState>,
    payload: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Json(document) = payload?;

    let import = state
        .app_bus
        .execute(ImportFaction { document }, ImportFactionCommandHandler::new())
        .await?;

    let message = if import.created {
        "Faction imported successfully"
    } else {
        "Faction updated successfully"
    };
    Ok(Json(MessageResponse::with_id(import.id, message)))
}

/// Accepts a multipart form whose `file` part is a faction `.json` file.
pub async fn upload_faction(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<MessageResponse>, ApiError> {
    let mut upload = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(e.body_text()))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let file_name = field.file_name().unwrap_or_default().to_string();
        let content = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(e.body_text()))?;
        upload = Some(UploadFaction {
            file_name,
            content: content.to_vec(),
        });
        break;
    }
    let upload = upload.ok_or_else(|| ApiError::BadRequest("Missing 'file' field".to_string()))?;

    let import = state
        .app_bus
        .execute(upload, UploadFactionCommandHandler::new())
        .await?;

    let verb = if import.created { "imported" } else { "updated" };
    Ok(Json(MessageResponse {
        id: Some(import.id),
        message: format!("Faction '{}' {verb} successfully", import.faction),
        units_count: Some(import.units_count),
    }))
}
