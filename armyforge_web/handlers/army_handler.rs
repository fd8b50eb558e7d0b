use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use serde::Deserialize;
use uuid::Uuid;

use armyforge_app::{
    command_handlers::{
        CreateArmyCommandHandler, DeleteArmyCommandHandler, UpdateArmyCommandHandler,
    },
    cqrs::{
        commands::{CreateArmy, DeleteArmy, UpdateArmy},
        queries::{GetArmyById, ListArmies},
    },
    queries_handlers::{GetArmyByIdHandler, ListArmiesHandler},
};
use armyforge_game::models::army::{Army, ArmyChanges};
use armyforge_types::roster::RosterUnit;

use crate::{
    error::ApiError,
    handlers::helpers::{MessageResponse, parse_army_id},
    http::AppState,
};

#[derive(Debug, Deserialize)]
pub struct CreateArmyRequest {
    pub name: String,
    pub game: String,
    pub faction: String,
    pub points_limit: i64,
    #[serde(default)]
    pub units: Vec<RosterUnit>,
}

pub async fn list_armies(State(state): State<AppState>) -> Result<Json<Vec<Army>>, ApiError> {
    let armies = state
        .app_bus
        .query(ListArmies, ListArmiesHandler::new())
        .await?;
    Ok(Json(armies))
}

pub async fn get_army(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Army>, ApiError> {
    let id = parse_army_id(&id)?;
    let army = state
        .app_bus
        .query(GetArmyById { id }, GetArmyByIdHandler::new())
        .await?;
    Ok(Json(army))
}

pub async fn create_army(
    State(state): State<AppState>,
    payload: Result<Json<CreateArmyRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Json(request) = payload?;

    let id = Uuid::new_v4();
    let command = CreateArmy {
        id,
        name: request.name,
        game: request.game,
        faction: request.faction,
        points_limit: request.points_limit,
        units: request.units,
    };
    state
        .app_bus
        .execute(command, CreateArmyCommandHandler::new())
        .await?;

    Ok(Json(MessageResponse::with_id(
        id,
        "Army created successfully",
    )))
}

pub async fn update_army(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<ArmyChanges>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_army_id(&id)?;
    let Json(changes) = payload?;

    state
        .app_bus
        .execute(UpdateArmy { id, changes }, UpdateArmyCommandHandler::new())
        .await?;

    Ok(Json(MessageResponse::new("Army updated successfully")))
}

pub async fn delete_army(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_army_id(&id)?;

    state
        .app_bus
        .execute(DeleteArmy { id }, DeleteArmyCommandHandler::new())
        .await?;

    Ok(Json(MessageResponse::new("Army deleted successfully")))
}
