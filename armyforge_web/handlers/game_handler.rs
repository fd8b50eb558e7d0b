use axum::{Json, extract::Path};

use armyforge_game::games;
use armyforge_types::{
    errors::{AppError, ApplicationError},
    game::GameDescriptor,
};

use crate::error::ApiError;

pub async fn list_games() -> Json<&'static [GameDescriptor]> {
    Json(games::all())
}

pub async fn get_game(Path(id): Path<String>) -> Result<Json<&'static GameDescriptor>, ApiError> {
    let game = games::find(&id)
        .ok_or_else(|| ApiError::from(ApplicationError::from(AppError::GameNotFound(id))))?;
    Ok(Json(game))
}
