use axum::{
    Router,
    http::HeaderValue,
    routing::{get, post},
};
use std::{io::Error, net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use armyforge_app::{app_bus::AppBus, config::Config};
use armyforge_types::errors::ApplicationError;

use crate::handlers::{
    create_army, create_faction, delete_army, delete_faction, get_army, get_faction, get_game,
    health, import_faction, list_armies, list_factions, list_games, root, update_army,
    upload_faction, validate_army,
};

#[derive(Clone)]
pub struct AppState {
    pub app_bus: Arc<AppBus>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(app_bus: Arc<AppBus>, config: Arc<Config>) -> AppState {
        AppState { app_bus, config }
    }
}

pub struct WebRouter {}

impl WebRouter {
    pub fn router(state: AppState) -> Router {
        let cors = cors_layer(&state.config.cors_origins);

        let api = Router::new()
            .route("/", get(root))
            .route("/health", get(health))
            .route("/games", get(list_games))
            .route("/games/{id}", get(get_game))
            .route("/factions", get(list_factions).post(create_faction))
            .route("/factions/import", post(import_faction))
            .route("/factions/upload", post(upload_faction))
            .route("/factions/{id}", get(get_faction).delete(delete_faction))
            .route("/armies", get(list_armies).post(create_army))
            .route(
                "/armies/{id}",
                get(get_army).put(update_army).delete(delete_army),
            )
            .route("/validate", post(validate_army));

        Router::new()
            // a nested "/" only matches "/api"
            .route("/api/", get(root))
            .nest("/api", api)
            .with_state(state)
            .layer(cors)
            .layer(TraceLayer::new_for_http())
    }

    pub async fn serve(state: AppState, port: u16) -> Result<(), ApplicationError> {
        let addr = SocketAddr::from(([0, 0, 0, 0], port));
        let listener = TcpListener::bind(addr).await.map_err(infra_error)?;

        Self::serve_with_listener(state, listener).await
    }

    /// Serves on an already bound listener.
    pub async fn serve_with_listener(
        state: AppState,
        listener: TcpListener,
    ) -> Result<(), ApplicationError> {
        let addr = listener.local_addr().map_err(infra_error)?;
        tracing::info!("HTTP Server started, listening on http://{}", addr);

        axum::serve(listener, Self::router(state))
            .await
            .map_err(infra_error)?;

        Ok(())
    }
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if origins.iter().any(|o| o == "*") {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| match HeaderValue::from_str(o) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %o, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    layer.allow_origin(AllowOrigin::list(origins))
}

fn infra_error(e: Error) -> ApplicationError {
    let err = format!("{:#?}", e);
    ApplicationError::Infrastructure(err)
}
