pub mod stream;
pub mod tracks;

use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::assets::landing_page;
use crate::state::{AppState, HealthResponse};

pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(landing_page))
        .route("/health", get(health))
        .route("/tracks", get(tracks::list_tracks))
        .route("/tracks/:filename", get(tracks::get_track))
        .route("/stream/:filename", get(stream::stream_track))
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    Json(HealthResponse { status: "ok" })
}
