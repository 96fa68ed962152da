use std::path::PathBuf;
use std::sync::Arc;

use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use common::TrackMetadata;

#[derive(Clone)]
pub struct AppState {
    pub music_root: Arc<PathBuf>,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// One listing entry. Files whose tags could not be read still appear,
/// carrying their fallback metadata plus the extraction error message.
#[derive(Serialize)]
pub struct TrackEntry {
    pub filename: String,
    #[serde(flatten)]
    pub metadata: TrackMetadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Serialize)]
pub struct TracksResponse {
    pub success: bool,
    pub count: usize,
    pub directory: String,
    pub files: Vec<TrackEntry>,
}

#[derive(Serialize)]
pub struct TrackResponse {
    pub success: bool,
    pub filename: String,
    #[serde(flatten)]
    pub metadata: TrackMetadata,
}

pub type JsonResult<T> = Result<Json<T>, (StatusCode, Json<ErrorResponse>)>;
