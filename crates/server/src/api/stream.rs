use axum::extract::{Path as AxumPath, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::Response;

use common::safe_child_path;

use crate::range;
use crate::state::AppState;
use crate::streaming::{content_type_for, respond};
use crate::utils::json_error_response;

pub async fn stream_track(
    State(state): State<AppState>,
    AxumPath(filename): AxumPath<String>,
    headers: HeaderMap,
) -> Response {
    let path = match safe_child_path(&state.music_root, &filename) {
        Some(path) => path,
        None => return json_error_response(StatusCode::NOT_FOUND, "track not found"),
    };
    let meta = match tokio::fs::metadata(&path).await {
        Ok(meta) if meta.is_file() => meta,
        _ => return json_error_response(StatusCode::NOT_FOUND, "track not found"),
    };
    let size = meta.len();

    let range_header = headers.get(header::RANGE).and_then(|v| v.to_str().ok());
    let decision = range::resolve(range_header, size);
    let content_type = content_type_for(&filename);

    match respond(decision, &path, size, &content_type).await {
        Ok(response) => response,
        Err(err) => json_error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("stream error: {}", err),
        ),
    }
}
