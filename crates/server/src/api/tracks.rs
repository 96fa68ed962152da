use axum::extract::{Path as AxumPath, State};
use axum::http::StatusCode;
use axum::Json;

use common::safe_child_path;
use library::read_directory;

use crate::state::{AppState, JsonResult, TrackEntry, TrackResponse, TracksResponse};
use crate::utils::json_error;

pub async fn list_tracks(State(state): State<AppState>) -> JsonResult<TracksResponse> {
    let root = state.music_root.as_ref().clone();
    let listing = tokio::task::spawn_blocking(move || read_directory(&root))
        .await
        .map_err(|err| {
            json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("scan task failed: {}", err),
            )
        })?
        .map_err(|err| json_error(StatusCode::INTERNAL_SERVER_ERROR, err.to_string()))?;

    let files: Vec<TrackEntry> = listing
        .entries
        .into_iter()
        .map(|(filename, result)| match result {
            Ok(metadata) => TrackEntry {
                filename,
                metadata,
                error: None,
            },
            Err(err) => TrackEntry {
                filename,
                metadata: err.fallback,
                error: Some(err.message),
            },
        })
        .collect();

    Ok(Json(TracksResponse {
        success: true,
        count: files.len(),
        directory: listing.directory.display().to_string(),
        files,
    }))
}

pub async fn get_track(
    State(state): State<AppState>,
    AxumPath(filename): AxumPath<String>,
) -> JsonResult<TrackResponse> {
    let path = match safe_child_path(&state.music_root, &filename) {
        Some(path) => path,
        None => return Err(json_error(StatusCode::NOT_FOUND, "track not found")),
    };
    match tokio::fs::metadata(&path).await {
        Ok(meta) if meta.is_file() => {}
        _ => return Err(json_error(StatusCode::NOT_FOUND, "track not found")),
    }

    let read_path = path.clone();
    let result = tokio::task::spawn_blocking(move || library::read_one(&read_path))
        .await
        .map_err(|err| {
            json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("read task failed: {}", err),
            )
        })?;

    match result {
        Ok(metadata) => Ok(Json(TrackResponse {
            success: true,
            filename,
            metadata,
        })),
        Err(err) => Err(json_error(StatusCode::INTERNAL_SERVER_ERROR, err.message)),
    }
}
