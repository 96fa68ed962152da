use std::io::SeekFrom;
use std::path::Path;

use axum::body::Body;
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use tokio::io::{AsyncReadExt, AsyncSeekExt};
use tokio_util::io::ReaderStream;

use crate::range::RangeDecision;
use crate::utils::json_error_response;

/// Reads happen in 64 KiB chunks so memory stays bounded regardless of
/// file size.
const CHUNK_SIZE: usize = 64 * 1024;

pub fn content_type_for(filename: &str) -> String {
    mime_guess::from_path(filename)
        .first_or_octet_stream()
        .essence_str()
        .to_string()
}

/// Build the streaming response for a resolved range decision.
///
/// One file handle is opened per request; dropping the body stream (client
/// disconnect included) closes it.
pub async fn respond(
    decision: RangeDecision,
    path: &Path,
    size: u64,
    content_type: &str,
) -> std::io::Result<Response> {
    match decision {
        RangeDecision::Unsatisfiable => Ok(unsatisfiable_response(size)),
        RangeDecision::Whole => {
            let file = tokio::fs::File::open(path).await?;
            let stream = ReaderStream::with_capacity(file, CHUNK_SIZE);
            Ok((
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE.as_str(), content_type.to_string()),
                    (header::CONTENT_LENGTH.as_str(), size.to_string()),
                    (header::ACCEPT_RANGES.as_str(), "bytes".to_string()),
                ],
                Body::from_stream(stream),
            )
                .into_response())
        }
        RangeDecision::Partial(range) => {
            let mut file = tokio::fs::File::open(path).await?;
            file.seek(SeekFrom::Start(range.start)).await?;
            let limited = file.take(range.len());
            let stream = ReaderStream::with_capacity(limited, CHUNK_SIZE);
            Ok((
                StatusCode::PARTIAL_CONTENT,
                [
                    (header::CONTENT_TYPE.as_str(), content_type.to_string()),
                    (
                        header::CONTENT_RANGE.as_str(),
                        format!("bytes {}-{}/{}", range.start, range.end, size),
                    ),
                    (header::CONTENT_LENGTH.as_str(), range.len().to_string()),
                    (header::ACCEPT_RANGES.as_str(), "bytes".to_string()),
                ],
                Body::from_stream(stream),
            )
                .into_response())
        }
    }
}

fn unsatisfiable_response(size: u64) -> Response {
    let mut response = json_error_response(
        StatusCode::RANGE_NOT_SATISFIABLE,
        "requested range not satisfiable",
    );
    let value = HeaderValue::from_str(&format!("bytes */{}", size))
        .unwrap_or_else(|_| HeaderValue::from_static("bytes */*"));
    response.headers_mut().insert(header::CONTENT_RANGE, value);
    response
}

#[cfg(test)]
mod tests {
    use super::content_type_for;

    #[test]
    fn guesses_audio_types_from_extension() {
        assert_eq!(content_type_for("song.mp3"), "audio/mpeg");
        assert_eq!(content_type_for("song.ogg"), "audio/ogg");
    }

    #[test]
    fn unknown_extension_falls_back_to_octet_stream() {
        assert_eq!(content_type_for("song.mystery"), "application/octet-stream");
    }
}
