use serde::Serialize;
use std::path::{Path, PathBuf};

/// Sentinel used when a tag has no artist or album value.
pub const UNKNOWN: &str = "unknown";

/// File suffixes treated as audio tracks, matched case-insensitively.
pub const AUDIO_EXTENSIONS: &[&str] = &["mp3", "flac", "m4a", "wav", "aac", "ogg", "wma"];

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TrackNumbers {
    pub no: Option<u32>,
    pub of: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TrackMetadata {
    pub title: String,
    pub artist: String,
    pub album: String,
    pub year: Option<i32>,
    pub track: Option<TrackNumbers>,
    pub genres: Vec<String>,
    pub duration_seconds: u64,
    pub bitrate: Option<u32>,
    pub sample_rate: Option<u32>,
    pub codec: Option<String>,
    pub container: Option<String>,
}

impl TrackMetadata {
    /// Record synthesized from the filename alone, used when tags cannot be
    /// read. Always renderable: stem title, sentinel artist/album, zero
    /// duration.
    pub fn fallback(path: &Path) -> Self {
        Self {
            title: file_stem(path),
            artist: UNKNOWN.to_string(),
            album: UNKNOWN.to_string(),
            year: None,
            track: None,
            genres: Vec::new(),
            duration_seconds: 0,
            bitrate: None,
            sample_rate: None,
            codec: None,
            container: None,
        }
    }
}

pub fn is_audio_file(path: &Path) -> bool {
    let ext = match path.extension() {
        Some(ext) => ext.to_string_lossy().to_ascii_lowercase(),
        None => return false,
    };
    AUDIO_EXTENSIONS.contains(&ext.as_str())
}

pub fn file_stem(path: &Path) -> String {
    path.file_stem()
        .or_else(|| path.file_name())
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| UNKNOWN.to_string())
}

/// Join a client-supplied filename onto the music root.
///
/// Returns `None` for any name that could resolve outside the root: path
/// separators, parent segments, empty or dot-leading names. Callers treat
/// `None` as not-found.
pub fn safe_child_path(root: &Path, filename: &str) -> Option<PathBuf> {
    if filename.is_empty()
        || filename.contains('/')
        || filename.contains('\\')
        || filename.contains("..")
        || filename.starts_with('.')
    {
        return None;
    }
    Some(root.join(filename))
}
