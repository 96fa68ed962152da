use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;
use walkdir::WalkDir;

use common::{file_stem, is_audio_file, TrackMetadata, TrackNumbers, UNKNOWN};
use metadata::read_tags;

/// Per-file extraction failure. Non-fatal: carries a filename-derived
/// fallback record so callers always have something renderable.
#[derive(Debug, Clone)]
pub struct ExtractionError {
    pub filename: String,
    pub file_path: PathBuf,
    pub message: String,
    pub fallback: TrackMetadata,
}

impl std::fmt::Display for ExtractionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "failed to read {}: {}", self.filename, self.message)
    }
}

impl std::error::Error for ExtractionError {}

#[derive(Debug)]
pub enum DirectoryError {
    Access(std::io::Error),
    NotADirectory(PathBuf),
}

impl std::fmt::Display for DirectoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DirectoryError::Access(err) => write!(f, "cannot access music directory: {}", err),
            DirectoryError::NotADirectory(path) => {
                write!(f, "not a directory: {}", path.display())
            }
        }
    }
}

impl std::error::Error for DirectoryError {}

pub struct DirectoryListing {
    pub directory: PathBuf,
    pub entries: Vec<(String, Result<TrackMetadata, ExtractionError>)>,
}

impl DirectoryListing {
    pub fn count(&self) -> usize {
        self.entries.len()
    }
}

/// Read tags from a single file and build its metadata record.
///
/// Reader failures of any kind (unparseable tags, unsupported codec, I/O)
/// come back as `ExtractionError`, never as the raw reader error.
pub fn read_one(path: &Path) -> Result<TrackMetadata, ExtractionError> {
    let info = match read_tags(path) {
        Ok(info) => info,
        Err(err) => return Err(extraction_error(path, err.to_string())),
    };

    let track = if info.track_no.is_some() || info.track_of.is_some() {
        Some(TrackNumbers {
            no: info.track_no,
            of: info.track_of,
        })
    } else {
        None
    };

    Ok(TrackMetadata {
        title: info
            .title
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| file_stem(path)),
        artist: info.artist.unwrap_or_else(|| UNKNOWN.to_string()),
        album: info.album.unwrap_or_else(|| UNKNOWN.to_string()),
        year: info.year,
        track,
        genres: info.genres,
        duration_seconds: info.duration_secs.map(|s| s.round() as u64).unwrap_or(0),
        bitrate: info.bitrate,
        sample_rate: info.sample_rate,
        codec: info.codec,
        container: info.container,
    })
}

/// Scan one directory level for recognized audio files.
///
/// Fails only when the directory itself is inaccessible. Individual files
/// that cannot be read become `Err` entries; they never shrink the result
/// set or abort the scan. Entry order is whatever the filesystem yields.
pub fn read_directory(dir: &Path) -> Result<DirectoryListing, DirectoryError> {
    let meta = fs::metadata(dir).map_err(DirectoryError::Access)?;
    if !meta.is_dir() {
        return Err(DirectoryError::NotADirectory(dir.to_path_buf()));
    }

    let mut entries = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .into_iter()
        .filter_map(Result::ok)
    {
        let path = entry.path();
        if !entry.file_type().is_file() || !is_audio_file(path) {
            continue;
        }
        let filename = entry.file_name().to_string_lossy().to_string();
        let result = read_one(path);
        if let Err(err) = &result {
            warn!("Failed to read tags for {:?}: {}", path, err.message);
        }
        entries.push((filename, result));
    }

    Ok(DirectoryListing {
        directory: dir.to_path_buf(),
        entries,
    })
}

fn extraction_error(path: &Path, message: String) -> ExtractionError {
    ExtractionError {
        filename: path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default(),
        file_path: path.to_path_buf(),
        message,
        fallback: TrackMetadata::fallback(path),
    }
}
