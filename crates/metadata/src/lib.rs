use std::path::Path;

use lofty::error::LoftyError;
use lofty::file::FileType;
use lofty::prelude::{AudioFile, ItemKey, TaggedFileExt};

/// Raw tag and format fields as the underlying reader reports them.
/// Every field is optional; default substitution happens downstream.
#[derive(Debug, Default, Clone)]
pub struct TagInfo {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub album: Option<String>,
    pub year: Option<i32>,
    pub track_no: Option<u32>,
    pub track_of: Option<u32>,
    pub genres: Vec<String>,
    pub duration_secs: Option<f64>,
    pub bitrate: Option<u32>,
    pub sample_rate: Option<u32>,
    pub codec: Option<String>,
    pub container: Option<String>,
}

#[derive(Debug)]
pub enum MetadataError {
    Io(std::io::Error),
    Lofty(LoftyError),
}

impl std::fmt::Display for MetadataError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MetadataError::Io(err) => write!(f, "io error: {}", err),
            MetadataError::Lofty(err) => write!(f, "tag error: {}", err),
        }
    }
}

impl std::error::Error for MetadataError {}

impl From<std::io::Error> for MetadataError {
    fn from(err: std::io::Error) -> Self {
        MetadataError::Io(err)
    }
}

impl From<LoftyError> for MetadataError {
    fn from(err: LoftyError) -> Self {
        MetadataError::Lofty(err)
    }
}

pub fn read_tags(path: &Path) -> Result<TagInfo, MetadataError> {
    let tagged_file = lofty::read_from_path(path)?;
    let properties = tagged_file.properties();

    let mut info = TagInfo::default();

    let duration = properties.duration();
    if !duration.is_zero() {
        info.duration_secs = Some(duration.as_secs_f64());
    }
    info.sample_rate = properties.sample_rate();
    info.bitrate = properties.audio_bitrate().or(properties.overall_bitrate());

    let (codec, container) = describe_file_type(tagged_file.file_type());
    info.codec = codec.map(str::to_string);
    info.container = container.map(str::to_string);

    if let Some(tag) = tagged_file.primary_tag().or_else(|| tagged_file.first_tag()) {
        info.title = tag.get_string(&ItemKey::TrackTitle).map(|v| v.to_string());
        info.album = tag.get_string(&ItemKey::AlbumTitle).map(|v| v.to_string());
        info.artist = tag
            .get_string(&ItemKey::TrackArtist)
            .or_else(|| tag.get_string(&ItemKey::AlbumArtist))
            .map(|v| v.to_string());
        info.year = tag.get_string(&ItemKey::Year).and_then(parse_year);

        let (no, of) = tag
            .get_string(&ItemKey::TrackNumber)
            .map(parse_track_pair)
            .unwrap_or((None, None));
        info.track_no = no;
        info.track_of = of.or_else(|| {
            tag.get_string(&ItemKey::TrackTotal)
                .and_then(|v| v.trim().parse().ok())
        });

        if let Some(value) = tag.get_string(&ItemKey::Genre) {
            info.genres = parse_genres(value);
        }
    }

    Ok(info)
}

fn describe_file_type(file_type: FileType) -> (Option<&'static str>, Option<&'static str>) {
    match file_type {
        FileType::Mpeg => (Some("mp3"), Some("mp3")),
        FileType::Flac => (Some("flac"), Some("flac")),
        FileType::Mp4 => (Some("aac"), Some("mp4")),
        FileType::Aac => (Some("aac"), Some("adts")),
        FileType::Wav => (Some("pcm"), Some("wav")),
        FileType::Aiff => (Some("pcm"), Some("aiff")),
        FileType::Vorbis => (Some("vorbis"), Some("ogg")),
        FileType::Opus => (Some("opus"), Some("ogg")),
        FileType::Speex => (Some("speex"), Some("ogg")),
        FileType::Ape => (Some("ape"), Some("ape")),
        FileType::WavPack => (Some("wavpack"), Some("wavpack")),
        _ => (None, None),
    }
}

/// Track positions are commonly written as "3" or "3/12".
fn parse_track_pair(text: &str) -> (Option<u32>, Option<u32>) {
    let mut parts = text.splitn(2, '/');
    let no = parts.next().and_then(|v| v.trim().parse().ok());
    let of = parts.next().and_then(|v| v.trim().parse().ok());
    (no, of)
}

fn parse_year(text: &str) -> Option<i32> {
    let mut digits = String::new();
    for ch in text.chars() {
        if ch.is_ascii_digit() {
            digits.push(ch);
            if digits.len() == 4 {
                break;
            }
        } else if !digits.is_empty() {
            break;
        }
    }
    if digits.is_empty() {
        None
    } else {
        digits.parse().ok()
    }
}

fn parse_genres(text: &str) -> Vec<String> {
    let mut out = Vec::new();
    for part in text.split(&[';', ',', '/', '|', '\0'][..]) {
        let trimmed = part.trim();
        if trimmed.is_empty() {
            continue;
        }
        out.push(trimmed.to_string());
    }
    if out.is_empty() {
        let trimmed = text.trim();
        if !trimmed.is_empty() {
            out.push(trimmed.to_string());
        }
    }
    out
}
