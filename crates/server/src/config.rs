use std::env;
use std::path::PathBuf;

use tracing::warn;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_MUSIC_ROOT: &str = "./jays";

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub port: u16,
    pub music_root: PathBuf,
}

/// Configuration is environment-only: `PORT` and `MUSIC_ROOT`. Invalid or
/// empty values fall back to the defaults rather than aborting startup.
pub fn config_from_env() -> ServerConfig {
    let port = match env::var("PORT") {
        Ok(value) if !value.trim().is_empty() => match parse_port(&value) {
            Some(port) => port,
            None => {
                warn!("Ignoring invalid PORT value {:?}", value);
                DEFAULT_PORT
            }
        },
        _ => DEFAULT_PORT,
    };

    let music_root = match env::var("MUSIC_ROOT") {
        Ok(value) if !value.trim().is_empty() => PathBuf::from(value.trim()),
        _ => PathBuf::from(DEFAULT_MUSIC_ROOT),
    };

    ServerConfig { port, music_root }
}

fn parse_port(value: &str) -> Option<u16> {
    match value.trim().parse::<u16>() {
        Ok(0) | Err(_) => None,
        Ok(port) => Some(port),
    }
}
