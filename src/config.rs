//! Configuration loading
//!
//! Reads `~/.config/wiq/config.toml`. A missing file means defaults; a broken
//! file also means defaults, plus a warning that the UI shows once.

mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::WiqError;

pub use types::{
    ClipboardBackend, ClipboardConfig, Config, SearchConfig, SelectionAction, SelectionConfig,
};

const CONFIG_DIR: &str = "wiq";
const CONFIG_FILE: &str = "config.toml";

/// Loaded configuration plus an optional warning for the user
#[derive(Debug, Clone, Default)]
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load configuration from the default location
pub fn load_config() -> ConfigResult {
    match config_path() {
        Some(path) => load_config_from_path(&path),
        None => ConfigResult::default(),
    }
}

/// Load configuration from an explicit path
pub fn load_config_from_path(path: &Path) -> ConfigResult {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return ConfigResult::default(),
        Err(e) => {
            log::warn!("Could not read config {}: {}", path.display(), e);
            return ConfigResult {
                config: Config::default(),
                warning: Some(format!("Could not read config: {}", e)),
            };
        }
    };

    parse_config(&contents)
}

/// Load a file the user named explicitly
///
/// Unlike the default location, a missing or unreadable file is an error.
pub fn load_explicit_config(path: &Path) -> Result<ConfigResult, WiqError> {
    let contents = fs::read_to_string(path)
        .map_err(|e| WiqError::Io(format!("{}: {}", path.display(), e)))?;
    Ok(parse_config(&contents))
}

pub fn parse_config(contents: &str) -> ConfigResult {
    match toml::from_str::<Config>(contents) {
        Ok(config) => ConfigResult {
            config,
            warning: None,
        },
        Err(e) => {
            log::warn!("Invalid config, using defaults: {}", e);
            ConfigResult {
                config: Config::default(),
                warning: Some(format!("Invalid config, using defaults: {}", e.message())),
            }
        }
    }
}
