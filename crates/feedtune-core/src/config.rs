use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

use crate::domain::DEFAULT_CACHE_CAPACITY;
use crate::settings::DisplaySettings;

/// Errors while locating, reading, or writing the config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot determine XDG directories: {0}")]
    Xdg(#[from] xdg::BaseDirectoriesError),
    #[error("config I/O failed for {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("cannot serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Global configuration loaded from `~/.config/feedtune/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedtuneConfig {
    /// Number of raw links whose canonical domain is remembered.
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: u64,
    /// Base display settings that domain records override.
    #[serde(default)]
    pub base: DisplaySettings,
    /// Hashtags added to every item.
    #[serde(default)]
    pub base_hashtags: Vec<String>,
    /// Optional settings database location; defaults to the XDG state dir.
    #[serde(default)]
    pub database_path: Option<PathBuf>,
}

fn default_cache_capacity() -> u64 {
    DEFAULT_CACHE_CAPACITY
}

impl Default for FeedtuneConfig {
    fn default() -> Self {
        Self {
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            base: DisplaySettings::default(),
            base_hashtags: Vec::new(),
            database_path: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf, ConfigError> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("feedtune")?;
    xdg_dirs
        .place_config_file("config.toml")
        .map_err(|source| ConfigError::Io {
            path: xdg_dirs.get_config_home(),
            source,
        })
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<FeedtuneConfig, ConfigError> {
    load_or_init_at(config_path()?)
}

/// Same as [`load_or_init`] for an explicit path.
pub fn load_or_init_at(path: PathBuf) -> Result<FeedtuneConfig, ConfigError> {
    let io_err = |source| ConfigError::Io {
        path: path.clone(),
        source,
    };

    if !path.exists() {
        let default_cfg = FeedtuneConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        fs::write(&path, toml).map_err(io_err)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path).map_err(io_err)?;
    let cfg: FeedtuneConfig = toml::from_str(&data)?;
    Ok(cfg)
}
