//! Tracing setup for the `feedtune` binary.
//!
//! Events go to `$XDG_STATE_HOME/feedtune/feedtune.log`. When that file
//! cannot be opened the caller switches to [`init_logging_stderr`].

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "info,feedtune=debug,feedtune_core=debug";

const LOG_FILE_NAME: &str = "feedtune.log";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Path of the log file, creating its directory.
fn log_file_path() -> Result<PathBuf> {
    let dirs = xdg::BaseDirectories::with_prefix("feedtune")?;
    let state = dirs.get_state_home();
    fs::create_dir_all(&state)
        .with_context(|| format!("creating log directory {}", state.display()))?;
    Ok(state.join(LOG_FILE_NAME))
}

fn open_log(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))
}

/// Install the global subscriber writing to the state-dir log file.
///
/// Errors if the file cannot be opened or a subscriber is already set.
pub fn init_logging() -> Result<()> {
    let path = log_file_path()?;
    let file = open_log(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("tracing subscriber already set: {e}"))?;

    tracing::info!(path = %path.display(), "feedtune logging initialized");
    Ok(())
}

/// Stderr-only subscriber. A subscriber that is already installed is kept.
pub fn init_logging_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}
