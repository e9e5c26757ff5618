//! File logging
//!
//! The terminal belongs to ratatui, so log output goes to
//! `~/.dish-menu/dish-menu.log`. `RUST_LOG` overrides the default `info` level.

use crate::config::Config;
use anyhow::Result;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const LOG_FILE: &str = "dish-menu.log";

/// Install the global subscriber writing to the default log file.
///
/// Returns the log path, or `None` when there is no usable config directory.
pub fn init() -> Result<Option<PathBuf>> {
    let Some(dir) = Config::config_dir() else {
        return Ok(None);
    };
    if fs::create_dir_all(&dir).is_err() {
        return Ok(None);
    }

    let path = dir.join(LOG_FILE);
    init_at(&path)?;
    Ok(Some(path))
}

/// Install the global subscriber writing to `path`
pub fn init_at(path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| anyhow::anyhow!("Could not open log file {}: {}", path.display(), e))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Could not install logger: {}", e))?;

    Ok(())
}
