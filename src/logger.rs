//! File logging setup.
//!
//! The terminal belongs to the TUI, so log records go to a file under the
//! user's data directory. Call sites use the `log` macros; this module only
//! wires `fern` behind the facade.

use crate::config::LoggingConfig;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub struct Logger;

impl Logger {
    /// `<data_local_dir>/todoboard/todoboard.log`
    pub fn get_log_file_path() -> Result<PathBuf> {
        dirs::data_local_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
            .map(|dir| dir.join("todoboard").join("todoboard.log"))
    }

    /// Build the dispatch writing to `path` at the configured level.
    pub fn build_dispatch(config: &LoggingConfig, path: &Path) -> Result<fern::Dispatch> {
        let level = config.level_filter()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
        }
        let file = fern::log_file(path).with_context(|| format!("Failed to open log file: {}", path.display()))?;

        Ok(fern::Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "[{} {} {}] {}",
                    chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                    record.level(),
                    record.target(),
                    message
                ))
            })
            .level(level)
            // HTTP internals are noisy at debug level
            .level_for("hyper", log::LevelFilter::Warn)
            .level_for("hyper_util", log::LevelFilter::Warn)
            .level_for("reqwest", log::LevelFilter::Warn)
            .level_for("rustls", log::LevelFilter::Warn)
            .chain(file))
    }

    /// Install the global logger if logging is enabled. Returns the log file path when installed.
    pub fn init(config: &LoggingConfig) -> Result<Option<PathBuf>> {
        if !config.enabled {
            return Ok(None);
        }

        let path = Self::get_log_file_path()?;
        Self::build_dispatch(config, &path)?
            .apply()
            .map_err(|e| anyhow::anyhow!("Failed to install logger: {}", e))?;

        log::info!("Logging to {}", path.display());
        Ok(Some(path))
    }
}
