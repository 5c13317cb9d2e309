//! Configuration management for todoboard
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    API_URL_ENV, CONFIG_GENERATED, DEFAULT_API_URL, DEFAULT_BACKEND_TYPE, DEFAULT_ERROR_DISPLAY_SECONDS,
    DEFAULT_FETCH_LIMIT, DEFAULT_TICK_RATE_MS, DEFAULT_USER_ID, MAX_ERROR_DISPLAY_SECONDS, MAX_FETCH_LIMIT,
};
use crate::utils::date;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

/// Remote todo service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Backend type (currently only "dummyjson")
    pub backend_type: String,
    /// Collection URL of the todo service
    pub base_url: String,
    /// Number of todos requested on startup
    pub fetch_limit: u32,
    /// userId sent with newly created todos
    pub user_id: i64,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Seconds the error banner stays visible
    pub error_display_seconds: u64,
    /// Event loop tick in milliseconds
    pub tick_rate_ms: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging to file
    pub enabled: bool,
    /// One of "error", "warn", "info", "debug", "trace"
    pub level: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            backend_type: DEFAULT_BACKEND_TYPE.to_string(),
            base_url: DEFAULT_API_URL.to_string(),
            fetch_limit: DEFAULT_FETCH_LIMIT,
            user_id: DEFAULT_USER_ID,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            error_display_seconds: DEFAULT_ERROR_DISPLAY_SECONDS,
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    pub fn level_filter(&self) -> Result<log::LevelFilter> {
        self.level
            .parse::<log::LevelFilter>()
            .map_err(|_| anyhow::anyhow!("Invalid logging level '{}'", self.level))
    }
}

impl Config {
    /// Load configuration from file or return defaults, then apply environment overrides
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        let mut config = if let Some(path) = config_path {
            Self::load_from_file(&path)?
        } else {
            Self::default()
        };

        if let Ok(url) = std::env::var(API_URL_ENV) {
            config.apply_api_url_override(url)?;
        }

        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Replace the service base URL, re-validating the result
    pub fn apply_api_url_override(&mut self, url: String) -> Result<()> {
        self.api.base_url = url;
        self.validate()
            .with_context(|| format!("Invalid {} override", API_URL_ENV))
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from("todoboard.toml");
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("todoboard").join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let url = self.api.base_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            anyhow::bail!("api.base_url must start with http:// or https://, got '{}'", url);
        }

        if self.api.fetch_limit == 0 || self.api.fetch_limit > MAX_FETCH_LIMIT {
            anyhow::bail!(
                "api.fetch_limit must be between 1 and {}, got {}",
                MAX_FETCH_LIMIT,
                self.api.fetch_limit
            );
        }

        if self.api.backend_type.is_empty() {
            anyhow::bail!("api.backend_type cannot be empty");
        }

        if self.ui.error_display_seconds == 0 || self.ui.error_display_seconds > MAX_ERROR_DISPLAY_SECONDS {
            anyhow::bail!(
                "ui.error_display_seconds must be between 1 and {}, got {}",
                MAX_ERROR_DISPLAY_SECONDS,
                self.ui.error_display_seconds
            );
        }

        if self.ui.tick_rate_ms == 0 {
            anyhow::bail!("ui.tick_rate_ms must be positive");
        }

        self.logging.level_filter()?;

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Add header comment
        let header = format!(
            "# todoboard Configuration File\n# Generated on {}\n# {} overrides api.base_url\n\n",
            chrono::Local::now().format(date::YMD_FORMAT),
            API_URL_ENV
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join("todoboard"))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
