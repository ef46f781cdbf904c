//! Configuration file loading with precedence handling.
//!
//! Precedence (lowest to highest): hardcoded defaults → TOML config file →
//! environment variables → CLI arguments.

use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;
use tracing::warn;

/// Default endpoint when neither config file, env, nor CLI name one.
const DEFAULT_ENDPOINT: &str = "http://localhost:8000/search";

/// Default number of vehicles per page.
const DEFAULT_ITEMS_PER_PAGE: usize = 5;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permissions, I/O).
    #[error("Failed to read config file at {path:?}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML or unknown keys.
    #[error("Invalid TOML in {path:?}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/fleetview/config.toml`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Search endpoint URL.
    #[serde(default)]
    pub endpoint: Option<String>,

    /// Vehicles per page.
    #[serde(default)]
    pub items_per_page: Option<usize>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Geographic box sent with the search request.
    #[serde(default)]
    pub search_area: Option<SearchAreaConfig>,
}

/// `[search_area]` section of the config file.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SearchAreaConfig {
    pub latitude_min: f64,
    pub latitude_max: f64,
    pub longitude_min: f64,
    pub longitude_max: f64,
}

/// Geographic box the search request is scoped to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchArea {
    pub latitude_min: f64,
    pub latitude_max: f64,
    pub longitude_min: f64,
    pub longitude_max: f64,
}

impl Default for SearchArea {
    fn default() -> Self {
        // The box the original deployment searched.
        Self {
            latitude_min: 48.0,
            latitude_max: 56.0,
            longitude_min: 1.0,
            longitude_max: 9.0,
        }
    }
}

impl From<SearchAreaConfig> for SearchArea {
    fn from(section: SearchAreaConfig) -> Self {
        Self {
            latitude_min: section.latitude_min,
            latitude_max: section.latitude_max,
            longitude_min: section.longitude_min,
            longitude_max: section.longitude_max,
        }
    }
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// Search endpoint URL.
    pub endpoint: String,
    /// Vehicles per page, always at least 1.
    pub items_per_page: usize,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
    /// Geographic box sent with the search request.
    pub search_area: SearchArea,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            log_file_path: default_log_path(),
            search_area: SearchArea::default(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/fleetview/fleetview.log` on Unix-like systems, or
/// the platform equivalent elsewhere. Falls back to the current directory
/// when no state directory can be determined.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("fleetview").join("fleetview.log")
    } else {
        PathBuf::from("fleetview.log")
    }
}

/// Resolve default config file path.
///
/// Returns `~/.config/fleetview/config.toml` on Unix, the platform equivalent
/// elsewhere, or `None` if no config directory can be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("fleetview").join("config.toml"))
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if the file doesn't exist (not an error - use
/// defaults).
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Load configuration with precedence handling.
///
/// Path precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `FLEETVIEW_CONFIG` environment variable
/// 3. Default path `~/.config/fleetview/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns an error only if a config file exists but cannot be read or
/// parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var("FLEETVIEW_CONFIG") {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field present in the file the file value wins; a page size below
/// 1 resolves to 1 with a warning.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    let items_per_page = match config.items_per_page {
        Some(0) => {
            warn!("items_per_page must be at least 1; using 1");
            1
        }
        Some(n) => n,
        None => defaults.items_per_page,
    };

    ResolvedConfig {
        endpoint: config.endpoint.unwrap_or(defaults.endpoint),
        items_per_page,
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        search_area: config
            .search_area
            .map(SearchArea::from)
            .unwrap_or(defaults.search_area),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `FLEETVIEW_ENDPOINT`: Override the search endpoint
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(endpoint) = std::env::var("FLEETVIEW_ENDPOINT") {
        config.endpoint = endpoint;
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources. Only
/// values the user explicitly passed are applied.
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    endpoint_override: Option<String>,
    page_size_override: Option<usize>,
) -> ResolvedConfig {
    if let Some(endpoint) = endpoint_override {
        config.endpoint = endpoint;
    }

    if let Some(page_size) = page_size_override {
        config.items_per_page = page_size.max(1);
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
