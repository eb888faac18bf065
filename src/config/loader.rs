//! Configuration file loading with precedence handling.

use crate::state::{SortMode, Timings};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "EVENTBOARD_CONFIG";
/// Environment variable naming the event data file.
pub const DATA_ENV: &str = "EVENTBOARD_DATA";
/// Environment variable overriding the default sort key.
pub const SORT_ENV: &str = "EVENTBOARD_SORT";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Config file path contains invalid UTF-8 or cannot be resolved.
    #[error("Invalid config path: {0}")]
    InvalidPath(String),

    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
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
/// Corresponds to `~/.config/eventboard/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Event data file (JSON array or JSON Lines).
    #[serde(default)]
    pub data_file: Option<PathBuf>,

    /// Default sort key of the listing (`date-asc`, `title-desc`, ...).
    #[serde(default)]
    pub default_sort: Option<String>,

    /// Artificial delay before the store is read, in milliseconds.
    #[serde(default)]
    pub load_delay_ms: Option<u64>,

    /// Delay before the fallback bootstrap attempt, in milliseconds.
    #[serde(default)]
    pub fallback_delay_ms: Option<u64>,

    /// Simulated submission delay of the forms, in milliseconds.
    #[serde(default)]
    pub submit_delay_ms: Option<u64>,

    /// Lifetime of the success banner, in milliseconds.
    #[serde(default)]
    pub banner_duration_ms: Option<u64>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Event data file, if any source named one.
    pub data_file: Option<PathBuf>,
    /// Default listing sort.
    pub default_sort: SortMode,
    /// Artificial store load delay in milliseconds.
    pub load_delay_ms: u64,
    /// Fallback bootstrap delay in milliseconds.
    pub fallback_delay_ms: u64,
    /// Form submission delay in milliseconds.
    pub submit_delay_ms: u64,
    /// Banner lifetime in milliseconds.
    pub banner_duration_ms: u64,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            data_file: None,
            default_sort: SortMode::DateAsc,
            load_delay_ms: 0,
            fallback_delay_ms: 1500,
            submit_delay_ms: 1500,
            banner_duration_ms: 5000,
            log_file_path: default_log_path(),
        }
    }
}

impl ResolvedConfig {
    /// Delays for the UI state.
    pub fn timings(&self) -> Timings {
        Timings {
            fallback_delay: Duration::from_millis(self.fallback_delay_ms),
            submit_delay: Duration::from_millis(self.submit_delay_ms),
            banner_duration: Duration::from_millis(self.banner_duration_ms),
        }
    }

    /// Artificial store load delay.
    pub fn load_delay(&self) -> Duration {
        Duration::from_millis(self.load_delay_ms)
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/eventboard/eventboard.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("eventboard").join("eventboard.log")
    } else {
        PathBuf::from("eventboard.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
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

/// Resolve default config file path.
///
/// Returns `~/.config/eventboard/config.toml` on Unix, appropriate path on
/// other platforms. Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("eventboard").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `EVENTBOARD_CONFIG` environment variable
/// 3. Default path `~/.config/eventboard/config.toml`
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV) {
        if env_path.is_empty() {
            return Err(ConfigError::InvalidPath(format!("{CONFIG_ENV} is empty")));
        }
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        data_file: config.data_file.or(defaults.data_file),
        default_sort: config
            .default_sort
            .as_deref()
            .map_or(defaults.default_sort, SortMode::from_key),
        load_delay_ms: config.load_delay_ms.unwrap_or(defaults.load_delay_ms),
        fallback_delay_ms: config
            .fallback_delay_ms
            .unwrap_or(defaults.fallback_delay_ms),
        submit_delay_ms: config.submit_delay_ms.unwrap_or(defaults.submit_delay_ms),
        banner_duration_ms: config
            .banner_duration_ms
            .unwrap_or(defaults.banner_duration_ms),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `EVENTBOARD_DATA`: Override data file
/// - `EVENTBOARD_SORT`: Override default sort
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(data) = std::env::var(DATA_ENV) {
        if !data.is_empty() {
            config.data_file = Some(PathBuf::from(data));
        }
    }

    if let Ok(sort) = std::env::var(SORT_ENV) {
        config.default_sort = SortMode::from_key(&sort);
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    data_file_override: Option<PathBuf>,
    sort_override: Option<String>,
    load_delay_override: Option<u64>,
) -> ResolvedConfig {
    if let Some(path) = data_file_override {
        config.data_file = Some(path);
    }

    if let Some(sort) = sort_override {
        config.default_sort = SortMode::from_key(&sort);
    }

    if let Some(delay) = load_delay_override {
        config.load_delay_ms = delay;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
