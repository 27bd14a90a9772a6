//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Settings live at `<config_dir>/countdown/config.toml` next to the date
//! file. If missing on first run, a commented-out default is generated so
//! users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::selector::{MAX_YEAR, MIN_YEAR};
use crate::core::ticker::{MAX_TICK_RATE_HZ, MIN_TICK_RATE_HZ};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CountdownConfig {
    #[serde(default)]
    pub general: GeneralConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub tick_rate_hz: Option<u32>,
    pub min_year: Option<i32>,
    pub max_year: Option<i32>,
    pub date_file: Option<String>,
    pub fallback_on_parse_error: Option<bool>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_TICK_RATE_HZ: u32 = 60;
pub const APP_DIR_NAME: &str = "countdown";
pub const DATE_FILE_NAME: &str = "date.csv";
pub const LOG_FILE_NAME: &str = "countdown.log";

pub const ENV_DATE_FILE: &str = "COUNTDOWN_DATE_FILE";
pub const ENV_TICK_RATE: &str = "COUNTDOWN_TICK_RATE";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub tick_rate_hz: u32,
    pub min_year: i32,
    pub max_year: i32,
    pub date_path: PathBuf,
    pub fallback_on_parse_error: bool,
}

/// Values supplied on the command line (None = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub date_file: Option<PathBuf>,
    pub tick_rate_hz: Option<u32>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid year range {min}..={max} (need 1 <= min <= max <= 9999)")]
    InvalidYearRange { min: i32, max: i32 },
}

// ============================================================================
// Loading
// ============================================================================

/// Returns `<config_dir>/countdown/`.
pub fn app_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME))
}

/// Returns `<config_dir>/countdown/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    app_dir().map(|dir| dir.join("config.toml"))
}

/// Returns `<config_dir>/countdown/countdown.log`.
pub fn default_log_path() -> Option<PathBuf> {
    app_dir().map(|dir| dir.join(LOG_FILE_NAME))
}

/// Load settings from the default location, or defaults if the platform has
/// no config directory.
pub fn load_default_config() -> Result<CountdownConfig, ConfigError> {
    match config_path() {
        Some(path) => load_config(&path),
        None => {
            warn!("Could not determine config directory, using default config");
            Ok(CountdownConfig::default())
        }
    }
}

/// Load config from `path`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `CountdownConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config(path: &Path) -> Result<CountdownConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(CountdownConfig::default());
    }

    let contents = fs::read_to_string(path)?;
    let config: CountdownConfig = toml::from_str(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Countdown Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# tick_rate_hz = 60                  # Countdown refresh rate (1-240)
# min_year = 1                       # Lowest selectable year
# max_year = 9999                    # Highest selectable year
# date_file = "date.csv"             # Relative paths resolve against this directory
# fallback_on_parse_error = false    # Start from 2026-01-01 00:00 if date_file is corrupt
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &CountdownConfig, cli: &CliOverrides) -> Result<ResolvedConfig, ConfigError> {
    let base_dir = app_dir().unwrap_or_else(|| {
        warn!("Could not determine config directory, using current directory");
        PathBuf::from(".")
    });
    resolve_with(config, cli, &base_dir, |key| std::env::var(key).ok())
}

/// [`resolve`] with an explicit base directory and environment lookup.
pub fn resolve_with(
    config: &CountdownConfig,
    cli: &CliOverrides,
    base_dir: &Path,
    env: impl Fn(&str) -> Option<String>,
) -> Result<ResolvedConfig, ConfigError> {
    // Tick rate: CLI → env → config → default
    let tick_rate_hz = cli
        .tick_rate_hz
        .or_else(|| {
            env(ENV_TICK_RATE).and_then(|raw| match raw.trim().parse() {
                Ok(hz) => Some(hz),
                Err(_) => {
                    warn!("Ignoring unparsable {}={:?}", ENV_TICK_RATE, raw);
                    None
                }
            })
        })
        .or(config.general.tick_rate_hz)
        .unwrap_or(DEFAULT_TICK_RATE_HZ)
        .clamp(MIN_TICK_RATE_HZ, MAX_TICK_RATE_HZ);

    // Date file: CLI → env → config → default; relative config paths
    // resolve against the config directory
    let date_path = cli
        .date_file
        .clone()
        .or_else(|| env(ENV_DATE_FILE).map(PathBuf::from))
        .or_else(|| config.general.date_file.as_ref().map(|f| base_dir.join(f)))
        .unwrap_or_else(|| base_dir.join(DATE_FILE_NAME));

    let min_year = config.general.min_year.unwrap_or(MIN_YEAR);
    let max_year = config.general.max_year.unwrap_or(MAX_YEAR);
    if !(MIN_YEAR <= min_year && min_year <= max_year && max_year <= MAX_YEAR) {
        return Err(ConfigError::InvalidYearRange {
            min: min_year,
            max: max_year,
        });
    }

    Ok(ResolvedConfig {
        tick_rate_hz,
        min_year,
        max_year,
        date_path,
        fallback_on_parse_error: config.general.fallback_on_parse_error.unwrap_or(false),
    })
}
