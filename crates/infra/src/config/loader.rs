//! Configuration loader
//!
//! Loads engine configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from `TIMEKEEP_*` environment variables
//! 2. If none are set, falls back to loading from a probed file
//! 3. If no file exists either, the built-in defaults apply
//! 4. Supports JSON and TOML formats
//!
//! Every loaded configuration is validated before it is returned.
//!
//! ## Environment Variables
//! - `TIMEKEEP_OVERTIME_THRESHOLD`: Weekly overtime threshold in hours
//! - `TIMEKEEP_MIN_NOTE_CHARS`: Minimum note length for detailed lines
//! - `TIMEKEEP_DAILY_TARGET`: Daily target hours
//! - `TIMEKEEP_DISPLAY_DECIMALS`: Decimals used for displayed hours
//! - `TIMEKEEP_LOG_LEVEL`: Default log filter directive
//! - `TIMEKEEP_LOG_JSON`: Emit JSON log lines (true/false)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.json` or `./config.toml` (current working directory)
//! 2. `./timekeep.json` or `./timekeep.toml` (current working directory)
//! 3. `../config.json` or `../config.toml` (parent directory)
//! 4. `../../config.json` or `../../config.toml` (grandparent directory)
//! 5. Relative to executable location

use std::path::{Path, PathBuf};
use std::str::FromStr;

use timekeep_common::error::{CommonError, CommonResult};
use timekeep_domain::{Config, Result, TimekeepError};

use crate::observability::log_common_error;

const ENV_PREFIX: &str = "TIMEKEEP_";

/// Load configuration with automatic fallback strategy
///
/// Environment variables win when any `TIMEKEEP_*` variable is set. Otherwise
/// a probed config file is used, and with no file the defaults apply.
///
/// # Errors
/// Returns `TimekeepError::Config` if a source exists but holds invalid
/// values or cannot be parsed.
pub fn load() -> Result<Config> {
    if any_env_set() {
        let config = load_from_env()?;
        tracing::info!("Configuration loaded from environment variables");
        return Ok(config);
    }

    match probe_config_paths() {
        Some(path) => load_from_file(Some(path)),
        None => {
            tracing::debug!("No configuration source found, using defaults");
            Ok(Config::default())
        }
    }
}

/// Load configuration from environment variables
///
/// Unset variables keep their default values, but at least one
/// `TIMEKEEP_*` variable must be present.
///
/// # Errors
/// Returns `TimekeepError::Config` if no variable is set, a value does not
/// parse, or the resulting configuration fails validation.
pub fn load_from_env() -> Result<Config> {
    from_env().map_err(into_config_error)
}

fn from_env() -> CommonResult<Config> {
    if !any_env_set() {
        return Err(CommonError::config(format!("No {ENV_PREFIX}* environment variables set")));
    }

    let mut config = Config::default();

    if let Some(threshold) = env_parse::<f64>("TIMEKEEP_OVERTIME_THRESHOLD")? {
        config.policy.overtime_threshold_hours = threshold;
    }
    if let Some(chars) = env_parse::<usize>("TIMEKEEP_MIN_NOTE_CHARS")? {
        config.policy.min_note_chars = chars;
    }
    if let Some(target) = env_parse::<f64>("TIMEKEEP_DAILY_TARGET")? {
        config.aggregation.daily_target_hours = target;
    }
    if let Some(decimals) = env_parse::<u32>("TIMEKEEP_DISPLAY_DECIMALS")? {
        config.aggregation.display_decimals = decimals;
    }
    if let Ok(level) = std::env::var("TIMEKEEP_LOG_LEVEL") {
        config.logging.level = level;
    }
    if let Some(json) = env_bool("TIMEKEEP_LOG_JSON")? {
        config.logging.json = json;
    }

    check(&config)?;
    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
/// Sections or fields missing from the file keep their defaults.
///
/// # Errors
/// Returns `TimekeepError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - A value fails validation
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    from_file(path).map_err(into_config_error)
}

fn from_file(path: Option<PathBuf>) -> CommonResult<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(CommonError::persistence_op(
                    "open",
                    format!("Config file not found: {}", p.display()),
                ));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            CommonError::config("No config file found in any of the standard locations")
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)?;
    let config = parse_config(&contents, &config_path)?;
    check(&config)?;
    Ok(config)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> CommonResult<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => Ok(toml::from_str(contents)?),
        "json" => Ok(serde_json::from_str(contents)?),
        _ => Err(CommonError::config(format!("Unsupported config format: {extension}"))),
    }
}

/// Validate a configuration
///
/// Thresholds and targets must be positive and the log level non-empty.
///
/// # Errors
/// Returns `TimekeepError::Config` naming the first offending field.
pub fn validate(config: &Config) -> Result<()> {
    check(config).map_err(into_config_error)
}

fn check(config: &Config) -> CommonResult<()> {
    if !(config.policy.overtime_threshold_hours > 0.0) {
        return Err(CommonError::config_field(
            "policy.overtime_threshold_hours",
            format!("must be positive, got {}", config.policy.overtime_threshold_hours),
        ));
    }
    if !(config.aggregation.daily_target_hours > 0.0) {
        return Err(CommonError::config_field(
            "aggregation.daily_target_hours",
            format!("must be positive, got {}", config.aggregation.daily_target_hours),
        ));
    }
    if config.aggregation.display_decimals > 6 {
        return Err(CommonError::config_field(
            "aggregation.display_decimals",
            format!("must be at most 6, got {}", config.aggregation.display_decimals),
        ));
    }
    if config.logging.level.trim().is_empty() {
        return Err(CommonError::config_field("logging.level", "cannot be empty"));
    }
    Ok(())
}

/// Probe multiple paths for configuration files
///
/// Searches for config files in the following locations (in order):
/// 1. Current working directory (`./config.{json,toml}`,
///    `./timekeep.{json,toml}`)
/// 2. Parent directories (up to 2 levels)
/// 3. Relative to executable location
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(candidates_in(&cwd));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(candidates_in(exe_dir));
        }
    }

    candidates.into_iter().find(|path| path.exists())
}

fn candidates_in(dir: &Path) -> Vec<PathBuf> {
    vec![
        dir.join("config.json"),
        dir.join("config.toml"),
        dir.join("timekeep.json"),
        dir.join("timekeep.toml"),
        dir.join("../config.json"),
        dir.join("../config.toml"),
        dir.join("../../config.json"),
        dir.join("../../config.toml"),
    ]
}

fn any_env_set() -> bool {
    std::env::vars_os().any(|(key, _)| key.to_str().is_some_and(|k| k.starts_with(ENV_PREFIX)))
}

/// Parse an optional environment variable
///
/// # Errors
/// Returns `CommonError::Config` naming the variable if it is set but does
/// not parse.
fn env_parse<T>(key: &str) -> CommonResult<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| CommonError::config_field(key, format!("invalid value '{raw}': {e}"))),
        Err(_) => Ok(None),
    }
}

/// Parse an optional boolean environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
///
/// # Errors
/// Returns `CommonError::Config` naming the variable for any other value.
fn env_bool(key: &str) -> CommonResult<Option<bool>> {
    let Ok(raw) = std::env::var(key) else {
        return Ok(None);
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(Some(true)),
        "0" | "false" | "no" | "off" => Ok(Some(false)),
        _ => Err(CommonError::config_field(
            key,
            format!("invalid value '{raw}': expected true/false, yes/no, on/off or 1/0"),
        )),
    }
}

fn into_config_error(err: CommonError) -> TimekeepError {
    log_common_error(&err);
    TimekeepError::Config(err.to_string())
}
