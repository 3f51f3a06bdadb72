//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. A `.env` file in the working directory (if any) is applied first
//! 2. If `SYMPOSIUM_API_URL` is set, configuration comes from the environment
//! 3. Otherwise the first config file found by [`probe_config_paths`] is used
//! 4. With neither, defaults apply and the missing endpoint is reported on
//!    the first request
//!
//! ## Environment Variables
//! - `SYMPOSIUM_API_URL`: API base endpoint (required for env loading)
//! - `SYMPOSIUM_API_TIMEOUT_SECS`: per-request timeout in seconds
//! - `SYMPOSIUM_TOKEN_WAIT_MS`: identity wait before giving up on a token
//! - `SYMPOSIUM_RETRY_MAX_ATTEMPTS`: attempts per request, first one included
//! - `SYMPOSIUM_RETRY_DELAYS_MS`: comma-separated retry delays
//! - `SYMPOSIUM_LOG_FILTER`: default `EnvFilter` directive
//! - `SYMPOSIUM_LOG_JSON`: JSON log output (true/false)
//!
//! ## File Locations
//! `config.{json,toml}` and `symposium.{json,toml}` in the working
//! directory and up to two parents, then next to the executable.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use symposium_domain::{ApiConfig, AppConfig, LoggingConfig, Result, RetryConfig, SymposiumError};

use crate::errors::InfraError;

pub const API_URL_VAR: &str = "SYMPOSIUM_API_URL";
pub const API_TIMEOUT_VAR: &str = "SYMPOSIUM_API_TIMEOUT_SECS";
pub const TOKEN_WAIT_VAR: &str = "SYMPOSIUM_TOKEN_WAIT_MS";
pub const RETRY_MAX_ATTEMPTS_VAR: &str = "SYMPOSIUM_RETRY_MAX_ATTEMPTS";
pub const RETRY_DELAYS_VAR: &str = "SYMPOSIUM_RETRY_DELAYS_MS";
pub const LOG_FILTER_VAR: &str = "SYMPOSIUM_LOG_FILTER";
pub const LOG_JSON_VAR: &str = "SYMPOSIUM_LOG_JSON";

const CONFIG_FILE_STEMS: [&str; 2] = ["config", "symposium"];
const CONFIG_FILE_EXTENSIONS: [&str; 2] = ["json", "toml"];

/// Load configuration with automatic fallback strategy
///
/// # Errors
/// Returns `SymposiumError::Config` if an environment value is malformed or
/// the config file that was found cannot be parsed. Finding no source at
/// all is not an error.
pub fn load() -> Result<AppConfig> {
    if let Ok(path) = dotenvy::dotenv() {
        tracing::debug!(path = %path.display(), "applied .env file");
    }

    if std::env::var_os(API_URL_VAR).is_some() {
        let config = load_from_env()?;
        tracing::info!("Configuration loaded from environment variables");
        return Ok(config);
    }

    match probe_config_paths() {
        Some(path) => load_from_file(Some(path)),
        None => {
            tracing::warn!("No configuration source found, using defaults");
            Ok(AppConfig::default())
        }
    }
}

/// Load configuration from environment variables
///
/// Only `SYMPOSIUM_API_URL` is required; unset optional variables keep
/// their defaults.
///
/// # Errors
/// Returns `SymposiumError::Config` if the endpoint is missing or a value
/// cannot be parsed.
pub fn load_from_env() -> Result<AppConfig> {
    let base_url = env_var(API_URL_VAR)?;
    let defaults = ApiConfig::default();

    let request_timeout_secs =
        env_parse(API_TIMEOUT_VAR)?.unwrap_or(defaults.request_timeout_secs);
    let token_wait_timeout_ms = env_parse(TOKEN_WAIT_VAR)?.unwrap_or(defaults.token_wait_timeout_ms);

    let mut retry = RetryConfig::default();
    if let Some(max_attempts) = env_parse(RETRY_MAX_ATTEMPTS_VAR)? {
        retry.max_attempts = max_attempts;
    }
    if let Ok(raw) = std::env::var(RETRY_DELAYS_VAR) {
        retry.delays_ms = parse_delays(&raw)?;
    }

    let mut logging = LoggingConfig::default();
    if let Ok(filter) = std::env::var(LOG_FILTER_VAR) {
        logging.filter = filter;
    }
    logging.json = env_bool(LOG_JSON_VAR, logging.json);

    Ok(AppConfig {
        api: ApiConfig {
            base_url: Some(base_url),
            request_timeout_secs,
            token_wait_timeout_ms,
            retry,
        },
        logging,
    })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes the standard locations. Format is chosen by
/// extension (`.json` or `.toml`).
///
/// # Errors
/// Returns `SymposiumError::Config` if the file is missing, unreadable or
/// malformed.
pub fn load_from_file(path: Option<PathBuf>) -> Result<AppConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(SymposiumError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            SymposiumError::Config("No config file found in any of the standard locations".into())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| SymposiumError::Config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, &config_path)
}

fn parse_config(contents: &str, path: &Path) -> Result<AppConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    let parsed: std::result::Result<AppConfig, InfraError> = match extension {
        "toml" => toml::from_str(contents).map_err(InfraError::from),
        "json" => serde_json::from_str(contents).map_err(InfraError::from),
        _ => return Err(SymposiumError::Config(format!("Unsupported config format: {extension}"))),
    };
    parsed.map_err(SymposiumError::from)
}

/// First existing config file among the standard locations.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut bases = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        bases.extend([cwd.clone(), cwd.join(".."), cwd.join("../..")]);
    }
    if let Some(exe_dir) = std::env::current_exe().ok().and_then(|p| p.parent().map(Path::to_path_buf))
    {
        bases.push(exe_dir);
    }

    bases
        .iter()
        .flat_map(|base| {
            CONFIG_FILE_STEMS.iter().flat_map(move |stem| {
                CONFIG_FILE_EXTENSIONS.iter().map(move |ext| base.join(format!("{stem}.{ext}")))
            })
        })
        .find(|path| path.exists())
}

fn parse_delays(raw: &str) -> Result<Vec<u64>> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<u64>().map_err(|e| {
                SymposiumError::Config(format!("Invalid {RETRY_DELAYS_VAR} entry '{part}': {e}"))
            })
        })
        .collect()
}

/// Get required environment variable
fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        SymposiumError::Config(format!("Missing required environment variable: {key}"))
    })
}

/// Parse an optional environment variable; unset yields `None`.
fn env_parse<T>(key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| SymposiumError::Config(format!("Invalid {key}: {e}"))),
        Err(_) => Ok(None),
    }
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}
