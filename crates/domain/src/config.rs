//! Configuration structures
//!
//! Deserialisable from TOML or JSON; every field has a default so partial
//! files are accepted. The API base URL is deliberately optional: a missing
//! endpoint is reported when the first request is issued, not at load time.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_LOG_FILTER, DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_RETRY_DELAYS_MS,
    DEFAULT_RETRY_MAX_ATTEMPTS, DEFAULT_TOKEN_WAIT_TIMEOUT_MS,
};

/// Top-level application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub logging: LoggingConfig,
}

/// Remote API settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base endpoint, e.g. `https://api.example.org`. Requests go to
    /// `<base>/api/...`.
    pub base_url: Option<String>,
    pub request_timeout_secs: u64,
    /// How long the token provider waits for the identity subsystem to settle.
    pub token_wait_timeout_ms: u64,
    pub retry: RetryConfig,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            token_wait_timeout_ms: DEFAULT_TOKEN_WAIT_TIMEOUT_MS,
            retry: RetryConfig::default(),
        }
    }
}

impl ApiConfig {
    /// Config pointing at `base_url` with all other settings defaulted.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self { base_url: Some(base_url.into()), ..Self::default() }
    }

    /// Base URL without trailing slashes, or `None` when unset or blank.
    pub fn endpoint(&self) -> Option<&str> {
        self.base_url
            .as_deref()
            .map(|raw| raw.trim().trim_end_matches('/'))
            .filter(|trimmed| !trimmed.is_empty())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn token_wait_timeout(&self) -> Duration {
        Duration::from_millis(self.token_wait_timeout_ms)
    }
}

/// Transport-failure retry settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Total attempts including the first one.
    pub max_attempts: u32,
    /// Wait before retry n (1-based) is `delays_ms[n - 1]`.
    pub delays_ms: Vec<u64>,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_RETRY_MAX_ATTEMPTS,
            delays_ms: DEFAULT_RETRY_DELAYS_MS.to_vec(),
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub filter: String,
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { filter: DEFAULT_LOG_FILTER.to_string(), json: false }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_strips_trailing_slash() {
        let config = ApiConfig::with_base_url("https://api.example.org/");
        assert_eq!(config.endpoint(), Some("https://api.example.org"));
    }

    #[test]
    fn blank_endpoint_is_unset() {
        assert_eq!(ApiConfig::with_base_url("   ").endpoint(), None);
        assert_eq!(ApiConfig::default().endpoint(), None);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{ "api": { "base_url": "http://localhost:8000" } }"#).unwrap();
        assert_eq!(config.api.endpoint(), Some("http://localhost:8000"));
        assert_eq!(config.api.token_wait_timeout(), Duration::from_secs(5));
        assert_eq!(config.api.retry.max_attempts, 3);
        assert_eq!(config.api.retry.delays_ms, vec![2_000, 4_000, 8_000]);
        assert_eq!(config.logging.filter, "info");
    }
}
