//! Integration tests for configuration loader
//!
//! Tests the end-to-end behavior of loading configuration from files and
//! turning it into an API client configuration.

use std::io::Write;
use std::time::Duration;

use symposium_infra::{config, ApiClientConfig};
use tempfile::NamedTempFile;

fn write_config(contents: &str, extension: &str) -> std::path::PathBuf {
    let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
    temp_file.write_all(contents.as_bytes()).expect("Failed to write to temp file");
    let path = temp_file.path().with_extension(extension);
    std::fs::copy(temp_file.path(), &path).expect("Failed to copy file");
    path
}

#[test]
fn test_load_config_from_json_file() {
    let path = write_config(
        r#"{
            "api": {
                "base_url": "https://api.example.org/",
                "request_timeout_secs": 15,
                "token_wait_timeout_ms": 3000,
                "retry": { "max_attempts": 4, "delays_ms": [100, 200, 400] }
            },
            "logging": { "filter": "symposium_infra=debug", "json": true }
        }"#,
        "json",
    );

    let config = config::load_from_file(Some(path.clone())).expect("config should load");
    std::fs::remove_file(path).ok();

    assert_eq!(config.api.endpoint(), Some("https://api.example.org"));
    assert_eq!(config.api.request_timeout(), Duration::from_secs(15));
    assert_eq!(config.api.token_wait_timeout(), Duration::from_secs(3));
    assert_eq!(config.logging.filter, "symposium_infra=debug");
    assert!(config.logging.json);

    let client_config = ApiClientConfig::from(&config.api);
    assert_eq!(client_config.base_url.as_deref(), Some("https://api.example.org"));
    assert_eq!(client_config.retry.max_attempts(), 4);
    assert_eq!(client_config.retry.worst_case_delay(), Duration::from_millis(700));
}

#[test]
fn test_load_config_from_toml_file() {
    let path = write_config(
        r#"
[api]
base_url = "http://localhost:8000"

[api.retry]
max_attempts = 2
"#,
        "toml",
    );

    let config = config::load_from_file(Some(path.clone())).expect("config should load");
    std::fs::remove_file(path).ok();

    assert_eq!(config.api.endpoint(), Some("http://localhost:8000"));
    assert_eq!(config.api.retry.max_attempts, 2);
    assert_eq!(config.api.retry.delays_ms, vec![2_000, 4_000, 8_000]);
    assert_eq!(config.api.token_wait_timeout(), Duration::from_secs(5));
}

#[test]
fn test_empty_file_yields_defaults_without_endpoint() {
    let path = write_config("{}", "json");

    let config = config::load_from_file(Some(path.clone())).expect("config should load");
    std::fs::remove_file(path).ok();

    assert_eq!(config.api.endpoint(), None);
    assert_eq!(ApiClientConfig::from(&config.api).base_url, None);
}

#[test]
fn test_invalid_toml_is_a_config_error() {
    let path = write_config("[api\nbase_url = ", "toml");

    let result = config::load_from_file(Some(path.clone()));
    std::fs::remove_file(path).ok();

    let err = result.expect_err("invalid TOML must fail");
    assert!(err.to_string().starts_with("Invalid TOML format"), "unexpected: {err}");
}

#[test]
fn test_missing_explicit_file_is_reported() {
    let err = config::load_from_file(Some("/nonexistent/symposium.toml".into()))
        .expect_err("missing file must fail");
    assert!(err.to_string().contains("/nonexistent/symposium.toml"));
}
