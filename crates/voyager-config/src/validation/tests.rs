//! Tests for the full validation pipeline.

use super::*;
use crate::schema::*;

#[test]
fn default_config_validates() {
    let config = VoyagerConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_result_limit_zero() {
    let mut config = VoyagerConfig::default();
    config.wiki.result_limit = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("wiki.result_limit"));
}

#[test]
fn catches_result_limit_above_api_cap() {
    let mut config = VoyagerConfig::default();
    config.wiki.result_limit = 6;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("wiki.result_limit"));
}

#[test]
fn catches_non_http_endpoint() {
    let mut config = VoyagerConfig::default();
    config.wiki.endpoint = "ftp://example.org/api.php".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("wiki.endpoint"));
}

#[test]
fn catches_cache_ttl_too_short() {
    let mut config = VoyagerConfig::default();
    config.llm.cache_ttl_secs = 10;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("llm.cache_ttl_secs"));
}

#[test]
fn catches_temperature_out_of_range() {
    let mut config = VoyagerConfig::default();
    config.llm.temperature = 3.5;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("llm.temperature"));
}

#[test]
fn catches_empty_model() {
    let mut config = VoyagerConfig::default();
    config.llm.model = "  ".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("llm.model must not be empty"));
}

#[test]
fn catches_zero_credential_attempts() {
    let mut config = VoyagerConfig::default();
    config.credentials.max_attempts = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("credentials.max_attempts"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = VoyagerConfig::default();
    config.wiki.timeout_secs = 0;
    config.llm.timeout_secs = 0;
    config.logging.level = String::new();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("wiki.timeout_secs"));
    assert!(err.contains("llm.timeout_secs"));
    assert!(err.contains("logging.level"));
}
