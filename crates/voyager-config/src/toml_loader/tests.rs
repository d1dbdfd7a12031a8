//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_voyager_config.toml"));
    assert!(matches!(
        result,
        Err(voyager_common::ConfigError::FileNotFound(_))
    ));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[wiki]
endpoint = "http://localhost:9999/w/api.php"
result_limit = 3

[llm]
cache_threshold_tokens = 1000
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.wiki.endpoint, "http://localhost:9999/w/api.php");
    assert_eq!(config.wiki.result_limit, 3);
    assert_eq!(config.llm.cache_threshold_tokens, 1000);
    // Defaults preserved
    assert_eq!(config.llm.cache_ttl_secs, 300);
    assert_eq!(config.credentials.max_attempts, 3);
    assert_eq!(config.logging.level, "voyager=warn");
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let result = load_from_path(&path);
    assert!(matches!(
        result,
        Err(voyager_common::ConfigError::ParseError(_))
    ));
}

#[test]
fn load_config_with_invalid_values_is_returned_as_parsed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[wiki]\nresult_limit = 50\n").unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.wiki.result_limit, 50);
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("voyager").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.llm.cache_threshold_tokens, 40_000);
    assert_eq!(config.wiki.result_limit, 5);
}

#[test]
fn default_config_toml_is_valid() {
    use super::template::default_config_toml;
    use crate::schema::VoyagerConfig;

    let content = default_config_toml();
    let config: VoyagerConfig = toml::from_str(&content).unwrap();
    assert_eq!(config.llm.model, "gemini-2.0-flash-001");
    assert!(crate::validation::validate(&config).is_ok());
}

#[test]
fn default_config_path_is_reasonable() {
    if let Ok(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(path_str.contains("voyager"));
        assert!(path_str.ends_with("config.toml"));
    }
}
