//! Voyager configuration system.
//!
//! Provides TOML-based configuration for the wiki lookup, the LLM
//! provider and logging, plus the JSON credential file that holds the
//! provider API key. All config sections use sensible defaults so
//! partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use voyager_config::load_config;
//!
//! let config = load_config(None).expect("failed to load config");
//! println!("model: {}", config.llm.model);
//! ```

pub mod credentials;
pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use credentials::{
    bootstrap_credential, resolve_credential, Credential, CredentialStore, API_KEY_ENV,
};
pub use schema::VoyagerConfig;

use std::path::Path;

use voyager_common::ConfigError;

/// Load config from `path` when given, otherwise from the platform default
/// location (created from the template on first run).
///
/// Validation problems are logged rather than returned so that a config
/// with one odd value still starts.
pub fn load_config(path: Option<&Path>) -> Result<VoyagerConfig, ConfigError> {
    match path {
        Some(path) => toml_loader::load_from_path(path),
        None => toml_loader::load_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_config_with_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("voyager.toml");
        std::fs::write(&path, "[llm]\nmodel = \"gemini-1.5-pro-002\"\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.llm.model, "gemini-1.5-pro-002");
        assert_eq!(config.wiki.result_limit, 5);
    }

    #[test]
    fn load_config_with_missing_explicit_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_config(Some(&dir.path().join("nope.toml")));
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }
}
