//! Credential and logging configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Where the API key lives and how hard to try bootstrapping it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CredentialsConfig {
    /// Credential file override. Defaults to `credentials.json` next to
    /// `config.toml`.
    pub path: Option<PathBuf>,
    /// Interactive bootstrap attempts before giving up (valid range: 1-10).
    pub max_attempts: u32,
}

impl Default for CredentialsConfig {
    fn default() -> Self {
        Self {
            path: None,
            max_attempts: 3,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "voyager=warn".into(),
        }
    }
}
