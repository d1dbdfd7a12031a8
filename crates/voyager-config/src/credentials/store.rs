//! JSON credential file read/write.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use voyager_common::ConfigError;

use crate::schema::CredentialsConfig;
use crate::toml_loader::config_dir;

/// A provider API key.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    api_key: String,
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl Credential {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
        }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

/// On-disk shape of the credential file.
#[derive(Serialize, Deserialize)]
struct CredentialFile {
    gemini_api_key: String,
}

/// Reads and writes the credential file at a fixed path.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the configured override, or `credentials.json` in the
    /// Voyager config directory.
    pub fn from_config(config: &CredentialsConfig) -> Result<Self, ConfigError> {
        match &config.path {
            Some(path) => Ok(Self::new(path)),
            None => Ok(Self::new(config_dir()?.join("credentials.json"))),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored credential.
    ///
    /// `Ok(None)` means there is no file yet. Unreadable files, invalid
    /// JSON, a missing key field and an empty key are all reported as
    /// `ConfigError::ParseError`.
    pub fn load(&self) -> Result<Option<Credential>, ConfigError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            ConfigError::ParseError(format!("failed to read {}: {e}", self.path.display()))
        })?;

        let file: CredentialFile = serde_json::from_str(&content).map_err(|e| {
            ConfigError::ParseError(format!(
                "malformed credential file {}: {e}",
                self.path.display()
            ))
        })?;

        let key = file.gemini_api_key.trim();
        if key.is_empty() {
            return Err(ConfigError::ParseError(format!(
                "credential file {} holds an empty key",
                self.path.display()
            )));
        }

        Ok(Some(Credential::new(key)))
    }

    /// Write `credential` as JSON, creating parent directories.
    ///
    /// Writes to a `.tmp` sibling first and renames it into place.
    pub fn save(&self, credential: &Credential) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(&CredentialFile {
            gemini_api_key: credential.api_key().to_string(),
        })
        .map_err(|e| ConfigError::CredentialError(format!("failed to serialize key: {e}")))?;

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ConfigError::CredentialError(format!(
                    "failed to create directory {}: {e}",
                    parent.display()
                ))
            })?;
        }

        let tmp_path = self.path.with_extension("json.tmp");
        std::fs::write(&tmp_path, json).map_err(|e| {
            ConfigError::CredentialError(format!("failed to write {}: {e}", tmp_path.display()))
        })?;
        restrict_permissions(&tmp_path);

        std::fs::rename(&tmp_path, &self.path).map_err(|e| {
            let _ = std::fs::remove_file(&tmp_path);
            ConfigError::CredentialError(format!("failed to write {}: {e}", self.path.display()))
        })?;

        tracing::debug!(path = %self.path.display(), "Credential saved to disk");
        Ok(())
    }

    /// Delete the credential file. A file that is already gone is fine.
    pub fn remove(&self) -> Result<(), ConfigError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ConfigError::CredentialError(format!(
                "failed to delete {}: {e}",
                self.path.display()
            ))),
        }
    }
}

#[cfg(unix)]
fn restrict_permissions(path: &Path) {
    use std::os::unix::fs::PermissionsExt;

    if let Err(e) = std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600)) {
        tracing::warn!("could not restrict permissions on {}: {e}", path.display());
    }
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) {}
