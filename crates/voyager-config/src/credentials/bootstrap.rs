//! Interactive credential bootstrap.

use tracing::{info, warn};
use voyager_common::{ConfigError, Console, Tone};

use super::store::{Credential, CredentialStore};
use super::API_KEY_ENV;

const KEY_HELP_URL: &str = "https://aistudio.google.com/app/apikey";

/// Return the key from `GEMINI_API_KEY` if set, otherwise bootstrap it
/// from the credential file.
pub fn resolve_credential(
    store: &CredentialStore,
    console: &mut dyn Console,
    max_attempts: u32,
) -> Result<Credential, ConfigError> {
    match std::env::var(API_KEY_ENV) {
        Ok(key) if !key.trim().is_empty() => {
            info!("using API key from {API_KEY_ENV}");
            Ok(Credential::new(key.trim()))
        }
        _ => bootstrap_credential(store, console, max_attempts),
    }
}

/// Load the credential, prompting for a new one when the file is missing
/// and deleting the file first when it is corrupt.
///
/// The stored file is always consulted once. `max_attempts` bounds the
/// prompts that follow (at least one); when they run out the function
/// gives up with `ConfigError::CredentialError`.
pub fn bootstrap_credential(
    store: &CredentialStore,
    console: &mut dyn Console,
    max_attempts: u32,
) -> Result<Credential, ConfigError> {
    match store.load() {
        Ok(Some(credential)) => return Ok(credential),
        Ok(None) => {
            console.emit(Tone::Notice, "Gemini API key not found. Please enter your key.");
        }
        Err(e) => {
            warn!("credential file unusable: {e}");
            console.emit(Tone::Error, "API key error! Deleting saved details.");
            if let Err(e) = store.remove() {
                warn!("{e}");
            }
            console.emit(Tone::Notice, "Please enter your Gemini API key.");
        }
    }
    console.emit(
        Tone::Plain,
        &format!("To get a new key visit: {KEY_HELP_URL}"),
    );

    let max_attempts = max_attempts.max(1);
    for attempt in 1..=max_attempts {
        let answer = console.read_line().map_err(|e| {
            ConfigError::CredentialError(format!("failed to read API key: {e}"))
        })?;
        let Some(answer) = answer else {
            return Err(ConfigError::CredentialError("no API key entered".into()));
        };

        let key = answer.trim();
        if key.is_empty() {
            warn!(attempt, max_attempts, "empty API key entered");
            console.emit(Tone::Error, "The API key cannot be empty.");
            continue;
        }

        let credential = Credential::new(key);
        if let Err(e) = store.save(&credential) {
            warn!("API key will not persist: {e}");
            console.emit(
                Tone::Error,
                "Could not save the API key; it will be used for this run only.",
            );
        }
        return Ok(credential);
    }

    Err(ConfigError::CredentialError(format!(
        "no usable API key after {max_attempts} attempts (credential file: {})",
        store.path().display()
    )))
}
