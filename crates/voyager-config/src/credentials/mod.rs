//! Provider API key storage.
//!
//! The key lives in a small JSON file (`{"gemini_api_key": "..."}`).
//! When the file is missing the user is asked for a key; when it is
//! corrupt it is deleted and the user is asked again. Both paths are
//! bounded by `credentials.max_attempts`.

mod bootstrap;
mod store;


pub use bootstrap::{bootstrap_credential, resolve_credential};
pub use store::{Credential, CredentialStore};

/// Environment variable that overrides the credential file.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";
