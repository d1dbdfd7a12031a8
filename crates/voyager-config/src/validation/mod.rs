//! Full configuration validation.
//!
//! Validates numeric ranges and required strings, collecting every
//! problem into a single `ConfigError`.

mod helpers;
mod sections;

#[cfg(test)]
mod tests;

use crate::schema::VoyagerConfig;
use voyager_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &VoyagerConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    sections::validate_wiki(&mut errors, config);
    sections::validate_llm(&mut errors, config);
    sections::validate_credentials(&mut errors, config);
    sections::validate_logging(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
