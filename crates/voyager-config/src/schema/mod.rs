//! Configuration schema types for Voyager.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod llm;
mod system;
mod wiki;

pub use llm::*;
pub use system::*;
pub use wiki::*;

use serde::{Deserialize, Serialize};

/// Root configuration for Voyager.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VoyagerConfig {
    pub wiki: WikiConfig,
    pub llm: LlmConfig,
    pub credentials: CredentialsConfig,
    pub logging: LoggingConfig,
}
