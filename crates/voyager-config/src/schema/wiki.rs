//! Wiki lookup configuration.

use serde::{Deserialize, Serialize};

/// Settings for the MediaWiki search and extract endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WikiConfig {
    /// `api.php` endpoint of the wiki.
    pub endpoint: String,
    /// Maximum number of search candidates (valid range: 1-5).
    pub result_limit: u32,
    /// Request timeout in seconds (valid range: 1-300).
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for WikiConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://en.wikivoyage.org/w/api.php".into(),
            result_limit: 5,
            timeout_secs: 15,
            user_agent: format!(
                "voyager/{} (command-line travel assistant)",
                env!("CARGO_PKG_VERSION")
            ),
        }
    }
}
