//! LLM provider configuration.

use serde::{Deserialize, Serialize};

pub const DEFAULT_SYSTEM_PROMPT: &str = "You are an expert travel guide. Your job is to answer \
the user's query based on the document you have access to. Try giving them suggestions and \
answers that would help them decide their next travel destination.";

/// Gemini model and document-chat policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Base URL of the Generative Language API, e.g. `.../v1beta`.
    pub api_base: String,
    /// Must be an explicitly versioned model for content caching to work.
    pub model: String,
    pub system_prompt: String,
    /// Valid range: 1-65536.
    pub max_tokens: u32,
    /// Valid range: 0.0-2.0.
    pub temperature: f64,
    /// Documents estimated above this many tokens are cached server-side.
    pub cache_threshold_tokens: u64,
    /// Lifetime of the server-side cache in seconds (valid range: 60-86400).
    pub cache_ttl_secs: u64,
    /// Per-request timeout in seconds (valid range: 1-600).
    pub timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_base: "https://generativelanguage.googleapis.com/v1beta".into(),
            model: "gemini-2.0-flash-001".into(),
            system_prompt: DEFAULT_SYSTEM_PROMPT.into(),
            max_tokens: 4096,
            temperature: 0.7,
            cache_threshold_tokens: 40_000,
            cache_ttl_secs: 300,
            timeout_secs: 120,
        }
    }
}
