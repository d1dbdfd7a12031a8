//! Cache-or-inline policy.

use std::time::Duration;

/// Documents shorter than this (in characters, trimmed) are treated as
/// missing page content.
pub const MIN_DOCUMENT_CHARS: usize = 10;

/// Knobs for how a document chat is set up.
#[derive(Debug, Clone)]
pub struct ConversationPolicy {
    /// Documents estimated above this many tokens are cached server-side.
    pub cache_threshold_tokens: u64,
    pub cache_ttl: Duration,
    pub system_prompt: String,
}

impl Default for ConversationPolicy {
    fn default() -> Self {
        Self {
            cache_threshold_tokens: 40_000,
            cache_ttl: Duration::from_secs(5 * 60),
            system_prompt: String::new(),
        }
    }
}

impl ConversationPolicy {
    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = prompt.into();
        self
    }

    pub fn with_cache_threshold(mut self, tokens: u64) -> Self {
        self.cache_threshold_tokens = tokens;
        self
    }

    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }

    /// Strictly greater than the threshold.
    pub fn wants_cache(&self, estimated_tokens: u64) -> bool {
        estimated_tokens > self.cache_threshold_tokens
    }

    pub fn is_too_short(&self, document: &str) -> bool {
        document.trim().chars().count() < MIN_DOCUMENT_CHARS
    }

    pub(crate) fn system_prompt(&self) -> Option<&str> {
        let prompt = self.system_prompt.trim();
        (!prompt.is_empty()).then_some(prompt)
    }
}
