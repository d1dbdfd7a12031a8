//! AI engine for Voyager.
//!
//! Provides the Gemini API client and the document chat built on it:
//! - Conversation history (`Session`)
//! - Server-side content caching for large documents (`CacheLease`)
//! - The cache-or-inline decision and turn loop (`ConversationManager`)
//! - Token usage tracking

pub mod conversation;
pub mod gemini;
pub mod session;
pub mod token_tracker;

#[cfg(test)]
pub(crate) mod testing;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

pub use conversation::{
    CacheLease, ChatError, ChatSession, CloseReason, ConversationManager, ConversationPolicy,
    SessionMode, SessionOutcome, SessionStart, SessionState,
};
pub use gemini::{GeminiClient, GeminiConfig};
pub use session::Session;
pub use token_tracker::TokenTracker;

/// A language model provider with server-side content caching.
#[async_trait]
pub trait AiClient: Send + Sync {
    /// Run one completion over `messages`. With `cache`, the cached
    /// content (document and system instruction) is prepended by the
    /// provider.
    async fn send_message(
        &self,
        messages: &[Message],
        cache: Option<&CachedContent>,
    ) -> Result<AiResponse, AiError>;

    /// Estimate how many tokens `text` occupies for the configured model.
    async fn count_tokens(&self, text: &str) -> Result<u64, AiError>;

    /// Store `document` server-side for `ttl`.
    async fn create_cache(
        &self,
        document: &str,
        system_prompt: Option<&str>,
        ttl: Duration,
    ) -> Result<CachedContent, AiError>;

    /// Push the expiry of `cache` to `ttl` from now.
    async fn extend_cache(
        &self,
        cache: &CachedContent,
        ttl: Duration,
    ) -> Result<CachedContent, AiError>;

    async fn delete_cache(&self, cache: &CachedContent) -> Result<(), AiError>;
}

#[derive(Debug, Clone)]
pub struct Message {
    pub role: Role,
    pub content: String,
    /// Extra text parts sent after `content` in the same turn.
    pub attachments: Vec<Arc<str>>,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            attachments: Vec::new(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    pub fn with_attachment(mut self, part: Arc<str>) -> Self {
        self.attachments.push(part);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
    System,
}

/// Handle to provider-side cached content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedContent {
    /// Resource name, e.g. `cachedContents/abc123`.
    pub name: String,
    pub model: String,
    pub expire_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct AiResponse {
    pub content: String,
    pub usage: TokenUsage,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
    /// Part of `input_tokens` served from cached content.
    pub cached_tokens: u64,
}

impl TokenUsage {
    pub fn total_tokens(&self) -> u64 {
        self.input_tokens.saturating_add(self.output_tokens)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("API error: {0}")]
    ApiError(String),
    #[error("Rate limited")]
    RateLimited,
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Timeout")]
    Timeout,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_total_saturates() {
        let usage = TokenUsage {
            input_tokens: u64::MAX,
            output_tokens: 5,
            cached_tokens: 0,
        };
        assert_eq!(usage.total_tokens(), u64::MAX);
    }

    #[test]
    fn message_builders_set_role_and_parts() {
        let doc: Arc<str> = Arc::from("page text");
        let msg = Message::user("hi").with_attachment(doc.clone());
        assert_eq!(msg.role, Role::User);
        assert_eq!(msg.content, "hi");
        assert_eq!(msg.attachments, vec![doc]);
        assert!(Message::assistant("x").attachments.is_empty());
        assert_eq!(Message::system("s").role, Role::System);
    }
}
