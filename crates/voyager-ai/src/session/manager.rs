//! Session struct and conversation management.

use std::sync::Arc;

use crate::token_tracker::TokenTracker;
use crate::{CachedContent, Message};

/// A conversation session with message history.
pub struct Session {
    /// Conversation message history.
    pub(super) messages: Vec<Message>,
    /// System prompt (prepended to every API call).
    pub(super) system_prompt: Option<String>,
    /// Document attached to every user turn.
    pub(super) document: Option<Arc<str>>,
    /// Cached content referenced by every call.
    pub(super) cached_content: Option<CachedContent>,
    /// Token usage tracker.
    pub(super) tracker: TokenTracker,
}

impl Session {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            system_prompt: None,
            document: None,
            cached_content: None,
            tracker: TokenTracker::new(),
        }
    }

    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(prompt.into());
        self
    }

    /// Send `document` alongside every user message.
    pub fn with_document(mut self, document: impl Into<Arc<str>>) -> Self {
        self.document = Some(document.into());
        self
    }

    pub fn with_cached_content(mut self, cache: CachedContent) -> Self {
        self.cached_content = Some(cache);
        self
    }

    pub(crate) fn build_messages(&self) -> Vec<Message> {
        let mut msgs = Vec::with_capacity(self.messages.len() + 1);
        if let Some(ref system) = self.system_prompt {
            msgs.push(Message::system(system.clone()));
        }
        msgs.extend(self.messages.iter().cloned());
        msgs
    }

    pub fn cached_content(&self) -> Option<&CachedContent> {
        self.cached_content.as_ref()
    }

    /// Get the token tracker.
    pub fn tracker(&self) -> &TokenTracker {
        &self.tracker
    }

    /// Number of messages in history.
    pub fn message_count(&self) -> usize {
        self.messages.len()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
