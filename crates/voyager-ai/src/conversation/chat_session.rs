//! An active document chat.

use std::sync::Arc;

use tracing::debug;

use crate::session::Session;
use crate::AiClient;

use super::lease::CacheLease;
use super::ChatError;

/// How the document reaches the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionMode {
    /// The full document travels with every user turn.
    Inline,
    /// The document lives in provider-side cached content.
    Cached,
}

/// Lifecycle of a chat. The idle state is the manager before a session
/// exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Active,
    Closed,
}

pub struct ChatSession {
    session: Session,
    lease: Option<CacheLease>,
    client: Arc<dyn AiClient>,
    state: SessionState,
    mode: SessionMode,
    turns: usize,
}

impl ChatSession {
    pub(crate) fn new(session: Session, lease: Option<CacheLease>, client: Arc<dyn AiClient>) -> Self {
        let mode = if lease.is_some() {
            SessionMode::Cached
        } else {
            SessionMode::Inline
        };
        Self {
            session,
            lease,
            client,
            state: SessionState::Active,
            mode,
            turns: 0,
        }
    }

    pub fn mode(&self) -> SessionMode {
        self.mode
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Completed question/answer exchanges.
    pub fn turns(&self) -> usize {
        self.turns
    }

    /// Ask one question and wait for the answer.
    pub async fn send_turn(&mut self, text: &str) -> Result<String, ChatError> {
        if self.state == SessionState::Closed {
            return Err(ChatError::Closed);
        }
        if let Some(lease) = self.lease.as_mut() {
            lease.keep_alive().await;
        }

        let reply = self.session.chat(self.client.as_ref(), text).await?;
        self.turns += 1;
        Ok(reply)
    }

    /// End the chat and release the remote cache, if any. Idempotent.
    pub async fn close(&mut self) {
        if self.state == SessionState::Closed {
            return;
        }
        self.state = SessionState::Closed;

        let tracker = self.session.tracker();
        debug!(
            turns = self.turns,
            history = self.session.message_count(),
            calls = tracker.call_count(),
            total_tokens = tracker.total_tokens(),
            input_tokens = tracker.total().input_tokens,
            output_tokens = tracker.total().output_tokens,
            cached_tokens = tracker.total().cached_tokens,
            "chat session closed"
        );

        if let Some(lease) = self.lease.take() {
            // Failure is already logged by the lease; the TTL bounds the leak.
            let _ = lease.release().await;
        }
    }
}
