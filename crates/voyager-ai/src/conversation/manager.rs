//! Session setup: the cache-or-inline decision.

use std::sync::Arc;

use tracing::{info, warn};

use crate::session::Session;
use crate::AiClient;

use super::chat_session::{ChatSession, SessionMode};
use super::lease::CacheLease;
use super::policy::ConversationPolicy;
use super::run::CloseReason;
use super::ChatError;

/// Result of trying to start a chat.
pub enum SessionStart {
    Active(ChatSession),
    /// No session was opened.
    Closed(CloseReason),
}

/// Opens document chats against one provider.
pub struct ConversationManager {
    pub(super) client: Arc<dyn AiClient>,
    pub(super) policy: ConversationPolicy,
}

impl ConversationManager {
    pub fn new(client: Arc<dyn AiClient>, policy: ConversationPolicy) -> Self {
        Self { client, policy }
    }

    /// Open a chat about `document`.
    ///
    /// Documents that are too short close immediately without touching the
    /// network. Otherwise the token estimate picks cached or inline mode.
    pub async fn start_session(&self, document: &str) -> Result<SessionStart, ChatError> {
        match self.plan(document).await? {
            Some(mode) => Ok(SessionStart::Active(self.open(document, mode).await?)),
            None => Ok(SessionStart::Closed(CloseReason::DocumentTooShort)),
        }
    }

    /// Decide how `document` reaches the model; `None` when it is too short
    /// to chat about.
    pub(super) async fn plan(&self, document: &str) -> Result<Option<SessionMode>, ChatError> {
        if self.policy.is_too_short(document) {
            warn!(chars = document.trim().chars().count(), "document too short to chat about");
            return Ok(None);
        }

        let tokens = self.client.count_tokens(document).await?;
        info!(
            tokens,
            threshold = self.policy.cache_threshold_tokens,
            "document token estimate"
        );
        Ok(Some(if self.policy.wants_cache(tokens) {
            SessionMode::Cached
        } else {
            SessionMode::Inline
        }))
    }

    pub(super) async fn open(
        &self,
        document: &str,
        mode: SessionMode,
    ) -> Result<ChatSession, ChatError> {
        let system_prompt = self.policy.system_prompt();
        let mut session = Session::new();
        if let Some(prompt) = system_prompt {
            session = session.with_system_prompt(prompt);
        }

        if mode == SessionMode::Inline {
            return Ok(ChatSession::new(
                session.with_document(document),
                None,
                Arc::clone(&self.client),
            ));
        }

        let lease = CacheLease::acquire(
            Arc::clone(&self.client),
            document,
            system_prompt,
            self.policy.cache_ttl,
        )
        .await?;
        let session = session.with_cached_content(lease.cache().clone());
        Ok(ChatSession::new(session, Some(lease), Arc::clone(&self.client)))
    }
}
