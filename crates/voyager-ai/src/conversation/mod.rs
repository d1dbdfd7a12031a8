//! Document chat: decides between server-side caching and inline
//! documents, then drives the question/answer loop.
//!
//! Lifecycle: a `ConversationManager` (idle) starts a `ChatSession`
//! (active) which ends closed. A session that owns a `CacheLease`
//! releases it exactly once on the way out.

mod chat_session;
mod lease;
mod manager;
mod policy;
mod run;


pub use chat_session::{ChatSession, SessionMode, SessionState};
pub use lease::CacheLease;
pub use manager::{ConversationManager, SessionStart};
pub use policy::{ConversationPolicy, MIN_DOCUMENT_CHARS};
pub use run::{CloseReason, SessionOutcome, QUIT_COMMAND};

use crate::AiError;

/// Failure of a chat operation, safe to show to the user.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("the assistant is unavailable: {0}")]
    Provider(#[from] AiError),
    #[error("the chat session is closed")]
    Closed,
}
