//! The interactive question/answer loop.

use std::panic::AssertUnwindSafe;

use futures_util::FutureExt;
use tracing::warn;
use voyager_common::{Console, Tone};

use super::chat_session::{ChatSession, SessionMode};
use super::manager::ConversationManager;
use super::ChatError;

/// Typing this (any case) ends the chat.
pub const QUIT_COMMAND: &str = "quit";

/// Why a chat ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    UserQuit,
    EndOfInput,
    InputError,
    DocumentTooShort,
}

/// Summary of a finished chat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOutcome {
    pub reason: CloseReason,
    pub turns: usize,
    pub cached: bool,
}

impl ConversationManager {
    /// Chat about `document` on `console` until the user quits.
    ///
    /// Turn failures are shown and the loop goes on. The remote cache, if
    /// one was created, is released before returning, and before a panic
    /// inside the loop is allowed to continue unwinding.
    pub async fn run(
        &self,
        document: &str,
        console: &mut dyn Console,
    ) -> Result<SessionOutcome, ChatError> {
        let Some(mode) = self.plan(document).await? else {
            console.emit(Tone::Error, "Error! Page contents missing. Exiting.");
            return Ok(SessionOutcome {
                reason: CloseReason::DocumentTooShort,
                turns: 0,
                cached: false,
            });
        };
        if mode == SessionMode::Cached {
            console.emit(Tone::Notice, "Large page encountered, caching page.");
        }
        let mut chat = self.open(document, mode).await?;

        console.emit(Tone::Notice, "Chat initialized. Type 'quit' to exit.");
        let looped = AssertUnwindSafe(converse(&mut chat, &mut *console))
            .catch_unwind()
            .await;
        chat.close().await;
        let reason = match looped {
            Ok(reason) => reason,
            Err(panic) => std::panic::resume_unwind(panic),
        };

        if reason != CloseReason::InputError {
            console.emit(Tone::Notice, "Exiting application. Goodbye!");
        }
        Ok(SessionOutcome {
            reason,
            turns: chat.turns(),
            cached: mode == SessionMode::Cached,
        })
    }
}

async fn converse(chat: &mut ChatSession, console: &mut dyn Console) -> CloseReason {
    loop {
        let line = match console.prompt("User: ") {
            Ok(Some(line)) => line,
            Ok(None) => return CloseReason::EndOfInput,
            Err(e) => {
                warn!("reading chat input failed: {e}");
                return CloseReason::InputError;
            }
        };
        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        if text.eq_ignore_ascii_case(QUIT_COMMAND) {
            return CloseReason::UserQuit;
        }

        match chat.send_turn(text).await {
            Ok(reply) => console.emit(Tone::Assistant, &reply),
            Err(e) => console.emit(Tone::Error, &format!("Error: {e}")),
        }
    }
}
