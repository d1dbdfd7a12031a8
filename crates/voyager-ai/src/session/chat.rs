//! Async chat method for Session.

use crate::{AiClient, AiError, Message};

use super::manager::Session;

impl Session {
    /// Add a user message and get the assistant's response.
    ///
    /// In inline mode the document travels with the user message. If the
    /// call fails the user message is taken back out of the history.
    pub async fn chat(
        &mut self,
        client: &dyn AiClient,
        user_message: impl Into<String>,
    ) -> Result<String, AiError> {
        let mut message = Message::user(user_message);
        if let Some(ref document) = self.document {
            message = message.with_attachment(document.clone());
        }
        self.messages.push(message);

        let messages = self.build_messages();
        let response = match client
            .send_message(&messages, self.cached_content.as_ref())
            .await
        {
            Ok(response) => response,
            Err(e) => {
                self.messages.pop();
                return Err(e);
            }
        };

        self.tracker.record(&response.usage);
        self.messages.push(Message::assistant(response.content.clone()));
        Ok(response.content)
    }
}
