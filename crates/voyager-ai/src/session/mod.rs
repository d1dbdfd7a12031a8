//! Conversation session management.
//!
//! A `Session` holds the conversation history (messages), the optional
//! inline document and the cached-content reference used for each call.

mod chat;
mod manager;

#[cfg(test)]
mod tests;

pub use manager::Session;
