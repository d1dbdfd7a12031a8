//! Session history tests.

use std::sync::Arc;

use super::*;
use crate::testing::FakeClient;
use crate::{CachedContent, Role};

#[tokio::test]
async fn chat_records_user_and_assistant_turns() {
    let client = FakeClient::with_tokens(0);
    let mut session = Session::new().with_system_prompt("guide");

    let reply = session.chat(&client, "hello").await.unwrap();
    assert_eq!(reply, "reply 1");
    assert_eq!(session.message_count(), 2);
    assert_eq!(session.messages[0].role, Role::User);
    assert_eq!(session.messages[1].content, "reply 1");
    assert_eq!(session.tracker().call_count(), 1);

    let state = client.state();
    let (sent, cache) = &state.sent[0];
    assert_eq!(sent[0].role, Role::System);
    assert_eq!(sent[0].content, "guide");
    assert!(cache.is_none());
}

#[tokio::test]
async fn inline_document_is_attached_to_every_user_turn() {
    let client = FakeClient::with_tokens(0);
    let mut session = Session::new().with_document("the page");

    session.chat(&client, "first").await.unwrap();
    session.chat(&client, "second").await.unwrap();

    let state = client.state();
    let (second_call, _) = &state.sent[1];
    let user_turns: Vec<_> = second_call.iter().filter(|m| m.role == Role::User).collect();
    assert_eq!(user_turns.len(), 2);
    for turn in user_turns {
        assert_eq!(turn.attachments, vec![Arc::<str>::from("the page")]);
    }
}

#[tokio::test]
async fn cached_session_references_cache_without_document() {
    let client = FakeClient::with_tokens(0);
    let cache = CachedContent {
        name: "cachedContents/one".into(),
        model: "models/fake".into(),
        expire_time: None,
    };
    let mut session = Session::new().with_cached_content(cache);

    session.chat(&client, "hi").await.unwrap();

    let state = client.state();
    let (sent, cache) = &state.sent[0];
    assert_eq!(cache.as_deref(), Some("cachedContents/one"));
    assert!(sent[0].attachments.is_empty());
    assert_eq!(session.tracker().total().cached_tokens, 8);
}

#[tokio::test]
async fn failed_turn_leaves_history_untouched() {
    let client = FakeClient::with_tokens(0).failing_turns(1);
    let mut session = Session::new();

    assert!(session.chat(&client, "lost").await.is_err());
    assert_eq!(session.message_count(), 0);
    assert_eq!(session.tracker().call_count(), 0);

    session.chat(&client, "retry").await.unwrap();
    assert_eq!(session.message_count(), 2);
    assert_eq!(session.messages[0].content, "retry");
}

#[test]
fn new_session_is_empty() {
    let session = Session::default();
    assert_eq!(session.message_count(), 0);
    assert!(session.cached_content().is_none());
    assert!(session.build_messages().is_empty());
}
