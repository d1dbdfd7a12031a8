//! In-process fake provider shared by the session and conversation tests.

use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use async_trait::async_trait;

use crate::{AiClient, AiError, AiResponse, CachedContent, Message, TokenUsage};

#[derive(Default)]
pub(crate) struct FakeState {
    /// Every `send_message` call: the messages and the cache name used.
    pub sent: Vec<(Vec<Message>, Option<String>)>,
    pub count_calls: usize,
    /// Every `create_cache` call: document, system prompt, ttl.
    pub created: Vec<(String, Option<String>, Duration)>,
    pub extended: Vec<Duration>,
    pub deleted: Vec<String>,
    /// Number of upcoming `send_message` calls that fail.
    pub failing_turns: usize,
}

pub(crate) struct FakeClient {
    token_count: u64,
    fail_count_tokens: bool,
    fail_create: bool,
    state: Mutex<FakeState>,
}

impl FakeClient {
    pub fn with_tokens(token_count: u64) -> Self {
        Self {
            token_count,
            fail_count_tokens: false,
            fail_create: false,
            state: Mutex::new(FakeState::default()),
        }
    }

    pub fn failing_count_tokens(mut self) -> Self {
        self.fail_count_tokens = true;
        self
    }

    pub fn failing_create(mut self) -> Self {
        self.fail_create = true;
        self
    }

    pub fn failing_turns(self, n: usize) -> Self {
        self.state().failing_turns = n;
        self
    }

    pub fn state(&self) -> MutexGuard<'_, FakeState> {
        self.state.lock().unwrap()
    }

    /// Total network calls of any kind.
    pub fn calls(&self) -> usize {
        let state = self.state();
        state.sent.len()
            + state.count_calls
            + state.created.len()
            + state.extended.len()
            + state.deleted.len()
    }
}

#[async_trait]
impl AiClient for FakeClient {
    async fn send_message(
        &self,
        messages: &[Message],
        cache: Option<&CachedContent>,
    ) -> Result<AiResponse, AiError> {
        let mut state = self.state();
        state
            .sent
            .push((messages.to_vec(), cache.map(|c| c.name.clone())));
        if state.failing_turns > 0 {
            state.failing_turns -= 1;
            return Err(AiError::NetworkError("connection reset".into()));
        }
        Ok(AiResponse {
            content: format!("reply {}", state.sent.len()),
            usage: TokenUsage {
                input_tokens: 10,
                output_tokens: 5,
                cached_tokens: u64::from(cache.is_some()) * 8,
            },
        })
    }

    async fn count_tokens(&self, _text: &str) -> Result<u64, AiError> {
        self.state().count_calls += 1;
        if self.fail_count_tokens {
            return Err(AiError::Timeout);
        }
        Ok(self.token_count)
    }

    async fn create_cache(
        &self,
        document: &str,
        system_prompt: Option<&str>,
        ttl: Duration,
    ) -> Result<CachedContent, AiError> {
        let mut state = self.state();
        state.created.push((
            document.to_string(),
            system_prompt.map(str::to_string),
            ttl,
        ));
        if self.fail_create {
            return Err(AiError::ApiError("HTTP 400: cache too small".into()));
        }
        Ok(CachedContent {
            name: format!("cachedContents/fake{}", state.created.len()),
            model: "models/fake".into(),
            expire_time: None,
        })
    }

    async fn extend_cache(
        &self,
        cache: &CachedContent,
        ttl: Duration,
    ) -> Result<CachedContent, AiError> {
        self.state().extended.push(ttl);
        Ok(cache.clone())
    }

    async fn delete_cache(&self, cache: &CachedContent) -> Result<(), AiError> {
        self.state().deleted.push(cache.name.clone());
        Ok(())
    }
}
