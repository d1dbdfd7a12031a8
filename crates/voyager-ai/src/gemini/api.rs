//! AiClient trait implementation for GeminiClient.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::{AiClient, AiError, AiResponse, CachedContent, Message};

use super::client::{ttl_string, GeminiClient};

impl GeminiClient {
    /// Send a prepared request and decode the JSON answer, mapping HTTP
    /// failures to `AiError`.
    async fn execute(&self, request: reqwest::RequestBuilder) -> Result<serde_json::Value, AiError> {
        let response = request
            .header("content-type", "application/json")
            .header("x-goog-api-key", &self.config.api_key)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AiError::Timeout
                } else {
                    AiError::NetworkError(e.without_url().to_string())
                }
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(AiError::RateLimited);
        }
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            debug!(%status, body = %text, "Gemini API error response");
            return Err(AiError::ApiError(error_summary(status, &text)));
        }

        let text = response
            .text()
            .await
            .map_err(|e| AiError::NetworkError(e.without_url().to_string()))?;
        if text.trim().is_empty() {
            return Ok(serde_json::Value::Object(Default::default()));
        }
        serde_json::from_str(&text).map_err(|e| AiError::ParseError(e.to_string()))
    }
}

/// Short, user-presentable description of a failed call.
fn error_summary(status: reqwest::StatusCode, body: &str) -> String {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| json["error"]["message"].as_str().map(str::to_string));
    match message {
        Some(message) => format!("HTTP {}: {message}", status.as_u16()),
        None => format!("HTTP {}", status.as_u16()),
    }
}

#[async_trait]
impl AiClient for GeminiClient {
    async fn send_message(
        &self,
        messages: &[Message],
        cache: Option<&CachedContent>,
    ) -> Result<AiResponse, AiError> {
        let body = self.build_request_body(messages, cache);
        debug!(
            model = %self.config.model,
            cached = cache.is_some(),
            turns = messages.len(),
            "Gemini API request"
        );

        let json = self
            .execute(self.http.post(self.model_url("generateContent")).json(&body))
            .await?;
        self.parse_response(json)
    }

    async fn count_tokens(&self, text: &str) -> Result<u64, AiError> {
        let body = serde_json::json!({
            "contents": [{ "role": "user", "parts": [{ "text": text }] }]
        });
        debug!(model = %self.config.model, chars = text.len(), "Gemini countTokens request");

        let json = self
            .execute(self.http.post(self.model_url("countTokens")).json(&body))
            .await?;
        json["totalTokens"]
            .as_u64()
            .ok_or_else(|| AiError::ParseError("no totalTokens in response".to_string()))
    }

    async fn create_cache(
        &self,
        document: &str,
        system_prompt: Option<&str>,
        ttl: Duration,
    ) -> Result<CachedContent, AiError> {
        let body = self.build_cache_body(document, system_prompt, ttl);
        debug!(model = %self.config.model, ttl = %ttl_string(ttl), "Gemini cache create");

        let json = self
            .execute(self.http.post(self.caches_url()).json(&body))
            .await?;
        self.parse_cache(&json)
    }

    async fn extend_cache(
        &self,
        cache: &CachedContent,
        ttl: Duration,
    ) -> Result<CachedContent, AiError> {
        let body = serde_json::json!({ "ttl": ttl_string(ttl) });
        debug!(cache = %cache.name, ttl = %ttl_string(ttl), "Gemini cache extend");

        let request = self
            .http
            .patch(self.cache_url(cache))
            .query(&[("updateMask", "ttl")])
            .json(&body);
        let json = self.execute(request).await?;
        self.parse_cache(&json)
    }

    async fn delete_cache(&self, cache: &CachedContent) -> Result<(), AiError> {
        debug!(cache = %cache.name, "Gemini cache delete");
        self.execute(self.http.delete(self.cache_url(cache))).await?;
        Ok(())
    }
}
