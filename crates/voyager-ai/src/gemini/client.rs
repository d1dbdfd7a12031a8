//! Gemini API client struct, request building, and response parsing.

use std::time::Duration;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::{AiError, AiResponse, CachedContent, Message, Role, TokenUsage};

use super::config::GeminiConfig;

/// Gemini API client.
pub struct GeminiClient {
    pub(crate) config: GeminiConfig,
    pub(crate) http: reqwest::Client,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            http: reqwest::Client::builder()
                .connect_timeout(Duration::from_secs(10))
                .timeout(config.timeout)
                .build()
                .expect("failed to build HTTP client"),
            config,
        }
    }

    pub(crate) fn model_url(&self, method: &str) -> String {
        format!(
            "{}/models/{}:{}",
            self.config.api_base, self.config.model, method
        )
    }

    pub(crate) fn caches_url(&self) -> String {
        format!("{}/cachedContents", self.config.api_base)
    }

    pub(crate) fn cache_url(&self, cache: &CachedContent) -> String {
        format!("{}/{}", self.config.api_base, cache.name)
    }

    /// Build the JSON request body for `generateContent`.
    ///
    /// With cached content the system instruction already lives in the
    /// cache and must not be sent again.
    pub(crate) fn build_request_body(
        &self,
        messages: &[Message],
        cache: Option<&CachedContent>,
    ) -> serde_json::Value {
        let mut contents = Vec::new();

        for msg in messages {
            let role = match msg.role {
                Role::User => "user",
                Role::Assistant => "model",
                Role::System => continue, // handled via systemInstruction
            };
            contents.push(serde_json::json!({
                "role": role,
                "parts": message_parts(msg),
            }));
        }

        let mut body = serde_json::json!({
            "contents": contents,
            "generationConfig": {
                "maxOutputTokens": self.config.max_tokens,
                "temperature": self.config.temperature,
            }
        });

        match cache {
            Some(cache) => {
                body["cachedContent"] = serde_json::json!(cache.name);
            }
            None => {
                if let Some(system) = messages.iter().find(|m| m.role == Role::System) {
                    body["systemInstruction"] = system_instruction(&system.content);
                }
            }
        }

        body
    }

    pub(crate) fn build_cache_body(
        &self,
        document: &str,
        system_prompt: Option<&str>,
        ttl: Duration,
    ) -> serde_json::Value {
        let mut body = serde_json::json!({
            "model": format!("models/{}", self.config.model),
            "contents": [{
                "role": "user",
                "parts": [{ "text": document }]
            }],
            "ttl": ttl_string(ttl),
        });
        if let Some(prompt) = system_prompt {
            body["systemInstruction"] = system_instruction(prompt);
        }
        body
    }

    /// Parse a `generateContent` response.
    pub(crate) fn parse_response(&self, json: serde_json::Value) -> Result<AiResponse, AiError> {
        let candidates = json["candidates"]
            .as_array()
            .ok_or_else(|| AiError::ParseError("no candidates in response".to_string()))?;

        let first = candidates
            .first()
            .ok_or_else(|| AiError::ParseError("empty candidates".to_string()))?;

        let parts = first["content"]["parts"]
            .as_array()
            .cloned()
            .unwrap_or_default();

        let mut content = String::new();
        for part in &parts {
            if let Some(text) = part["text"].as_str() {
                content.push_str(text);
            }
        }

        if content.is_empty() {
            if let Some(reason) = first["finishReason"].as_str() {
                if reason != "STOP" {
                    return Err(AiError::ApiError(format!(
                        "response ended without text ({reason})"
                    )));
                }
            }
        }

        let meta = &json["usageMetadata"];
        let usage = TokenUsage {
            input_tokens: meta["promptTokenCount"].as_u64().unwrap_or(0),
            output_tokens: meta["candidatesTokenCount"].as_u64().unwrap_or(0),
            cached_tokens: meta["cachedContentTokenCount"].as_u64().unwrap_or(0),
        };

        debug!(
            input = usage.input_tokens,
            output = usage.output_tokens,
            cached = usage.cached_tokens,
            "Gemini usage"
        );

        Ok(AiResponse { content, usage })
    }

    /// Parse a `cachedContents` resource.
    pub(crate) fn parse_cache(&self, json: &serde_json::Value) -> Result<CachedContent, AiError> {
        let name = json["name"]
            .as_str()
            .ok_or_else(|| AiError::ParseError("cached content has no name".to_string()))?;

        let expire_time = json["expireTime"]
            .as_str()
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map(|t| t.with_timezone(&Utc));

        Ok(CachedContent {
            name: name.to_string(),
            model: json["model"]
                .as_str()
                .map(str::to_string)
                .unwrap_or_else(|| format!("models/{}", self.config.model)),
            expire_time,
        })
    }
}

fn message_parts(msg: &Message) -> Vec<serde_json::Value> {
    std::iter::once(msg.content.as_str())
        .chain(msg.attachments.iter().map(|a| a.as_ref()))
        .map(|text| serde_json::json!({ "text": text }))
        .collect()
}

fn system_instruction(text: &str) -> serde_json::Value {
    serde_json::json!({ "parts": [{ "text": text }] })
}

/// Protobuf `Duration` JSON form, e.g. `"300s"`.
pub(crate) fn ttl_string(ttl: Duration) -> String {
    format!("{}s", ttl.as_secs().max(1))
}
