//! Turning the loaded configuration into client and policy values.

use std::time::Duration;

use voyager_ai::{ConversationPolicy, GeminiConfig};
use voyager_config::schema::{LlmConfig, WikiConfig as WikiSection};
use voyager_config::Credential;
use voyager_wiki::WikiConfig;

pub fn wiki_config(section: &WikiSection) -> WikiConfig {
    WikiConfig::default()
        .with_endpoint(section.endpoint.clone())
        .with_result_limit(section.result_limit as usize)
        .with_timeout(Duration::from_secs(section.timeout_secs))
        .with_user_agent(section.user_agent.clone())
}

pub fn gemini_config(llm: &LlmConfig, credential: &Credential) -> GeminiConfig {
    GeminiConfig::new(credential.api_key())
        .with_api_base(llm.api_base.clone())
        .with_model(llm.model.clone())
        .with_max_tokens(llm.max_tokens)
        .with_temperature(llm.temperature)
        .with_timeout(Duration::from_secs(llm.timeout_secs))
}

pub fn conversation_policy(llm: &LlmConfig) -> ConversationPolicy {
    ConversationPolicy::default()
        .with_system_prompt(llm.system_prompt.clone())
        .with_cache_threshold(llm.cache_threshold_tokens)
        .with_cache_ttl(Duration::from_secs(llm.cache_ttl_secs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use voyager_config::VoyagerConfig;

    #[test]
    fn defaults_carry_through() {
        let config = VoyagerConfig::default();

        let wiki = wiki_config(&config.wiki);
        assert_eq!(wiki.endpoint, config.wiki.endpoint);
        assert_eq!(wiki.result_limit, 5);
        assert_eq!(wiki.timeout, Duration::from_secs(15));

        let policy = conversation_policy(&config.llm);
        assert_eq!(policy.cache_threshold_tokens, 40_000);
        assert_eq!(policy.cache_ttl, Duration::from_secs(300));
        assert!(policy.system_prompt.contains("travel guide"));

        let gemini = gemini_config(&config.llm, &Credential::new("k"));
        assert_eq!(gemini.api_key, "k");
        assert_eq!(gemini.model, "gemini-2.0-flash-001");
        assert_eq!(gemini.timeout, Duration::from_secs(120));
    }

    #[test]
    fn overrides_are_applied() {
        let mut config = VoyagerConfig::default();
        config.wiki.result_limit = 3;
        config.llm.cache_threshold_tokens = 10;
        config.llm.model = "gemini-1.5-pro-002".into();

        assert_eq!(wiki_config(&config.wiki).result_limit, 3);
        assert_eq!(conversation_policy(&config.llm).cache_threshold_tokens, 10);
        assert_eq!(
            gemini_config(&config.llm, &Credential::new("k")).model,
            "gemini-1.5-pro-002"
        );
    }
}
