//! Per-section validators.

use crate::schema::VoyagerConfig;

use super::helpers::{validate_http_url, validate_non_empty, validate_range, validate_range_f64};

pub(crate) fn validate_wiki(errors: &mut Vec<String>, config: &VoyagerConfig) {
    let wiki = &config.wiki;
    validate_http_url(errors, "wiki.endpoint", &wiki.endpoint);
    validate_range(errors, "wiki.result_limit", wiki.result_limit.into(), 1, 5);
    validate_range(errors, "wiki.timeout_secs", wiki.timeout_secs, 1, 300);
    validate_non_empty(errors, "wiki.user_agent", &wiki.user_agent);
}

pub(crate) fn validate_llm(errors: &mut Vec<String>, config: &VoyagerConfig) {
    let llm = &config.llm;
    validate_http_url(errors, "llm.api_base", &llm.api_base);
    validate_non_empty(errors, "llm.model", &llm.model);
    validate_range(errors, "llm.max_tokens", llm.max_tokens.into(), 1, 65_536);
    validate_range_f64(errors, "llm.temperature", llm.temperature, 0.0, 2.0);
    validate_range(errors, "llm.cache_ttl_secs", llm.cache_ttl_secs, 60, 86_400);
    validate_range(errors, "llm.timeout_secs", llm.timeout_secs, 1, 600);
}

pub(crate) fn validate_credentials(errors: &mut Vec<String>, config: &VoyagerConfig) {
    validate_range(
        errors,
        "credentials.max_attempts",
        config.credentials.max_attempts.into(),
        1,
        10,
    );
}

pub(crate) fn validate_logging(errors: &mut Vec<String>, config: &VoyagerConfig) {
    validate_non_empty(errors, "logging.level", &config.logging.level);
}
