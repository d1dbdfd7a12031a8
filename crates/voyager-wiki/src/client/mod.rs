//! HTTP client for the MediaWiki action API.

mod parse;


use std::time::Duration;

use tracing::debug;

use crate::types::{PageDocument, SearchResults, MAX_RESULTS};
use crate::LookupError;

pub(crate) const WIKIVOYAGE_API: &str = "https://en.wikivoyage.org/w/api.php";

/// Wiki client configuration.
#[derive(Debug, Clone)]
pub struct WikiConfig {
    pub endpoint: String,
    pub result_limit: usize,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for WikiConfig {
    fn default() -> Self {
        Self {
            endpoint: WIKIVOYAGE_API.to_string(),
            result_limit: MAX_RESULTS,
            timeout: Duration::from_secs(15),
            user_agent: format!("voyager/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl WikiConfig {
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_result_limit(mut self, limit: usize) -> Self {
        self.result_limit = limit.clamp(1, MAX_RESULTS);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// Wiki search and page-extract client.
pub struct WikiClient {
    config: WikiConfig,
    http: reqwest::Client,
}

impl WikiClient {
    pub fn new(config: WikiConfig) -> Result<Self, LookupError> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| LookupError::Setup(e.to_string()))?;
        Ok(Self { config, http })
    }

    /// Search page titles for `term`.
    ///
    /// An empty result set is `Ok`; a response without `query.search` is
    /// `LookupError::Malformed`.
    pub async fn search(&self, term: &str) -> Result<SearchResults, LookupError> {
        let limit = self.config.result_limit.to_string();
        let query = format!("intitle:{term}");
        let params = [
            ("action", "query"),
            ("list", "search"),
            ("format", "json"),
            ("formatversion", "2"),
            ("utf8", "1"),
            ("srlimit", limit.as_str()),
            ("srprop", "snippet"),
            ("srsearch", query.as_str()),
        ];

        debug!(term, "wiki search request");
        let json = self.get_json(&params).await?;
        let results = parse::parse_search(&json, self.config.result_limit)?;
        debug!(count = results.len(), "wiki search returned");
        Ok(results)
    }

    /// Fetch the plain-text extract of one page.
    pub async fn fetch(&self, page_id: u64) -> Result<PageDocument, LookupError> {
        let id = page_id.to_string();
        let params = [
            ("action", "query"),
            ("format", "json"),
            ("formatversion", "2"),
            ("utf8", "1"),
            ("prop", "extracts"),
            ("rawcontinue", "1"),
            ("explaintext", "1"),
            ("pageids", id.as_str()),
        ];

        debug!(page_id, "wiki extract request");
        let json = self.get_json(&params).await?;
        let page = parse::parse_extract(&json, page_id)?;
        debug!(page_id, chars = page.text.len(), "wiki extract returned");
        Ok(page)
    }

    async fn get_json(&self, params: &[(&str, &str)]) -> Result<serde_json::Value, LookupError> {
        let response = self
            .http
            .get(&self.config.endpoint)
            .query(params)
            .send()
            .await
            .map_err(LookupError::from_transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status(status.as_u16()));
        }

        response
            .json()
            .await
            .map_err(|e| LookupError::Malformed(e.to_string()))
    }
}
