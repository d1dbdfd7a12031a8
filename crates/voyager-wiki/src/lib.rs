//! Wikivoyage content lookup.
//!
//! Two calls against a MediaWiki `api.php` endpoint:
//! - a title search returning up to five candidates with snippets
//! - a plain-text extract of one page by numeric ID

pub mod client;
pub mod snippet;
pub mod types;

pub use client::{WikiClient, WikiConfig};
pub use snippet::snippet_to_markdown;
pub use types::{PageDocument, SearchEntry, SearchHit, SearchResults, MAX_RESULTS};

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("could not reach the wiki: {0}")]
    Network(String),
    #[error("the wiki did not answer in time")]
    Timeout,
    #[error("the wiki answered with HTTP {0}")]
    Status(u16),
    #[error("the wiki reported an error: {0}")]
    Api(String),
    #[error("unexpected response from the wiki: {0}")]
    Malformed(String),
    #[error("page {0} does not exist")]
    PageMissing(u64),
    #[error("HTTP client setup failed: {0}")]
    Setup(String),
}

impl LookupError {
    /// Map a transport failure without echoing the request URL and query.
    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            LookupError::Timeout
        } else {
            LookupError::Network(err.without_url().to_string())
        }
    }
}
