//! Scoped ownership of provider-side cached content.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::{AiClient, AiError, CachedContent};

/// Owns one remote cache for the lifetime of a chat session.
///
/// Call [`release`](Self::release) when the session ends. If the lease is
/// dropped without that (panic, cancelled future), `Drop` schedules the
/// delete on the current tokio runtime. Either way the delete is issued
/// once.
pub struct CacheLease {
    cache: CachedContent,
    client: Arc<dyn AiClient>,
    ttl: Duration,
    refreshed_at: Instant,
    released: bool,
}

impl CacheLease {
    pub(crate) async fn acquire(
        client: Arc<dyn AiClient>,
        document: &str,
        system_prompt: Option<&str>,
        ttl: Duration,
    ) -> Result<Self, AiError> {
        let cache = client.create_cache(document, system_prompt, ttl).await?;
        info!(cache = %cache.name, ttl_secs = ttl.as_secs(), "remote cache created");
        Ok(Self {
            cache,
            client,
            ttl,
            refreshed_at: Instant::now(),
            released: false,
        })
    }

    pub fn cache(&self) -> &CachedContent {
        &self.cache
    }

    /// Extend the cache when more than half of its TTL has passed since it
    /// was created or last extended. Failures are logged; the cache may
    /// still be alive.
    pub(crate) async fn keep_alive(&mut self) {
        if self.refreshed_at.elapsed() < self.ttl / 2 {
            return;
        }
        match self.client.extend_cache(&self.cache, self.ttl).await {
            Ok(updated) => {
                debug!(cache = %updated.name, expire_time = ?updated.expire_time, "remote cache extended");
                self.cache = updated;
                self.refreshed_at = Instant::now();
            }
            Err(e) => warn!(cache = %self.cache.name, "could not extend remote cache: {e}"),
        }
    }

    /// Delete the remote cache.
    pub async fn release(mut self) -> Result<(), AiError> {
        self.released = true;
        let result = self.client.delete_cache(&self.cache).await;
        match &result {
            Ok(()) => info!(cache = %self.cache.name, "remote cache released"),
            Err(e) => warn!(cache = %self.cache.name, "remote cache release failed: {e}"),
        }
        result
    }
}

impl Drop for CacheLease {
    fn drop(&mut self) {
        if self.released {
            return;
        }
        self.released = true;

        let name = self.cache.name.clone();
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                warn!(cache = %name, "cache lease dropped without release, deleting in background");
                let client = Arc::clone(&self.client);
                let cache = self.cache.clone();
                handle.spawn(async move {
                    if let Err(e) = client.delete_cache(&cache).await {
                        warn!(cache = %cache.name, "background cache release failed: {e}");
                    }
                });
            }
            Err(_) => {
                warn!(cache = %name, "cache lease dropped outside a runtime; it will expire with its TTL");
            }
        }
    }
}
