//! Cached Fetch Wrapper
//!
//! GET requests are answered from the shared TTL store when possible and
//! stored there after a successful network round trip. Write verbs pass
//! straight through to the client.

use reqwest::Method;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::debug;

use crate::cache::TtlCache;
use crate::error::Result;
use crate::fetch::{HttpClient, HttpRequest, HttpResponse};

/// Response store shared between the wrapper, the sweep task and diagnostics.
pub type ResponseCache = Arc<RwLock<TtlCache<Arc<HttpResponse>>>>;

// == Cached Fetch ==
/// HTTP client wrapper that caches successful GET responses by URL.
///
/// Concurrent misses for the same URL are not coalesced: each one issues
/// its own request and the last to finish overwrites the entry.
#[derive(Clone)]
pub struct CachedFetch {
    client: Arc<dyn HttpClient>,
    cache: ResponseCache,
}

impl CachedFetch {
    pub fn new(client: Arc<dyn HttpClient>, cache: TtlCache<Arc<HttpResponse>>) -> Self {
        Self {
            client,
            cache: Arc::new(RwLock::new(cache)),
        }
    }

    /// Shared handle to the underlying response store.
    pub fn cache(&self) -> ResponseCache {
        self.cache.clone()
    }

    // == Get ==
    /// Returns the cached response for `url`, or fetches and caches it.
    ///
    /// `ttl` falls back to the store's default when absent or zero. Failures
    /// propagate unchanged and leave the store untouched.
    pub async fn get(&self, url: &str, ttl: Option<Duration>) -> Result<Arc<HttpResponse>> {
        let ttl = ttl.filter(|ttl| !ttl.is_zero());

        // Write lock: a read may evict an expired entry
        if let Some(cached) = self.cache.write().await.get(url) {
            debug!(url, "response cache hit");
            return Ok(cached);
        }

        debug!(url, "response cache miss");
        let response = Arc::new(self.client.send(HttpRequest::get(url)).await?);

        self.cache
            .write()
            .await
            .set(url, response.clone(), ttl);

        Ok(response)
    }

    // == Uncached Verbs ==
    pub async fn post(&self, url: &str, body: Option<Value>) -> Result<HttpResponse> {
        self.passthrough(Method::POST, url, body).await
    }

    pub async fn put(&self, url: &str, body: Option<Value>) -> Result<HttpResponse> {
        self.passthrough(Method::PUT, url, body).await
    }

    pub async fn patch(&self, url: &str, body: Option<Value>) -> Result<HttpResponse> {
        self.passthrough(Method::PATCH, url, body).await
    }

    pub async fn delete(&self, url: &str) -> Result<HttpResponse> {
        self.passthrough(Method::DELETE, url, None).await
    }

    async fn passthrough(&self, method: Method, url: &str, body: Option<Value>) -> Result<HttpResponse> {
        self.client.send(HttpRequest::new(method, url, body)).await
    }
}
