//! Image Resolution Cache
//!
//! Resolves an (id, variant) pair to an asset URL by probing candidate
//! locations in order. The result, placeholder included, is kept for the
//! life of the process: assets are static, so there is no TTL.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::error::{PokedexError, Result};
use crate::images::{AssetProbe, ImageKey, PLACEHOLDER_PATH};

// == Image Resolver ==
#[derive(Clone)]
pub struct ImageResolver {
    probe: Arc<dyn AssetProbe>,
    resolved: Arc<RwLock<HashMap<String, String>>>,
}

impl ImageResolver {
    pub fn new(probe: Arc<dyn AssetProbe>) -> Self {
        Self {
            probe,
            resolved: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    // == Resolve ==
    /// Returns the image URL for `id`, probing only on the first request
    /// per key.
    ///
    /// Falls back to the placeholder when no candidate exists. Errors only
    /// when the placeholder itself cannot be loaded; that outcome is not
    /// cached.
    pub async fn resolve(&self, id: u32, shiny: bool) -> Result<String> {
        let key = ImageKey::new(id, shiny);
        let slot = key.to_string();

        if let Some(url) = self.resolved.read().await.get(&slot) {
            return Ok(url.clone());
        }

        let url = self.probe_candidates(&key).await?;
        self.resolved.write().await.insert(slot, url.clone());
        Ok(url)
    }

    async fn probe_candidates(&self, key: &ImageKey) -> Result<String> {
        for path in key.candidates() {
            match self.probe.load(&path).await {
                Ok(url) => return Ok(url),
                Err(e) => debug!(%key, error = %e, "image candidate unavailable"),
            }
        }

        self.probe.load(PLACEHOLDER_PATH).await.map_err(|e| {
            warn!(%key, error = %e, "failed to load image, placeholder missing");
            PokedexError::AssetUnavailable(key.to_string())
        })
    }

    /// Number of resolved keys.
    pub async fn len(&self) -> usize {
        self.resolved.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.resolved.read().await.is_empty()
    }
}
