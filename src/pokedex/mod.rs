//! Data-Fetch Orchestration
//!
//! Thin functions over the cached fetch wrapper, the image resolver and the
//! favorites document store that shape remote data for presentation.
//!
//! Error policy differs per path: catalog and detail fetches propagate
//! failures, the favorites list degrades to an empty result.

mod detail;
mod endpoints;
mod favorites;
mod listing;
mod payload;
pub mod types;

use std::sync::Arc;
use std::time::Duration;

use crate::cache::LISTING_TTL;
use crate::fetch::CachedFetch;
use crate::images::ImageResolver;

pub use endpoints::Endpoints;
pub use favorites::{DocumentStore, FavoriteDocument, InMemoryDocumentStore, UserInfo};

// == Pokedex Service ==
/// Entry point for every data-fetch operation.
#[derive(Clone)]
pub struct Pokedex {
    fetch: CachedFetch,
    images: ImageResolver,
    favorites: Arc<dyn DocumentStore>,
    endpoints: Endpoints,
    listing_ttl: Duration,
}

impl Pokedex {
    pub fn new(
        fetch: CachedFetch,
        images: ImageResolver,
        favorites: Arc<dyn DocumentStore>,
        endpoints: Endpoints,
    ) -> Self {
        Self {
            fetch,
            images,
            favorites,
            endpoints,
            listing_ttl: LISTING_TTL,
        }
    }

    /// Overrides the TTL of the catalog listing.
    pub fn with_listing_ttl(mut self, ttl: Duration) -> Self {
        self.listing_ttl = ttl;
        self
    }

    pub fn fetch(&self) -> &CachedFetch {
        &self.fetch
    }

    pub fn images(&self) -> &ImageResolver {
        &self.images
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }
}
