//! API Handlers
//!
//! HTTP request handlers for each service endpoint.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use tracing::info;

use crate::cache::TtlCache;
use crate::config::Config;
use crate::error::{PokedexError, Result};
use crate::fetch::{CachedFetch, ReqwestClient};
use crate::images::{FsAssetProbe, ImageResolver};
use crate::models::{
    CardsQuery, ClearResponse, FavoritePokemon, HealthResponse, ImageQuery, ImageResponse,
    NamedResource, PokemonCard, PokemonDetail, StatsResponse,
};
use crate::pokedex::{DocumentStore, Endpoints, InMemoryDocumentStore, Pokedex, UserInfo};

/// Application state shared across all handlers.
///
/// Every component inside `Pokedex` is already behind an `Arc`, so cloning
/// the state per request is cheap.
#[derive(Clone)]
pub struct AppState {
    pub pokedex: Pokedex,
}

impl AppState {
    /// Creates a new AppState around the given service.
    pub fn new(pokedex: Pokedex) -> Self {
        Self { pokedex }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Wires the reqwest client, the filesystem asset probe and the
    /// favorites store (seeded from `favorites_path` when set).
    pub async fn from_config(config: &Config) -> Result<Self> {
        let client = Arc::new(ReqwestClient::new()?);
        let fetch = CachedFetch::new(client, TtlCache::new(config.default_ttl()));

        let probe = FsAssetProbe::new(&config.asset_dir, config.asset_url_prefix.clone());
        let images = ImageResolver::new(Arc::new(probe));

        let favorites: Arc<dyn DocumentStore> = match &config.favorites_path {
            Some(path) => {
                let store = InMemoryDocumentStore::from_json_file(path).await?;
                info!("Loaded {} favorite documents", store.len().await);
                Arc::new(store)
            }
            None => Arc::new(InMemoryDocumentStore::new()),
        };

        let endpoints = Endpoints::new(config.api_base_url.clone(), config.listing_limit);
        let pokedex = Pokedex::new(fetch, images, favorites, endpoints)
            .with_listing_ttl(config.listing_ttl());

        Ok(Self::new(pokedex))
    }
}

/// Handler for GET /pokemon
///
/// Returns the catalog listing.
pub async fn listing_handler(State(state): State<AppState>) -> Result<Json<Vec<NamedResource>>> {
    let listing = state.pokedex.initial_listing().await?;
    Ok(Json(listing))
}

/// Handler for GET /pokemon/cards
///
/// Returns card data for a slice of the listing.
pub async fn cards_handler(
    State(state): State<AppState>,
    Query(query): Query<CardsQuery>,
) -> Result<Json<Vec<PokemonCard>>> {
    if let Some(error_msg) = query.validate() {
        return Err(PokedexError::InvalidRequest(error_msg));
    }

    let listing = state.pokedex.initial_listing().await?;
    let page: Vec<NamedResource> = listing
        .into_iter()
        .skip(query.offset)
        .take(query.limit)
        .collect();

    Ok(Json(state.pokedex.pokemons_data(&page).await))
}

/// Handler for GET /pokemon/:id
pub async fn detail_handler(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<PokemonDetail>> {
    let detail = state.pokedex.pokemon_detail(id).await?;
    Ok(Json(detail))
}

/// Handler for GET /pokemon/:id/image
pub async fn image_handler(
    State(state): State<AppState>,
    Path(id): Path<u32>,
    Query(query): Query<ImageQuery>,
) -> Result<Json<ImageResponse>> {
    let url = state.pokedex.images().resolve(id, query.shiny).await?;
    Ok(Json(ImageResponse {
        id,
        shiny: query.shiny,
        url,
    }))
}

/// Handler for GET /users/:email/favorites
///
/// Never fails; an unreachable store yields an empty list.
pub async fn favorites_handler(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Json<Vec<FavoritePokemon>> {
    let user = UserInfo::with_email(email);
    Json(state.pokedex.user_pokemons(Some(&user)).await)
}

/// Handler for GET /cache/stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let stats = state.pokedex.fetch().cache().read().await.stats();
    let images_resolved = state.pokedex.images().len().await;

    Json(StatsResponse::new(stats, images_resolved))
}

/// Handler for DELETE /cache
///
/// Drops every cached response. Resolved images are kept.
pub async fn clear_handler(State(state): State<AppState>) -> Json<ClearResponse> {
    let store = state.pokedex.fetch().cache();
    let mut cache = store.write().await;
    let cleared = cache.len();
    cache.clear();

    Json(ClearResponse::new(cleared))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
