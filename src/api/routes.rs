//! API Routes
//!
//! Configures the Axum router with all service endpoints.

use axum::{
    routing::{delete, get},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    cards_handler, clear_handler, detail_handler, favorites_handler, health_handler,
    image_handler, listing_handler, stats_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /health` - Health check endpoint
/// - `GET /pokemon` - Catalog listing
/// - `GET /pokemon/cards` - Card data for a page of the listing
/// - `GET /pokemon/:id` - Detail view data
/// - `GET /pokemon/:id/image` - Resolved artwork URL
/// - `GET /users/:email/favorites` - Favorites list
/// - `GET /cache/stats` - Cache diagnostics
/// - `DELETE /cache` - Drop all cached responses
///
/// # Middleware
/// - CORS: Allows any origin, the browser front-end is served elsewhere
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_handler))
        .route("/pokemon", get(listing_handler))
        .route("/pokemon/cards", get(cards_handler))
        .route("/pokemon/:id", get(detail_handler))
        .route("/pokemon/:id/image", get(image_handler))
        .route("/users/:email/favorites", get(favorites_handler))
        .route("/cache/stats", get(stats_handler))
        .route("/cache", delete(clear_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::util::ServiceExt;

    use crate::cache::TtlCache;
    use crate::fetch::CachedFetch;
    use crate::images::ImageResolver;
    use crate::pokedex::{Endpoints, InMemoryDocumentStore, Pokedex};
    use crate::test_support::{MockHttpClient, MockProbe};

    fn create_test_app() -> Router {
        create_router(test_state(Arc::new(MockHttpClient::new())))
    }

    fn test_state(client: Arc<MockHttpClient>) -> AppState {
        let pokedex = Pokedex::new(
            CachedFetch::new(client, TtlCache::default()),
            ImageResolver::new(Arc::new(MockProbe::default())),
            Arc::new(InMemoryDocumentStore::new()),
            Endpoints::default(),
        );
        AppState::new(pokedex)
    }

    async fn status_of(app: Router, method: &str, uri: &str) -> StatusCode {
        app.oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
        .status()
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        assert_eq!(status_of(create_test_app(), "GET", "/health").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_stats_endpoint() {
        assert_eq!(status_of(create_test_app(), "GET", "/cache/stats").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_clear_endpoint() {
        assert_eq!(status_of(create_test_app(), "DELETE", "/cache").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_listing_upstream_failure_is_bad_gateway() {
        let client = Arc::new(MockHttpClient::new());
        client.set_failing(true);

        assert_eq!(
            status_of(create_router(test_state(client)), "GET", "/pokemon").await,
            StatusCode::BAD_GATEWAY
        );
    }

    #[tokio::test]
    async fn test_unknown_id_is_not_found_and_not_cached() {
        // No route for the id, so the upstream answers 404
        let state = test_state(Arc::new(MockHttpClient::new()));
        let app = create_router(state.clone());

        assert_eq!(
            status_of(app.clone(), "GET", "/pokemon/99999").await,
            StatusCode::NOT_FOUND
        );
        assert_eq!(status_of(app, "GET", "/pokemon/99999").await, StatusCode::NOT_FOUND);
        assert!(state.pokedex.fetch().cache().read().await.is_empty());
    }

    #[tokio::test]
    async fn test_non_numeric_id_is_rejected() {
        assert_eq!(
            status_of(create_test_app(), "GET", "/pokemon/pikachu").await,
            StatusCode::BAD_REQUEST
        );
    }

    #[tokio::test]
    async fn test_favorites_endpoint_fails_open() {
        assert_eq!(
            status_of(create_test_app(), "GET", "/users/ash@kanto.jp/favorites").await,
            StatusCode::OK
        );
    }
}
