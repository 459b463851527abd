//! Error types for the Pokédex access layer
//!
//! Provides unified error handling using thiserror.
//!
//! A cache miss is never an error: stores report misses as `None`. Only
//! genuine I/O failures travel through this type.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Pokedex Error Enum ==
/// Unified error type for the access layer and its HTTP surface.
#[derive(Error, Debug)]
pub enum PokedexError {
    /// Transport failure or non-success status from the remote API
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// Response body did not have the expected shape
    #[error("Unexpected response payload: {0}")]
    Decode(String),

    /// A single asset candidate is not present
    #[error("Asset not found: {0}")]
    AssetNotFound(String),

    /// Every image candidate, placeholder included, failed to load
    #[error("No image available for {0}")]
    AssetUnavailable(String),

    /// External document store query failed
    #[error("Document store error: {0}")]
    DocumentStore(String),

    /// Requested resource does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<reqwest::Error> for PokedexError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            PokedexError::Decode(err.to_string())
        } else if err.status() == Some(reqwest::StatusCode::NOT_FOUND) {
            let resource = err.url().map(|url| url.to_string());
            PokedexError::NotFound(resource.unwrap_or_else(|| err.to_string()))
        } else {
            PokedexError::Http(err.to_string())
        }
    }
}

impl From<serde_json::Error> for PokedexError {
    fn from(err: serde_json::Error) -> Self {
        PokedexError::Decode(err.to_string())
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for PokedexError {
    fn into_response(self) -> Response {
        let status = match &self {
            PokedexError::Http(_) | PokedexError::Decode(_) => StatusCode::BAD_GATEWAY,
            PokedexError::NotFound(_) | PokedexError::AssetNotFound(_) => StatusCode::NOT_FOUND,
            PokedexError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            PokedexError::AssetUnavailable(_)
            | PokedexError::DocumentStore(_)
            | PokedexError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the access layer.
pub type Result<T> = std::result::Result<T, PokedexError>;
