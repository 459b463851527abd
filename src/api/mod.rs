//! API Module
//!
//! HTTP handlers and routing for the Pokédex service.
//!
//! # Endpoints
//! - `GET /pokemon` - Catalog listing
//! - `GET /pokemon/cards` - Card data
//! - `GET /pokemon/:id` - Detail data
//! - `GET /pokemon/:id/image` - Artwork URL
//! - `GET /users/:email/favorites` - Favorites
//! - `GET /cache/stats`, `DELETE /cache` - Cache diagnostics and reset
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
