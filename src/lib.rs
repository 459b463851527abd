//! Pokédex Cache - cached access to remote Pokédex data
//!
//! Provides a TTL response cache in front of the data API, a lazy image
//! resolver with a permanent cache, and the data-fetch orchestration built
//! on both.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod fetch;
pub mod images;
pub mod models;
pub mod pokedex;
pub mod tasks;

#[cfg(test)]
mod test_support;

pub use api::AppState;
pub use config::Config;
pub use error::{PokedexError, Result};
pub use pokedex::Pokedex;
pub use tasks::spawn_cleanup_task;
