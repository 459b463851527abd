//! Data models
//!
//! Presentation types produced by the data-fetch layer and the DTOs used
//! by the HTTP surface.

pub mod pokemon;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use pokemon::{
    Abilities, EvolutionStep, FavoritePokemon, FavoriteRecord, NamedResource, PokemonCard,
    PokemonDetail, PokemonType, StatValue, TypeMatchups,
};
pub use requests::{CardsQuery, ImageQuery};
pub use responses::{ClearResponse, HealthResponse, ImageResponse, StatsResponse};
