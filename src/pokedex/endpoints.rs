//! URLs of the remote data API.

use crate::config::DEFAULT_API_BASE_URL;

/// Builds request URLs from an API base. The URL doubles as cache key.
#[derive(Debug, Clone)]
pub struct Endpoints {
    base: String,
    listing_limit: u32,
}

impl Endpoints {
    pub fn new(base: impl Into<String>, listing_limit: u32) -> Self {
        Self {
            base: base.into().trim_end_matches('/').to_string(),
            listing_limit,
        }
    }

    /// Catalog listing, e.g. `/pokemon?limit=1000`.
    pub fn listing(&self) -> String {
        format!("{}/pokemon?limit={}", self.base, self.listing_limit)
    }

    pub fn pokemon(&self, id: u32) -> String {
        format!("{}/pokemon/{}", self.base, id)
    }

    pub fn species(&self, id: u32) -> String {
        format!("{}/pokemon-species/{}", self.base, id)
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL, 1000)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoints() {
        let endpoints = Endpoints::default();
        assert_eq!(endpoints.listing(), "https://pokeapi.co/api/v2/pokemon?limit=1000");
        assert_eq!(endpoints.pokemon(25), "https://pokeapi.co/api/v2/pokemon/25");
        assert_eq!(endpoints.species(25), "https://pokeapi.co/api/v2/pokemon-species/25");
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let endpoints = Endpoints::new("http://localhost:8080/api/", 10);
        assert_eq!(endpoints.listing(), "http://localhost:8080/api/pokemon?limit=10");
    }
}
