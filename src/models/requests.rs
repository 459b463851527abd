//! Query parameters accepted by the HTTP surface

use serde::Deserialize;

/// Maximum number of cards fetched in one request
pub const MAX_CARDS_PER_PAGE: usize = 100;

/// Query for `GET /pokemon/cards`
#[derive(Debug, Clone, Deserialize)]
pub struct CardsQuery {
    #[serde(default)]
    pub offset: usize,
    #[serde(default = "default_page_size")]
    pub limit: usize,
}

fn default_page_size() -> usize {
    20
}

impl CardsQuery {
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.limit == 0 {
            return Some("limit must be at least 1".to_string());
        }
        if self.limit > MAX_CARDS_PER_PAGE {
            return Some(format!("limit exceeds maximum of {}", MAX_CARDS_PER_PAGE));
        }
        None
    }
}

/// Query for `GET /pokemon/:id/image`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImageQuery {
    #[serde(default)]
    pub shiny: bool,
}
