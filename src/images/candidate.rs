//! Image keys and the ordered list of asset locations probed for each one.

use std::fmt;

/// Extensions tried for every image, in priority order.
pub const EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "svg"];

/// Asset used when no candidate exists for a key.
pub const PLACEHOLDER_PATH: &str = "pokeball-icon.png";

// == Image Key ==
/// Identifies one picture: an entity id and whether the alternate
/// ("shiny") variant is wanted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageKey {
    pub id: u32,
    pub shiny: bool,
}

impl ImageKey {
    pub fn new(id: u32, shiny: bool) -> Self {
        Self { id, shiny }
    }

    /// Asset folder holding this variant.
    pub fn folder(&self) -> &'static str {
        if self.shiny {
            "shiny"
        } else {
            "default"
        }
    }

    /// Relative asset paths to probe, most preferred first.
    pub fn candidates(&self) -> Vec<String> {
        EXTENSIONS
            .iter()
            .map(|ext| format!("pokemons/{}/{}.{}", self.folder(), self.id, ext))
            .collect()
    }
}

/// Serialized form used as the cache key, e.g. `25-shiny`.
impl fmt::Display for ImageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.id, self.folder())
    }
}
