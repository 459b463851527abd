//! Presentation models produced by the data-fetch layer.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// `{name, url}` pair as returned by listing endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

/// Matchup lists of one elemental type, plus the path of its icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TypeMatchups {
    pub image: &'static str,
    /// Types this one hits super effectively
    pub strength: &'static [&'static str],
    /// Types this one hits for reduced or no damage
    pub weakness: &'static [&'static str],
    /// Attacking types this one takes reduced or no damage from
    pub resistance: &'static [&'static str],
    /// Attacking types this one takes super effective damage from
    pub vulnerable: &'static [&'static str],
}

/// A type name with its chart entry. Names missing from the chart serialize
/// as `{"name": ..}` alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PokemonType {
    pub name: String,
    #[serde(flatten)]
    pub matchups: Option<TypeMatchups>,
}

/// Entry of the catalog grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PokemonCard {
    pub name: String,
    pub id: u32,
    /// Left empty; clients resolve artwork through the image endpoint
    pub image: String,
    pub types: Vec<PokemonType>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatValue {
    pub name: String,
    pub value: u32,
}

/// One stage of an evolution chain; `level` starts at 1.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvolutionStep {
    pub pokemon: NamedResource,
    pub level: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Abilities {
    pub abilities: Vec<String>,
    pub moves: Vec<String>,
}

/// Everything the detail page shows for one entity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PokemonDetail {
    pub id: u32,
    pub name: String,
    pub types: Vec<String>,
    pub image: String,
    pub stats: Vec<StatValue>,
    /// Location names, upper-cased with dashes turned into spaces
    pub encounters: Vec<String>,
    /// Stage of this entity inside its own chain
    pub evolution_level: Option<u32>,
    pub evolution: Vec<EvolutionStep>,
    pub pokemon_abilities: Abilities,
    pub description: Option<String>,
}

/// Favorite record as kept in the document store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoriteRecord {
    pub id: u32,
    pub name: String,
    pub types: Vec<String>,
    /// Opaque metadata carried through untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A favorite enriched for display: the stored record with its type names
/// replaced by chart entries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FavoritePokemon {
    pub id: u32,
    pub name: String,
    pub types: Vec<PokemonType>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
    /// Document id inside the store
    pub firebase_id: String,
    pub image: String,
}
