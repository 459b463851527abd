//! Shapes of the remote API payloads, limited to the fields we read.

use serde::Deserialize;

use crate::models::NamedResource;

#[derive(Debug, Deserialize)]
pub struct ListingPayload {
    pub results: Vec<NamedResource>,
}

#[derive(Debug, Deserialize)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub kind: Name,
}

#[derive(Debug, Deserialize)]
pub struct Name {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct PokemonPayload {
    pub id: u32,
    pub name: String,
    pub types: Vec<TypeSlot>,
    #[serde(default)]
    pub abilities: Vec<AbilitySlot>,
    #[serde(default)]
    pub moves: Vec<MoveSlot>,
    #[serde(default)]
    pub stats: Vec<StatSlot>,
    #[serde(default)]
    pub location_area_encounters: Option<String>,
}

impl PokemonPayload {
    pub fn type_names(&self) -> Vec<String> {
        self.types.iter().map(|slot| slot.kind.name.clone()).collect()
    }
}

#[derive(Debug, Deserialize)]
pub struct AbilitySlot {
    pub ability: Name,
}

#[derive(Debug, Deserialize)]
pub struct MoveSlot {
    #[serde(rename = "move")]
    pub kind: Name,
}

#[derive(Debug, Deserialize)]
pub struct StatSlot {
    pub base_stat: u32,
    pub stat: Name,
}

#[derive(Debug, Deserialize)]
pub struct Encounter {
    pub location_area: Name,
}

#[derive(Debug, Deserialize)]
pub struct SpeciesPayload {
    pub evolution_chain: UrlRef,
    #[serde(default)]
    pub flavor_text_entries: Vec<FlavorText>,
}

#[derive(Debug, Deserialize)]
pub struct UrlRef {
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub struct FlavorText {
    pub flavor_text: String,
    pub language: Name,
}

#[derive(Debug, Deserialize)]
pub struct EvolutionChainPayload {
    pub chain: ChainLink,
}

#[derive(Debug, Deserialize)]
pub struct ChainLink {
    pub species: NamedResource,
    #[serde(default)]
    pub evolves_to: Vec<ChainLink>,
}
