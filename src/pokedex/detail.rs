//! Detail page data: entity, encounters, species and evolution chain.

use crate::error::Result;
use crate::models::{Abilities, EvolutionStep, NamedResource, PokemonDetail, StatValue};
use crate::pokedex::payload::{
    ChainLink, Encounter, EvolutionChainPayload, FlavorText, PokemonPayload, SpeciesPayload,
};
use crate::pokedex::Pokedex;

impl Pokedex {
    // == Detail ==
    /// Assembles everything the detail view shows for `id`.
    ///
    /// Issues up to four cached GETs in sequence; any failure propagates.
    pub async fn pokemon_detail(&self, id: u32) -> Result<PokemonDetail> {
        let data: PokemonPayload = self.fetch.get(&self.endpoints.pokemon(id), None).await?.json()?;

        let encounters = match &data.location_area_encounters {
            Some(url) => {
                let areas: Vec<Encounter> = self.fetch.get(url, None).await?.json()?;
                areas
                    .iter()
                    .map(|e| location_label(&e.location_area.name))
                    .collect()
            }
            None => Vec::new(),
        };

        let species: SpeciesPayload = self
            .fetch
            .get(&self.endpoints.species(data.id), None)
            .await?
            .json()?;
        let chain: EvolutionChainPayload = self
            .fetch
            .get(&species.evolution_chain.url, None)
            .await?
            .json()?;

        let evolution = flatten_chain(&chain.chain);
        let evolution_level = evolution
            .iter()
            .find(|step| step.pokemon.name == data.name)
            .map(|step| step.level);

        Ok(PokemonDetail {
            id: data.id,
            types: data.type_names(),
            image: String::new(),
            stats: data
                .stats
                .iter()
                .map(|s| StatValue {
                    name: s.stat.name.clone(),
                    value: s.base_stat,
                })
                .collect(),
            encounters,
            evolution_level,
            evolution,
            pokemon_abilities: Abilities {
                abilities: data.abilities.iter().map(|a| a.ability.name.clone()).collect(),
                moves: data.moves.iter().map(|m| m.kind.name.clone()).collect(),
            },
            description: english_description(&species.flavor_text_entries),
            name: data.name,
        })
    }
}

/// `canalave-city-area` -> `CANALAVE CITY AREA`
fn location_label(name: &str) -> String {
    name.to_uppercase().replace('-', " ")
}

/// Walks the chain along the first branch of every stage.
fn flatten_chain(root: &ChainLink) -> Vec<EvolutionStep> {
    let mut steps = Vec::new();
    let mut link = Some(root);
    let mut level = 1;

    while let Some(current) = link {
        steps.push(EvolutionStep {
            pokemon: NamedResource {
                name: current.species.name.clone(),
                url: current.species.url.replace("pokemon-species", "pokemon"),
            },
            level,
        });
        link = current.evolves_to.first();
        level += 1;
    }
    steps
}

fn english_description(entries: &[FlavorText]) -> Option<String> {
    entries
        .iter()
        .find(|entry| entry.language.name == "en")
        .map(|entry| {
            entry
                .flavor_text
                .split(|c: char| c.is_whitespace())
                .filter(|word| !word.is_empty())
                .collect::<Vec<_>>()
                .join(" ")
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use serde_json::json;

    use crate::cache::TtlCache;
    use crate::error::PokedexError;
    use crate::fetch::CachedFetch;
    use crate::images::ImageResolver;
    use crate::pokedex::{Endpoints, InMemoryDocumentStore};
    use crate::test_support::{MockHttpClient, MockProbe};

    const API: &str = "https://pokeapi.co/api/v2";

    fn setup() -> (Pokedex, Arc<MockHttpClient>) {
        let client = Arc::new(MockHttpClient::new());
        client.respond(
            &format!("{API}/pokemon/2"),
            json!({
                "id": 2,
                "name": "ivysaur",
                "types": [{"slot": 1, "type": {"name": "grass", "url": "t"}}],
                "abilities": [{"ability": {"name": "overgrow", "url": "a"}}],
                "moves": [{"move": {"name": "tackle", "url": "m"}}],
                "stats": [{"base_stat": 60, "effort": 0, "stat": {"name": "hp", "url": "s"}}],
                "location_area_encounters": format!("{API}/pokemon/2/encounters")
            }),
        );
        client.respond(
            &format!("{API}/pokemon/2/encounters"),
            json!([{"location_area": {"name": "kanto-route-2-south", "url": "l"}}]),
        );
        client.respond(
            &format!("{API}/pokemon-species/2"),
            json!({
                "id": 2,
                "evolution_chain": {"url": format!("{API}/evolution-chain/1/")},
                "flavor_text_entries": [
                    {"flavor_text": "Une graine", "language": {"name": "fr"}},
                    {"flavor_text": "When the bulb on\nits back grows\u{c}large", "language": {"name": "en"}}
                ]
            }),
        );
        client.respond(
            &format!("{API}/evolution-chain/1/"),
            json!({
                "id": 1,
                "chain": {
                    "species": {"name": "bulbasaur", "url": format!("{API}/pokemon-species/1/")},
                    "evolves_to": [{
                        "species": {"name": "ivysaur", "url": format!("{API}/pokemon-species/2/")},
                        "evolves_to": [{
                            "species": {"name": "venusaur", "url": format!("{API}/pokemon-species/3/")},
                            "evolves_to": []
                        }]
                    }]
                }
            }),
        );

        let pokedex = Pokedex::new(
            CachedFetch::new(client.clone(), TtlCache::default()),
            ImageResolver::new(Arc::new(MockProbe::default())),
            Arc::new(InMemoryDocumentStore::new()),
            Endpoints::default(),
        );
        (pokedex, client)
    }

    #[tokio::test]
    async fn test_pokemon_detail_assembles_all_sources() {
        let (pokedex, _) = setup();

        let detail = pokedex.pokemon_detail(2).await.unwrap();

        assert_eq!(detail.name, "ivysaur");
        assert_eq!(detail.types, vec!["grass"]);
        assert_eq!(detail.encounters, vec!["KANTO ROUTE 2 SOUTH"]);
        assert_eq!(detail.evolution.len(), 3);
        assert_eq!(detail.evolution[0].pokemon.url, format!("{API}/pokemon/1/"));
        assert_eq!(detail.evolution[2].level, 3);
        assert_eq!(detail.evolution_level, Some(2));
        assert_eq!(detail.stats, vec![StatValue { name: "hp".into(), value: 60 }]);
        assert_eq!(detail.pokemon_abilities.abilities, vec!["overgrow"]);
        assert_eq!(detail.pokemon_abilities.moves, vec!["tackle"]);
        assert_eq!(
            detail.description.as_deref(),
            Some("When the bulb on its back grows large")
        );
    }

    #[tokio::test]
    async fn test_pokemon_detail_reuses_cached_responses() {
        let (pokedex, client) = setup();

        pokedex.pokemon_detail(2).await.unwrap();
        pokedex.pokemon_detail(2).await.unwrap();

        assert_eq!(client.total_calls(), 4);
    }

    #[tokio::test]
    async fn test_pokemon_detail_propagates_missing_entity() {
        let (pokedex, _) = setup();

        let err = pokedex.pokemon_detail(9999).await.unwrap_err();
        assert!(matches!(err, PokedexError::NotFound(_)));
    }

    #[test]
    fn test_flatten_single_stage_chain() {
        let link = ChainLink {
            species: NamedResource {
                name: "tauros".into(),
                url: "x/pokemon-species/128/".into(),
            },
            evolves_to: Vec::new(),
        };

        let steps = flatten_chain(&link);
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].level, 1);
        assert_eq!(steps[0].pokemon.url, "x/pokemon/128/");
    }
}
