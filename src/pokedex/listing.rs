//! Catalog listing and card data.

use futures::future::join_all;
use tracing::{error, info};

use crate::error::Result;
use crate::models::{NamedResource, PokemonCard};
use crate::pokedex::payload::{ListingPayload, PokemonPayload};
use crate::pokedex::{types, Pokedex};

impl Pokedex {
    // == Initial Listing ==
    /// Fetches the catalog listing, cached for the listing TTL.
    pub async fn initial_listing(&self) -> Result<Vec<NamedResource>> {
        let url = self.endpoints.listing();
        let response = self
            .fetch
            .get(&url, Some(self.listing_ttl))
            .await
            .inspect_err(|e| error!(url = %url, error = %e, "failed to fetch listing"))?;

        let listing: ListingPayload = response.json()?;
        Ok(listing.results)
    }

    // == Card Data ==
    /// Fetches the detail of every listed entity concurrently and keeps the
    /// ones that succeeded, in listing order.
    pub async fn pokemons_data(&self, pokemons: &[NamedResource]) -> Vec<PokemonCard> {
        let requests = pokemons.iter().map(|pokemon| async move {
            let card = self.card(pokemon).await;
            if let Err(e) = &card {
                error!(name = %pokemon.name, error = %e, "failed to fetch pokemon data");
            }
            card.ok()
        });

        let cards: Vec<PokemonCard> = join_all(requests).await.into_iter().flatten().collect();
        if cards.len() < pokemons.len() {
            info!(
                requested = pokemons.len(),
                fetched = cards.len(),
                "dropped pokemons that failed to load"
            );
        }
        cards
    }

    async fn card(&self, pokemon: &NamedResource) -> Result<PokemonCard> {
        let response = self.fetch.get(&pokemon.url, None).await?;
        let data: PokemonPayload = response.json()?;

        Ok(PokemonCard {
            name: pokemon.name.clone(),
            id: data.id,
            image: String::new(),
            types: types::enrich(&data.type_names()),
        })
    }
}
