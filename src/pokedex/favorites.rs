//! Favorites ("my list") backed by an external document store.
//!
//! Unlike the catalog paths, any failure here degrades to an empty list: a
//! user with an unreachable store sees no favorites rather than an error.

use async_trait::async_trait;
use futures::future::try_join_all;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::error::{PokedexError, Result};
use crate::models::{FavoritePokemon, FavoriteRecord};
use crate::pokedex::{types, Pokedex};

/// The signed-in user, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UserInfo {
    pub email: Option<String>,
}

impl UserInfo {
    pub fn with_email(email: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
        }
    }
}

/// One stored favorite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoriteDocument {
    /// Document id
    pub id: String,
    /// Owner
    pub email: String,
    pub pokemon: FavoriteRecord,
}

// == Document Store ==
/// Read side of the favorites store: equality query on the owner's email.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Vec<FavoriteDocument>>;
}

/// Process-local store, optionally seeded from a JSON array of documents.
#[derive(Debug, Default)]
pub struct InMemoryDocumentStore {
    documents: RwLock<Vec<FavoriteDocument>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_documents(documents: Vec<FavoriteDocument>) -> Self {
        Self {
            documents: RwLock::new(documents),
        }
    }

    /// Loads documents from a JSON file holding an array of documents.
    pub async fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = tokio::fs::read(path)
            .await
            .map_err(|e| PokedexError::DocumentStore(format!("{}: {}", path.display(), e)))?;
        let documents: Vec<FavoriteDocument> = serde_json::from_slice(&raw)?;
        Ok(Self::from_documents(documents))
    }

    pub async fn insert(&self, document: FavoriteDocument) {
        self.documents.write().await.push(document);
    }

    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.documents.read().await.is_empty()
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn find_by_email(&self, email: &str) -> Result<Vec<FavoriteDocument>> {
        Ok(self
            .documents
            .read()
            .await
            .iter()
            .filter(|doc| doc.email == email)
            .cloned()
            .collect())
    }
}

impl Pokedex {
    // == User Favorites ==
    /// Returns the favorites of `user` with their default artwork resolved.
    ///
    /// Never fails: no user, no documents, or any store or image failure
    /// all yield an empty list.
    pub async fn user_pokemons(&self, user: Option<&UserInfo>) -> Vec<FavoritePokemon> {
        let Some(email) = user.and_then(|u| u.email.as_deref()) else {
            return Vec::new();
        };

        match self.load_favorites(email).await {
            Ok(favorites) => favorites,
            Err(e) => {
                warn!(email, error = %e, "failed to load favorites, returning empty list");
                Vec::new()
            }
        }
    }

    async fn load_favorites(&self, email: &str) -> Result<Vec<FavoritePokemon>> {
        let documents = self.favorites.find_by_email(email).await?;
        debug!(email, count = documents.len(), "favorites fetched");

        let favorites = documents.into_iter().map(|doc| async move {
            let image = self.images.resolve(doc.pokemon.id, false).await?;
            let record = doc.pokemon;
            Ok::<_, PokedexError>(FavoritePokemon {
                id: record.id,
                name: record.name,
                types: types::enrich(&record.types),
                extra: record.extra,
                firebase_id: doc.id,
                image,
            })
        });

        try_join_all(favorites).await
    }
}
