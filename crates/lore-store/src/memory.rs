//! In-memory document store
//!
//! Backs the `lore-view` binary and tests. Reads never fail with a
//! transport error.

use crate::error::{LookupError, SeedError};
use crate::lookup::DocumentLookup;
use dashmap::DashMap;
use lore_model::{Article, Collection, Entity};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;

/// Concurrent map of `(collection, id) -> record`
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: DashMap<(Collection, String), Value>,
}

impl MemoryStore {
    /// Create empty store
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a raw record
    pub fn insert(&self, collection: Collection, id: impl Into<String>, record: Value) {
        self.records.insert((collection, id.into()), record);
    }

    /// Insert an entity under its own collection, keyed by [`Entity::id`]
    ///
    /// # Errors
    ///
    /// Returns the serializer error if the entity cannot be turned into JSON.
    pub fn insert_entity<E: Entity + Serialize>(
        &self,
        entity: &E,
    ) -> Result<(), serde_json::Error> {
        let record = serde_json::to_value(entity)?;
        self.insert(E::COLLECTION, entity.id(), record);
        Ok(())
    }

    /// Remove a record, returning it
    pub fn remove(&self, collection: Collection, id: &str) -> Option<Value> {
        self.records
            .remove(&(collection, id.to_owned()))
            .map(|(_, record)| record)
    }

    /// Number of records across all collections
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if store holds no records
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Build a store from seed data, returning the seed's articles
    #[must_use]
    pub fn from_seed(seed: SeedData) -> (Self, Vec<Article>) {
        let store = Self::new();
        for (id, record) in seed.categories {
            store.insert(Collection::Categories, id, record);
        }
        for (id, record) in seed.users {
            store.insert(Collection::Users, id, record);
        }
        (store, seed.articles)
    }

    /// Load a JSON seed file
    ///
    /// # Errors
    /// - `SeedError::Io` if the file cannot be read
    /// - `SeedError::Parse` if it is not a seed document
    pub async fn load_json(path: impl AsRef<Path>) -> Result<(Self, Vec<Article>), SeedError> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| SeedError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        let seed: SeedData = serde_json::from_str(&raw)?;

        tracing::info!(
            path = %path.display(),
            categories = seed.categories.len(),
            users = seed.users.len(),
            articles = seed.articles.len(),
            "loaded seed data"
        );
        Ok(Self::from_seed(seed))
    }
}

#[async_trait::async_trait]
impl DocumentLookup for MemoryStore {
    async fn lookup(&self, collection: Collection, id: &str) -> Result<Value, LookupError> {
        self.records
            .get(&(collection, id.to_owned()))
            .map(|entry| entry.value().clone())
            .ok_or_else(|| LookupError::not_found(collection, id))
    }
}

/// Seed document layout
///
/// ```json
/// { "Categories": { "c1": { "title": "Witchers" } },
///   "Users": { "u1": { "username": "vesemir", "img": "..." } },
///   "Articles": [ { "title": "Geralt", "cats": ["c1"], "contributors": ["u1"] } ] }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedData {
    /// Category records by id
    #[serde(rename = "Categories", default)]
    pub categories: BTreeMap<String, Value>,
    /// User records by id
    #[serde(rename = "Users", default)]
    pub users: BTreeMap<String, Value>,
    /// Articles available for viewing
    #[serde(rename = "Articles", default)]
    pub articles: Vec<Article>,
}
