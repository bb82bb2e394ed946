//! The document lookup seam

use crate::error::LookupError;
use lore_model::{Collection, Entity};
use serde_json::Value;
use std::sync::Arc;

/// Read access to the external document store
///
/// Implementations must not retry on their own behalf unless that is
/// their documented policy; failures are handed to the caller as-is.
#[async_trait::async_trait]
pub trait DocumentLookup: Send + Sync {
    /// Fetch the raw record `id` from `collection`
    ///
    /// # Errors
    /// - `LookupError::NotFound` if no such record exists
    /// - `LookupError::Transport` if the backend fails
    async fn lookup(&self, collection: Collection, id: &str) -> Result<Value, LookupError>;
}

#[async_trait::async_trait]
impl<T: DocumentLookup + ?Sized> DocumentLookup for Arc<T> {
    async fn lookup(&self, collection: Collection, id: &str) -> Result<Value, LookupError> {
        (**self).lookup(collection, id).await
    }
}

/// Fetch and decode one entity
///
/// The store's document id is the entity id, so records that do not carry
/// an `id` field get the requested one filled in before decoding.
///
/// # Errors
/// Lookup errors pass through; a record that does not decode as `E`
/// yields `LookupError::Malformed`.
pub async fn fetch<E: Entity>(
    store: &(impl DocumentLookup + ?Sized),
    id: &str,
) -> Result<E, LookupError> {
    tracing::debug!(collection = %E::COLLECTION, id, "lookup");

    let mut record = store.lookup(E::COLLECTION, id).await?;
    if let Value::Object(fields) = &mut record {
        fields
            .entry("id")
            .or_insert_with(|| Value::String(id.to_owned()));
    }

    serde_json::from_value(record).map_err(|source| LookupError::Malformed {
        collection: E::COLLECTION,
        id: id.to_owned(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;
    use lore_model::{Category, Contributor};
    use serde_json::json;

    #[tokio::test]
    async fn fetch_fills_missing_id() {
        let store = MemoryStore::new();
        store.insert(Collection::Categories, "monsters", json!({ "title": "Monsters" }));

        let category: Category = fetch(&store, "monsters").await.unwrap();
        assert_eq!(category, Category::new("monsters", "Monsters"));
    }

    #[tokio::test]
    async fn fetch_reports_malformed_record() {
        let store = MemoryStore::new();
        store.insert(Collection::Users, "u1", json!({ "img": 12 }));

        let err = fetch::<Contributor>(&store, "u1").await.unwrap_err();
        assert!(matches!(
            err,
            LookupError::Malformed {
                collection: Collection::Users,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn fetch_through_shared_handle() {
        let store: Arc<dyn DocumentLookup> = Arc::new(MemoryStore::new());
        let err = fetch::<Category>(&store, "none").await.unwrap_err();
        assert!(err.is_not_found());
    }
}
