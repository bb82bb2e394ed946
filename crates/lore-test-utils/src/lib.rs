//! Testing utilities for the lore workspace
//!
//! Shared test helpers, fixtures, and a scriptable document store.

#![allow(missing_docs)]

use dashmap::DashMap;
use lore_model::{Article, Category, Collection, Contributor};
use lore_store::{DocumentLookup, LookupError};
use parking_lot::Mutex;
use serde_json::Value;
use std::time::Duration;

#[derive(Debug, Clone)]
enum Response {
    Record(Value),
    NotFound,
    Transport(String),
}

#[derive(Debug, Clone)]
struct Script {
    response: Response,
    delay: Duration,
}

/// Document store whose answers and latencies are set per id
///
/// Ids without a script answer `NotFound` immediately. Every call is
/// recorded before any delay, so tests can tell which lookups were issued.
#[derive(Debug, Default)]
pub struct ScriptedStore {
    scripts: DashMap<(Collection, String), Script>,
    calls: Mutex<Vec<(Collection, String)>>,
}

impl ScriptedStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn script(self, collection: Collection, id: &str, response: Response) -> Self {
        self.scripts.insert(
            (collection, id.to_string()),
            Script {
                response,
                delay: Duration::ZERO,
            },
        );
        self
    }

    pub fn with_record(self, collection: Collection, id: &str, record: Value) -> Self {
        self.script(collection, id, Response::Record(record))
    }

    pub fn with_category(self, category: &Category) -> Self {
        let id = category.id.to_string();
        let record = serde_json::to_value(category).unwrap();
        self.with_record(Collection::Categories, &id, record)
    }

    pub fn with_contributor(self, contributor: &Contributor) -> Self {
        let id = contributor.id.to_string();
        let record = serde_json::to_value(contributor).unwrap();
        self.with_record(Collection::Users, &id, record)
    }

    pub fn with_not_found(self, collection: Collection, id: &str) -> Self {
        self.script(collection, id, Response::NotFound)
    }

    pub fn with_transport_error(self, collection: Collection, id: &str, message: &str) -> Self {
        self.script(collection, id, Response::Transport(message.to_string()))
    }

    /// Delay the answer for an already scripted id
    pub fn with_delay(self, collection: Collection, id: &str, delay: Duration) -> Self {
        if let Some(mut script) = self.scripts.get_mut(&(collection, id.to_string())) {
            script.delay = delay;
        }
        self
    }

    pub fn calls(&self) -> Vec<(Collection, String)> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    pub fn calls_to(&self, collection: Collection) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|(c, _)| *c == collection)
            .count()
    }
}

#[async_trait::async_trait]
impl DocumentLookup for ScriptedStore {
    async fn lookup(&self, collection: Collection, id: &str) -> Result<Value, LookupError> {
        self.calls.lock().push((collection, id.to_string()));

        let script = self
            .scripts
            .get(&(collection, id.to_string()))
            .map(|entry| entry.value().clone());
        let Some(script) = script else {
            return Err(LookupError::not_found(collection, id));
        };

        if !script.delay.is_zero() {
            tokio::time::sleep(script.delay).await;
        }

        match script.response {
            Response::Record(record) => Ok(record),
            Response::NotFound => Err(LookupError::not_found(collection, id)),
            Response::Transport(message) => Err(LookupError::transport(message)),
        }
    }
}

pub fn category(id: &str) -> Category {
    Category::new(id, format!("Category {id}"))
}

pub fn contributor(id: &str) -> Contributor {
    Contributor::new(id, format!("user-{id}"), format!("https://img.example/{id}.png"))
}

pub fn article_with_refs(title: &str, cats: &[&str], contributors: &[&str]) -> Article {
    Article::new(title)
        .with_content(format!("# {title}  Lead paragraph.  ## History  Old tales."))
        .with_cats(cats.iter().copied())
        .with_contributors(contributors.iter().copied())
}

/// Store answering every given id successfully, without delay
pub fn store_with(cats: &[&str], contributors: &[&str]) -> ScriptedStore {
    let store = cats
        .iter()
        .fold(ScriptedStore::new(), |store, id| store.with_category(&category(id)));
    contributors
        .iter()
        .fold(store, |store, id| store.with_contributor(&contributor(id)))
}
