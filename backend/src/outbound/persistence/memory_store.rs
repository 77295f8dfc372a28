//! In-memory document store adapter.
//!
//! Backs the flows in tests, demos, and anywhere a managed store is not
//! wired in. Mutation takes the write lock for the whole read-merge-write,
//! so each upsert is atomic per document; concurrent flow invocations only
//! ever share this handle, never application-memory state.

use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::ports::{DocumentStore, DocumentStoreError, StoredDocument};

#[derive(Debug, Clone)]
struct DocumentEntry {
    fields: Map<String, Value>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl DocumentEntry {
    fn to_stored(&self, id: &str) -> StoredDocument {
        StoredDocument {
            id: id.to_owned(),
            fields: self.fields.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Thread-safe in-memory [`DocumentStore`].
///
/// Collections are created lazily on first write; listing a collection that
/// was never written yields an empty vector. Iteration order is by
/// identifier, so listings are deterministic.
#[derive(Debug, Default)]
pub struct InMemoryDocumentStore {
    collections: RwLock<HashMap<String, BTreeMap<String, DocumentEntry>>>,
}

impl InMemoryDocumentStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn fresh_id(collection: &BTreeMap<String, DocumentEntry>) -> String {
        // UUID collisions are not a practical concern, but the contract
        // says "previously-unused", so check anyway.
        loop {
            let id = Uuid::new_v4().to_string();
            if !collection.contains_key(&id) {
                return id;
            }
        }
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn fetch(
        &self,
        collection: &str,
        id: &str,
    ) -> Result<Option<StoredDocument>, DocumentStoreError> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .and_then(|documents| documents.get(id))
            .map(|entry| entry.to_stored(id)))
    }

    async fn list(&self, collection: &str) -> Result<Vec<StoredDocument>, DocumentStoreError> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .map(|documents| {
                documents
                    .iter()
                    .map(|(id, entry)| entry.to_stored(id))
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn upsert(
        &self,
        collection: &str,
        id: Option<&str>,
        fields: Map<String, Value>,
    ) -> Result<StoredDocument, DocumentStoreError> {
        let mut collections = self.collections.write().await;
        let documents = collections.entry(collection.to_owned()).or_default();
        let now = Utc::now();

        let id = match id {
            Some(id) => id.to_owned(),
            None => Self::fresh_id(documents),
        };

        let entry = match documents.entry(id.clone()) {
            Entry::Occupied(occupied) => {
                let existing = occupied.into_mut();
                for (key, value) in fields {
                    existing.fields.insert(key, value);
                }
                existing.updated_at = now;
                existing
            }
            Entry::Vacant(vacant) => vacant.insert(DocumentEntry {
                fields,
                created_at: now,
                updated_at: now,
            }),
        };

        Ok(entry.to_stored(&id))
    }

    async fn remove(&self, collection: &str, id: &str) -> Result<(), DocumentStoreError> {
        let mut collections = self.collections.write().await;
        if let Some(documents) = collections.get_mut(collection) {
            documents.remove(id);
        }
        Ok(())
    }
}
