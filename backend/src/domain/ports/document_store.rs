//! Driven port for the document store.
//!
//! One collection per entity type, each document keyed by a string
//! identifier. The store owns identifier generation and timestamp stamping
//! so those semantics are uniform across entities: a create stamps
//! `created_at == updated_at`, an update preserves `created_at`, refreshes
//! `updated_at`, and shallow-merges the supplied fields over the stored
//! ones. Merging happens at the store boundary, atomically per document.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use super::define_port_error;

/// One persisted document with the store's native timestamps.
///
/// Timestamps stay `DateTime<Utc>` here; flows convert them to ISO-8601
/// strings when shaping records for callers.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredDocument {
    /// Unique identifier within the collection.
    pub id: String,
    /// Document body, excluding identifier and timestamps.
    pub fields: Map<String, Value>,
    /// Server-stamped creation instant, set once.
    pub created_at: DateTime<Utc>,
    /// Server-stamped last-write instant.
    pub updated_at: DateTime<Utc>,
}

define_port_error! {
    /// Errors surfaced by document store adapters.
    pub enum DocumentStoreError {
        /// Store connection could not be established.
        Connection { message: String } =>
            "document store connection failed: {message}",
        /// Write was rejected by the store.
        Write { message: String } =>
            "document store write rejected: {message}",
        /// Stored content could not be decoded.
        Decode { message: String } =>
            "document store decode failed: {message}",
    }
}

/// Port for collection/identifier-addressed document persistence.
///
/// Absence is not an error anywhere on this trait: fetching a missing
/// document yields `None`, listing an empty collection yields an empty
/// vector, and removing a missing identifier succeeds.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetch one document by identifier.
    async fn fetch(
        &self,
        collection: &str,
        id: &str,
    ) -> Result<Option<StoredDocument>, DocumentStoreError>;

    /// List every document in a collection.
    async fn list(&self, collection: &str) -> Result<Vec<StoredDocument>, DocumentStoreError>;

    /// Create or update one document.
    ///
    /// With `id = None` the store generates a fresh, previously-unused
    /// identifier and stamps both timestamps to now. With an existing
    /// identifier the supplied fields are shallow-merged over the stored
    /// ones, `created_at` is preserved, and `updated_at` is refreshed. An
    /// identifier that names no existing document creates one.
    async fn upsert(
        &self,
        collection: &str,
        id: Option<&str>,
        fields: Map<String, Value>,
    ) -> Result<StoredDocument, DocumentStoreError>;

    /// Remove one document by identifier. Removing an absent identifier is
    /// a success.
    async fn remove(&self, collection: &str, id: &str) -> Result<(), DocumentStoreError>;
}
