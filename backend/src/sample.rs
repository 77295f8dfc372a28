//! Seeding helpers for demonstration data.
//!
//! Available behind the `sample-data` feature. Records come from the
//! [`sample_data::SampleCatalog`] and are written straight through the
//! document store, which assigns identifiers and timestamps.

use sample_data::SampleCatalog;
use tracing::info;

use crate::domain::FlowError;
use crate::domain::ports::DocumentStore;

/// Write every record of `catalog` into `store`.
///
/// Returns the number of records written. Fails on the first store error;
/// records written before the failure remain in place.
pub async fn seed_catalog<S>(store: &S, catalog: &SampleCatalog) -> Result<usize, FlowError>
where
    S: DocumentStore,
{
    let mut written = 0;
    for (collection, records) in catalog.collections() {
        for fields in records {
            store
                .upsert(collection, None, fields.clone())
                .await
                .map_err(|err| FlowError::persistence("sample record", None, err.to_string()))?;
            written += 1;
        }
        info!(collection, count = records.len(), "seeded sample records");
    }
    Ok(written)
}

/// Seed the built-in demonstration catalogue into `store`.
pub async fn seed_builtin<S>(store: &S) -> Result<usize, FlowError>
where
    S: DocumentStore,
{
    seed_catalog(store, &SampleCatalog::builtin()).await
}
