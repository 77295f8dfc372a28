//! Deterministic sample flight-operations records for demonstration purposes.
//!
//! The catalogue groups JSON-shaped records by collection name. Records carry
//! the wire shape of save inputs only: identifiers and timestamps are left to
//! the store the records are written into. The crate is independent of the
//! backend's domain types to avoid circular dependencies.
//!
//! # Example
//!
//! ```
//! use sample_data::SampleCatalog;
//!
//! let catalog = SampleCatalog::builtin();
//! assert!(!catalog.records("fleet-aircraft").is_empty());
//! ```

mod catalog;
mod error;

pub use catalog::SampleCatalog;
pub use error::{CatalogError, SUPPORTED_VERSION};
