//! Errors raised while loading a sample catalogue.

/// Version accepted by [`crate::SampleCatalog::from_json`].
pub const SUPPORTED_VERSION: u32 = 1;

/// Failure modes when loading a catalogue from JSON.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The document is not valid JSON for the catalogue shape.
    #[error("catalogue JSON is malformed: {0}")]
    Parse(#[from] serde_json::Error),
    /// The document declares a version this crate does not understand.
    #[error("unsupported catalogue version {version}, expected {SUPPORTED_VERSION}")]
    UnsupportedVersion {
        /// Version found in the document.
        version: u32,
    },
    /// A record in the document is not a JSON object.
    #[error("record {index} in collection `{collection}` is not a JSON object")]
    MalformedRecord {
        /// Name of the offending collection.
        collection: String,
        /// Zero-based position of the offending record.
        index: usize,
    },
}
