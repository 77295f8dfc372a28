//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Ports describe how the domain expects to interact with driven adapters
//! (the document store, the hosted model, the FBO directory). Each trait
//! exposes strongly typed errors so adapters map their failures into
//! predictable variants.

mod macros;
pub(crate) use macros::define_port_error;

mod document_store;
mod fbo_directory;
mod model_client;

pub use document_store::{DocumentStore, DocumentStoreError, StoredDocument};
#[cfg(test)]
pub use fbo_directory::MockFboDirectory;
pub use fbo_directory::{FboDirectory, FboDirectoryError, FboRecord};
#[cfg(test)]
pub use model_client::MockModelClient;
pub use model_client::{ModelClient, ModelClientError, ModelPrompt};
