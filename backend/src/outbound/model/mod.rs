//! Hosted model adapter.

mod dto;
mod http_client;

pub use http_client::{ModelHttpClient, ModelHttpIdentity};
