//! FBO directory adapter.

mod dto;
mod http_source;

pub use http_source::{FboHttpIdentity, FboHttpSource};
