//! Outbound adapters implementing the domain's driven ports.

pub mod fbo;
pub mod model;
pub mod persistence;
