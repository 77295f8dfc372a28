//! Flight operations backend library modules.

pub mod domain;
pub mod outbound;

#[cfg(feature = "sample-data")]
pub mod sample;
