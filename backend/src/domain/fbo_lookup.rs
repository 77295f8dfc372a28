//! FBO lookup flow.
//!
//! The one flow with local recovery: when the directory provider fails, the
//! flow logs the failure and returns an empty list so callers can still
//! render the page. Invalid airport codes are the caller's problem and fail
//! validation as usual.

use std::sync::Arc;

use tracing::warn;

use super::airport::AirportCode;
use super::error::FlowError;
use super::ports::{FboDirectory, FboRecord};
use super::validation::ValidationErrors;

/// FBO lookup flow over an injected directory provider.
#[derive(Clone)]
pub struct FboLookupService<F> {
    directory: Arc<F>,
}

impl<F> FboLookupService<F> {
    /// Create the flow with the given directory provider.
    pub fn new(directory: Arc<F>) -> Self {
        Self { directory }
    }
}

impl<F: FboDirectory> FboLookupService<F> {
    /// Look up FBOs at an airport.
    ///
    /// Provider failure collapses to an empty list; only an invalid airport
    /// code is an error.
    pub async fn lookup(&self, airport: &str) -> Result<Vec<FboRecord>, FlowError> {
        let code = AirportCode::new(airport)
            .map_err(|err| ValidationErrors::single("airport", err.to_string()))?;

        match self.directory.fbos_for_airport(&code).await {
            Ok(records) => Ok(records),
            Err(err) => {
                warn!(airport = %code, error = %err, "fbo lookup failed, returning empty result");
                Ok(Vec::new())
            }
        }
    }
}

#[cfg(test)]
#[path = "fbo_lookup_tests.rs"]
mod tests;
