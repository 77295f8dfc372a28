//! Driven port for the FBO directory lookup.
//!
//! Given a normalised airport code the provider returns every fixed-base
//! operator it knows at that field. The lookup flow treats provider failure
//! as recoverable; this port just reports it faithfully.

use async_trait::async_trait;

use crate::domain::airport::AirportCode;

use super::define_port_error;

/// One fixed-base operator record returned by the directory.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FboRecord {
    /// Operator name.
    pub name: String,
    /// Airport the operator serves, in normalised form.
    pub airport_code: String,
    /// Contact phone number, when published.
    pub phone: Option<String>,
    /// Radio frequency, when published.
    pub frequency: Option<String>,
    /// Fuel grades on offer (for example `Jet A`, `100LL`).
    pub fuel_types: Vec<String>,
    /// Whether transient hangar space is advertised.
    pub has_hangar_space: bool,
}

define_port_error! {
    /// Errors surfaced while querying the FBO directory.
    pub enum FboDirectoryError {
        /// Network transport failed before a response arrived.
        Transport { message: String } =>
            "fbo directory transport failed: {message}",
        /// The provider response could not be decoded.
        Decode { message: String } =>
            "fbo directory response decode failed: {message}",
        /// The provider does not know the requested airport.
        UnknownAirport { airport: String } =>
            "fbo directory has no airport {airport}",
    }
}

/// Port for querying fixed-base operators at an airport.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FboDirectory: Send + Sync {
    /// Return every FBO the provider lists for the airport.
    async fn fbos_for_airport(
        &self,
        airport: &AirportCode,
    ) -> Result<Vec<FboRecord>, FboDirectoryError>;
}
