//! HTTP adapter for the FBO directory port.
//!
//! Queries a directory provider over HTTPS and maps its responses onto the
//! domain [`FboRecord`] shape. The provider signals an unknown airport with
//! `404`, which this adapter reports as [`FboDirectoryError::UnknownAirport`]
//! so the lookup flow can decide how to recover.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use url::Url;

use crate::domain::airport::AirportCode;
use crate::domain::ports::{FboDirectory, FboDirectoryError, FboRecord};

use super::dto::FboListDto;

const DEFAULT_USER_AGENT: &str = "flightops-backend-fbo-directory/0.1";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Identification sent with every directory request.
#[derive(Debug, Clone)]
pub struct FboHttpIdentity {
    /// `User-Agent` header value.
    pub user_agent: String,
}

impl Default for FboHttpIdentity {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

/// [`FboDirectory`] implementation backed by an HTTP directory provider.
#[derive(Debug, Clone)]
pub struct FboHttpSource {
    client: reqwest::Client,
    base_url: Url,
    user_agent: String,
}

impl FboHttpSource {
    /// Build a source against the provider `base_url` with default identity.
    pub fn new(base_url: Url) -> Result<Self, FboDirectoryError> {
        Self::with_identity(base_url, FboHttpIdentity::default())
    }

    /// Build a source with an explicit identity.
    pub fn with_identity(
        base_url: Url,
        identity: FboHttpIdentity,
    ) -> Result<Self, FboDirectoryError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|err| FboDirectoryError::transport(err.to_string()))?;
        Ok(Self {
            client,
            base_url,
            user_agent: identity.user_agent,
        })
    }

    fn airport_url(&self, airport: &AirportCode) -> Result<Url, FboDirectoryError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| FboDirectoryError::transport("base url cannot carry a path"))?
            .pop_if_empty()
            .extend(["airports", airport.as_str(), "fbos"]);
        Ok(url)
    }
}

fn map_status_error(status: StatusCode, airport: &AirportCode) -> FboDirectoryError {
    if status == StatusCode::NOT_FOUND {
        FboDirectoryError::unknown_airport(airport.as_str())
    } else {
        FboDirectoryError::transport(format!("directory returned status {status}"))
    }
}

#[async_trait]
impl FboDirectory for FboHttpSource {
    async fn fbos_for_airport(
        &self,
        airport: &AirportCode,
    ) -> Result<Vec<FboRecord>, FboDirectoryError> {
        let url = self.airport_url(airport)?;
        let response = self
            .client
            .get(url)
            .header(reqwest::header::USER_AGENT, &self.user_agent)
            .send()
            .await
            .map_err(|err| FboDirectoryError::transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(map_status_error(status, airport));
        }

        let listing: FboListDto = response
            .json()
            .await
            .map_err(|err| FboDirectoryError::decode(err.to_string()))?;
        Ok(listing.into_records())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(raw: &str) -> AirportCode {
        AirportCode::new(raw).expect("valid code")
    }

    #[test]
    fn not_found_maps_to_unknown_airport() {
        let err = map_status_error(StatusCode::NOT_FOUND, &code("TEB"));
        assert_eq!(err, FboDirectoryError::unknown_airport("TEB"));
    }

    #[test]
    fn server_errors_map_to_transport() {
        let err = map_status_error(StatusCode::BAD_GATEWAY, &code("TEB"));
        assert!(matches!(err, FboDirectoryError::Transport { .. }));
    }

    #[test]
    fn airport_url_appends_code_segments() {
        let source = FboHttpSource::new(Url::parse("https://fbo.example.net/v1").expect("url"))
            .expect("source");
        let url = source.airport_url(&code("kpbi")).expect("url");
        assert_eq!(url.as_str(), "https://fbo.example.net/v1/airports/KPBI/fbos");
    }
}
