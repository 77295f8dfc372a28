//! Reqwest-backed hosted-model adapter.
//!
//! This adapter owns transport details only: request serialisation, timeout
//! and HTTP error mapping, and extraction of the structured payload the
//! flows validate.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde_json::{Value, json};

use super::dto::CompletionResponseDto;
use crate::domain::ports::{ModelClient, ModelClientError, ModelPrompt};

const DEFAULT_USER_AGENT: &str = "flightops-backend-model-client/0.1";
const DEFAULT_MODEL: &str = "flightops-planner-1";

/// Outbound identity and model selection for hosted-model requests.
pub struct ModelHttpIdentity {
    /// HTTP user-agent sent to the provider.
    pub user_agent: String,
    /// Model name requested from the provider.
    pub model: String,
    /// Bearer token, when the provider requires one.
    pub api_key: Option<String>,
}

impl Default for ModelHttpIdentity {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            model: DEFAULT_MODEL.to_owned(),
            api_key: None,
        }
    }
}

/// Model adapter that performs HTTP POST requests against one endpoint.
pub struct ModelHttpClient {
    client: Client,
    endpoint: Url,
    user_agent: String,
    model: String,
    api_key: Option<String>,
}

impl ModelHttpClient {
    /// Build an adapter using a reqwest client with an explicit request
    /// timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(endpoint: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        Self::with_identity(endpoint, timeout, ModelHttpIdentity::default())
    }

    /// Build an adapter with explicit outbound identity.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn with_identity(
        endpoint: Url,
        timeout: Duration,
        identity: ModelHttpIdentity,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint,
            user_agent: identity.user_agent,
            model: identity.model,
            api_key: identity.api_key,
        })
    }

    fn request_body(&self, prompt: &ModelPrompt) -> Value {
        json!({
            "model": self.model,
            "task": prompt.task,
            "prompt": prompt.prompt,
            "temperature": prompt.temperature,
            "responseFormat": "json",
        })
    }
}

#[async_trait]
impl ModelClient for ModelHttpClient {
    async fn generate(&self, prompt: &ModelPrompt) -> Result<Value, ModelClientError> {
        let mut request = self
            .client
            .post(self.endpoint.clone())
            .header(reqwest::header::USER_AGENT, self.user_agent.as_str())
            .header(reqwest::header::ACCEPT, "application/json")
            .json(&self.request_body(prompt));
        if let Some(key) = self.api_key.as_deref() {
            request = request.bearer_auth(key);
        }

        let response = request.send().await.map_err(map_transport_error)?;
        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }

        let decoded: CompletionResponseDto = serde_json::from_slice(body.as_ref())
            .map_err(|err| ModelClientError::decode(format!("invalid provider JSON: {err}")))?;
        decoded
            .into_payload()
            .map_err(ModelClientError::invalid_response)
    }
}

fn map_transport_error(error: reqwest::Error) -> ModelClientError {
    if error.is_timeout() {
        ModelClientError::timeout(error.to_string())
    } else {
        ModelClientError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> ModelClientError {
    let snippet = String::from_utf8_lossy(&body[..body.len().min(256)]).into_owned();
    match status {
        StatusCode::TOO_MANY_REQUESTS => ModelClientError::rate_limited(snippet),
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            ModelClientError::timeout(format!("provider returned {status}: {snippet}"))
        }
        other => ModelClientError::transport(format!("provider returned {other}: {snippet}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_limit_status_maps_to_rate_limited() {
        let error = map_status_error(StatusCode::TOO_MANY_REQUESTS, b"slow down");
        assert!(matches!(error, ModelClientError::RateLimited { .. }));
    }

    #[test]
    fn gateway_timeout_maps_to_timeout() {
        let error = map_status_error(StatusCode::GATEWAY_TIMEOUT, b"");
        assert!(matches!(error, ModelClientError::Timeout { .. }));
    }

    #[test]
    fn other_failures_map_to_transport_with_status() {
        let error = map_status_error(StatusCode::INTERNAL_SERVER_ERROR, b"boom");
        match error {
            ModelClientError::Transport { message } => {
                assert!(message.contains("500"));
                assert!(message.contains("boom"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn request_body_carries_prompt_and_model() {
        let client = ModelHttpClient::new(
            Url::parse("https://model.invalid/v1/complete").expect("valid url"),
            Duration::from_secs(30),
        )
        .expect("client builds");

        let body = client.request_body(&ModelPrompt::new("suggest-route", "TEB to KPBI"));
        assert_eq!(body["model"], DEFAULT_MODEL);
        assert_eq!(body["task"], "suggest-route");
        assert_eq!(body["responseFormat"], "json");
    }
}
