//! Driven port for the hosted language model.
//!
//! The domain owns the prompt shape and hands the adapter an opaque prompt
//! string plus labelling context; the adapter returns the model's structured
//! JSON payload. Flows validate that payload against their own output
//! shapes, so a response the flow cannot decode is still a model failure.
//! No retries or streaming live behind this port.

use async_trait::async_trait;
use serde_json::Value;

use super::define_port_error;

/// One templated prompt submitted to the hosted model.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelPrompt {
    /// Short task label used for trace correlation (for example
    /// `suggest-route`).
    pub task: String,
    /// Fully rendered prompt text.
    pub prompt: String,
    /// Sampling temperature override, when the flow wants one.
    pub temperature: Option<f32>,
}

impl ModelPrompt {
    /// Build a prompt with the default temperature.
    pub fn new(task: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            task: task.into(),
            prompt: prompt.into(),
            temperature: None,
        }
    }
}

define_port_error! {
    /// Errors surfaced while calling the hosted model.
    pub enum ModelClientError {
        /// Network transport failed before a response arrived.
        Transport { message: String } =>
            "model transport failed: {message}",
        /// The call exceeded the adapter's request timeout.
        Timeout { message: String } =>
            "model call timed out: {message}",
        /// The provider rate-limited the request.
        RateLimited { message: String } =>
            "model provider rate limited the request: {message}",
        /// The provider response could not be decoded.
        Decode { message: String } =>
            "model response decode failed: {message}",
        /// The provider answered but the payload was not the structured
        /// JSON the contract requires.
        InvalidResponse { message: String } =>
            "model returned an invalid response: {message}",
    }
}

/// Port for submitting a structured prompt and receiving the model's JSON
/// payload.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Submit one prompt and return the model's JSON payload.
    async fn generate(&self, prompt: &ModelPrompt) -> Result<Value, ModelClientError>;
}
