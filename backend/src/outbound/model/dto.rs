//! DTOs for decoding hosted-model completion responses.
//!
//! The adapter decodes into these transport DTOs first, then extracts the
//! structured JSON payload the flows validate.

use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub(super) struct CompletionResponseDto {
    pub(super) output: CompletionOutputDto,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(super) enum CompletionOutputDto {
    // Variant order matters: `Value` matches any JSON, so the string form
    // must be tried first.
    /// Provider returned the payload as a JSON-encoded string.
    Text(String),
    /// Provider already returned the structured payload.
    Structured(Value),
}

impl CompletionResponseDto {
    pub(super) fn into_payload(self) -> Result<Value, String> {
        match self.output {
            CompletionOutputDto::Structured(value) if value.is_object() || value.is_array() => {
                Ok(value)
            }
            CompletionOutputDto::Structured(other) => Err(format!(
                "expected a structured payload, got {}",
                kind_of(&other)
            )),
            CompletionOutputDto::Text(text) => serde_json::from_str(&text)
                .map_err(|err| format!("output text is not valid JSON: {err}")),
        }
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
