//! Flow-level error types.
//!
//! These errors are transport agnostic: callers (pages, CLIs, tests) decide
//! how to render them. Absence of a record is never an error here —
//! single-record fetches return `Option` and deletes are idempotent.

use thiserror::Error;

use super::validation::ValidationErrors;

/// Failure of one flow invocation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FlowError {
    /// The input failed schema validation. Carries every violated field.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
    /// The document store was unreachable or rejected the operation.
    #[error("{entity} persistence failed: {message}")]
    Persistence {
        /// Entity kind the flow was operating on.
        entity: &'static str,
        /// Record identifier, when the operation targeted one.
        id: Option<String>,
        /// Human-readable description wrapping the underlying cause.
        message: String,
    },
    /// The hosted model call failed or returned unusable output.
    #[error("model invocation failed: {message}")]
    Model {
        /// Human-readable description wrapping the underlying cause.
        message: String,
    },
}

impl FlowError {
    /// Wrap a store failure with entity context.
    pub fn persistence(
        entity: &'static str,
        id: Option<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::Persistence {
            entity,
            id,
            message: message.into(),
        }
    }

    /// Wrap a model failure.
    pub fn model(message: impl Into<String>) -> Self {
        Self::Model {
            message: message.into(),
        }
    }

    /// Whether this is a validation failure.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
