//! Cross-cutting error types for Astra.
//!
//! Storage errors (`DatabaseError`) and HTTP errors (`ApiError`) live in their
//! own crates and convert from `CoreError` where needed.

use thiserror::Error;

/// Errors raised by the data model itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A required field was empty or missing. Displays only the message,
    /// which is returned to clients verbatim.
    #[error("{message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },
}

impl CoreError {
    pub(crate) fn validation(field: &'static str, message: &str) -> Self {
        Self::Validation {
            field,
            message: message.to_string(),
        }
    }

    /// Name of the violated field, for validation errors.
    #[must_use]
    pub const fn field(&self) -> Option<&'static str> {
        match self {
            Self::Validation { field, .. } => Some(field),
            Self::NotFound { .. } => None,
        }
    }
}
