//! Model error types.

use thiserror::Error;

/// Errors raised while turning a response body into a model type.
#[derive(Error, Debug)]
pub enum ModelError {
    /// Body is not JSON or does not have the expected shape.
    #[error("Malformed body: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Body parsed, but a field is out of range.
    #[error("Invalid {field}: {reason}")]
    Invalid { field: String, reason: String },
}

impl ModelError {
    /// Create an out-of-range error for a field.
    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ModelError::Invalid {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
