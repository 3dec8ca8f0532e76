//! Fetch error types.

use catalog_model::ModelError;

/// Why a read against the product service produced no value.
///
/// A non-success HTTP status is not a variant: the body is parsed as if the
/// request had succeeded, and fails here only if it has the wrong shape.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Validation error: {0}")]
    Validation(ModelError),

    #[error("Fetch cancelled")]
    Cancelled,
}

impl From<ModelError> for FetchError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Malformed(json) => FetchError::Deserialization(json.to_string()),
            invalid @ ModelError::Invalid { .. } => FetchError::Validation(invalid),
        }
    }
}

impl FetchError {
    /// Whether the request never produced a body.
    pub fn is_transport(&self) -> bool {
        matches!(self, FetchError::Transport(_))
    }
}
