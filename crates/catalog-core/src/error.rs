//! Screen and streaming errors.

/// Error type for page streaming operations.
#[derive(Debug, thiserror::Error)]
pub enum ScreenError {
    #[error("Shell not sent before sections")]
    ShellNotSent,

    #[error("Shell already sent")]
    ShellAlreadySent,

    #[error("Page already completed")]
    Completed,

    #[error("Streaming error: {0}")]
    Stream(String),
}
