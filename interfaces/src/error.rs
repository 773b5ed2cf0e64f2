use thiserror::Error;

/// Failure reported by an external collaborator.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ExternalError {
    #[error("rejected: {0}")]
    Rejected(String),

    #[error("malformed input: {0}")]
    Malformed(String),

    #[error("unavailable: {0}")]
    Unavailable(String),
}
