use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum ClientError {
    /// Caller supplied empty or malformed input. Never retried.
    #[error("validation error: {0}")]
    Validation(String),

    /// Network failure or non-success response from a remote collaborator.
    #[error("remote error: {0}")]
    Remote(String),

    /// A well-formed request legitimately matched zero remote records.
    /// Distinct from [`ClientError::Remote`] so callers can render
    /// "no results" rather than "something went wrong".
    #[error("not found: {0}")]
    NotFound(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for ClientError {
    fn from(e: serde_json::Error) -> Self {
        ClientError::Serialization(e.to_string())
    }
}
