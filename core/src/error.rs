//! Error types for the Re:amaze API client.
//!
//! # Design
//! Callers see three failure kinds plus the JSON codec failures. `Validation`
//! is raised before any request leaves the process, `Transport` covers URL
//! construction and network failures, and `Remote` covers every non-2xx
//! status. Re:amaze does not get a dedicated "not found" variant: the status
//! line is carried as-is and callers that need finer handling inspect
//! `status()`.

/// Errors returned by `Client` operations.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A required argument or request field was missing or empty.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The request URL could not be built or the round-trip itself failed.
    #[error("transport error: {message}")]
    Transport {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Re:amaze answered with a status outside `[200, 300)`.
    #[error("remote error: {message}")]
    Remote { status: u16, message: String },

    /// A successful response body could not be decoded into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(#[source] serde_json::Error),

    /// The request payload could not be encoded as JSON.
    #[error("serialization failed: {0}")]
    Serialization(#[source] serde_json::Error),
}

impl ApiError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub(crate) fn transport<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Transport {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Remote { .. })
    }

    /// HTTP status of a `Remote` error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }
}
