//! Parsing-related error types.

use thiserror::Error;

/// Failures decoding a response body.
///
/// Kept apart from [`ApiError`](super::ApiError): a parse error means the
/// client could not understand what the server sent, not that the server
/// rejected the call.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ParseError {
    /// A successful response carried JSON that does not fit the target type.
    #[error("Failed to deserialize response (status {status}): {source}")]
    Body {
        /// HTTP status of the response
        status: u16,
        /// Underlying serde error
        #[source]
        source: serde_json::Error,
    },

    /// A non-2xx response carried a body that is not the error envelope.
    #[error("Failed to deserialize error envelope (status {status}): {source}")]
    ErrorEnvelope {
        /// HTTP status of the response
        status: u16,
        /// Underlying serde error
        #[source]
        source: serde_json::Error,
    },
}

impl ParseError {
    /// Returns the HTTP status the failed body came with.
    #[must_use]
    pub fn status(&self) -> u16 {
        match self {
            ParseError::Body { status, .. } | ParseError::ErrorEnvelope { status, .. } => *status,
        }
    }
}
