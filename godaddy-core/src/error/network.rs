//! Network-related error types.

use std::error::Error as StdError;
use thiserror::Error;

/// Transport failures, hiding the HTTP library behind the public API.
///
/// None of these are retried by the client; only HTTP 429 is.
///
/// # Example
///
/// ```rust
/// use godaddy_core::error::NetworkError;
///
/// fn handle(err: &NetworkError) -> &'static str {
///     match err {
///         NetworkError::Timeout => "request timed out",
///         NetworkError::ConnectionFailed(_) => "connection failed",
///         _ => "other transport error",
///     }
/// }
///
/// assert_eq!(handle(&NetworkError::Timeout), "request timed out");
/// ```
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum NetworkError {
    /// Request timed out before a response arrived.
    #[error("Request timeout")]
    Timeout,

    /// Connection failed.
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// The response body could not be read off the wire.
    #[error("Failed to read response body: {0}")]
    Body(String),

    /// Opaque transport error for underlying issues.
    #[error("Transport error")]
    Transport(#[source] Box<dyn StdError + Send + Sync + 'static>),
}
