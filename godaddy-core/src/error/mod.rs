//! # Error Handling
//!
//! Every fallible operation in this crate returns [`Result<T>`], whose error
//! type keeps the failure classes of the request pipeline apart so callers can
//! tell "the server rejected this" from "we could not understand the reply"
//! from "the caller gave up".
//!
//! ## Error Hierarchy
//!
//! ```text
//! Error
//! ├── Api            - Non-2xx response carrying the GoDaddy error envelope
//! ├── Network        - Transport failures (connect, DNS, TLS, timeout)
//! ├── Parse          - Response body could not be decoded
//! ├── InvalidRequest - Request could not be built (body serialization, URL)
//! ├── Config         - Client configuration rejected by validation
//! ├── Cancelled      - Caller cancelled the request context
//! ├── Timeout        - Request context deadline passed
//! └── Context        - Error with additional context
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use godaddy_core::error::{ApiError, Error};
//!
//! fn describe(err: &Error) -> &'static str {
//!     if err.is_quota_exceeded() {
//!         "quota exhausted, try another endpoint later"
//!     } else if err.as_api().is_some() {
//!         "rejected by the API"
//!     } else if err.as_cancelled().is_some() {
//!         "cancelled"
//!     } else {
//!         "other failure"
//!     }
//! }
//!
//! let err = Error::from(ApiError::new("QUOTA_EXCEEDED", "limit hit"));
//! assert_eq!(describe(&err), "quota exhausted, try another endpoint later");
//! ```

mod api;
mod config;
mod context;
mod convert;
mod network;
mod parse;

use std::borrow::Cow;
use std::error::Error as StdError;
use thiserror::Error;

pub use api::{ApiError, ApiErrorField, ERR_CODE_QUOTA_EXCEEDED};
pub use config::{ConfigValidationError, ValidationResult};
pub use context::ContextExt;
pub use network::NetworkError;
pub use parse::ParseError;

/// Result type alias for all client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The primary error type of the client.
///
/// Large variants are boxed so the enum stays small on the hot path.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The API answered with a status outside `[200, 300)`.
    #[error("API error: {0}")]
    Api(Box<ApiError>),

    /// Transport-level failure. Never retried by the client.
    #[error("Network error: {0}")]
    Network(Box<NetworkError>),

    /// The response body could not be decoded.
    #[error("Parse error: {0}")]
    Parse(Box<ParseError>),

    /// The request could not be assembled.
    #[error("Invalid request: {0}")]
    InvalidRequest(Cow<'static, str>),

    /// The client configuration failed validation.
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigValidationError),

    /// The request context was cancelled before the call completed.
    #[error("Cancelled: {0}")]
    Cancelled(Cow<'static, str>),

    /// The request context deadline passed before the call completed.
    #[error("Timeout: {0}")]
    Timeout(Cow<'static, str>),

    /// Error with additional context, preserving the error chain.
    #[error("{context}")]
    Context {
        /// Context message describing what operation failed
        context: String,
        /// The underlying error
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    // ==================== Constructor Methods ====================

    /// Creates an API error from a code and message.
    ///
    /// ```rust
    /// use godaddy_core::error::Error;
    ///
    /// let err = Error::api("NOT_FOUND", "Domain not found");
    /// assert_eq!(err.as_api().map(|e| e.code.as_str()), Some("NOT_FOUND"));
    /// ```
    pub fn api(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Api(Box::new(ApiError::new(code, message)))
    }

    /// Creates a network error from a message.
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(Box::new(NetworkError::ConnectionFailed(msg.into())))
    }

    /// Creates an invalid request error.
    pub fn invalid_request(msg: impl Into<Cow<'static, str>>) -> Self {
        Self::InvalidRequest(msg.into())
    }

    /// Creates a cancelled error.
    pub fn cancelled(msg: impl Into<Cow<'static, str>>) -> Self {
        Self::Cancelled(msg.into())
    }

    /// Creates a timeout error.
    pub fn timeout(msg: impl Into<Cow<'static, str>>) -> Self {
        Self::Timeout(msg.into())
    }

    // ==================== Context Methods ====================

    /// Attaches context to an existing error.
    ///
    /// ```rust
    /// use godaddy_core::error::Error;
    ///
    /// let err = Error::network("Connection refused")
    ///     .context("Failed to list domains");
    /// assert!(err.report().contains("Connection refused"));
    /// ```
    #[must_use]
    pub fn context(self, context: impl Into<String>) -> Self {
        Self::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }

    fn iter_chain(&self) -> impl Iterator<Item = &Error> {
        std::iter::successors(Some(self), |err| match err {
            Error::Context { source, .. } => Some(source.as_ref()),
            _ => None,
        })
    }

    /// Returns the root cause of the error, skipping Context layers.
    #[must_use]
    pub fn root_cause(&self) -> &Error {
        self.iter_chain().last().unwrap_or(self)
    }

    /// Generates a detailed error report with the full chain.
    #[must_use]
    pub fn report(&self) -> String {
        use std::fmt::Write;
        let mut report = String::new();
        report.push_str(&self.to_string());

        let mut current: Option<&(dyn StdError + 'static)> = self.source();
        while let Some(err) = current {
            let _ = write!(report, "\nCaused by: {err}");
            current = err.source();
        }
        report
    }

    // ==================== Helper Methods (Context Penetrating) ====================

    /// Returns the API error if this is one (penetrates Context layers).
    #[must_use]
    pub fn as_api(&self) -> Option<&ApiError> {
        match self.root_cause() {
            Error::Api(api) => Some(api.as_ref()),
            _ => None,
        }
    }

    /// Returns `true` when the API reported [`ERR_CODE_QUOTA_EXCEEDED`].
    #[must_use]
    pub fn is_quota_exceeded(&self) -> bool {
        self.as_api().is_some_and(ApiError::is_quota_exceeded)
    }

    /// Returns the network error if this is one (penetrates Context layers).
    #[must_use]
    pub fn as_network(&self) -> Option<&NetworkError> {
        match self.root_cause() {
            Error::Network(ne) => Some(ne.as_ref()),
            _ => None,
        }
    }

    /// Returns the cancellation message if this is a cancelled error.
    ///
    /// ```rust
    /// use godaddy_core::error::Error;
    ///
    /// let err = Error::cancelled("Operation cancelled").context("Wrapped");
    /// assert_eq!(err.as_cancelled(), Some("Operation cancelled"));
    /// ```
    #[must_use]
    pub fn as_cancelled(&self) -> Option<&str> {
        match self.root_cause() {
            Error::Cancelled(msg) => Some(msg.as_ref()),
            _ => None,
        }
    }

    /// Returns the timeout message if this is a deadline error.
    #[must_use]
    pub fn as_timeout(&self) -> Option<&str> {
        match self.root_cause() {
            Error::Timeout(msg) => Some(msg.as_ref()),
            _ => None,
        }
    }

    /// Returns `true` for any decode failure of a response body.
    #[must_use]
    pub fn is_parse(&self) -> bool {
        matches!(self.root_cause(), Error::Parse(_))
    }
}

#[cfg(test)]
mod tests;
