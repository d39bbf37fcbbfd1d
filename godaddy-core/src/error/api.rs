//! The GoDaddy error envelope.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Error code the API returns once the per-endpoint request quota is used up.
pub const ERR_CODE_QUOTA_EXCEEDED: &str = "QUOTA_EXCEEDED";

/// A single field-level problem reported inside an [`ApiError`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorField {
    /// Machine-readable reason.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub code: String,
    /// Human-readable reason.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,
    /// JSONPath of the offending request field.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub path: String,
    /// JSONPath of a field related to the offending one.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub path_related: String,
}

/// Structured error returned by the API for any status outside `[200, 300)`.
///
/// # Example
///
/// ```rust
/// use godaddy_core::error::ApiError;
///
/// let err: ApiError =
///     serde_json::from_str(r#"{"code":"QUOTA_EXCEEDED","message":"limit hit"}"#).unwrap();
/// assert!(err.is_quota_exceeded());
/// assert_eq!(err.to_string(), r#"Error QUOTA_EXCEEDED: "limit hit""#);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// Machine-readable error code.
    #[serde(default)]
    pub code: String,
    /// Human-readable description.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,
    /// Field-level details, when the API supplies them.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<ApiErrorField>,
}

impl ApiError {
    /// Creates an API error without field details.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            fields: Vec::new(),
        }
    }

    /// Pseudo-code used when the envelope does not carry its own code.
    #[must_use]
    pub fn status_code(status: u16) -> String {
        format!("HTTPStatus: {status}")
    }

    /// Returns `true` if the API rejected the call for quota reasons.
    #[must_use]
    pub fn is_quota_exceeded(&self) -> bool {
        self.code == ERR_CODE_QUOTA_EXCEEDED
    }

    /// Renders the envelope as compact JSON for log lines.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "<error>".to_string())
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error {}: {:?}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}
