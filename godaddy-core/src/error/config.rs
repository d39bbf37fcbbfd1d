//! Configuration validation error types.
//!
//! Returned by [`ClientConfig::validate`](crate::config::ClientConfig::validate)
//! and [`RateLimiterConfig::validate`](crate::rate_limiter::RateLimiterConfig::validate)
//! so a bad key, endpoint or bucket shape is caught before the first request.

use std::fmt;
use thiserror::Error;

/// A configuration field that cannot be used.
///
/// # Example
///
/// ```rust
/// use godaddy_core::error::ConfigValidationError;
///
/// let err = ConfigValidationError::too_low("burst", 0, 1);
/// assert_eq!(err.field_name(), "burst");
/// assert!(err.to_string().contains("below minimum 1"));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigValidationError {
    /// Field value exceeds the maximum allowed value.
    #[error("Field '{field}' value {value} exceeds maximum {max}")]
    ValueTooHigh {
        /// The name of the configuration field
        field: &'static str,
        /// The actual value that was provided
        value: String,
        /// The maximum allowed value
        max: String,
    },

    /// Field value is below the minimum allowed value.
    #[error("Field '{field}' value {value} is below minimum {min}")]
    ValueTooLow {
        /// The name of the configuration field
        field: &'static str,
        /// The actual value that was provided
        value: String,
        /// The minimum allowed value
        min: String,
    },

    /// Field value is malformed.
    #[error("Field '{field}' has invalid value: {reason}")]
    ValueInvalid {
        /// The name of the configuration field
        field: &'static str,
        /// Why the value was rejected
        reason: String,
    },

    /// Required field is empty.
    #[error("Required field '{field}' is missing")]
    ValueMissing {
        /// The name of the missing configuration field
        field: &'static str,
    },
}

impl ConfigValidationError {
    /// Returns the field name associated with this error.
    #[must_use]
    pub fn field_name(&self) -> &'static str {
        match self {
            ConfigValidationError::ValueTooHigh { field, .. }
            | ConfigValidationError::ValueTooLow { field, .. }
            | ConfigValidationError::ValueInvalid { field, .. }
            | ConfigValidationError::ValueMissing { field } => field,
        }
    }

    /// Creates a new `ValueTooHigh` error.
    pub fn too_high<V: fmt::Display, M: fmt::Display>(
        field: &'static str,
        value: V,
        max: M,
    ) -> Self {
        ConfigValidationError::ValueTooHigh {
            field,
            value: value.to_string(),
            max: max.to_string(),
        }
    }

    /// Creates a new `ValueTooLow` error.
    pub fn too_low<V: fmt::Display, M: fmt::Display>(
        field: &'static str,
        value: V,
        min: M,
    ) -> Self {
        ConfigValidationError::ValueTooLow {
            field,
            value: value.to_string(),
            min: min.to_string(),
        }
    }

    /// Creates a new `ValueInvalid` error.
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ConfigValidationError::ValueInvalid {
            field,
            reason: reason.into(),
        }
    }

    /// Creates a new `ValueMissing` error.
    pub fn missing(field: &'static str) -> Self {
        ConfigValidationError::ValueMissing { field }
    }
}

/// Outcome of a validation that passed, possibly with warnings.
///
/// Warnings describe settings that work but are likely to misbehave, such as
/// a burst above the API's published quota.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    /// Non-fatal findings.
    pub warnings: Vec<String>,
}

impl ValidationResult {
    /// Creates an empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a result carrying the given warnings.
    #[must_use]
    pub fn with_warnings(warnings: Vec<String>) -> Self {
        Self { warnings }
    }

    /// Records a warning.
    pub fn add_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }

    /// Returns `true` if any warning was recorded.
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Folds another result's warnings into this one.
    pub fn merge(&mut self, other: ValidationResult) {
        self.warnings.extend(other.warnings);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_mentions_field_and_bounds() {
        let msg = ConfigValidationError::too_high("burst", 600, 60).to_string();
        assert!(msg.contains("burst"));
        assert!(msg.contains("600"));
        assert!(msg.contains("60"));

        let msg = ConfigValidationError::missing("api_key").to_string();
        assert!(msg.contains("api_key"));
        assert!(msg.contains("missing"));
    }

    #[test]
    fn test_field_name() {
        assert_eq!(
            ConfigValidationError::invalid("endpoint", "no scheme").field_name(),
            "endpoint"
        );
        assert_eq!(
            ConfigValidationError::too_low("timeout", "0ns", "1ms").field_name(),
            "timeout"
        );
    }

    #[test]
    fn test_validation_result_merge() {
        let mut first = ValidationResult::new();
        assert!(!first.has_warnings());
        first.add_warning("burst above published quota");

        let second = ValidationResult::with_warnings(vec!["short timeout".to_string()]);
        first.merge(second);

        assert_eq!(first.warnings.len(), 2);
        assert!(first.has_warnings());
    }
}
