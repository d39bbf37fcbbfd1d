//! Client configuration.

use crate::credentials::ApiCredentials;
use crate::error::{ConfigValidationError, ValidationResult};
use crate::rate_limiter::RateLimiterConfig;
use std::time::Duration;

/// Production API endpoint.
pub const PRODUCTION_ENDPOINT: &str = "https://api.godaddy.com";

/// OTE (test environment) API endpoint.
pub const OTE_ENDPOINT: &str = "https://api.ote-godaddy.com";

/// Per-request timeout applied when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(180);

/// Endpoint probed once at construction to verify credentials.
pub const DEFAULT_VALIDATION_PATH: &str = "/v1/domains?statuses=ACTIVE,PENDING_DNS_ACTIVE";

/// Timeouts above this are accepted but warned about.
const LONG_TIMEOUT: Duration = Duration::from_secs(600);

/// Default `User-Agent` value.
pub fn default_user_agent() -> String {
    format!("godaddy-rs/{}", env!("CARGO_PKG_VERSION"))
}

/// Settings for a [`Client`](crate::http_client::Client).
///
/// Immutable once the client is built; requests only read it.
///
/// # Example
///
/// ```rust
/// use godaddy_core::config::{ClientConfig, OTE_ENDPOINT};
/// use std::time::Duration;
///
/// let config = ClientConfig::ote("key", "secret").with_timeout(Duration::from_secs(30));
/// assert_eq!(config.endpoint, OTE_ENDPOINT);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Key/secret pair used for the `Authorization` header
    pub credentials: ApiCredentials,
    /// Base URL every request path is appended to
    pub endpoint: String,
    /// Per-request timeout
    pub timeout: Duration,
    /// Client-side token bucket shape
    pub rate_limit: RateLimiterConfig,
    /// `User-Agent` header value
    pub user_agent: String,
    /// Path requested once at construction to fail fast on bad credentials
    pub validation_path: String,
}

impl ClientConfig {
    /// Configuration against the production API.
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            credentials: ApiCredentials::new(api_key.into(), api_secret.into()),
            endpoint: PRODUCTION_ENDPOINT.to_string(),
            timeout: DEFAULT_TIMEOUT,
            rate_limit: RateLimiterConfig::default(),
            user_agent: default_user_agent(),
            validation_path: DEFAULT_VALIDATION_PATH.to_string(),
        }
    }

    /// Configuration against the OTE test environment.
    pub fn ote(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self::new(api_key, api_secret).with_endpoint(OTE_ENDPOINT)
    }

    /// Overrides the base endpoint (a mock server in tests, for instance).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Sets the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the rate limiter shape.
    pub fn with_rate_limit(mut self, rate_limit: RateLimiterConfig) -> Self {
        self.rate_limit = rate_limit;
        self
    }

    /// Sets the `User-Agent` header value.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Sets the path probed at construction.
    pub fn with_validation_path(mut self, path: impl Into<String>) -> Self {
        self.validation_path = path.into();
        self
    }

    /// Validates the configuration.
    ///
    /// # Validation Rules
    ///
    /// - API key and secret must be non-empty
    /// - `endpoint` must be an `http://` or `https://` URL without a trailing slash
    /// - `timeout` must be non-zero; under 1 second or over 10 minutes warns
    /// - `rate_limit` must pass [`RateLimiterConfig::validate`]
    pub fn validate(&self) -> Result<ValidationResult, ConfigValidationError> {
        let mut result = ValidationResult::new();

        if self.credentials.key.is_empty() {
            return Err(ConfigValidationError::missing("api_key"));
        }
        if self.credentials.secret.is_empty() {
            return Err(ConfigValidationError::missing("api_secret"));
        }

        if !(self.endpoint.starts_with("https://") || self.endpoint.starts_with("http://")) {
            return Err(ConfigValidationError::invalid(
                "endpoint",
                format!("{} is not an http(s) URL", self.endpoint),
            ));
        }
        if self.endpoint.ends_with('/') {
            return Err(ConfigValidationError::invalid(
                "endpoint",
                "endpoint must not end with '/', request paths start with one",
            ));
        }

        if self.timeout.is_zero() {
            return Err(ConfigValidationError::too_low("timeout", "0s", "1ms"));
        }
        if self.timeout > LONG_TIMEOUT {
            result.add_warning(format!(
                "timeout {:?} is over 10 minutes, stalled requests will hold a limiter slot that long",
                self.timeout
            ));
        }
        if self.timeout < Duration::from_secs(1) {
            result.add_warning(format!(
                "timeout {:?} is very short, may cause frequent timeouts",
                self.timeout
            ));
        }

        result.merge(self.rate_limit.validate()?);
        Ok(result)
    }
}
