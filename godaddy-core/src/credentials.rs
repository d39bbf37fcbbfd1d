//! API credentials and the `sso-key` authorization scheme.
//!
//! The secret half of the key pair is held in a [`SecretString`], which is
//! zeroed on drop and redacted from `Debug`/`Display`, so a client can be
//! logged with `{:?}` without leaking it.
//!
//! # Example
//!
//! ```rust
//! use godaddy_core::credentials::ApiCredentials;
//!
//! let creds = ApiCredentials::new("my-key", "my-secret");
//! assert_eq!(format!("{creds:?}"), r#"ApiCredentials { key: "my-key", secret: [REDACTED] }"#);
//! ```

use crate::error::{Error, Result};
use reqwest::header::HeaderValue;
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Authorization scheme GoDaddy uses for key/secret pairs.
pub const AUTH_SCHEME: &str = "sso-key";

/// A string that is zeroed when dropped and never printed.
#[derive(Clone, Zeroize, ZeroizeOnDrop, PartialEq, Eq)]
pub struct SecretString(String);

impl SecretString {
    /// Creates a new secret string.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the secret value.
    ///
    /// Use the reference immediately; do not persist it.
    #[inline]
    pub fn expose_secret(&self) -> &str {
        &self.0
    }

    /// Returns true if the secret string is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl fmt::Display for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl From<String> for SecretString {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for SecretString {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Key/secret pair issued by the GoDaddy developer portal.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiCredentials {
    /// Public API key
    pub key: String,
    /// API secret
    pub secret: SecretString,
}

impl ApiCredentials {
    /// Creates a credential pair.
    pub fn new(key: impl Into<String>, secret: impl Into<SecretString>) -> Self {
        Self {
            key: key.into(),
            secret: secret.into(),
        }
    }

    /// Builds the `Authorization` header value, `sso-key <key>:<secret>`.
    ///
    /// The value is flagged sensitive so HTTP debug output masks it.
    pub fn authorization_header(&self) -> Result<HeaderValue> {
        let mut raw = format!(
            "{AUTH_SCHEME} {}:{}",
            self.key,
            self.secret.expose_secret()
        );
        let parsed = HeaderValue::from_str(&raw);
        raw.zeroize();

        let mut value = parsed.map_err(|_| {
            Error::invalid_request("API key or secret contains characters not allowed in a header")
        })?;
        value.set_sensitive(true);
        Ok(value)
    }
}

impl fmt::Debug for ApiCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiCredentials")
            .field("key", &self.key)
            .field("secret", &self.secret)
            .finish()
    }
}
