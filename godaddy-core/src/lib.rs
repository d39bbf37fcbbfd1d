//! GoDaddy Core Library
//!
//! Request pipeline for the GoDaddy REST API: a client-side token bucket,
//! `sso-key` signed requests, bounded retry on HTTP 429 honoring
//! `Retry-After`, and decoding of the API's JSON error envelope.
//!
//! # Features
//!
//! - **Rate limiting**: one shared token bucket per client (60 burst, 1/s)
//! - **Throttle retry**: up to two resends after 429, jittered above the server hint
//! - **Typed errors**: [`ApiError`] envelopes kept apart from transport and parse failures
//! - **Cancellation**: every wait honors a [`RequestContext`]
//!
//! # Example
//!
//! ```rust,no_run
//! use godaddy_core::prelude::*;
//! use serde_json::Value;
//!
//! # async fn example() -> Result<()> {
//! let client = Client::new(ClientConfig::new("key", "secret")).await?;
//!
//! let ctx = RequestContext::background().with_timeout(std::time::Duration::from_secs(30));
//! let records: Option<Vec<Value>> = client
//!     .get_with_context(&ctx, "/v1/domains/example.com/records/A")
//!     .await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::return_self_not_must_use)]

pub use tokio_util::sync::CancellationToken;

pub mod config;
pub mod context;
pub mod credentials;
pub mod error;
pub mod http_client;
pub mod logging;
pub mod rate_limiter;

pub use config::{ClientConfig, DEFAULT_TIMEOUT, OTE_ENDPOINT, PRODUCTION_ENDPOINT};
pub use context::RequestContext;
pub use credentials::{ApiCredentials, SecretString};
pub use error::{ApiError, ApiErrorField, ERR_CODE_QUOTA_EXCEEDED, Error, Result};
pub use http_client::{
    Client, ClientBuilder, HttpTransport, NoopLogger, RequestLogger, TracingRequestLogger,
};
pub use rate_limiter::{RateLimiter, RateLimiterConfig};

/// Prelude module for convenient imports.
///
/// ```rust
/// use godaddy_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::ClientConfig;
    pub use crate::context::RequestContext;
    pub use crate::error::{ApiError, ContextExt, Error, Result};
    pub use crate::http_client::{Client, RequestLogger};
    pub use crate::rate_limiter::RateLimiterConfig;
    pub use reqwest::Method;
}

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
