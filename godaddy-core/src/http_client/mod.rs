//! GoDaddy HTTP client
//!
//! The request pipeline, leaf to root:
//!
//! 1. **Request builder** ([`Client::new_request`]): method, `<endpoint><path>`,
//!    optional JSON body, `Authorization: sso-key <key>:<secret>`, `Accept`,
//!    `User-Agent` and the configured timeout.
//! 2. **Executor** ([`Client::execute`]): takes a rate-limiter token, sends,
//!    and on HTTP 429 sleeps `Retry-After + uniform[0, Retry-After) / 2`
//!    seconds before re-acquiring a token and resending, at most
//!    [`MAX_THROTTLE_RETRIES`] times. Transport failures are never retried.
//! 3. **Decoder** ([`decode_response`], [`check_response`]): non-2xx becomes an
//!    [`ApiError`](crate::error::ApiError); 2xx bodies deserialize into the
//!    caller's type, empty bodies into `None`.
//!
//! # Example
//!
//! ```rust,no_run
//! use godaddy_core::config::ClientConfig;
//! use godaddy_core::http_client::Client;
//! use serde_json::Value;
//!
//! # async fn example() -> godaddy_core::Result<()> {
//! let client = Client::new(ClientConfig::ote("key", "secret")).await?;
//! let domains: Option<Vec<Value>> = client.get("/v1/domains").await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Observability
//!
//! Every stage emits `tracing` events; the per-request [`RequestLogger`] hook
//! additionally sees each outgoing request and each received response,
//! retries included.

mod builder;
mod logger;
mod request;
mod response;
mod retry;
mod transport;


pub use builder::{Client, ClientBuilder};
pub use logger::{NoopLogger, RequestLogger, TracingRequestLogger};
pub use response::{check_response, decode_response};
pub use retry::{jittered_delay, parse_retry_after};
pub use transport::{HttpTransport, ReqwestTransport};

/// Number of resends after an HTTP 429, so at most three attempts per call.
pub const MAX_THROTTLE_RETRIES: u32 = 2;

/// `Content-Type` set on requests that carry a body.
pub const JSON_CONTENT_TYPE: &str = "application/json;charset=utf-8";
