//! # godaddy-rs
//!
//! A rate-limited, retrying HTTP client for the GoDaddy REST API.
//!
//! ## Features
//!
//! - **Async/Await**: Built on tokio; every wait is cancellable
//! - **Quota-aware**: client-side token bucket plus `Retry-After` driven resends
//! - **Typed errors**: the API's JSON error envelope surfaces as [`ApiError`]
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use godaddy_rs::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = Client::new(ClientConfig::ote("key", "secret")).await?;
//!     client
//!         .call_api_no_content(
//!             &RequestContext::background(),
//!             Method::DELETE,
//!             "/v1/domains/example.com/records/A/www",
//!             None::<&()>,
//!         )
//!         .await?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub use godaddy_core::{
    ApiError, Client, ClientBuilder, ClientConfig, Error, RequestContext, Result, config, context,
    credentials, error, http_client, logging, rate_limiter,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use godaddy_core::prelude::*;
}
