use crate::error::{Error, Result};
use async_trait::async_trait;
use reqwest::{Request, Response};
use std::fmt;
use tracing::error;

/// The wire underneath the client.
///
/// Implementations send one fully built request and hand back the response
/// with its body unread. Retries, rate limiting and decoding all happen
/// above this seam, so a test double only has to script responses.
#[async_trait]
pub trait HttpTransport: Send + Sync + fmt::Debug {
    /// Sends `request`, failing only on transport-level problems.
    async fn send(&self, request: Request) -> Result<Response>;
}

/// Default transport backed by a shared `reqwest::Client`.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Creates a transport with a fresh connection pool.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| Error::network(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: Request) -> Result<Response> {
        self.client.execute(request).await.map_err(|e| {
            error!(
                error = %e,
                is_timeout = e.is_timeout(),
                is_connect = e.is_connect(),
                "HTTP request send failed"
            );
            Error::from(e)
        })
    }
}
