use reqwest::{Request, Response};
use std::fmt;
use tracing::debug;

/// Observer for HTTP traffic.
///
/// Called immediately before every send and immediately after every
/// received response, including 429 retries. Implementations only observe;
/// they cannot alter the request or the control flow.
pub trait RequestLogger: Send + Sync + fmt::Debug {
    /// Observes an outgoing request.
    fn log_request(&self, request: &Request);

    /// Observes an incoming response (body not yet read).
    fn log_response(&self, response: &Response);
}

/// Logger that does nothing. The default.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLogger;

impl RequestLogger for NoopLogger {
    fn log_request(&self, _request: &Request) {}

    fn log_response(&self, _response: &Response) {}
}

/// Logger emitting one `tracing` debug event per request and per response.
///
/// The `Authorization` header is never printed.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingRequestLogger;

impl RequestLogger for TracingRequestLogger {
    fn log_request(&self, request: &Request) {
        debug!(
            method = %request.method(),
            url = %request.url(),
            has_body = request.body().is_some(),
            "GoDaddy request"
        );
    }

    fn log_response(&self, response: &Response) {
        debug!(
            status = response.status().as_u16(),
            content_length = ?response.content_length(),
            retry_after = ?response.headers().get(reqwest::header::RETRY_AFTER),
            "GoDaddy response"
        );
    }
}
