use crate::context::RequestContext;
use crate::error::{ContextExt, Error, Result};
use rand::Rng;
use reqwest::header::{HeaderMap, RETRY_AFTER};
use reqwest::{Request, Response, StatusCode};
use std::time::Duration;
use tracing::{debug, error, warn};

use super::MAX_THROTTLE_RETRIES;
use super::builder::Client;

/// Reads `Retry-After` as a whole number of seconds.
///
/// Returns `None` when the header is missing, not ASCII, negative, or not an
/// integer; HTTP-date values are not accepted.
pub fn parse_retry_after(headers: &HeaderMap) -> Option<u64> {
    headers
        .get(RETRY_AFTER)?
        .to_str()
        .ok()?
        .trim()
        .parse::<u64>()
        .ok()
}

/// Backoff for a 429: `retry_after + uniform[0, retry_after) / 2` seconds.
///
/// The half-draw uses integer division, so the result always lies in
/// `[retry_after, retry_after + retry_after / 2]`. A zero hint yields zero.
pub fn jittered_delay<R: Rng + ?Sized>(retry_after: u64, rng: &mut R) -> Duration {
    if retry_after == 0 {
        return Duration::ZERO;
    }
    let jitter = rng.gen_range(0..retry_after);
    Duration::from_secs(retry_after.saturating_add(jitter / 2))
}

impl Client {
    /// Sends `request` under the rate limiter, resending after HTTP 429.
    ///
    /// Each attempt, the first included, takes one limiter token. Transport
    /// errors are returned as-is. A 429 without a usable `Retry-After`, or
    /// one still present after [`MAX_THROTTLE_RETRIES`] resends, is handed
    /// back to the caller for decoding.
    pub async fn execute(&self, ctx: &RequestContext, request: Request) -> Result<Response> {
        self.rate_limiter().acquire(ctx).await?;
        let mut response = self.send_once(ctx, &request).await?;

        for retry in 1..=MAX_THROTTLE_RETRIES {
            if response.status() != StatusCode::TOO_MANY_REQUESTS {
                break;
            }

            let Some(retry_after) = parse_retry_after(response.headers()) else {
                error!(
                    url = %request.url(),
                    "Rate-limited response did not contain a valid Retry-After header, quota likely exceeded"
                );
                break;
            };

            let delay = jittered_delay(retry_after, &mut rand::thread_rng());
            warn!(
                url = %request.url(),
                retry,
                retry_after_secs = retry_after,
                delay_secs = delay.as_secs(),
                "Rate-limited, waiting before retry"
            );
            drop(response);

            ctx.sleep(delay).await?;
            self.rate_limiter().acquire(ctx).await?;
            response = self
                .send_once(ctx, &request)
                .await
                .with_context(|| {
                    format!("doing request after waiting {}s for Retry-After", delay.as_secs())
                })?;
        }

        Ok(response)
    }

    async fn send_once(&self, ctx: &RequestContext, request: &Request) -> Result<Response> {
        let attempt = request
            .try_clone()
            .ok_or_else(|| Error::invalid_request("request body cannot be cloned for sending"))?;

        self.logger().log_request(&attempt);
        let response = ctx.run(self.transport().send(attempt)).await??;
        self.logger().log_response(&response);

        debug!(
            method = %request.method(),
            url = %request.url(),
            status = response.status().as_u16(),
            "GoDaddy request completed"
        );
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use reqwest::header::HeaderValue;

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(RETRY_AFTER, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_parse_retry_after_integer() {
        assert_eq!(parse_retry_after(&headers_with("2")), Some(2));
        assert_eq!(parse_retry_after(&headers_with(" 30 ")), Some(30));
        assert_eq!(parse_retry_after(&headers_with("0")), Some(0));
    }

    #[test]
    fn test_parse_retry_after_rejects_unusable_values() {
        assert_eq!(parse_retry_after(&HeaderMap::new()), None);
        assert_eq!(parse_retry_after(&headers_with("soon")), None);
        assert_eq!(parse_retry_after(&headers_with("-1")), None);
        assert_eq!(parse_retry_after(&headers_with("1.5")), None);
        assert_eq!(
            parse_retry_after(&headers_with("Wed, 21 Oct 2015 07:28:00 GMT")),
            None
        );
    }

    #[test]
    fn test_jittered_delay_zero() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(jittered_delay(0, &mut rng), Duration::ZERO);
    }

    #[test]
    fn test_jittered_delay_of_two_is_two() {
        // Draws from [0, 2) halve to 0.
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            assert_eq!(jittered_delay(2, &mut rng), Duration::from_secs(2));
        }
    }

    #[test]
    fn test_jittered_delay_saturates() {
        let mut rng = StdRng::seed_from_u64(1);
        let delay = jittered_delay(u64::MAX, &mut rng);
        assert_eq!(delay, Duration::from_secs(u64::MAX));
    }

    proptest! {
        #[test]
        fn prop_jittered_delay_bounds(retry_after in 1u64..100_000, seed in any::<u64>()) {
            let mut rng = StdRng::seed_from_u64(seed);
            let delay = jittered_delay(retry_after, &mut rng).as_secs();
            prop_assert!(delay >= retry_after);
            prop_assert!(delay <= retry_after + retry_after / 2);
            prop_assert!(2 * delay < 3 * retry_after);
        }
    }
}
