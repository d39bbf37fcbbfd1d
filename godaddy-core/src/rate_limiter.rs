//! Rate Limiter Module
//!
//! Client-side token bucket keeping outbound traffic inside the API quota.
//! Tokens refill continuously at one per `refill_interval`, up to `burst`.
//! GoDaddy publishes a quota of 60 requests per minute per endpoint, so the
//! default is a burst of 60 with one token per second.
//!
//! # Features
//!
//! - **Token Bucket Algorithm**: fractional tokens, continuous refill
//! - **Async-Friendly**: waiting is a tokio sleep, never a blocked thread
//! - **Thread-Safe**: state lives behind `Arc<Mutex<>>`; clones share the bucket
//! - **Cancellable**: [`RateLimiter::acquire`] honors a [`RequestContext`]
//!
//! # Example
//!
//! ```rust
//! use godaddy_core::context::RequestContext;
//! use godaddy_core::rate_limiter::{RateLimiter, RateLimiterConfig};
//! use std::time::Duration;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> godaddy_core::Result<()> {
//! let limiter = RateLimiter::new(RateLimiterConfig::new(5, Duration::from_millis(200)));
//! limiter.acquire(&RequestContext::background()).await?;
//! assert_eq!(limiter.available_tokens().await, 4);
//! # Ok(())
//! # }
//! ```

use crate::context::RequestContext;
use crate::error::{ConfigValidationError, Error, Result, ValidationResult};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::{debug, trace};

/// Smallest wait used when rounding leaves a token just short of whole.
const MIN_WAIT: Duration = Duration::from_millis(1);

/// Rate limiter configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimiterConfig {
    /// Maximum number of tokens (requests admitted without waiting)
    pub burst: u32,
    /// Time to replenish one token
    pub refill_interval: Duration,
}

impl RateLimiterConfig {
    /// Create a new rate limiter configuration
    ///
    /// # Arguments
    ///
    /// * `burst` - Bucket size
    /// * `refill_interval` - Time to add one token
    pub fn new(burst: u32, refill_interval: Duration) -> Self {
        Self {
            burst,
            refill_interval,
        }
    }

    /// Steady-state throughput in requests per second.
    pub fn requests_per_second(&self) -> f64 {
        1.0 / self.refill_interval.as_secs_f64()
    }

    /// Checks that the bucket can admit anything at all.
    ///
    /// A burst above 60 or a refill faster than one per second works but
    /// outruns the published quota, so it is reported as a warning.
    pub fn validate(&self) -> std::result::Result<ValidationResult, ConfigValidationError> {
        let mut result = ValidationResult::new();

        if self.burst == 0 {
            return Err(ConfigValidationError::too_low("burst", 0, 1));
        }
        if self.refill_interval.is_zero() {
            return Err(ConfigValidationError::invalid(
                "refill_interval",
                "refill interval cannot be zero",
            ));
        }

        let default = Self::default();
        if self.burst > default.burst {
            result.add_warning(format!(
                "burst {} exceeds the API quota of {} requests",
                self.burst, default.burst
            ));
        }
        if self.refill_interval < default.refill_interval {
            result.add_warning(format!(
                "refill interval {:?} is faster than the API quota of one request per {:?}",
                self.refill_interval, default.refill_interval
            ));
        }

        Ok(result)
    }
}

impl Default for RateLimiterConfig {
    fn default() -> Self {
        // 60 requests per minute
        Self::new(60, Duration::from_secs(1))
    }
}

/// Internal state of the rate limiter
#[derive(Debug)]
struct RateLimiterState {
    /// Current number of available tokens, possibly fractional
    tokens: f64,
    /// Last time tokens were refilled
    last_refill: Instant,
    config: RateLimiterConfig,
}

impl RateLimiterState {
    fn new(config: RateLimiterConfig) -> Self {
        Self {
            tokens: f64::from(config.burst),
            last_refill: Instant::now(),
            config,
        }
    }

    fn refill(&mut self) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_refill);
        let earned = elapsed.as_secs_f64() / self.config.refill_interval.as_secs_f64();

        self.tokens = (self.tokens + earned).min(f64::from(self.config.burst));
        self.last_refill = now;
    }

    fn try_consume(&mut self) -> bool {
        self.refill();

        if self.tokens >= 1.0 {
            self.tokens -= 1.0;
            true
        } else {
            false
        }
    }

    /// Time until one whole token is available
    fn wait_time(&self) -> Duration {
        if self.tokens >= 1.0 {
            return Duration::ZERO;
        }

        let missing = 1.0 - self.tokens;
        self.config.refill_interval.mul_f64(missing).max(MIN_WAIT)
    }
}

/// Rate limiter using token bucket algorithm
///
/// Cloning shares the bucket; independent limiters never interfere.
#[derive(Debug, Clone)]
pub struct RateLimiter {
    state: Arc<Mutex<RateLimiterState>>,
}

impl RateLimiter {
    /// Create a new rate limiter with the given configuration
    pub fn new(config: RateLimiterConfig) -> Self {
        Self {
            state: Arc::new(Mutex::new(RateLimiterState::new(config))),
        }
    }

    /// The bucket configuration.
    pub async fn config(&self) -> RateLimiterConfig {
        self.state.lock().await.config
    }

    /// Waits for a token and consumes it.
    ///
    /// Returns [`Error::Cancelled`] if `ctx` is cancelled while waiting, and
    /// [`Error::Timeout`] if the wait would outlast the context deadline. In
    /// both cases no token is consumed.
    pub async fn acquire(&self, ctx: &RequestContext) -> Result<()> {
        loop {
            ctx.check()?;

            let wait = {
                let mut state = self.state.lock().await;
                if state.try_consume() {
                    trace!(tokens_left = state.tokens, "Rate limiter token acquired");
                    return Ok(());
                }
                state.wait_time()
            };

            if ctx.would_exceed_deadline(wait) {
                return Err(Error::timeout(format!(
                    "rate limiter wait of {}ms would exceed context deadline",
                    wait.as_millis()
                )));
            }

            debug!(wait_ms = %wait.as_millis(), "Rate limiter exhausted, waiting for refill");
            ctx.sleep(wait).await?;
        }
    }

    /// Consumes a token if one is available right now.
    pub async fn try_acquire(&self) -> bool {
        self.state.lock().await.try_consume()
    }

    /// Number of whole tokens currently available.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub async fn available_tokens(&self) -> u32 {
        let mut state = self.state.lock().await;
        state.refill();
        state.tokens.floor() as u32
    }

    /// Refills the bucket to its burst size.
    pub async fn reset(&self) {
        let mut state = self.state.lock().await;
        state.tokens = f64::from(state.config.burst);
        state.last_refill = Instant::now();
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(RateLimiterConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_api_quota() {
        let config = RateLimiterConfig::default();
        assert_eq!(config.burst, 60);
        assert_eq!(config.refill_interval, Duration::from_secs(1));
        assert!((config.requests_per_second() - 1.0).abs() < f64::EPSILON);
        assert!(!config.validate().unwrap().has_warnings());
    }

    #[test]
    fn test_config_validation() {
        assert!(
            RateLimiterConfig::new(0, Duration::from_secs(1))
                .validate()
                .is_err()
        );
        assert!(RateLimiterConfig::new(10, Duration::ZERO).validate().is_err());

        let fast = RateLimiterConfig::new(120, Duration::from_millis(100))
            .validate()
            .unwrap();
        assert_eq!(fast.warnings.len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_burst_then_block() {
        let limiter = RateLimiter::new(RateLimiterConfig::new(5, Duration::from_secs(1)));

        for _ in 0..5 {
            assert!(limiter.try_acquire().await);
        }
        assert!(!limiter.try_acquire().await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_refill_one_per_interval() {
        let limiter = RateLimiter::new(RateLimiterConfig::new(2, Duration::from_millis(100)));
        let ctx = RequestContext::background();

        limiter.acquire(&ctx).await.unwrap();
        limiter.acquire(&ctx).await.unwrap();

        let start = Instant::now();
        for _ in 0..3 {
            limiter.acquire(&ctx).await.unwrap();
        }
        let elapsed = start.elapsed();

        assert!(elapsed >= Duration::from_millis(300));
        assert!(elapsed < Duration::from_millis(350));
    }

    #[tokio::test(start_paused = true)]
    async fn test_refill_capped_at_burst() {
        let limiter = RateLimiter::new(RateLimiterConfig::new(3, Duration::from_millis(10)));
        for _ in 0..3 {
            assert!(limiter.try_acquire().await);
        }

        tokio::time::sleep(Duration::from_secs(10)).await;
        assert_eq!(limiter.available_tokens().await, 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_while_waiting_consumes_nothing() {
        let limiter = RateLimiter::new(RateLimiterConfig::new(1, Duration::from_secs(10)));
        let ctx = RequestContext::background();
        limiter.acquire(&ctx).await.unwrap();

        let canceller = ctx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_secs(1)).await;
            canceller.cancel();
        });

        let start = Instant::now();
        let err = limiter.acquire(&ctx).await.unwrap_err();
        assert!(err.as_cancelled().is_some());
        assert!(start.elapsed() < Duration::from_secs(2));

        // The token earned by t=10s must still be there.
        tokio::time::sleep(Duration::from_secs(10)).await;
        assert!(limiter.try_acquire().await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_deadline_shorter_than_wait_fails_immediately() {
        let limiter = RateLimiter::new(RateLimiterConfig::new(1, Duration::from_secs(10)));
        limiter.acquire(&RequestContext::background()).await.unwrap();

        let ctx = RequestContext::background().with_timeout(Duration::from_secs(1));
        let start = Instant::now();
        let err = limiter.acquire(&ctx).await.unwrap_err();

        assert!(err.as_timeout().is_some());
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset() {
        let limiter = RateLimiter::new(RateLimiterConfig::new(5, Duration::from_secs(1)));
        for _ in 0..5 {
            limiter.acquire(&RequestContext::background()).await.unwrap();
        }
        assert_eq!(limiter.available_tokens().await, 0);

        limiter.reset().await;
        assert_eq!(limiter.available_tokens().await, 5);
    }

    #[tokio::test(start_paused = true)]
    async fn test_concurrent_access() {
        let limiter = RateLimiter::new(RateLimiterConfig::new(10, Duration::from_secs(1)));

        let mut handles = vec![];
        for _ in 0..10 {
            let limiter = limiter.clone();
            handles.push(tokio::spawn(async move {
                limiter.acquire(&RequestContext::background()).await
            }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(limiter.available_tokens().await, 0);
    }
}
