//! Property-based tests for the token bucket.

use godaddy_core::RequestContext;
use godaddy_core::rate_limiter::{RateLimiter, RateLimiterConfig};
use proptest::prelude::*;
use std::time::Duration;

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .start_paused(true)
        .build()
        .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// A fresh bucket hands out exactly `burst` tokens without waiting.
    #[test]
    fn prop_burst_is_available_immediately(burst in 1u32..200) {
        runtime().block_on(async {
            let limiter = RateLimiter::new(RateLimiterConfig::new(burst, Duration::from_secs(1)));
            for _ in 0..burst {
                prop_assert!(limiter.try_acquire().await);
            }
            prop_assert!(!limiter.try_acquire().await);
            Ok(())
        })?;
    }

    /// Over a window of `secs`, at most `burst + secs / interval` tokens are granted.
    #[test]
    fn prop_grants_never_exceed_bucket_bound(
        burst in 1u32..20,
        interval_ms in 100u64..2_000,
        window_secs in 1u64..30,
    ) {
        runtime().block_on(async {
            let interval = Duration::from_millis(interval_ms);
            let limiter = RateLimiter::new(RateLimiterConfig::new(burst, interval));
            let ctx = RequestContext::background();
            let start = tokio::time::Instant::now();
            let window = Duration::from_secs(window_secs);

            let mut granted: u64 = 0;
            loop {
                limiter.acquire(&ctx).await.unwrap();
                if start.elapsed() > window {
                    break;
                }
                granted += 1;
            }

            let refills = window.as_millis() as u64 / interval_ms;
            prop_assert!(granted <= u64::from(burst) + refills + 1,
                "granted {} with burst {} and {} refills", granted, burst, refills);
            prop_assert!(granted >= u64::from(burst));
            Ok(())
        })?;
    }

    /// A deadline shorter than the refill wait fails without consuming.
    #[test]
    fn prop_short_deadline_times_out(interval_secs in 2u64..120) {
        runtime().block_on(async {
            let limiter = RateLimiter::new(RateLimiterConfig::new(1, Duration::from_secs(interval_secs)));
            prop_assert!(limiter.try_acquire().await);

            let ctx = RequestContext::background().with_timeout(Duration::from_secs(1));
            let err = limiter.acquire(&ctx).await.unwrap_err();
            prop_assert!(err.as_timeout().is_some());
            Ok(())
        })?;
    }
}
