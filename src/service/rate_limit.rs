//! Token-bucket pacing for provider calls.
//!
//! One [`RateLimiter`] is shared across every retry-wrapped provider call so
//! pacing policy lives in a single place instead of sleep statements
//! scattered through call sites. The default budget of one permit per 600 ms
//! matches the provider's tolerated request rate.

use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::Instant;

pub struct RateLimiter {
    capacity: f64,
    refill_per_sec: f64,
    state: Mutex<BucketState>,
}

struct BucketState {
    tokens: f64,
    last_refill: Instant,
}

impl RateLimiter {
    const DEFAULT_REFILL_INTERVAL: Duration = Duration::from_millis(600);

    /// Creates a limiter holding at most `capacity` permits, regaining one
    /// permit every `refill_interval`.
    pub fn new(capacity: u32, refill_interval: Duration) -> Self {
        let capacity = f64::from(capacity.max(1));

        Self {
            capacity,
            refill_per_sec: 1.0 / refill_interval.as_secs_f64().max(f64::EPSILON),
            state: Mutex::new(BucketState {
                tokens: capacity,
                last_refill: Instant::now(),
            }),
        }
    }

    /// Waits until a permit is available and consumes it.
    pub async fn acquire(&self) {
        loop {
            let wait = {
                let mut state = self.state.lock().await;
                let now = Instant::now();
                let elapsed = now.duration_since(state.last_refill).as_secs_f64();

                state.tokens = (state.tokens + elapsed * self.refill_per_sec).min(self.capacity);
                state.last_refill = now;

                if state.tokens >= 1.0 {
                    state.tokens -= 1.0;
                    return;
                }

                Duration::from_secs_f64((1.0 - state.tokens) / self.refill_per_sec)
            };

            tokio::time::sleep(wait).await;
        }
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(1, Self::DEFAULT_REFILL_INTERVAL)
    }
}
