//! Retry wrapper for provider operations.
//!
//! [`RetryContext`] executes an operation with bounded retries and linearly
//! increasing backoff between attempts, acquiring a permit from the shared
//! [`RateLimiter`] before every attempt so pacing holds across retries too.
//! The generic cache type `T` persists data between attempts, letting a retry
//! skip fetches that already succeeded.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, error, warn};

use crate::error::{retry::ErrorRetryStrategy, Error};
use crate::service::rate_limit::RateLimiter;

/// Context for executing provider operations with pacing and retry.
///
/// - **Max attempts**: 3
/// - **Backoff**: linear, `step × attempt` (1s, 2s, ...)
/// - **Pacing**: one rate-limiter permit per attempt
/// - **Retry conditions**: only errors classified [`ErrorRetryStrategy::Retry`]
///
/// `T` is a cache shared across attempts, typically [`super::sync::SyncCache`]
/// or `()` for operations with nothing to carry over.
pub struct RetryContext<T> {
    /// Cache to be used between retries to prevent unnecessary additional fetches
    cache: T,
    limiter: Arc<RateLimiter>,
    /// Maximum number of attempts before giving up
    max_attempts: u32,
    /// Backoff step in seconds (multiplied by the attempt number)
    backoff_step_secs: u64,
}

impl<T> RetryContext<T>
where
    T: Clone + Default,
{
    const DEFAULT_MAX_ATTEMPTS: u32 = 3;
    const DEFAULT_BACKOFF_STEP_SECS: u64 = 1;

    pub fn new(limiter: Arc<RateLimiter>) -> Self {
        Self {
            cache: T::default(),
            limiter,
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
            backoff_step_secs: Self::DEFAULT_BACKOFF_STEP_SECS,
        }
    }

    /// Executes `operation` with pacing, retrying transient failures.
    ///
    /// Errors classified [`ErrorRetryStrategy::Fail`] return immediately;
    /// retryable errors back off linearly until `max_attempts` is exhausted,
    /// then the final error propagates to the caller.
    pub async fn execute_with_retry<R, F>(
        &mut self,
        description: &str,
        operation: F,
    ) -> Result<R, Error>
    where
        F: for<'a> Fn(
            &'a mut T,
        ) -> std::pin::Pin<
            Box<dyn std::future::Future<Output = Result<R, Error>> + Send + 'a>,
        >,
    {
        let mut attempt_count = 0;

        loop {
            debug!(
                "Processing {} (attempt {}/{})",
                description,
                attempt_count + 1,
                self.max_attempts
            );

            // Pacing applies to every attempt, retries included
            self.limiter.acquire().await;

            let result = operation(&mut self.cache).await;

            match result {
                Ok(result) => {
                    debug!("Successfully processed {}", description);
                    return Ok(result);
                }
                Err(e) => match e.to_retry_strategy() {
                    ErrorRetryStrategy::Fail => {
                        error!("Permanent error for {}: {:?}", description, e);
                        return Err(e);
                    }
                    ErrorRetryStrategy::Retry => {
                        attempt_count += 1;
                        if attempt_count >= self.max_attempts {
                            error!(
                                "Max attempts ({}) exceeded for {}: {:?}",
                                self.max_attempts, description, e
                            );
                            return Err(e);
                        }

                        let backoff =
                            Duration::from_secs(self.backoff_step_secs * u64::from(attempt_count));

                        warn!(
                            "Retrying {} (attempt {}/{}) after {:?}: {:?}",
                            description, attempt_count, self.max_attempts, backoff, e
                        );

                        tokio::time::sleep(backoff).await;
                    }
                },
            }
        }
    }
}
