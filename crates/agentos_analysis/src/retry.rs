//! Bounded retry for model calls.

use agentos_error::{AgentosError, AgentosResult};
use std::future::Future;
use std::time::Duration;
use tokio_retry2::strategy::{ExponentialBackoff, jitter};
use tokio_retry2::{Retry, RetryError};

/// Exponential backoff with jitter, applied to retryable errors only.
///
/// Permanent errors (see [`AgentosError::is_retryable`]) propagate after the
/// first attempt. Host errors are never retryable.
///
/// # Examples
///
/// ```
/// use agentos_analysis::RetryPolicy;
///
/// let policy = RetryPolicy::new(2, 500);
/// assert_eq!(*policy.max_retries(), 2);
/// assert_eq!(*RetryPolicy::none().max_retries(), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_getters::Getters)]
pub struct RetryPolicy {
    /// Retries after the first attempt
    max_retries: usize,
    /// Initial backoff in milliseconds
    base_delay_ms: u64,
    /// Upper bound on a single backoff
    max_delay: Duration,
}

impl RetryPolicy {
    /// Default number of retries for model calls.
    pub const DEFAULT_MAX_RETRIES: usize = 2;
    /// Default initial backoff.
    pub const DEFAULT_BASE_DELAY_MS: u64 = 500;
    /// Default backoff ceiling.
    pub const DEFAULT_MAX_DELAY: Duration = Duration::from_secs(8);

    /// Create a policy with the default ceiling.
    pub fn new(max_retries: usize, base_delay_ms: u64) -> Self {
        Self {
            max_retries,
            base_delay_ms,
            max_delay: Self::DEFAULT_MAX_DELAY,
        }
    }

    /// A policy that attempts exactly once.
    pub fn none() -> Self {
        Self::new(0, Self::DEFAULT_BASE_DELAY_MS)
    }

    /// Set the backoff ceiling.
    pub fn with_max_delay(mut self, max_delay: Duration) -> Self {
        self.max_delay = max_delay;
        self
    }

    /// Delay before each retry, without jitter.
    ///
    /// Doubles from the base delay and stops growing at the ceiling.
    ///
    /// ```
    /// use agentos_analysis::RetryPolicy;
    /// use std::time::Duration;
    ///
    /// let delays = RetryPolicy::new(3, 500).delays();
    /// assert_eq!(delays, [500, 1000, 2000].map(Duration::from_millis));
    /// ```
    pub fn delays(&self) -> Vec<Duration> {
        // from_millis(2) yields factor * 2^n for n >= 1; halving starts the series at factor.
        ExponentialBackoff::from_millis(2)
            .factor(self.base_delay_ms.max(1))
            .max_delay(self.max_delay.saturating_mul(2))
            .map(|delay| delay / 2)
            .take(self.max_retries)
            .collect()
    }

    /// Run `operation`, retrying retryable failures up to the bound.
    pub async fn run<T, F, Fut>(&self, operation: &str, mut attempt: F) -> AgentosResult<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = AgentosResult<T>>,
    {
        let strategy = self.delays().into_iter().map(jitter);

        Retry::spawn(strategy, || {
            let fut = attempt();
            async move {
                fut.await.map_err(|e: AgentosError| {
                    if e.is_retryable() {
                        tracing::warn!(operation, error = %e, "Transient failure, will retry");
                        RetryError::Transient {
                            err: e,
                            retry_after: None,
                        }
                    } else {
                        tracing::warn!(operation, error = %e, "Permanent failure, not retrying");
                        RetryError::Permanent(e)
                    }
                })
            }
        })
        .await
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_RETRIES, Self::DEFAULT_BASE_DELAY_MS)
    }
}
