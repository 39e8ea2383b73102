//! Backoff driver.

use crate::config::RetryPolicy;
use std::future::Future;
use std::time::Duration;
use tracing::info;

/// Classification of a failed attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptOutcome {
    /// Sleep and try again if the budget allows
    Retryable,
    /// Stop immediately
    Fatal,
}

/// Run `operation` until it succeeds, fails fatally, or the attempt budget
/// is spent.
///
/// `classify` decides whether an error is worth another attempt.
/// `on_retry(attempt, max_attempts, delay)` fires before each sleep, where
/// `attempt` is the 1-based number of the attempt that just failed.
///
/// Returns the last error together with the number of attempts made.
pub async fn retry_with_backoff<T, E, Op, Fut, C, R>(
    policy: &RetryPolicy,
    mut operation: Op,
    classify: C,
    mut on_retry: R,
) -> Result<T, (E, u32)>
where
    Op: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    C: Fn(&E) -> AttemptOutcome,
    R: FnMut(u32, u32, Duration),
    E: std::fmt::Display,
{
    let max_attempts = policy.attempts();
    let mut attempt = 0;

    loop {
        attempt += 1;
        let err = match operation().await {
            Ok(value) => return Ok(value),
            Err(err) => err,
        };

        if classify(&err) == AttemptOutcome::Fatal || attempt >= max_attempts {
            return Err((err, attempt));
        }

        let delay = policy.delay_for(attempt - 1);
        info!(
            "Attempt {}/{} failed ({}), retrying in {:?}",
            attempt, max_attempts, err, delay
        );
        on_retry(attempt, max_attempts, delay);
        tokio::time::sleep(delay).await;
    }
}
