//! Retry policy for overload errors.

use std::time::Duration;

/// Attempt budget and backoff schedule.
///
/// The delay before retry `n` (0-based) is `initial_delay * 2^n`, capped at
/// `max_delay`. With the defaults a request is sent at most three times,
/// sleeping 1s and then 2s in between.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts including the first one. Clamped to at least 1.
    pub max_attempts: u32,
    pub initial_delay: Duration,
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(30),
        }
    }
}

impl RetryPolicy {
    /// A policy that sends the request once and never retries.
    pub fn no_retry() -> Self {
        Self {
            max_attempts: 1,
            ..Self::default()
        }
    }

    // ==================== Builder Methods ====================

    pub fn with_max_attempts(mut self, max: u32) -> Self {
        self.max_attempts = max;
        self
    }

    pub fn with_initial_delay(mut self, delay: Duration) -> Self {
        self.initial_delay = delay;
        self
    }

    pub fn with_max_delay(mut self, delay: Duration) -> Self {
        self.max_delay = delay;
        self
    }

    /// Effective attempt budget (never zero).
    pub fn attempts(&self) -> u32 {
        self.max_attempts.max(1)
    }

    /// Delay before the retry that follows failed attempt `retry_index` (0-based).
    pub fn delay_for(&self, retry_index: u32) -> Duration {
        let factor = 2u32.checked_pow(retry_index).unwrap_or(u32::MAX);
        self.initial_delay
            .checked_mul(factor)
            .unwrap_or(self.max_delay)
            .min(self.max_delay)
    }
}
