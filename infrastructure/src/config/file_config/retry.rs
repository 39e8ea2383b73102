//! Retry configuration from TOML (`[retry]` section)

use serde::{Deserialize, Serialize};
use std::time::Duration;
use switchboard_application::RetryPolicy;

/// Raw retry configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRetryConfig {
    /// Total attempts including the first
    pub max_attempts: u32,
    pub initial_delay_ms: u64,
    pub max_delay_ms: u64,
}

impl Default for FileRetryConfig {
    fn default() -> Self {
        let policy = RetryPolicy::default();
        Self {
            max_attempts: policy.max_attempts,
            initial_delay_ms: policy.initial_delay.as_millis() as u64,
            max_delay_ms: policy.max_delay.as_millis() as u64,
        }
    }
}

impl FileRetryConfig {
    pub fn to_policy(&self) -> RetryPolicy {
        RetryPolicy::default()
            .with_max_attempts(self.max_attempts)
            .with_initial_delay(Duration::from_millis(self.initial_delay_ms))
            .with_max_delay(Duration::from_millis(self.max_delay_ms))
    }
}
