//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! Every section is `#[serde(default)]`, so an empty file is a valid config.

mod model;
mod output;
mod provider;
mod repl;
mod retry;
mod routing;

pub use model::FileModelConfig;
pub use output::FileOutputConfig;
pub use provider::FileProviderConfig;
pub use repl::FileReplConfig;
pub use retry::FileRetryConfig;
pub use routing::FileRoutingConfig;

use super::error::ConfigValidationError;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use switchboard_application::ClientParams;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub model: FileModelConfig,
    pub routing: FileRoutingConfig,
    pub retry: FileRetryConfig,
    pub provider: FileProviderConfig,
    pub output: FileOutputConfig,
    pub repl: FileReplConfig,
}

impl FileConfig {
    /// Reject values that would make every request fail.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.model.name.trim().is_empty() {
            return Err(ConfigValidationError::EmptyModelName);
        }
        if self.model.max_tokens == 0 {
            return Err(ConfigValidationError::ZeroMaxTokens);
        }
        if self.retry.max_attempts == 0 {
            return Err(ConfigValidationError::ZeroMaxAttempts);
        }
        if self.provider.api_key_env.trim().is_empty() {
            return Err(ConfigValidationError::EmptyApiKeyEnv);
        }
        Ok(())
    }

    /// Parameters for the application's `LlmClient`
    pub fn client_params(&self) -> ClientParams {
        ClientParams::default()
            .with_model(self.model.model())
            .with_max_tokens(self.model.max_tokens)
            .with_retry(self.retry.to_policy())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.provider.timeout_secs)
    }
}
