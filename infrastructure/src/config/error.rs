//! Configuration errors

use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("model.name cannot be empty")]
    EmptyModelName,

    #[error("model.max_tokens cannot be 0")]
    ZeroMaxTokens,

    #[error("retry.max_attempts cannot be 0")]
    ZeroMaxAttempts,

    #[error("provider.api_key_env cannot be empty")]
    EmptyApiKeyEnv,
}

/// Errors raised while loading configuration or resolving credentials
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),

    #[error("config file not found: {}", .0.display())]
    NotFound(std::path::PathBuf),

    #[error("invalid configuration: {0}")]
    Invalid(#[from] ConfigValidationError),

    #[error("API key not found: set the {0} environment variable")]
    MissingCredential(String),
}
