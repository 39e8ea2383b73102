//! LLM Gateway port
//!
//! Defines the interface for communicating with a hosted chat-completion API.
//! A gateway performs exactly one outbound request per call; retrying is the
//! caller's concern (see [`LlmClient`](crate::client::LlmClient)).

use async_trait::async_trait;
use switchboard_domain::{LlmResponse, Model};
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// The provider is temporarily over capacity. The only retryable kind.
    #[error("API overloaded: {0}")]
    Overloaded(String),

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl GatewayError {
    /// Whether the request may succeed if sent again unchanged
    pub fn is_retryable(&self) -> bool {
        matches!(self, GatewayError::Overloaded(_))
    }

    pub fn is_authentication(&self) -> bool {
        matches!(self, GatewayError::Authentication(_))
    }
}

/// A single-turn completion request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
    pub model: Model,
    pub system_prompt: String,
    pub user_message: String,
    pub max_tokens: u32,
}

impl CompletionRequest {
    pub fn new(
        model: Model,
        system_prompt: impl Into<String>,
        user_message: impl Into<String>,
        max_tokens: u32,
    ) -> Self {
        Self {
            model,
            system_prompt: system_prompt.into(),
            user_message: user_message.into(),
            max_tokens,
        }
    }
}

/// Gateway for LLM communication
///
/// This port defines how the application layer talks to an LLM provider.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Send one request and return the provider's completion
    async fn complete(&self, request: &CompletionRequest) -> Result<LlmResponse, GatewayError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_overload_is_retryable() {
        assert!(GatewayError::Overloaded("busy".into()).is_retryable());
        assert!(!GatewayError::Authentication("bad key".into()).is_retryable());
        assert!(
            !GatewayError::Api {
                status: 500,
                message: "boom".into()
            }
            .is_retryable()
        );
        assert!(!GatewayError::Transport("reset".into()).is_retryable());
        assert!(!GatewayError::InvalidResponse("eof".into()).is_retryable());
    }

    #[test]
    fn error_display() {
        let err = GatewayError::Api {
            status: 400,
            message: "max_tokens too large".into(),
        };
        assert_eq!(err.to_string(), "API error (400): max_tokens too large");
        assert!(GatewayError::Authentication("x".into()).is_authentication());
    }
}
