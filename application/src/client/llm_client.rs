//! LLM client with overload retry.

use super::retry::{AttemptOutcome, retry_with_backoff};
use crate::config::ClientParams;
use crate::ports::llm_gateway::{CompletionRequest, GatewayError, LlmGateway};
use crate::ports::progress::{NoProgress, ProgressNotifier};
use std::sync::Arc;
use switchboard_domain::{LlmResponse, Model};
use thiserror::Error;
use tracing::{debug, error};

/// Errors surfaced by [`LlmClient`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LlmClientError {
    /// The provider stayed overloaded for the whole attempt budget
    #[error("API still overloaded after {attempts} attempt(s): {message}")]
    Overloaded { attempts: u32, message: String },

    /// Credential rejected; never retried
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Any other failure; never retried
    #[error("Request failed: {0}")]
    Request(GatewayError),
}

impl LlmClientError {
    pub fn is_authentication(&self) -> bool {
        matches!(self, LlmClientError::Authentication(_))
    }

    fn from_gateway(err: GatewayError, attempts: u32) -> Self {
        match err {
            GatewayError::Overloaded(message) => LlmClientError::Overloaded { attempts, message },
            GatewayError::Authentication(message) => LlmClientError::Authentication(message),
            other => LlmClientError::Request(other),
        }
    }
}

/// Single-turn completion client shared by the router and both agents
#[derive(Clone)]
pub struct LlmClient {
    gateway: Arc<dyn LlmGateway>,
    params: ClientParams,
    progress: Arc<dyn ProgressNotifier>,
}

impl LlmClient {
    pub fn new(gateway: Arc<dyn LlmGateway>, params: ClientParams) -> Self {
        Self {
            gateway,
            params,
            progress: Arc::new(NoProgress),
        }
    }

    /// Report retries to a progress notifier.
    pub fn with_progress(mut self, progress: Arc<dyn ProgressNotifier>) -> Self {
        self.progress = progress;
        self
    }

    /// Model every request is sent to.
    pub fn model(&self) -> &Model {
        &self.params.model
    }

    /// Send `user_message` under `system_prompt`, retrying overload errors.
    pub async fn complete(
        &self,
        system_prompt: &str,
        user_message: &str,
    ) -> Result<LlmResponse, LlmClientError> {
        let request = CompletionRequest::new(
            self.params.model.clone(),
            system_prompt,
            user_message,
            self.params.max_tokens,
        );
        debug!(
            "Sending request to {} (max_tokens={})",
            request.model, request.max_tokens
        );

        let result = retry_with_backoff(
            &self.params.retry,
            || self.gateway.complete(&request),
            |err: &GatewayError| {
                if err.is_retryable() {
                    AttemptOutcome::Retryable
                } else {
                    AttemptOutcome::Fatal
                }
            },
            |attempt, max, delay| self.progress.on_retry(attempt, max, delay),
        )
        .await;

        match result {
            Ok(response) => {
                debug!(
                    "Received {} chars from {} ({} tokens)",
                    response.text.len(),
                    request.model,
                    response.usage.total()
                );
                Ok(response)
            }
            Err((err, attempts)) => {
                error!("Request to {} failed after {} attempt(s): {}", request.model, attempts, err);
                Err(LlmClientError::from_gateway(err, attempts))
            }
        }
    }
}
