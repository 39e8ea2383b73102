//! LLM client parameters.

use super::retry_policy::RetryPolicy;
use switchboard_domain::Model;

/// Parameters shared by every request the client sends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientParams {
    /// Model identifier sent with every request and echoed in answer metadata.
    pub model: Model,
    /// Upper bound on generated tokens per request.
    pub max_tokens: u32,
    pub retry: RetryPolicy,
}

impl Default for ClientParams {
    fn default() -> Self {
        Self {
            model: Model::default(),
            max_tokens: 1024,
            retry: RetryPolicy::default(),
        }
    }
}

impl ClientParams {
    pub fn with_model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }
}
