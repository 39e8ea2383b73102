//! Resilient LLM client.
//!
//! Wraps an [`LlmGateway`](crate::ports::llm_gateway::LlmGateway) with the
//! retry policy: overload errors are retried with exponential backoff,
//! authentication errors surface immediately, anything else is reported
//! as a generic request failure.

pub mod llm_client;
pub mod retry;

pub use llm_client::{LlmClient, LlmClientError};
pub use retry::{AttemptOutcome, retry_with_backoff};
