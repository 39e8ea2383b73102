//! Anthropic Messages API adapter
//!
//! Implements the [`LlmGateway`](switchboard_application::LlmGateway) port
//! with one `POST /v1/messages` per call. Retrying is left to the
//! application's `LlmClient`.

mod gateway;
mod types;

pub use gateway::{AnthropicGateway, AnthropicSettings, map_error_response};
