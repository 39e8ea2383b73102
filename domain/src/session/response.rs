//! Raw completion types returned by an LLM provider.
//!
//! [`LlmResponse`] is what a gateway hands back for a single completion
//! request: the concatenated text plus the envelope fields that end up in
//! an answer's metadata.

use serde::{Deserialize, Serialize};

/// Reason the model stopped generating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// Natural end of response.
    EndTurn,
    /// Hit the token limit; the answer may be truncated.
    MaxTokens,
    /// A configured stop sequence was generated.
    StopSequence,
    /// Provider-specific stop reason.
    Other(String),
}

impl StopReason {
    /// Map the provider's wire value onto a stop reason.
    pub fn from_api(value: &str) -> Self {
        match value {
            "end_turn" => StopReason::EndTurn,
            "max_tokens" => StopReason::MaxTokens,
            "stop_sequence" => StopReason::StopSequence,
            other => StopReason::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            StopReason::EndTurn => "end_turn",
            StopReason::MaxTokens => "max_tokens",
            StopReason::StopSequence => "stop_sequence",
            StopReason::Other(s) => s,
        }
    }
}

impl std::fmt::Display for StopReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Token accounting reported by the provider.
///
/// Cache counters are only present when the provider reports them and are
/// omitted from serialized output otherwise.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    pub input_tokens: u32,
    pub output_tokens: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_creation_input_tokens: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_read_input_tokens: Option<u32>,
}

impl TokenUsage {
    pub fn new(input_tokens: u32, output_tokens: u32) -> Self {
        Self {
            input_tokens,
            output_tokens,
            ..Self::default()
        }
    }

    pub fn total(&self) -> u32 {
        self.input_tokens + self.output_tokens
    }
}

/// A single completion from an LLM.
#[derive(Debug, Clone, Default)]
pub struct LlmResponse {
    /// Provider-assigned message id (e.g. "msg_01...").
    pub id: String,
    /// Concatenated text content.
    pub text: String,
    /// Why the model stopped generating.
    pub stop_reason: Option<StopReason>,
    /// Token accounting for the request.
    pub usage: TokenUsage,
}

impl LlmResponse {
    /// Create a text-only response with an empty envelope.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            stop_reason: Some(StopReason::EndTurn),
            ..Self::default()
        }
    }

    /// Set the provider message id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Set the token usage.
    pub fn with_usage(mut self, usage: TokenUsage) -> Self {
        self.usage = usage;
        self
    }
}
