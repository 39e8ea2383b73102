//! Structured answer entities
//!
//! An [`Answer`] is produced once per question, serialized immediately and
//! never mutated afterwards. Field names are the wire format printed by the
//! CLI.

use crate::session::response::TokenUsage;
use serde::{Deserialize, Serialize};

/// Parsed body of a model answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerContent {
    /// One-paragraph overview or direct answer. Never empty.
    pub main_answer: String,
    /// Ordered supporting points (may be empty).
    pub supporting_details: Vec<String>,
}

/// Envelope data copied from the provider response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerMetadata {
    /// Provider message id.
    pub response_id: String,
    /// The configured model identifier.
    pub model: String,
    /// Unique id for this agent invocation.
    pub run_id: String,
    /// Provider stop reason, empty when the provider gave none.
    pub stop_reason: String,
    pub token_usage: TokenUsage,
}

/// A structured answer to one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub content: AnswerContent,
    pub metadata: AnswerMetadata,
}

impl Answer {
    pub fn main_answer(&self) -> &str {
        &self.content.main_answer
    }

    pub fn supporting_details(&self) -> &[String] {
        &self.content.supporting_details
    }
}
