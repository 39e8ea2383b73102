//! Domain layer for switchboard
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Question**: one line of user input, validated and trimmed
//! - **QuestionCategory**: `technical` or `general`; decides which agent answers
//! - **Answer**: the structured record (main answer, supporting details,
//!   metadata) produced for each question

pub mod answer;
pub mod config;
pub mod core;
pub mod prompt;
pub mod routing;
pub mod session;
pub mod util;

// Re-export commonly used types
pub use answer::{Answer, AnswerContent, AnswerMetadata, parse_answer};
pub use config::OutputFormat;
pub use core::{error::DomainError, model::Model, question::Question};
pub use prompt::PromptTemplate;
pub use routing::{KeywordClassifier, QuestionCategory};
pub use session::response::{LlmResponse, StopReason, TokenUsage};
