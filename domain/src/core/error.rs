//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid question: {0}")]
    InvalidQuestion(String),

    #[error("Unknown question category: {0}")]
    UnknownCategory(String),
}
