//! Question value object

use serde::{Deserialize, Serialize};

/// A question to be routed to one of the agents (Value Object)
///
/// Lives for a single loop iteration. Surrounding whitespace is trimmed on
/// construction, so the content is never blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    content: String,
}

impl Question {
    /// Try to create a new question, returning None for blank input
    pub fn try_new(content: impl Into<String>) -> Option<Self> {
        let content = content.into();
        let trimmed = content.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == content.len() {
            Some(Self { content })
        } else {
            Some(Self {
                content: trimmed.to_string(),
            })
        }
    }

    /// Get the question content
    pub fn content(&self) -> &str {
        &self.content
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

impl TryFrom<&str> for Question {
    type Error = crate::DomainError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Question::try_new(s)
            .ok_or_else(|| crate::DomainError::InvalidQuestion("question is empty".to_string()))
    }
}

impl TryFrom<String> for Question {
    type Error = crate::DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Question::try_from(s.as_str())
    }
}
