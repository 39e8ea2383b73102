//! Question category value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Which agent a question is dispatched to (Value Object)
///
/// Classification is total: every question maps to exactly one variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionCategory {
    /// Programming, algorithms, tooling and other engineering topics
    Technical,
    /// Everything else
    General,
}

impl QuestionCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionCategory::Technical => "technical",
            QuestionCategory::General => "general",
        }
    }

    /// Interpret a classifier model's one-word decision.
    ///
    /// The classification prompt asks for `code` or `general`; surrounding
    /// punctuation, quotes and casing are tolerated. Returns `None` for
    /// anything else so the caller can choose a fallback.
    pub fn from_decision(text: &str) -> Option<Self> {
        let word = text
            .trim()
            .trim_matches(|c: char| !c.is_alphanumeric())
            .to_lowercase();
        match word.as_str() {
            "code" | "technical" | "tech" => Some(QuestionCategory::Technical),
            "general" => Some(QuestionCategory::General),
            _ => None,
        }
    }
}

impl std::fmt::Display for QuestionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for QuestionCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_decision(s).ok_or_else(|| DomainError::UnknownCategory(s.to_string()))
    }
}
