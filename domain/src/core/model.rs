//! Model value object representing a hosted LLM model

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Available LLM models (Value Object)
///
/// The identifier is sent verbatim to the Messages API and echoed back in
/// every answer's metadata, so [`Model::as_str`] must stay stable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    ClaudeOpus45,
    ClaudeSonnet45,
    ClaudeHaiku45,
    ClaudeSonnet4,
    Claude3Sonnet,
    Custom(String),
}

impl Model {
    /// Get the API identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::ClaudeOpus45 => "claude-opus-4-5",
            Model::ClaudeSonnet45 => "claude-sonnet-4-5",
            Model::ClaudeHaiku45 => "claude-haiku-4-5",
            Model::ClaudeSonnet4 => "claude-sonnet-4-0",
            Model::Claude3Sonnet => "claude-3-sonnet-20240229",
            Model::Custom(s) => s,
        }
    }

    /// Whether this is one of the known built-in identifiers
    pub fn is_known(&self) -> bool {
        !matches!(self, Model::Custom(_))
    }
}

impl Default for Model {
    /// Returns the default model (Claude Sonnet 4.5)
    fn default() -> Self {
        Model::ClaudeSonnet45
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s.trim() {
            "claude-opus-4-5" => Model::ClaudeOpus45,
            "claude-sonnet-4-5" => Model::ClaudeSonnet45,
            "claude-haiku-4-5" => Model::ClaudeHaiku45,
            "claude-sonnet-4-0" => Model::ClaudeSonnet4,
            "claude-3-sonnet-20240229" => Model::Claude3Sonnet,
            other => Model::Custom(other.to_string()),
        })
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let Ok(model) = s.parse::<Model>();
        Ok(model)
    }
}
