//! Routing strategy selection.

use serde::{Deserialize, Serialize};

/// How the router decides between the technical and general agent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoutingStrategy {
    /// Deterministic keyword heuristic, no model call (default)
    #[default]
    Keyword,
    /// Classification call to the model, keyword fallback on unclear replies
    Llm,
}

impl RoutingStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoutingStrategy::Keyword => "keyword",
            RoutingStrategy::Llm => "llm",
        }
    }
}

impl std::fmt::Display for RoutingStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for RoutingStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "keyword" | "keywords" | "heuristic" => Ok(RoutingStrategy::Keyword),
            "llm" | "model" => Ok(RoutingStrategy::Llm),
            other => Err(format!(
                "unknown routing strategy '{other}' (expected 'keyword' or 'llm')"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_keyword() {
        assert_eq!(RoutingStrategy::default(), RoutingStrategy::Keyword);
    }

    #[test]
    fn test_parse() {
        assert_eq!("LLM".parse::<RoutingStrategy>(), Ok(RoutingStrategy::Llm));
        assert_eq!("heuristic".parse::<RoutingStrategy>(), Ok(RoutingStrategy::Keyword));
        assert!("random".parse::<RoutingStrategy>().is_err());
    }

    #[test]
    fn test_deserialize_lowercase() {
        let s: RoutingStrategy = serde_json::from_str("\"llm\"").unwrap();
        assert_eq!(s, RoutingStrategy::Llm);
    }
}
