//! Routing configuration from TOML (`[routing]` section)

use serde::{Deserialize, Serialize};
use switchboard_application::RoutingStrategy;
use switchboard_domain::KeywordClassifier;

/// Raw routing configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRoutingConfig {
    /// "keyword" (default) or "llm"
    pub strategy: RoutingStrategy,
    /// Additional words that mark a question as technical
    pub extra_terms: Vec<String>,
}

impl FileRoutingConfig {
    pub fn keyword_classifier(&self) -> KeywordClassifier {
        KeywordClassifier::new().with_extra_terms(self.extra_terms.iter().cloned())
    }
}
