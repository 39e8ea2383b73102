//! Model configuration from TOML (`[model]` section)

use serde::{Deserialize, Serialize};
use switchboard_domain::Model;

/// Raw model configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModelConfig {
    /// Model identifier sent to the API
    pub name: String,
    /// Upper bound on generated tokens per request
    pub max_tokens: u32,
}

impl Default for FileModelConfig {
    fn default() -> Self {
        Self {
            name: Model::default().to_string(),
            max_tokens: 1024,
        }
    }
}

impl FileModelConfig {
    pub fn model(&self) -> Model {
        let Ok(model) = self.name.parse::<Model>();
        model
    }
}
