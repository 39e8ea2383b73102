//! Provider configuration from TOML (`[provider]` section)

use serde::{Deserialize, Serialize};

/// Anthropic API connection settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProviderConfig {
    /// Environment variable holding the API key (default: "ANTHROPIC_API_KEY").
    pub api_key_env: String,
    /// Base URL for the Anthropic API.
    pub base_url: String,
    /// Anthropic API version header.
    pub api_version: String,
    /// HTTP request timeout.
    pub timeout_secs: u64,
}

impl Default for FileProviderConfig {
    fn default() -> Self {
        Self {
            api_key_env: "ANTHROPIC_API_KEY".to_string(),
            base_url: "https://api.anthropic.com".to_string(),
            api_version: "2023-06-01".to_string(),
            timeout_secs: 120,
        }
    }
}
