//! Output configuration from TOML (`[output]` section)

use serde::{Deserialize, Serialize};
use switchboard_domain::OutputFormat;

/// Raw output configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Output format (uses domain type)
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Json,
            color: true,
        }
    }
}
