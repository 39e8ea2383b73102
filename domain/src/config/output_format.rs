//! Output format value object

use serde::{Deserialize, Serialize};

/// How an answer is rendered on stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty-printed JSON (default)
    #[default]
    Json,
    /// Single-line JSON, one answer per line
    Compact,
    /// Human-readable text
    Text,
}
