//! Presentation-level configuration
//!
//! Settings for printing answers and running the question loop, after
//! command-line flags have been applied on top of the config file.

use crate::cli::commands::Cli;
use switchboard_domain::OutputFormat;

/// Output configuration for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Enable colored terminal output (text format only)
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Json,
            color: true,
        }
    }
}

/// Question loop configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplConfig {
    /// Show a spinner while a question is answered
    pub show_progress: bool,
    /// Environment variable named in authentication hints
    pub api_key_env: String,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            api_key_env: "ANTHROPIC_API_KEY".to_string(),
        }
    }
}

impl OutputConfig {
    /// Apply `--output`.
    pub fn with_cli_overrides(mut self, cli: &Cli) -> Self {
        if let Some(output) = cli.output {
            self.format = output.into();
        }
        self
    }
}

impl ReplConfig {
    /// Apply `--quiet`.
    pub fn with_cli_overrides(mut self, cli: &Cli) -> Self {
        if cli.quiet {
            self.show_progress = false;
        }
        self
    }
}
