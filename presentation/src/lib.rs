//! Presentation layer for switchboard
//!
//! This crate contains CLI definitions, output formatters,
//! progress reporters, and the interactive question loop.

pub mod chat;
pub mod cli;
pub mod config;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use chat::{AskError, LoopSummary, QuestionLoop};
pub use cli::commands::{Cli, OutputArg, StrategyArg};
pub use config::{OutputConfig, ReplConfig};
pub use output::console::{ConsoleFormatter, JsonFormatter, formatter_for};
pub use output::formatter::OutputFormatter;
pub use progress::reporter::{ProgressReporter, SimpleProgress, notifier_for};
