//! Infrastructure layer for switchboard
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod anthropic;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use anthropic::{AnthropicGateway, AnthropicSettings};
pub use config::{
    ConfigError, ConfigLoader, ConfigValidationError, FileConfig, FileOutputConfig,
    FileReplConfig,
};
pub use logging::JsonlConversationLogger;
