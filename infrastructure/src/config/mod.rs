//! Configuration file loading for switchboard
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `SWITCHBOARD_<SECTION>__<KEY>` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./switchboard.toml` or `./.switchboard.toml`
//! 4. Global: `$XDG_CONFIG_HOME/switchboard/config.toml`
//! 5. Default values

mod error;
mod file_config;
mod loader;

pub use error::{ConfigError, ConfigValidationError};
pub use file_config::{
    FileConfig, FileModelConfig, FileOutputConfig, FileProviderConfig, FileReplConfig,
    FileRetryConfig, FileRoutingConfig,
};
pub use loader::ConfigLoader;
