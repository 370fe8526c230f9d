//! Configuration file loading for somdet-chat
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `SOMDET_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./somdet.toml` or `./.somdet.toml`
//! 4. Global: `$XDG_CONFIG_HOME/somdet-chat/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileGeminiConfig, FileOutputConfig, FileReplConfig,
};
pub use loader::ConfigLoader;
