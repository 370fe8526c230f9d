//! Infrastructure layer for somdet-chat
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod gemini;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileGeminiConfig, FileOutputConfig,
    FileReplConfig,
};
pub use gemini::{ApiKeySource, GeminiError, GeminiReplyFetcher, GeminiSettings};
