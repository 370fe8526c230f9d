//! Presentation layer for somdet-chat
//!
//! This crate contains CLI definitions, the interactive chat REPL,
//! console formatting and the progress spinner.

pub mod chat;
pub mod cli;
pub mod config;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use chat::ChatRepl;
pub use cli::commands::{Cli, OutputFormat};
pub use config::{OutputConfig, ReplConfig};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::SpinnerProgress;
