//! Domain layer for somdet-chat
//!
//! This crate contains the conversation model, the help-desk persona and the
//! value objects shared by every other layer. It has no dependencies on
//! infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Turn**: one message in the chat, spoken by either the user or the model
//! - **Conversation**: the append-only list of turns, in display order
//! - **Persona**: the fixed system instruction and replies of "พี่สมเด็จ"

pub mod config;
pub mod conversation;
pub mod core;
pub mod persona;

// Re-export commonly used types
pub use config::OutputFormat;
pub use conversation::{
    entities::Conversation,
    turn::{Role, Turn},
};
pub use crate::core::{
    error::DomainError, message::UserMessage, model::Model, sampling::SamplingParams,
};
pub use persona::{PersonaTemplate, UNKNOWN_INFO_RESPONSE};
