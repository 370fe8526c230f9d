//! Help-desk persona: name, greeting, system instruction and fixed replies.

pub mod template;

pub use template::{PersonaTemplate, UNKNOWN_INFO_RESPONSE};
