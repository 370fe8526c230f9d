//! User message value object

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// Text typed by the user, guaranteed to contain something besides whitespace
/// (Value Object)
///
/// The original text is kept as typed; trimming is only used for validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserMessage {
    content: String,
}

impl UserMessage {
    /// Validate and wrap user input
    pub fn try_new(content: impl Into<String>) -> Result<Self, DomainError> {
        let content = content.into();
        if content.trim().is_empty() {
            Err(DomainError::EmptyMessage)
        } else {
            Ok(Self { content })
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

impl std::fmt::Display for UserMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

impl TryFrom<&str> for UserMessage {
    type Error = DomainError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        UserMessage::try_new(s)
    }
}
