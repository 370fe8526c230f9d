//! Turn entity: one message exchanged in the conversation

use serde::{Deserialize, Serialize};

/// Speaker of a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Model => "model",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single message in the conversation (Entity)
///
/// Fields are private; a turn cannot change after it is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    role: Role,
    content: String,
}

impl Turn {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn model(content: impl Into<String>) -> Self {
        Self::new(Role::Model, content)
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_role() {
        assert_eq!(Turn::user("hi").role(), Role::User);
        assert_eq!(Turn::model("hello").role(), Role::Model);
    }

    #[test]
    fn test_serialize_lowercase_role() {
        let json = serde_json::to_string(&Turn::model("X")).unwrap();
        assert_eq!(json, r#"{"role":"model","content":"X"}"#);
    }

    #[test]
    fn test_deserialize_user_turn() {
        let turn: Turn = serde_json::from_str(r#"{"role":"user","content":"hello"}"#).unwrap();
        assert_eq!(turn, Turn::user("hello"));
    }
}
