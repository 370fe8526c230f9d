//! Conversation aggregate

use super::turn::Turn;
use serde::Serialize;

/// Ordered, append-only list of turns (Aggregate)
///
/// Insertion order is display order. There is no API to remove, replace or
/// reorder a turn; the list only lives as long as the chat session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Conversation {
    turns: Vec<Turn>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Turn> {
        self.turns.iter()
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

impl<'a> IntoIterator for &'a Conversation {
    type Item = &'a Turn;
    type IntoIter = std::slice::Iter<'a, Turn>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversation::turn::Role;

    #[test]
    fn test_new_conversation_is_empty() {
        let conversation = Conversation::new();
        assert!(conversation.is_empty());
        assert_eq!(conversation.len(), 0);
    }

    #[test]
    fn test_push_keeps_insertion_order() {
        let mut conversation = Conversation::new();
        conversation.push(Turn::user("first"));
        conversation.push(Turn::model("second"));
        conversation.push(Turn::user("third"));

        let contents: Vec<&str> = conversation.iter().map(|t| t.content()).collect();
        assert_eq!(contents, vec!["first", "second", "third"]);
        let roles: Vec<Role> = conversation.iter().map(|t| t.role()).collect();
        assert_eq!(roles, vec![Role::User, Role::Model, Role::User]);
        assert_eq!(conversation.len(), 3);
    }

    #[test]
    fn test_serializes_as_array() {
        let mut conversation = Conversation::new();
        conversation.push(Turn::user("hello"));
        let json = serde_json::to_string(&conversation).unwrap();
        assert_eq!(json, r#"[{"role":"user","content":"hello"}]"#);
    }
}
