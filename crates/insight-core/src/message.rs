//! Transcript Messages
//!
//! The message log is append-only: once a message lands in the transcript it
//! is never edited or removed, and display order is insertion order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role of a message sender
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// User input
    User,
    /// Simulated model response
    Assistant,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Assistant => write!(f, "assistant"),
        }
    }
}

/// Identifier for a message, monotonic within its transcript.
///
/// Used only for stable iteration and display keys; ids carry no meaning
/// beyond ordering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MessageId(u64);

impl MessageId {
    pub fn value(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single message in a transcript
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Message {
    /// Transcript-local identifier
    pub id: MessageId,

    /// Message role
    pub role: Role,

    /// Text content, set at creation and never mutated
    pub text: String,

    /// Timestamp
    #[serde(default = "Utc::now")]
    pub timestamp: DateTime<Utc>,
}

/// Append-only ordered message log
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Transcript {
    messages: Vec<Message>,
    next_id: u64,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a transcript seeded with an assistant greeting
    pub fn with_greeting(greeting: impl Into<String>) -> Self {
        let mut transcript = Self::new();
        transcript.push_assistant(greeting);
        transcript
    }

    fn push(&mut self, role: Role, text: impl Into<String>) -> MessageId {
        let id = MessageId(self.next_id);
        self.next_id += 1;
        self.messages.push(Message {
            id,
            role,
            text: text.into(),
            timestamp: Utc::now(),
        });
        id
    }

    /// Append a user message
    pub fn push_user(&mut self, text: impl Into<String>) -> MessageId {
        self.push(Role::User, text)
    }

    /// Append an assistant message
    pub fn push_assistant(&mut self, text: impl Into<String>) -> MessageId {
        self.push(Role::Assistant, text)
    }

    /// All messages in display order
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// The most recently appended message
    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Texts of user-role messages, in append order
    pub fn user_texts(&self) -> Vec<&str> {
        self.messages
            .iter()
            .filter(|m| m.role == Role::User)
            .map(|m| m.text.as_str())
            .collect()
    }

    /// Number of messages
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_order() {
        let mut transcript = Transcript::new();
        transcript.push_user("first");
        transcript.push_assistant("second");
        transcript.push_user("third");

        let roles: Vec<Role> = transcript.messages().iter().map(|m| m.role).collect();
        assert_eq!(roles, vec![Role::User, Role::Assistant, Role::User]);
        assert_eq!(transcript.user_texts(), vec!["first", "third"]);
    }

    #[test]
    fn test_ids_monotonic() {
        let mut transcript = Transcript::with_greeting("hello");
        let a = transcript.push_user("one");
        let b = transcript.push_assistant("two");
        assert!(a < b);
        assert_eq!(transcript.messages()[0].id.value(), 0);
        assert_eq!(transcript.len(), 3);
    }

    #[test]
    fn test_greeting_seed() {
        let transcript = Transcript::with_greeting("Hi there");
        assert_eq!(transcript.len(), 1);
        let first = transcript.last().unwrap();
        assert_eq!(first.role, Role::Assistant);
        assert_eq!(first.text, "Hi there");
    }
}
