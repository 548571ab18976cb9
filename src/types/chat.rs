//! Chat message types and id generation

use rand::Rng;
use rand::distr::Alphanumeric;

/// Reserved id of the greeting message seeded into every new session
pub const GREETING_ID: &str = "0";

/// Opening message shown before any user interaction
pub const GREETING_TEXT: &str = "Hello! How can I help you with your marketing today?";

/// Role in a chat conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Model,
}

/// A single message in the chat
///
/// Text is mutable while the model's reply is streaming in and settles once
/// the stream ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: String,
    pub role: ChatRole,
    pub text: String,
}

impl ChatMessage {
    pub fn user(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            role: ChatRole::User,
            text: text.into(),
        }
    }

    pub fn model(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            role: ChatRole::Model,
            text: text.into(),
        }
    }

    /// The greeting every session starts with
    pub fn greeting() -> Self {
        Self::model(GREETING_ID, GREETING_TEXT)
    }
}

/// Generate a message id unique within a session with overwhelming probability
///
/// Seven alphanumeric characters give ~62^7 possibilities; the reserved
/// greeting id is a single character and can never collide.
pub fn generate_message_id() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(7)
        .map(char::from)
        .collect()
}
