//! Chat message type.

use crate::Role;
use serde::{Deserialize, Serialize};

/// One message of a chat-completion request.
///
/// # Examples
///
/// ```
/// use cluestory_core::{ChatMessage, Role};
///
/// let message = ChatMessage::user("Tell me a story");
/// assert_eq!(message.role, Role::User);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Sender role
    pub role: Role,
    /// Text content
    pub content: String,
}

impl ChatMessage {
    /// A system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    /// A user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}
