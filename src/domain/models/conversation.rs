use tracing::warn;

use crate::domain::{DomainError, Message};

/// Shown in place of a reply whenever the relay cannot be reached.
pub const CONNECTION_APOLOGY: &str =
    "Sorry, I'm having trouble connecting right now. Please try again later.";

/// In-memory conversation state driving the UI.
///
/// Idle → `begin_turn` → Loading → `finish_turn` → Idle. Messages are only
/// ever appended; nothing is edited or removed for the lifetime of the value.
#[derive(Debug, Clone, Default)]
pub struct Conversation {
    messages: Vec<Message>,
    is_loading: bool,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether a submit would be accepted right now.
    pub fn can_submit(&self, content: &str) -> bool {
        !self.is_loading && !content.trim().is_empty()
    }

    /// Appends the user's message and enters the loading state.
    ///
    /// Returns the text to forward to the relay.
    pub fn begin_turn(&mut self, content: &str) -> Result<String, DomainError> {
        if content.trim().is_empty() {
            return Err(DomainError::invalid_input("message is empty"));
        }
        if self.is_loading {
            return Err(DomainError::invalid_input("a reply is already pending"));
        }

        self.messages.push(Message::user(content));
        self.is_loading = true;
        Ok(content.to_string())
    }

    /// Appends the assistant's reply (or the apology on failure) and returns to idle.
    pub fn finish_turn(&mut self, reply: Result<String, DomainError>) -> Result<&Message, DomainError> {
        if !self.is_loading {
            return Err(DomainError::internal("no turn is pending"));
        }

        let content = match reply {
            Ok(text) => text,
            Err(e) => {
                warn!("Relay request failed: {e}");
                CONNECTION_APOLOGY.to_string()
            }
        };

        self.messages.push(Message::assistant(content));
        self.is_loading = false;
        Ok(&self.messages[self.messages.len() - 1])
    }
}
