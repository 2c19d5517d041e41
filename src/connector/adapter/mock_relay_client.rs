use std::sync::Mutex;

use async_trait::async_trait;

use crate::application::RelayClient;
use crate::domain::DomainError;

/// A [`RelayClient`] with a canned answer, recording what it was sent.
pub struct MockRelayClient {
    reply: Option<String>,
    sent: Mutex<Vec<String>>,
}

impl MockRelayClient {
    pub fn replying(text: impl Into<String>) -> Self {
        Self {
            reply: Some(text.into()),
            sent: Mutex::new(Vec::new()),
        }
    }

    /// Every send fails as if the relay were unreachable.
    pub fn failing() -> Self {
        Self {
            reply: None,
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().map(|sent| sent.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl RelayClient for MockRelayClient {
    async fn send(&self, message: &str) -> Result<String, DomainError> {
        if let Ok(mut sent) = self.sent.lock() {
            sent.push(message.to_string());
        }

        self.reply
            .clone()
            .ok_or_else(|| DomainError::transport("relay unreachable"))
    }
}
