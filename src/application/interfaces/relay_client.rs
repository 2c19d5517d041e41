use async_trait::async_trait;

use crate::domain::DomainError;

/// The UI's view of the completion relay.
#[async_trait]
pub trait RelayClient: Send + Sync {
    /// Forward one message and return the assistant's reply text.
    async fn send(&self, message: &str) -> Result<String, DomainError>;
}
