use async_trait::async_trait;

use crate::domain::{CompletionSettings, DomainError};

/// Sends a system instruction plus one user turn to a completion API.
///
/// Implementors encapsulate transport, serialization, and vendor-specific API
/// details so the relay stays decoupled from any particular provider.
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Request a completion for `user` under `settings`.
    ///
    /// Returns `Ok(None)` when the API answered but produced no text.
    async fn complete(
        &self,
        settings: &CompletionSettings,
        user: &str,
    ) -> Result<Option<String>, DomainError>;

    /// Name of the backend, for logging.
    fn provider_name(&self) -> &str;
}
