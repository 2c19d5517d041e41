use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info};

use crate::application::ChatClient;
use crate::domain::{CompletionSettings, DomainError, FALLBACK_RESPONSE};

pub const MESSAGE_REQUIRED: &str = "Message is required";
pub const API_KEY_NOT_CONFIGURED: &str = "OpenAI API key not configured";

/// Forwards a single user message to the completion API.
///
/// Stateless: every call sends the fixed system prompt and exactly one user
/// turn. No history, no retries.
pub struct RelayMessageUseCase {
    chat_client: Option<Arc<dyn ChatClient>>,
    settings: CompletionSettings,
}

impl RelayMessageUseCase {
    /// `chat_client` is `None` when no API credential is configured; every
    /// valid request then fails with a configuration error.
    pub fn new(chat_client: Option<Arc<dyn ChatClient>>, settings: CompletionSettings) -> Self {
        Self {
            chat_client,
            settings,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.chat_client.is_some()
    }

    pub fn settings(&self) -> &CompletionSettings {
        &self.settings
    }

    pub async fn execute(&self, message: &str) -> Result<String, DomainError> {
        if message.trim().is_empty() {
            return Err(DomainError::invalid_input(MESSAGE_REQUIRED));
        }

        let client = self
            .chat_client
            .as_ref()
            .ok_or_else(|| DomainError::configuration(API_KEY_NOT_CONFIGURED))?;

        let start_time = Instant::now();
        debug!(
            provider = client.provider_name(),
            model = self.settings.model(),
            chars = message.len(),
            "Relaying message"
        );

        let completion = client
            .complete(&self.settings, message)
            .await
            .map_err(|e| match e {
                DomainError::Upstream(_) => e,
                other => DomainError::upstream(other.to_string()),
            })?;

        let response = match completion {
            Some(text) if !text.is_empty() => text,
            _ => {
                info!("Completion API returned no content, using fallback response");
                FALLBACK_RESPONSE.to_string()
            }
        };

        info!(
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            "Completion relayed"
        );

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connector::adapter::MockChatClient;

    fn use_case(client: MockChatClient) -> (RelayMessageUseCase, Arc<MockChatClient>) {
        let client = Arc::new(client);
        let use_case =
            RelayMessageUseCase::new(Some(client.clone()), CompletionSettings::default());
        (use_case, client)
    }

    #[tokio::test]
    async fn test_returns_completion_text() {
        let (use_case, _) = use_case(MockChatClient::replying("Income tax is a tax on earnings."));

        let reply = use_case.execute("What is income tax?").await.unwrap();

        assert_eq!(reply, "Income tax is a tax on earnings.");
    }

    #[tokio::test]
    async fn test_sends_system_prompt_and_single_user_turn() {
        let (use_case, client) = use_case(MockChatClient::replying("ok"));

        use_case.execute("What is income tax?").await.unwrap();

        let calls = client.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].system, crate::domain::SYSTEM_PROMPT);
        assert_eq!(calls[0].user, "What is income tax?");
    }

    #[tokio::test]
    async fn test_missing_content_uses_fallback() {
        let (use_case, _) = use_case(MockChatClient::empty());

        let reply = use_case.execute("hello").await.unwrap();

        assert_eq!(reply, FALLBACK_RESPONSE);
    }

    #[tokio::test]
    async fn test_empty_content_uses_fallback() {
        let (use_case, _) = use_case(MockChatClient::replying(""));

        let reply = use_case.execute("hello").await.unwrap();

        assert_eq!(reply, FALLBACK_RESPONSE);
    }

    #[tokio::test]
    async fn test_empty_message_is_invalid_input() {
        let (use_case, client) = use_case(MockChatClient::replying("unused"));

        let err = use_case.execute("").await.unwrap_err();

        assert!(err.is_invalid_input());
        assert!(client.calls().is_empty());
    }

    #[tokio::test]
    async fn test_missing_client_is_configuration_error() {
        let use_case = RelayMessageUseCase::new(None, CompletionSettings::default());

        let err = use_case.execute("hello").await.unwrap_err();

        assert!(err.is_configuration());
        assert!(!use_case.is_configured());
    }

    #[tokio::test]
    async fn test_client_failure_is_upstream_error() {
        let (use_case, _) = use_case(MockChatClient::failing("boom"));

        let err = use_case.execute("hello").await.unwrap_err();

        assert!(err.is_upstream());
    }
}
