use std::sync::Arc;

use tracing::debug;

use crate::application::RelayClient;
use crate::domain::{Conversation, DomainError, Message};

/// Runs one conversation turn through the relay.
pub struct SendMessageUseCase {
    relay_client: Arc<dyn RelayClient>,
}

impl SendMessageUseCase {
    pub fn new(relay_client: Arc<dyn RelayClient>) -> Self {
        Self { relay_client }
    }

    /// Append the user's message, wait for the relay and append the reply.
    ///
    /// Relay failures do not surface as errors; they become the apology
    /// message. Errors are returned only when the submit itself is rejected
    /// (blank input or a turn already pending).
    pub async fn execute<'c>(
        &self,
        conversation: &'c mut Conversation,
        content: &str,
    ) -> Result<&'c Message, DomainError> {
        let outgoing = conversation.begin_turn(content)?;
        let reply = self.fetch_reply(&outgoing).await;
        conversation.finish_turn(reply)
    }

    /// The network half of a turn, for callers that keep rendering while it runs.
    pub async fn fetch_reply(&self, content: &str) -> Result<String, DomainError> {
        debug!(chars = content.len(), "Sending message to relay");
        self.relay_client.send(content).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connector::adapter::MockRelayClient;
    use crate::domain::{Role, CONNECTION_APOLOGY};

    #[tokio::test]
    async fn test_turn_appends_user_then_assistant() {
        let use_case = SendMessageUseCase::new(Arc::new(MockRelayClient::replying("A tax on income.")));
        let mut conversation = Conversation::new();

        let reply = use_case
            .execute(&mut conversation, "What is income tax?")
            .await
            .unwrap();
        assert_eq!(reply.content(), "A tax on income.");

        let roles: Vec<Role> = conversation.messages().iter().map(|m| m.role()).collect();
        assert_eq!(roles, vec![Role::User, Role::Assistant]);
        assert!(!conversation.is_loading());
    }

    #[tokio::test]
    async fn test_relay_failure_becomes_apology() {
        let use_case = SendMessageUseCase::new(Arc::new(MockRelayClient::failing()));
        let mut conversation = Conversation::new();

        let reply = use_case.execute(&mut conversation, "hello").await.unwrap();

        assert_eq!(reply.content(), CONNECTION_APOLOGY);
        assert_eq!(conversation.len(), 2);
    }

    #[tokio::test]
    async fn test_blank_input_sends_nothing() {
        let relay = Arc::new(MockRelayClient::replying("unused"));
        let use_case = SendMessageUseCase::new(relay.clone());
        let mut conversation = Conversation::new();

        assert!(use_case.execute(&mut conversation, "  ").await.is_err());
        assert!(conversation.is_empty());
        assert!(relay.sent().is_empty());
    }
}
