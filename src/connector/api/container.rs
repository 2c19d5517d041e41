use std::sync::Arc;

use tracing::{debug, warn};

use crate::application::{ChatClient, RelayClient, RelayMessageUseCase, SendMessageUseCase};
use crate::connector::adapter::{
    configured_api_key, configured_base_url, configured_model, HttpRelayClient, MockChatClient,
    OpenAiClient,
};
use crate::domain::CompletionSettings;

pub struct ContainerConfig {
    /// Completion API credential; `None` leaves the relay unconfigured.
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    /// Answer from [`MockChatClient`] instead of calling the API.
    pub mock_completions: bool,
    /// Where the UI finds the relay.
    pub relay_url: String,
}

impl ContainerConfig {
    /// Resolve everything from the environment (`OPENAI_*`, `TAXCHAT_RELAY_URL`).
    pub fn from_env(mock_completions: bool) -> Self {
        Self {
            api_key: configured_api_key(),
            base_url: configured_base_url(),
            model: configured_model(),
            mock_completions,
            relay_url: HttpRelayClient::configured_base_url(),
        }
    }

    pub fn with_relay_url(mut self, relay_url: Option<String>) -> Self {
        if let Some(url) = relay_url {
            self.relay_url = url;
        }
        self
    }
}

pub struct Container {
    chat_client: Option<Arc<dyn ChatClient>>,
    relay_client: Arc<dyn RelayClient>,
    settings: CompletionSettings,
    config: ContainerConfig,
}

impl Container {
    pub fn new(config: ContainerConfig) -> Self {
        let chat_client: Option<Arc<dyn ChatClient>> = if config.mock_completions {
            debug!("Using mock completion client");
            Some(Arc::new(MockChatClient::new()))
        } else {
            match config.api_key.as_deref() {
                Some(key) => {
                    debug!("Using OpenAI completion client at {}", config.base_url);
                    Some(Arc::new(OpenAiClient::new(key, config.base_url.as_str())))
                }
                None => {
                    warn!("OPENAI_API_KEY is not set; chat requests will fail until it is configured");
                    None
                }
            }
        };

        let relay_client: Arc<dyn RelayClient> =
            Arc::new(HttpRelayClient::new(config.relay_url.as_str()));

        let settings = CompletionSettings::default().with_model(config.model.as_str());

        Self {
            chat_client,
            relay_client,
            settings,
            config,
        }
    }

    pub fn relay_use_case(&self) -> RelayMessageUseCase {
        RelayMessageUseCase::new(self.chat_client.clone(), self.settings.clone())
    }

    pub fn send_message_use_case(&self) -> SendMessageUseCase {
        SendMessageUseCase::new(self.relay_client.clone())
    }

    pub fn relay_url(&self) -> &str {
        &self.config.relay_url
    }

    pub fn mock_completions(&self) -> bool {
        self.config.mock_completions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(api_key: Option<&str>, mock_completions: bool) -> ContainerConfig {
        ContainerConfig {
            api_key: api_key.map(str::to_string),
            base_url: "http://localhost:1".to_string(),
            model: "gpt-3.5-turbo".to_string(),
            mock_completions,
            relay_url: "http://localhost:3000".to_string(),
        }
    }

    #[test]
    fn missing_key_leaves_relay_unconfigured() {
        let container = Container::new(config(None, false));
        assert!(!container.relay_use_case().is_configured());
    }

    #[test]
    fn key_configures_relay() {
        let container = Container::new(config(Some("sk-test"), false));
        assert!(container.relay_use_case().is_configured());
    }

    #[test]
    fn mock_completions_do_not_need_a_key() {
        let container = Container::new(config(None, true));
        assert!(container.relay_use_case().is_configured());
        assert!(container.mock_completions());
    }

    #[test]
    fn relay_url_override() {
        let config = config(None, false).with_relay_url(Some("http://relay:9000".to_string()));
        assert_eq!(Container::new(config).relay_url(), "http://relay:9000");
    }
}
