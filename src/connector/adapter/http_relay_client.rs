use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::application::RelayClient;
use crate::domain::DomainError;

pub const DEFAULT_RELAY_URL: &str = "http://127.0.0.1:3000";
const CHAT_PATH: &str = "/api/chat";

#[derive(Serialize)]
struct RelayRequest<'a> {
    message: &'a str,
}

#[derive(Deserialize)]
struct RelayResponse {
    response: String,
}

/// Talks to a running relay over HTTP.
///
/// Any transport failure, non-2xx status or undecodable body is reported as a
/// transport error; the conversation turns those into the apology message.
pub struct HttpRelayClient {
    client: reqwest::Client,
    url: String,
}

impl HttpRelayClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base: String = base_url.into();
        Self {
            client: reqwest::Client::new(),
            url: format!("{}{}", base.trim_end_matches('/'), CHAT_PATH),
        }
    }

    /// `TAXCHAT_RELAY_URL`, defaulting to the local relay.
    pub fn configured_base_url() -> String {
        std::env::var("TAXCHAT_RELAY_URL").unwrap_or_else(|_| DEFAULT_RELAY_URL.to_string())
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl RelayClient for HttpRelayClient {
    async fn send(&self, message: &str) -> Result<String, DomainError> {
        let response = self
            .client
            .post(&self.url)
            .json(&RelayRequest { message })
            .send()
            .await
            .map_err(|e| DomainError::transport(format!("relay request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(DomainError::transport(format!(
                "relay returned {}",
                response.status()
            )));
        }

        let body: RelayResponse = response
            .json()
            .await
            .map_err(|e| DomainError::transport(format!("failed to decode relay response: {e}")))?;

        Ok(body.response)
    }
}
