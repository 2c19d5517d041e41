use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::application::ChatClient;
use crate::domain::{CompletionSettings, DomainError, DEFAULT_MODEL};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com";
const COMPLETIONS_PATH: &str = "/v1/chat/completions";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(serde::Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    messages: Vec<ApiMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(serde::Serialize)]
struct ApiMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Minimal subset of the Chat Completions response we care about.
#[derive(Deserialize)]
struct ApiResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// HTTP client for the OpenAI Chat Completions API and compatible servers.
///
/// Configuration comes from the environment:
///
/// | Variable          | Default                  | Purpose                        |
/// |-------------------|--------------------------|--------------------------------|
/// | `OPENAI_API_KEY`  | none                     | Required; no client without it |
/// | `OPENAI_BASE_URL` | `https://api.openai.com` | Any compatible server          |
/// | `OPENAI_MODEL`    | `gpt-3.5-turbo`          | Model sent with each request   |
pub struct OpenAiClient {
    client: reqwest::Client,
    api_key: String,
    /// Full endpoint URL (base + COMPLETIONS_PATH).
    url: String,
}

impl OpenAiClient {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        let base: String = base_url.into();
        let url = format!("{}{}", base.trim_end_matches('/'), COMPLETIONS_PATH);
        Self {
            client: reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
            url,
        }
    }

    /// Returns `None` when `OPENAI_API_KEY` is unset or blank.
    pub fn from_env() -> Option<Self> {
        let key = configured_api_key()?;
        Some(Self::new(key, configured_base_url()))
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/// `OPENAI_API_KEY`, ignoring blank values.
pub fn configured_api_key() -> Option<String> {
    std::env::var("OPENAI_API_KEY")
        .ok()
        .map(|key| key.trim().to_string())
        .filter(|key| !key.is_empty())
}

pub fn configured_base_url() -> String {
    std::env::var("OPENAI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string())
}

pub fn configured_model() -> String {
    std::env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string())
}

#[async_trait]
impl ChatClient for OpenAiClient {
    async fn complete(
        &self,
        settings: &CompletionSettings,
        user: &str,
    ) -> Result<Option<String>, DomainError> {
        let request = ApiRequest {
            model: settings.model(),
            messages: vec![
                ApiMessage {
                    role: "system",
                    content: settings.system_prompt(),
                },
                ApiMessage {
                    role: "user",
                    content: user,
                },
            ],
            max_tokens: settings.max_tokens(),
            temperature: settings.temperature(),
        };

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| DomainError::upstream(format!("OpenAiClient: request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("OpenAiClient: API returned {status}: {body}");
            return Err(DomainError::upstream(format!(
                "OpenAiClient: API returned {status}"
            )));
        }

        let api_response: ApiResponse = response.json().await.map_err(|e| {
            DomainError::upstream(format!("OpenAiClient: failed to parse response: {e}"))
        })?;

        let content = api_response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content);
        debug!(has_content = content.is_some(), "OpenAiClient: completion received");

        Ok(content)
    }

    fn provider_name(&self) -> &str {
        "openai"
    }
}
