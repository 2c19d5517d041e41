use std::sync::Mutex;

use async_trait::async_trait;

use crate::application::ChatClient;
use crate::domain::{CompletionSettings, DomainError};

/// What the mock answers with.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    Reply(String),
    Empty,
    Fail(String),
}

/// A request as the mock saw it.
#[derive(Debug, Clone)]
pub struct RecordedCompletion {
    pub system: String,
    pub user: String,
}

/// A [`ChatClient`] that answers from a script instead of calling an API.
///
/// Used by `--mock-completions` and by tests. With the default behavior it
/// echoes the user's message back.
pub struct MockChatClient {
    behavior: Option<MockBehavior>,
    calls: Mutex<Vec<RecordedCompletion>>,
}

impl MockChatClient {
    pub fn new() -> Self {
        Self {
            behavior: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_behavior(behavior: MockBehavior) -> Self {
        Self {
            behavior: Some(behavior),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn replying(text: impl Into<String>) -> Self {
        Self::with_behavior(MockBehavior::Reply(text.into()))
    }

    pub fn empty() -> Self {
        Self::with_behavior(MockBehavior::Empty)
    }

    pub fn failing(reason: impl Into<String>) -> Self {
        Self::with_behavior(MockBehavior::Fail(reason.into()))
    }

    pub fn calls(&self) -> Vec<RecordedCompletion> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }
}

impl Default for MockChatClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatClient for MockChatClient {
    async fn complete(
        &self,
        settings: &CompletionSettings,
        user: &str,
    ) -> Result<Option<String>, DomainError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(RecordedCompletion {
                system: settings.system_prompt().to_string(),
                user: user.to_string(),
            });
        }

        match &self.behavior {
            None => Ok(Some(format!("(mock) You asked: {user}"))),
            Some(MockBehavior::Reply(text)) => Ok(Some(text.clone())),
            Some(MockBehavior::Empty) => Ok(None),
            Some(MockBehavior::Fail(reason)) => Err(DomainError::upstream(reason.clone())),
        }
    }

    fn provider_name(&self) -> &str {
        "mock"
    }
}
