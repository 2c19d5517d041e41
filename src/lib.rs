pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use application::{
    ChatClient, RelayClient, RelayMessageUseCase, SendMessageUseCase, API_KEY_NOT_CONFIGURED,
    MESSAGE_REQUIRED,
};

pub use connector::{
    build_router, AppState, Container, ContainerConfig, HttpRelayClient, MockBehavior,
    MockChatClient, MockRelayClient, OpenAiClient,
};

pub use cli::Commands;

pub use domain::{
    CompletionSettings, Conversation, DomainError, Message, Role, CONNECTION_APOLOGY,
    FALLBACK_RESPONSE, SYSTEM_PROMPT,
};
