mod http_relay_client;
mod mock_chat_client;
mod mock_relay_client;
mod openai_client;

pub use http_relay_client::*;
pub use mock_chat_client::*;
pub use mock_relay_client::*;
pub use openai_client::*;
