mod chat_client;
mod relay_client;

pub use chat_client::*;
pub use relay_client::*;
