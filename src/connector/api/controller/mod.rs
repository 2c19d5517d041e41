pub mod ask_controller;
pub mod chat_controller;
pub mod health_controller;

pub use ask_controller::AskController;
pub use chat_controller::{chat, ChatRequest, ChatResponse};
pub use health_controller::health;
