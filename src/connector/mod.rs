//! # Connector Layer
//!
//! External integrations implementing the application ports:
//! - Completion API clients (OpenAI-compatible, mock)
//! - Relay clients used by the UI (HTTP, mock)
//! - The relay's HTTP surface (axum)
//! - The terminal conversation UI (ratatui)

pub mod adapter;
pub mod api;
pub mod tui;

pub use adapter::*;
pub use api::*;
