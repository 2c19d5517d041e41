//! # Domain Layer
//!
//! Conversation model, completion settings and the error type shared by every layer.
//! This layer is independent of HTTP, terminal and vendor details.

mod error;
pub mod models;

pub use error::*;
pub use models::*;
