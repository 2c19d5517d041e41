//! Axum router for the relay.

use std::sync::Arc;

use axum::middleware;
use axum::routing::{get, post};
use axum::Router;

use crate::application::RelayMessageUseCase;

use super::controller::{chat, health};
use super::trace::trace_requests;

/// State shared by every handler. Immutable after startup.
pub struct AppState {
    pub relay: Arc<RelayMessageUseCase>,
}

impl AppState {
    pub fn new(relay: RelayMessageUseCase) -> Self {
        Self {
            relay: Arc::new(relay),
        }
    }
}

pub fn build(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/chat", post(chat))
        .route("/health", get(health))
        .layer(middleware::from_fn(trace_requests))
        .with_state(state)
}
