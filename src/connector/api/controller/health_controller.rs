use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use crate::connector::api::router::AppState;

/// `GET /health`: liveness, plus whether a completion backend is configured.
pub async fn health(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "configured": state.relay.is_configured(),
    }))
}
