use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::MESSAGE_REQUIRED;
use crate::connector::api::error::ApiError;
use crate::connector::api::router::AppState;

/// Body of `POST /api/chat`.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

/// `POST /api/chat`: relay one message to the completion API.
///
/// The body is decoded as JSON whatever its `Content-Type` says.
pub async fn chat(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<ChatResponse>, ApiError> {
    let request: ChatRequest = serde_json::from_slice(&body).map_err(|e| {
        debug!(error = %e, "rejected chat request body");
        ApiError::BadRequest(MESSAGE_REQUIRED.to_string())
    })?;

    let message = request
        .message
        .ok_or_else(|| ApiError::BadRequest(MESSAGE_REQUIRED.to_string()))?;

    let response = state.relay.execute(&message).await?;

    Ok(Json(ChatResponse { response }))
}
