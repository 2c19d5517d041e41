//! HTTP-facing error type.
//!
//! Handlers return `Result<T, ApiError>`. Client errors expose their message;
//! upstream and internal failures are logged in full and answered with a
//! fixed message so vendor responses and keys never reach the caller.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::domain::DomainError;

pub const UPSTREAM_FAILURE: &str = "Failed to get response from OpenAI";

#[derive(Debug, Error)]
pub enum ApiError {
    /// The caller sent an invalid or incomplete request.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// The server is missing something it needs to answer (e.g. the API key).
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The completion API call failed.
    #[error("upstream error: {0}")]
    Upstream(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::InvalidInput(m) => ApiError::BadRequest(m),
            DomainError::Configuration(m) => ApiError::Configuration(m),
            DomainError::Upstream(m) | DomainError::Transport(m) => ApiError::Upstream(m),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, client_message) = match &self {
            ApiError::BadRequest(m) => (StatusCode::BAD_REQUEST, m.clone()),
            ApiError::Configuration(m) => {
                error!(message = %m, "relay is not configured");
                (StatusCode::INTERNAL_SERVER_ERROR, m.clone())
            }
            ApiError::Upstream(m) => {
                error!(message = %m, "completion API error");
                (StatusCode::INTERNAL_SERVER_ERROR, UPSTREAM_FAILURE.to_owned())
            }
            ApiError::Internal(m) => {
                error!(message = %m, "internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_owned(),
                )
            }
        };
        (status, Json(json!({ "error": client_message }))).into_response()
    }
}
