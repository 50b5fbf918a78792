//! Application error types.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::services::agent::AgentError;

/// Application-level errors with HTTP status mapping.
///
/// Two classes only: client input validation, and everything else
/// (credential, provider, network) as one opaque server-error class.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Agent(#[from] AgentError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, message) = match &self {
            AppError::Validation(m) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "validation_error", m.clone())
            }
            AppError::Agent(e) => {
                tracing::error!("agent call failed: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "agent_error",
                    "upstream agent call failed".to_string(),
                )
            }
        };
        let body = Json(json!({
            "error": error,
            "message": message,
        }));
        (status, body).into_response()
    }
}
