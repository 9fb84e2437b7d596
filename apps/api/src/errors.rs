use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unprocessable entity: {0}")]
    UnprocessableEntity(String),

    #[error("Interview limit reached for {email} ({count} of {limit} used)")]
    UsageLimitExceeded {
        email: String,
        count: i64,
        limit: i64,
    },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Generation error: {0}")]
    Generation(#[from] LlmError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::UnprocessableEntity(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "UNPROCESSABLE_ENTITY",
                msg.clone(),
            ),
            AppError::UsageLimitExceeded { limit, .. } => (
                StatusCode::TOO_MANY_REQUESTS,
                "USAGE_LIMIT_EXCEEDED",
                format!("You have already completed the maximum of {limit} interviews"),
            ),
            AppError::Database(e) => {
                tracing::error!("Database error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DATABASE_ERROR",
                    "A database error occurred".to_string(),
                )
            }
            AppError::Generation(e) => {
                tracing::error!("Generation error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "GENERATION_ERROR",
                    "The AI service could not complete the request".to_string(),
                )
            }
        };

        let body = Json(json!({
            "success": false,
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
