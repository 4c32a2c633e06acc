use axum::{Json, http::StatusCode, response::{IntoResponse, Response}};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("store unavailable: {0}")]
    StoreUnavailable(#[source] sqlx::Error),

    #[error("store write failed: {0}")]
    StoreWrite(#[source] sqlx::Error),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("authentication failed: {0}")]
    Auth(String),
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::Validation(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            AppError::Auth(msg) => (StatusCode::UNAUTHORIZED, msg),
            AppError::StoreUnavailable(e) => {
                error!("store unavailable: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Store unavailable".to_string(),
                )
            }
            AppError::StoreWrite(e) => {
                error!("store write failed: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to write to the store".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: status.to_string(),
            message: error_message,
        });

        (status, body).into_response()
    }
}
