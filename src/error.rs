//! Request-level error kinds and their HTTP mapping.

use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::extract::ExtractionError;
use crate::llm::LlmError;

/// Everything that can make an analysis request fail.
#[derive(Debug, Error)]
pub enum AppError {
    /// The request itself is unusable (no input, unreadable form).
    #[error("{0}")]
    Input(String),

    /// The upload exceeds the configured body limit.
    #[error("{0}")]
    PayloadTooLarge(String),

    /// The extraction tool rejected the uploaded file.
    #[error("{0}")]
    Extraction(String),

    /// The analysis model failed or returned something unusable.
    #[error("{0}")]
    Upstream(#[from] LlmError),

    /// A bug or runtime failure on our side.
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Input(_) => StatusCode::BAD_REQUEST,
            AppError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Extraction(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Upstream(_) => StatusCode::BAD_GATEWAY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ExtractionError> for AppError {
    fn from(err: ExtractionError) -> Self {
        match err {
            ExtractionError::ExtractionFailed(_) => AppError::Extraction(err.to_string()),
            // Missing binaries and temp file failures are server faults
            ExtractionError::ToolNotFound(_) | ExtractionError::Io(_) => {
                AppError::Internal(err.to_string())
            }
        }
    }
}

impl From<MultipartError> for AppError {
    fn from(err: MultipartError) -> Self {
        if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
            return AppError::PayloadTooLarge(format!("Upload too large: {}", err.body_text()));
        }
        AppError::Input(format!("Invalid form data: {}", err.body_text()))
    }
}

impl From<MultipartRejection> for AppError {
    fn from(err: MultipartRejection) -> Self {
        if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
            return AppError::PayloadTooLarge(format!("Upload too large: {}", err.body_text()));
        }
        AppError::Input(format!("Invalid form data: {}", err.body_text()))
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(err: tokio::task::JoinError) -> Self {
        tracing::error!("Extraction task failed: {}", err);
        AppError::Internal("Extraction task failed".to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed ({}): {}", status, self);
        } else {
            tracing::warn!("Request rejected ({}): {}", status, self);
        }

        (
            status,
            Json(serde_json::json!({ "detail": self.to_string() })),
        )
            .into_response()
    }
}
