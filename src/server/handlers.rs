//! HTTP handlers.

use axum::extract::multipart::{Multipart, MultipartRejection};
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use super::AppState;
use crate::error::AppError;
use crate::service::{AnalysisRequest, AnalysisResponse};

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "Status": "Server Running" }))
}

/// Accept a file or text and return its analysis.
///
/// When both `file` and `text` are sent, the file wins.
pub async fn upload(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<AnalysisResponse>, AppError> {
    let request = read_upload(multipart?).await?;
    let response = state.service.handle(request).await?;
    Ok(Json(response))
}

/// Pull the `file` and `text` fields out of the form. Other fields are ignored.
async fn read_upload(mut multipart: Multipart) -> Result<AnalysisRequest, AppError> {
    let mut file = None;
    let mut text = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let bytes = field.bytes().await?;
                // Browsers send an empty part for an untouched file input
                if filename.is_empty() && bytes.is_empty() {
                    continue;
                }
                file = Some(AnalysisRequest::File {
                    filename,
                    bytes: bytes.to_vec(),
                });
            }
            Some("text") => {
                let value = field.text().await?;
                if !value.trim().is_empty() {
                    text = Some(AnalysisRequest::Text(value));
                }
            }
            _ => {}
        }
    }

    file.or(text)
        .ok_or_else(|| AppError::Input("No file or text provided".to_string()))
}
