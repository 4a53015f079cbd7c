use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;
use crate::rasterize::RasterizeError;

/// Sanitized message returned for every model-side failure. The upstream
/// detail (credential problems included) is logged, never forwarded.
pub const MODEL_FAILURE_MESSAGE: &str =
    "AI model communication failed. Check API key or service availability.";

/// Application-level error type covering the three pipeline categories.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    /// Caller-correctable input problem → 400, message returned verbatim.
    #[error("{0}")]
    BadInput(String),

    /// The PDF could not be rasterized → 500.
    #[error("processing failure: {0}")]
    Processing(#[from] RasterizeError),

    /// The model collaborator could not be reached or refused → 500.
    #[error("model failure: {0}")]
    Model(#[from] LlmError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::BadInput(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Processing(e) => {
                tracing::error!("PDF processing error: {e}");
                let msg = match e {
                    RasterizeError::BackendUnavailable(_) => {
                        "PDF rasterization backend is unavailable. \
                         Ensure the pdfium library is installed."
                    }
                    RasterizeError::InvalidPdf(_) => {
                        "Failed to process the PDF file. Ensure it is a valid PDF."
                    }
                };
                (StatusCode::INTERNAL_SERVER_ERROR, msg.to_string())
            }
            AppError::Model(e) => {
                tracing::error!("model API error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    MODEL_FAILURE_MESSAGE.to_string(),
                )
            }
        };

        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}
