//! Axum route handler for the analysis endpoint.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Serialize;
use tracing::info;

use crate::analysis::pipeline::analyze;
use crate::analysis::validate::{validate, RawAnalysisForm};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub response: String,
}

/// POST /analyze
///
/// Multipart form: `resume` (PDF file), `jobDescription` (required text),
/// `promptType` (optional text, defaults to `analysis`).
pub async fn handle_analyze(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    info!("received analysis request");

    let form = read_form(multipart).await?;
    let request = validate(form)?;

    let text = analyze(state.rasterizer.as_ref(), state.model.as_ref(), request).await?;

    Ok(Json(AnalyzeResponse { response: text }))
}

fn malformed() -> AppError {
    AppError::BadInput("Malformed multipart request.".to_string())
}

/// Drains every multipart field into a `RawAnalysisForm`. Unknown fields are
/// consumed and ignored; a stream that cannot be read is a caller error.
async fn read_form(mut multipart: Multipart) -> Result<RawAnalysisForm, AppError> {
    let mut form = RawAnalysisForm::default();

    while let Some(field) = multipart.next_field().await.map_err(|_| malformed())? {
        match field.name().unwrap_or("") {
            "resume" => {
                form.resume = Some(field.bytes().await.map_err(|_| malformed())?);
            }
            "jobDescription" => {
                form.job_description = Some(field.text().await.map_err(|_| malformed())?);
            }
            "promptType" => {
                form.prompt_type = Some(field.text().await.map_err(|_| malformed())?);
            }
            _ => {
                let _ = field.bytes().await;
            }
        }
    }

    Ok(form)
}
