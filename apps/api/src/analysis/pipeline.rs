//! Per-request orchestration: Validated → Rasterized → Composed → Invoked.
//!
//! Strictly linear and all-or-nothing. Any stage error short-circuits the
//! remaining stages and becomes the response via `AppError`; there is no
//! retry transition and no partial-success state.

use crate::analysis::prompts::compose_prompt;
use crate::analysis::validate::AnalysisRequest;
use crate::errors::AppError;
use crate::llm_client::{GenerativeModel, ModelQuery};
use crate::rasterize::PageRasterizer;

/// Runs the three post-validation stages and returns the model's text.
pub async fn analyze(
    rasterizer: &dyn PageRasterizer,
    model: &dyn GenerativeModel,
    request: AnalysisRequest,
) -> Result<String, AppError> {
    let page = rasterizer.rasterize_first_page(request.resume).await?;

    let composite_text = compose_prompt(&request.job_description, request.kind);

    let text = model
        .generate(&ModelQuery {
            composite_text,
            page,
        })
        .await?;

    Ok(text)
}
