use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::GenerativeModel;
use crate::rasterize::PageRasterizer;

/// Shared application state injected into all route handlers via Axum
/// extractors. Both external collaborators sit behind trait objects so
/// handlers (and tests) never depend on the concrete pdfium or Gemini
/// implementations. Everything here is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub rasterizer: Arc<dyn PageRasterizer>,
    pub model: Arc<dyn GenerativeModel>,
    pub config: Config,
}
