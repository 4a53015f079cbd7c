mod analysis;
mod config;
mod errors;
mod llm_client;
mod rasterize;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::{GeminiClient, GenerativeModel};
use crate::rasterize::{PageRasterizer, PdfiumRasterizer};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first; only a malformed PORT aborts startup.
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting ResumeLens API v{}", env!("CARGO_PKG_VERSION"));

    // A missing credential is fatal for analysis but not for the process:
    // the failure surfaces on the first model invocation instead.
    if config.google_api_key.is_none() {
        error!("GOOGLE_API_KEY is not set; analysis requests will fail at the model call");
    }

    let rasterizer: Arc<dyn PageRasterizer> =
        Arc::new(PdfiumRasterizer::new(config.pdfium_lib_path.clone()));
    if let Some(path) = &config.pdfium_lib_path {
        info!("pdfium library path override: {path}");
    }

    let model: Arc<dyn GenerativeModel> = Arc::new(GeminiClient::new(config.google_api_key.clone()));
    info!("model client initialized (model: {})", llm_client::MODEL);

    let state = AppState {
        rasterizer,
        model,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
