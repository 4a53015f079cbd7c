//! PDF rasterization: first page → JPEG → base64, via pdfium.
//!
//! pdfium wraps a C++ library that keeps thread-local state and is not safe
//! to call from async contexts, so the whole load-render-encode section runs
//! under `tokio::task::spawn_blocking`.

use std::io::Cursor;

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use bytes::Bytes;
use image::DynamicImage;
use pdfium_render::prelude::*;
use thiserror::Error;
use tracing::debug;

/// MIME type of every page this module produces.
pub const JPEG_MIME: &str = "image/jpeg";

/// Longest edge of the rendered page in pixels. Caps memory regardless of
/// the physical page size; resumes stay readable for vision models well
/// below this.
const RENDER_TARGET_PX: i32 = 1024;

#[derive(Debug, Error)]
pub enum RasterizeError {
    /// The pdfium shared library could not be bound. A missing system
    /// dependency rather than a bad upload; kept distinct so operators can
    /// tell the two apart in logs.
    #[error("rasterization backend unavailable: {0}")]
    BackendUnavailable(String),

    /// Malformed PDF, zero pages, or any other decode/encode failure.
    #[error("invalid or unreadable PDF: {0}")]
    InvalidPdf(String),
}

/// The first page of an uploaded PDF, JPEG-encoded and base64-wrapped,
/// ready to attach to a model request. Lives for one request only.
#[derive(Debug, Clone)]
pub struct RasterizedPage {
    pub mime_type: &'static str,
    pub data_base64: String,
}

/// Rasterizer seam. `AppState` carries an `Arc<dyn PageRasterizer>` so the
/// pipeline never depends on the concrete pdfium implementation.
#[async_trait]
pub trait PageRasterizer: Send + Sync {
    async fn rasterize_first_page(&self, pdf: Bytes) -> Result<RasterizedPage, RasterizeError>;
}

/// Production rasterizer backed by pdfium. One binding attempt per request;
/// no retry.
pub struct PdfiumRasterizer {
    /// Optional directory holding the pdfium shared library
    /// (`PDFIUM_LIB_PATH`); `None` searches the system default paths.
    lib_path: Option<String>,
}

impl PdfiumRasterizer {
    pub fn new(lib_path: Option<String>) -> Self {
        Self { lib_path }
    }
}

#[async_trait]
impl PageRasterizer for PdfiumRasterizer {
    async fn rasterize_first_page(&self, pdf: Bytes) -> Result<RasterizedPage, RasterizeError> {
        let lib_path = self.lib_path.clone();
        tokio::task::spawn_blocking(move || rasterize_blocking(lib_path.as_deref(), &pdf))
            .await
            .map_err(|e| RasterizeError::InvalidPdf(format!("render task panicked: {e}")))?
    }
}

fn rasterize_blocking(
    lib_path: Option<&str>,
    pdf: &[u8],
) -> Result<RasterizedPage, RasterizeError> {
    let bindings = match lib_path {
        Some(dir) => Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path(dir)),
        None => Pdfium::bind_to_system_library(),
    }
    .map_err(|e| RasterizeError::BackendUnavailable(format!("{e:?}")))?;
    let pdfium = Pdfium::new(bindings);

    let document = pdfium
        .load_pdf_from_byte_slice(pdf, None)
        .map_err(|e| RasterizeError::InvalidPdf(format!("{e:?}")))?;

    let pages = document.pages();
    if pages.len() == 0 {
        return Err(RasterizeError::InvalidPdf("document has no pages".to_string()));
    }

    // Only the first page is ever analyzed; pages 2..n are never rendered.
    let page = pages
        .get(0)
        .map_err(|e| RasterizeError::InvalidPdf(format!("{e:?}")))?;

    let render_config = PdfRenderConfig::new()
        .set_target_width(RENDER_TARGET_PX)
        .set_maximum_height(RENDER_TARGET_PX);

    let bitmap = page
        .render_with_config(&render_config)
        .map_err(|e| RasterizeError::InvalidPdf(format!("{e:?}")))?;

    let image = bitmap.as_image();
    debug!(
        "rendered first page → {}x{} px",
        image.width(),
        image.height()
    );

    encode_jpeg(&image)
}

/// JPEG-encode a rendered page into an in-memory buffer, then base64 it.
pub fn encode_jpeg(img: &DynamicImage) -> Result<RasterizedPage, RasterizeError> {
    // JPEG has no alpha channel; pdfium bitmaps come out as RGBA.
    let rgb = DynamicImage::ImageRgb8(img.to_rgb8());

    let mut buf = Vec::new();
    rgb.write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Jpeg)
        .map_err(|e| RasterizeError::InvalidPdf(format!("JPEG encode failed: {e}")))?;

    Ok(RasterizedPage {
        mime_type: JPEG_MIME,
        data_base64: STANDARD.encode(&buf),
    })
}
