use anyhow::{Context, Result};

/// Application configuration loaded from environment variables once at
/// startup and carried in `AppState`. Nothing reads the environment after
/// this point.
#[derive(Debug, Clone)]
pub struct Config {
    /// Credential for the Gemini API. A missing key is logged at startup
    /// and fails the first model invocation, never the process.
    pub google_api_key: Option<String>,
    /// Directory holding the pdfium shared library. `None` falls back to
    /// the system default search path.
    pub pdfium_lib_path: Option<String>,
    /// Directory of static assets served at the router fallback.
    pub frontend_dir: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            google_api_key: optional_env("GOOGLE_API_KEY"),
            pdfium_lib_path: optional_env("PDFIUM_LIB_PATH"),
            frontend_dir: std::env::var("FRONTEND_DIR")
                .unwrap_or_else(|_| "frontend".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// An unset or blank variable both count as absent.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
