//! Web server exposing the analyzer over HTTP.
//!
//! - `GET /` health check
//! - `POST /analyzer/upload` multipart form with a `file` or `text` field

mod handlers;
mod routes;

pub use routes::create_router;

use std::net::SocketAddr;
use std::sync::Arc;

use crate::config::Settings;
use crate::extract::{check_tools, TextExtractor};
use crate::llm::GeminiClient;
use crate::service::AnalyzerService;

/// Shared state for the web server.
#[derive(Clone)]
pub struct AppState {
    pub service: AnalyzerService,
    pub settings: Arc<Settings>,
}

impl AppState {
    /// Build the production state: CLI extractors and a Gemini client.
    pub fn new(settings: Settings) -> anyhow::Result<Self> {
        let extractor = TextExtractor::new().with_language(&settings.ocr_language);
        let analyzer = GeminiClient::new(settings.gemini.clone())?;

        Ok(Self {
            service: AnalyzerService::new(Arc::new(extractor), Arc::new(analyzer)),
            settings: Arc::new(settings),
        })
    }
}

/// Start the web server.
pub async fn serve(settings: Settings, host: &str, port: u16) -> anyhow::Result<()> {
    for (tool, available) in check_tools() {
        if !available {
            tracing::warn!("{} not found in PATH; uploads needing it will fail", tool);
        }
    }

    let state = AppState::new(settings)?;
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    tracing::info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
