//! Orchestration of an analysis request: extract text if needed, then analyze.

use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use crate::error::AppError;
use crate::extract::Extractor;
use crate::llm::{Analysis, SentimentAnalyzer};

/// Message returned when a file yields no text.
pub const NO_TEXT_FOUND: &str = "No text found in file";

/// What the client submitted.
#[derive(Debug, Clone)]
pub enum AnalysisRequest {
    File { filename: String, bytes: Vec<u8> },
    Text(String),
}

/// Body of a successful (HTTP 200) response.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnalysisResponse {
    Analyzed {
        #[serde(skip_serializing_if = "Option::is_none")]
        filename: Option<String>,
        extracted_text: String,
        analysis: Analysis,
    },
    /// The file was readable but contained no text.
    NoText { error: String },
}

/// Routes requests to the extractor and analyzer.
#[derive(Clone)]
pub struct AnalyzerService {
    extractor: Arc<dyn Extractor>,
    analyzer: Arc<dyn SentimentAnalyzer>,
}

impl AnalyzerService {
    pub fn new(extractor: Arc<dyn Extractor>, analyzer: Arc<dyn SentimentAnalyzer>) -> Self {
        Self {
            extractor,
            analyzer,
        }
    }

    /// Dispatch a request to the file or text path.
    pub async fn handle(&self, request: AnalysisRequest) -> Result<AnalysisResponse, AppError> {
        match request {
            AnalysisRequest::File { filename, bytes } => self.process_file(filename, bytes).await,
            AnalysisRequest::Text(text) => self.analyze_text(text).await,
        }
    }

    /// Extract text from an uploaded file and analyze it.
    pub async fn process_file(
        &self,
        filename: String,
        bytes: Vec<u8>,
    ) -> Result<AnalysisResponse, AppError> {
        info!("Processing upload {} ({} bytes)", filename, bytes.len());

        let extractor = Arc::clone(&self.extractor);
        let name = filename.clone();
        let extracted_text =
            tokio::task::spawn_blocking(move || extractor.extract(&bytes, &name)).await??;

        if extracted_text.is_empty() {
            warn!("No text found in {}", filename);
            return Ok(AnalysisResponse::NoText {
                error: NO_TEXT_FOUND.to_string(),
            });
        }

        let analysis = self.analyzer.analyze(&extracted_text).await?;
        Ok(AnalysisResponse::Analyzed {
            filename: Some(filename),
            extracted_text,
            analysis,
        })
    }

    /// Analyze submitted text as-is.
    pub async fn analyze_text(&self, text: String) -> Result<AnalysisResponse, AppError> {
        let analysis = self.analyzer.analyze(&text).await?;
        Ok(AnalysisResponse::Analyzed {
            filename: None,
            extracted_text: text,
            analysis,
        })
    }
}
