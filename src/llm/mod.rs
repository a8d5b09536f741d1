//! LLM client for post sentiment and engagement analysis.
//!
//! Talks to Google's Gemini `generateContent` API.

mod analysis;
mod config;
mod gemini;
mod prompts;

use async_trait::async_trait;
use thiserror::Error;

pub use analysis::{parse_analysis, Analysis, EngagementScore, Rewrites, Sentiment};
pub use config::GeminiConfig;
pub use gemini::GeminiClient;
pub use prompts::analysis_prompt;

/// Errors that can occur during LLM operations.
#[derive(Debug, Error)]
pub enum LlmError {
    /// No API key configured
    #[error("GEMINI_API_KEY not set")]
    MissingApiKey,

    /// Failed to reach the LLM service
    #[error("Connection error: {0}")]
    Connection(String),

    /// API returned an error
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Model produced no text
    #[error("Empty response from model")]
    EmptyResponse,

    /// Model stopped at the output token limit before finishing its reply
    #[error("Model output truncated: reached the max output token limit")]
    Truncated,

    /// Failed to parse response
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Produces an [`Analysis`] for a piece of text.
#[async_trait]
pub trait SentimentAnalyzer: Send + Sync {
    async fn analyze(&self, text: &str) -> Result<Analysis, LlmError>;
}
