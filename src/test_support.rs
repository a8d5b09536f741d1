//! In-memory stand-ins for the extractor and analyzer.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::extract::{ExtractionError, Extractor};
use crate::llm::{Analysis, EngagementScore, LlmError, Rewrites, SentimentAnalyzer, Sentiment};

pub fn sample_analysis() -> Analysis {
    Analysis {
        sentiment: Sentiment::Positive,
        emotions: vec!["joy".to_string()],
        topics: vec!["product".to_string()],
        engagement_score: EngagementScore::Text("7".to_string()),
        suggestions: vec!["Add a photo".to_string()],
        audience: "Shoppers".to_string(),
        hashtags: vec!["#love".to_string()],
        rewrites: Rewrites {
            friendly: "So into this!".to_string(),
            professional: "A product I recommend.".to_string(),
            concise: "Love it.".to_string(),
        },
        summary: "The author likes a product.".to_string(),
    }
}

pub struct StubExtractor {
    text: Option<String>,
    calls: AtomicUsize,
    filenames: Mutex<Vec<String>>,
}

impl StubExtractor {
    pub fn returning(text: &str) -> Self {
        Self {
            text: Some(text.to_string()),
            calls: AtomicUsize::new(0),
            filenames: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            text: None,
            calls: AtomicUsize::new(0),
            filenames: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn filenames(&self) -> Vec<String> {
        self.filenames.lock().unwrap().clone()
    }
}

impl Extractor for StubExtractor {
    fn extract(&self, _bytes: &[u8], filename: &str) -> Result<String, ExtractionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.filenames.lock().unwrap().push(filename.to_string());
        self.text
            .clone()
            .ok_or_else(|| ExtractionError::ExtractionFailed("corrupt upload".to_string()))
    }
}

pub struct StubAnalyzer {
    fail: bool,
    seen: Mutex<Vec<String>>,
}

impl StubAnalyzer {
    pub fn new() -> Self {
        Self {
            fail: false,
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            seen: Mutex::new(Vec::new()),
        }
    }

    /// Texts passed to `analyze`, in call order.
    pub fn seen(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl SentimentAnalyzer for StubAnalyzer {
    async fn analyze(&self, text: &str) -> Result<Analysis, LlmError> {
        self.seen.lock().unwrap().push(text.to_string());
        if self.fail {
            return Err(LlmError::Api {
                status: 503,
                message: "model overloaded".to_string(),
            });
        }
        Ok(sample_analysis())
    }
}
