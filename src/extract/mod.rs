//! Text extraction from uploaded files.
//!
//! Uploaded bytes are written to a temporary file and handed to external tools:
//! - pdftotext/pdfinfo (Poppler) for PDF documents, page by page
//! - Tesseract OCR for everything else (treated as an image)
//!
//! The file type is decided by the upload's filename extension only.

mod pdf;
mod tesseract;
mod tools;

use std::io::Write;
use std::path::Path;

use thiserror::Error;
use tracing::debug;

pub use tools::check_tools;

/// Errors that can occur during text extraction.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("External tool not found: {0}")]
    ToolNotFound(String),

    #[error("Extraction failed: {0}")]
    ExtractionFailed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// How an upload is turned into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// Document text extraction, one page at a time.
    Pdf,
    /// OCR of a raster image.
    Image,
}

impl FileKind {
    /// Pick the strategy from a filename. Only `.pdf` (any case) is a PDF;
    /// anything else, including a missing extension, goes to OCR.
    pub fn from_filename(filename: &str) -> Self {
        let is_pdf = Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));

        if is_pdf {
            FileKind::Pdf
        } else {
            FileKind::Image
        }
    }
}

/// Something that can turn raw file bytes into plain text.
///
/// Implementations are blocking; callers on an async runtime should run them
/// on the blocking pool.
pub trait Extractor: Send + Sync {
    /// Extract trimmed text from `bytes`. An empty string means no text was found.
    fn extract(&self, bytes: &[u8], filename: &str) -> Result<String, ExtractionError>;
}

/// Extractor backed by the Poppler and Tesseract command-line tools.
#[derive(Debug, Clone)]
pub struct TextExtractor {
    /// Tesseract language setting.
    tesseract_lang: String,
}

impl Default for TextExtractor {
    fn default() -> Self {
        Self {
            tesseract_lang: "eng".to_string(),
        }
    }
}

impl TextExtractor {
    /// Create a new text extractor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set Tesseract language.
    pub fn with_language(mut self, lang: &str) -> Self {
        self.tesseract_lang = lang.to_string();
        self
    }

    /// Extract text from a file already on disk.
    pub fn extract_path(&self, path: &Path, kind: FileKind) -> Result<String, ExtractionError> {
        let text = match kind {
            FileKind::Pdf => pdf::extract_text(path)?,
            FileKind::Image => tesseract::run_tesseract(path, &self.tesseract_lang)?,
        };
        Ok(text.trim().to_string())
    }
}

impl Extractor for TextExtractor {
    fn extract(&self, bytes: &[u8], filename: &str) -> Result<String, ExtractionError> {
        let kind = FileKind::from_filename(filename);
        let suffix = match kind {
            FileKind::Pdf => ".pdf".to_string(),
            FileKind::Image => Path::new(filename)
                .extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| format!(".{}", ext))
                .unwrap_or_default(),
        };

        let mut upload = tempfile::Builder::new()
            .prefix("upload-")
            .suffix(&suffix)
            .tempfile()?;
        upload.write_all(bytes)?;
        upload.flush()?;

        debug!(
            "Extracting {:?} from {} ({} bytes)",
            kind,
            filename,
            bytes.len()
        );
        self.extract_path(upload.path(), kind)
    }
}
