//! Image OCR via the Tesseract command-line tool.

use std::path::Path;

use super::tools::TESSERACT;
use super::ExtractionError;

/// Run Tesseract OCR on an image.
pub(super) fn run_tesseract(image_path: &Path, lang: &str) -> Result<String, ExtractionError> {
    let mut cmd = TESSERACT.command();
    cmd.arg(image_path).arg("stdout").args(["-l", lang]);
    TESSERACT.run(&mut cmd, "failed")
}
