//! PDF text extraction with Poppler's pdfinfo and pdftotext.

use std::path::Path;

use super::tools::{PDFINFO, PDFTOTEXT};
use super::ExtractionError;

/// Extract text from every page of a PDF, concatenated in page order.
///
/// Falls back to a single whole-document pdftotext run when the page count
/// can't be determined.
pub(super) fn extract_text(file_path: &Path) -> Result<String, ExtractionError> {
    let Some(page_count) = page_count(file_path) else {
        tracing::debug!("pdfinfo gave no page count, extracting whole document");
        return run_pdftotext(file_path, None).map(|text| clean_page(&text).to_string());
    };

    let mut pages = Vec::with_capacity(page_count as usize);
    for page in 1..=page_count {
        pages.push(run_pdftotext(file_path, Some(page))?);
    }
    Ok(join_pages(&pages))
}

/// Get the page count of a PDF.
fn page_count(file_path: &Path) -> Option<u32> {
    let mut cmd = PDFINFO.command();
    cmd.arg(file_path);
    let info = PDFINFO.run(&mut cmd, "failed").ok()?;
    parse_page_count(&info)
}

fn parse_page_count(pdfinfo: &str) -> Option<u32> {
    pdfinfo
        .lines()
        .find(|line| line.starts_with("Pages:"))
        .and_then(|line| line.split_whitespace().nth(1))
        .and_then(|s| s.parse().ok())
}

/// Run pdftotext on the whole file or a single page.
fn run_pdftotext(file_path: &Path, page: Option<u32>) -> Result<String, ExtractionError> {
    let mut cmd = PDFTOTEXT.command();
    cmd.args(["-enc", "UTF-8"]);

    let context = match page {
        Some(page) => {
            let page_str = page.to_string();
            cmd.args(["-f", &page_str, "-l", &page_str]);
            format!("failed on page {}", page)
        }
        None => "failed".to_string(),
    };

    cmd.arg(file_path).arg("-");
    PDFTOTEXT.run(&mut cmd, &context)
}

/// pdftotext terminates each page with a form feed.
fn clean_page(text: &str) -> &str {
    text.trim_end_matches(['\x0c', '\n', '\r'])
}

fn join_pages(pages: &[String]) -> String {
    pages
        .iter()
        .map(|p| clean_page(p))
        .filter(|p| !p.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_page_count() {
        let info = "Title:          Quarterly\nProducer:       LibreOffice\nPages:          3\nEncrypted:      no\n";
        assert_eq!(parse_page_count(info), Some(3));
        assert_eq!(parse_page_count("Encrypted: no\n"), None);
        assert_eq!(parse_page_count("Pages: many\n"), None);
    }

    #[test]
    fn test_join_pages_strips_form_feeds() {
        let pages = vec![
            "First page\n\x0c".to_string(),
            "\x0c".to_string(),
            "Third page\n\x0c".to_string(),
        ];
        assert_eq!(join_pages(&pages), "First page\nThird page");
    }

    #[test]
    fn test_join_pages_all_blank() {
        let pages = vec!["\x0c".to_string(), "  \n\x0c".to_string()];
        assert_eq!(join_pages(&pages), "");
    }
}
