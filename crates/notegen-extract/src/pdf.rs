//! PDF structural extraction.
//!
//! Produces a page-ordered list of text items per page. The dispatcher
//! joins items with a single space and pages with a newline.

use std::path::Path;

use notegen_core::{Error, Result};

/// Extract text items page by page.
///
/// Each inner vector holds the non-empty text lines of one page, in page
/// order. Blocking: callers on an async runtime should wrap this in
/// `spawn_blocking`.
pub fn extract_pdf_pages(path: &Path) -> Result<Vec<Vec<String>>> {
    let doc = lopdf::Document::load(path)
        .map_err(|e| Error::Extraction(format!("Failed to parse PDF file: {}", e)))?;

    let mut page_numbers: Vec<u32> = doc.get_pages().keys().copied().collect();
    page_numbers.sort_unstable();

    let mut pages = Vec::with_capacity(page_numbers.len());
    for page_number in page_numbers {
        let text = doc
            .extract_text(&[page_number])
            .map_err(|e| Error::Extraction(format!("Failed to extract PDF page: {}", e)))?;
        let items: Vec<String> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        pages.push(items);
    }
    Ok(pages)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_extraction_error() {
        let err = extract_pdf_pages(Path::new("/nonexistent/file.pdf")).unwrap_err();
        assert!(matches!(err, Error::Extraction(_)));
        assert!(err.to_string().contains("Failed to parse PDF file"));
    }

    #[test]
    fn test_garbage_bytes_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.pdf");
        std::fs::write(&path, b"not a pdf at all").unwrap();
        let err = extract_pdf_pages(&path).unwrap_err();
        assert!(matches!(err, Error::Extraction(_)));
    }
}
