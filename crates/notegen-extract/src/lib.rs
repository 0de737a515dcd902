//! # notegen-extract
//!
//! Upload staging and text-extraction dispatch for notegen.
//!
//! An uploaded file is classified by its declared MIME type and routed to
//! one extraction strategy: image OCR, PDF structural extraction, Word
//! raw-text extraction, or a plain-text read. Unsupported types are
//! rejected before any extraction library is touched. Whatever the
//! outcome, the staged file is deleted before the result is returned.

pub mod pdf;
pub mod staging;
pub mod word;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info};

use notegen_core::{Error, OcrBackend, Result};

pub use staging::StagedUpload;

// =============================================================================
// STRATEGY SELECTION
// =============================================================================

/// Extraction strategy selected by declared MIME type.
///
/// Adding support for a new content category is a single new variant plus
/// one `from_mime` arm and one `extract` arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionStrategy {
    /// `image/*`: OCR recognition via a vision backend.
    ImageOcr,
    /// `application/pdf`: page-by-page structural extraction.
    PdfStructural,
    /// `.doc`/`.docx` MIME values: raw text from the document buffer.
    WordRaw,
    /// `text/plain`: direct read of the file content.
    PlainText,
}

const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
const DOC_MIME: &str = "application/msword";

impl ExtractionStrategy {
    /// Classify a declared MIME type; `None` means unsupported.
    ///
    /// Parameters after `;` (e.g. `text/plain; charset=utf-8`) are ignored.
    pub fn from_mime(content_type: &str) -> Option<Self> {
        let essence = content_type
            .split(';')
            .next()
            .unwrap_or("")
            .trim()
            .to_ascii_lowercase();

        match essence.as_str() {
            "application/pdf" => Some(Self::PdfStructural),
            DOC_MIME | DOCX_MIME => Some(Self::WordRaw),
            "text/plain" => Some(Self::PlainText),
            _ if essence.starts_with("image/") => Some(Self::ImageOcr),
            _ => None,
        }
    }
}

/// Join per-page text items: items with a single space, pages with a newline.
pub fn join_pages(pages: &[Vec<String>]) -> String {
    pages
        .iter()
        .map(|items| items.join(" "))
        .collect::<Vec<_>>()
        .join("\n")
}

// =============================================================================
// DISPATCHER
// =============================================================================

/// Routes a staged upload to the extraction strategy for its MIME type.
pub struct FileDispatcher {
    ocr: Option<Arc<dyn OcrBackend>>,
}

impl FileDispatcher {
    /// Create a dispatcher. Without an OCR backend, image uploads fail with
    /// an extraction error (the strategy is still selected, so unsupported
    /// types are reported as such, not as missing OCR).
    pub fn new(ocr: Option<Arc<dyn OcrBackend>>) -> Self {
        Self { ocr }
    }

    /// Extract text from a staged upload and always delete it afterwards.
    ///
    /// The staged file is removed on success, on extraction failure, and on
    /// unsupported-type rejection alike; cleanup problems are logged but
    /// never override the extraction outcome.
    pub async fn parse(&self, staged: StagedUpload) -> Result<String> {
        let start = Instant::now();
        let result = self.extract(&staged).await;
        let content_type = staged.content_type.clone();
        staged.cleanup().await;

        match &result {
            Ok(text) => info!(
                subsystem = "extract",
                component = "dispatcher",
                op = "parse_file",
                content_type = %content_type,
                response_len = text.len(),
                duration_ms = start.elapsed().as_millis() as u64,
                "File parsed"
            ),
            Err(e) => debug!(
                subsystem = "extract",
                component = "dispatcher",
                op = "parse_file",
                content_type = %content_type,
                error = %e,
                "File parse failed"
            ),
        }
        result
    }

    async fn extract(&self, staged: &StagedUpload) -> Result<String> {
        let strategy = ExtractionStrategy::from_mime(&staged.content_type)
            .ok_or_else(|| Error::UnsupportedFileType(staged.content_type.clone()))?;

        match strategy {
            ExtractionStrategy::ImageOcr => {
                let ocr = self.ocr.as_ref().ok_or_else(|| {
                    Error::Extraction("no OCR backend configured for image uploads".to_string())
                })?;
                ocr.recognize(staged.path()).await
            }
            ExtractionStrategy::PdfStructural => {
                let path: PathBuf = staged.path().to_path_buf();
                let pages = tokio::task::spawn_blocking(move || pdf::extract_pdf_pages(&path))
                    .await
                    .map_err(|e| Error::Internal(format!("PDF extraction task failed: {}", e)))??;
                Ok(join_pages(&pages))
            }
            ExtractionStrategy::WordRaw => {
                let data = tokio::fs::read(staged.path()).await?;
                tokio::task::spawn_blocking(move || word::extract_word_text(&data))
                    .await
                    .map_err(|e| Error::Internal(format!("Word extraction task failed: {}", e)))?
            }
            ExtractionStrategy::PlainText => Ok(tokio::fs::read_to_string(staged.path()).await?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_mime_image_prefix() {
        assert_eq!(
            ExtractionStrategy::from_mime("image/png"),
            Some(ExtractionStrategy::ImageOcr)
        );
        assert_eq!(
            ExtractionStrategy::from_mime("image/jpeg"),
            Some(ExtractionStrategy::ImageOcr)
        );
    }

    #[test]
    fn test_from_mime_pdf_and_word() {
        assert_eq!(
            ExtractionStrategy::from_mime("application/pdf"),
            Some(ExtractionStrategy::PdfStructural)
        );
        assert_eq!(
            ExtractionStrategy::from_mime(DOC_MIME),
            Some(ExtractionStrategy::WordRaw)
        );
        assert_eq!(
            ExtractionStrategy::from_mime(DOCX_MIME),
            Some(ExtractionStrategy::WordRaw)
        );
    }

    #[test]
    fn test_from_mime_plain_text_with_params() {
        assert_eq!(
            ExtractionStrategy::from_mime("text/plain; charset=utf-8"),
            Some(ExtractionStrategy::PlainText)
        );
    }

    #[test]
    fn test_from_mime_unsupported() {
        assert_eq!(ExtractionStrategy::from_mime("video/mp4"), None);
        assert_eq!(ExtractionStrategy::from_mime("application/zip"), None);
        assert_eq!(ExtractionStrategy::from_mime(""), None);
    }

    #[test]
    fn test_join_pages_spaces_within_newlines_between() {
        let pages = vec![
            vec!["A".to_string(), "B".to_string()],
            vec!["C".to_string()],
        ];
        assert_eq!(join_pages(&pages), "A B\nC");
    }

    #[test]
    fn test_join_pages_empty_page_preserved() {
        let pages = vec![vec!["A".to_string()], vec![], vec!["B".to_string()]];
        assert_eq!(join_pages(&pages), "A\n\nB");
    }
}
