//! Word document raw-text extraction.
//!
//! A .docx file is a zip container; the text lives in `word/document.xml`
//! as `<w:t>` runs inside `<w:p>` paragraphs. This reads the runs in
//! document order, inserting newlines at paragraph ends and tabs for
//! `<w:tab/>` elements. Legacy .doc uploads go through the same path and
//! fail with an extraction error when the buffer is not a zip container.

use std::io::Read;

use notegen_core::{Error, Result};

/// Extract raw text from a Word document buffer.
pub fn extract_word_text(data: &[u8]) -> Result<String> {
    let cursor = std::io::Cursor::new(data);
    let mut archive = zip::ZipArchive::new(cursor)
        .map_err(|e| Error::Extraction(format!("Failed to open Word document: {}", e)))?;

    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|e| Error::Extraction(format!("Word document has no document.xml: {}", e)))?
        .read_to_string(&mut xml)
        .map_err(|e| Error::Extraction(format!("Failed to read document.xml: {}", e)))?;

    Ok(document_xml_to_text(&xml))
}

/// Walk the document XML collecting `<w:t>` run text.
fn document_xml_to_text(xml: &str) -> String {
    let mut out = String::new();
    let mut remainder = xml;

    while let Some(lt) = remainder.find('<') {
        let after = &remainder[lt + 1..];
        let Some(gt) = after.find('>') else { break };
        let tag = &after[..gt];
        remainder = &after[gt + 1..];

        if is_text_run_open(tag) {
            if let Some(end) = remainder.find("</w:t>") {
                out.push_str(&decode_entities(&remainder[..end]));
                remainder = &remainder[end + "</w:t>".len()..];
            }
        } else if tag == "/w:p" {
            out.push('\n');
        } else if tag == "w:tab/" || tag.starts_with("w:tab ") {
            out.push('\t');
        }
    }

    out.trim_end().to_string()
}

/// True for `<w:t>` and `<w:t xml:space="preserve">`, false for `<w:t/>`.
fn is_text_run_open(tag: &str) -> bool {
    (tag == "w:t" || tag.starts_with("w:t ")) && !tag.ends_with('/')
}

fn decode_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}
