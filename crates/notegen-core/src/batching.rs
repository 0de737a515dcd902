//! Query batching for the note-generation pipeline.
//!
//! A raw multi-line query is partitioned into consecutive groups of
//! [`BATCH_LINES`] lines; each group becomes one prompt against the
//! generation backend. The partition is a plain strided walk over the
//! query's lines; the last batch may be shorter.

use crate::defaults::{GENERATED_TITLE_FALLBACK, TITLE_MAX_CHARS};

/// Number of query lines grouped into a single generation call.
pub const BATCH_LINES: usize = 5;

/// Fixed formatting instruction block appended to every batch prompt.
pub const FORMAT_INSTRUCTIONS: &str = "\
write the short answers for these in the following format:
- strict: if differences between or comparison of two things are needed, give me a markdown table for it.
- strict: if diagrams are asked, give me a mermaidjs script for it.
- length: answers for each question should be around half an a4 page when printed.
- response should be with only markdown syntaxes like #, ##, bullet points, number points etc.
- format of response: question and answer. question is a ## heading (with question number) and answers (sideheadings with ### and bullets, numbers). separate with newlines.
- make sure the mermaid script you give is 100% accurate and correct.";

/// Partition a query into batches of at most [`BATCH_LINES`] lines each.
///
/// Batches preserve original line order; a query of N lines yields
/// `ceil(N / BATCH_LINES)` batches.
pub fn split_batches(query: &str) -> Vec<String> {
    let lines: Vec<&str> = query.lines().collect();
    lines
        .chunks(BATCH_LINES)
        .map(|chunk| chunk.join("\n"))
        .collect()
}

/// Build the full prompt for one batch: the batch lines followed by the
/// fixed instruction block.
pub fn build_prompt(batch: &str) -> String {
    format!("{}\n{}", batch, FORMAT_INSTRUCTIONS)
}

/// Derive a note title from the query's first line, truncated to
/// [`TITLE_MAX_CHARS`] characters, falling back to a default label.
pub fn derive_title(query: &str) -> String {
    let first_line = query.lines().next().unwrap_or("").trim();
    if first_line.is_empty() {
        return GENERATED_TITLE_FALLBACK.to_string();
    }
    first_line.chars().take(TITLE_MAX_CHARS).collect()
}
