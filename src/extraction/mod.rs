//! Document text extraction.
//!
//! Turns an uploaded resume/JD file into a plain UTF-8 string. Unsupported
//! formats and parse failures yield an empty string; downstream code treats
//! "" as "no usable text", never as an error, so a single bad upload cannot
//! abort a screening batch.

pub mod experience;


pub use experience::extract_experience;

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, warn};

static NEWLINE_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n+").expect("newline regex is valid"));

/// Extracts plain text from an uploaded document, dispatching on the
/// filename extension. Supported: `.txt`, `.pdf`. Anything else (or any
/// parse failure) returns an empty string.
pub fn extract_text(bytes: &[u8], filename: &str) -> String {
    if bytes.is_empty() {
        return String::new();
    }

    let lowered = filename.to_lowercase();

    if lowered.ends_with(".txt") {
        return String::from_utf8_lossy(bytes).trim().to_string();
    }

    if lowered.ends_with(".pdf") {
        return match pdf_extract::extract_text_from_mem(bytes) {
            Ok(text) => text.trim().to_string(),
            Err(e) => {
                warn!(filename = %filename, error = %e, "PDF extraction failed, treating as empty");
                String::new()
            }
        };
    }

    debug!(filename = %filename, "Unsupported document format");
    String::new()
}

/// Collapses newline runs into single spaces and trims, so layout noise in
/// extracted documents does not leak into the embedding input.
pub fn clean_text(text: &str) -> String {
    NEWLINE_RUNS.replace_all(text, " ").trim().to_string()
}
