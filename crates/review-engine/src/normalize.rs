//! Whitespace normalization of raw extracted text

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
}

/// Collapse extracted text into a single clean line.
///
/// Non-breaking spaces become regular spaces, every whitespace run (line
/// breaks included) becomes one space, and the ends are trimmed. Sentence
/// punctuation is left alone so the segmenter can still find boundaries.
pub fn normalize(raw: &str) -> String {
    let spaced = raw.replace('\u{00A0}', " ");
    WHITESPACE_RUN.replace_all(&spaced, " ").trim().to_string()
}
