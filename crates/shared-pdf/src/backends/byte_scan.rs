//! Last-resort scanner over the raw bytes
//!
//! No parsing at all: looks for text-showing operators, then uncompressed
//! stream bodies, then any printable run. Works on damaged files the real
//! parsers reject, at the cost of layout and accuracy.

use async_trait::async_trait;
use lazy_static::lazy_static;
use regex::Regex;
use shared_types::{ExtractedText, ExtractionError, TextSource};
use tracing::debug;

/// Warning attached to every byte-scan result
pub const BYTE_SCAN_WARNING: &str = "Basic text extraction used - formatting may be limited";

/// Cap for the printable-run mode
const MAX_RAW_CHARS: usize = 1000;
/// Stream bodies shorter than this after cleaning are skipped
const MIN_STREAM_CHARS: usize = 10;
/// The printable-run mode needs at least this much text
const MIN_RAW_CHARS: usize = 50;

lazy_static! {
    // `(literal) Tj` or `[ (a) -20 (b) ] TJ`
    static ref SHOW_TEXT: Regex =
        Regex::new(r"\(((?:[^()\\]|\\.)*)\)\s*Tj|\[((?:[^\]\\]|\\.)*)\]\s*TJ").unwrap();
    static ref LITERAL: Regex = Regex::new(r"\(((?:[^()\\]|\\.)*)\)").unwrap();
    static ref STREAM_BODY: Regex = Regex::new(r"stream\s*(.*?)\s*endstream").unwrap();
}

/// Byte-level scanner for PDFs the parsers cannot open
#[derive(Debug, Default, Clone, Copy)]
pub struct ByteScanBackend;

impl ByteScanBackend {
    pub fn new() -> Self {
        Self
    }

    fn extract_sync(&self, payload: &[u8]) -> Result<ExtractedText, ExtractionError> {
        let raw = String::from_utf8_lossy(payload);

        let text = if let Some(text) = show_text_operands(&raw) {
            debug!("byte scan: text operators");
            text
        } else if let Some(text) = stream_bodies(&raw) {
            debug!("byte scan: stream bodies");
            text
        } else {
            let cleaned = clean(&raw);
            if cleaned.chars().count() <= MIN_RAW_CHARS {
                return Err(ExtractionError::NoText(
                    "Could not extract readable text - PDF may be image-based".to_string(),
                ));
            }
            debug!("byte scan: printable run");
            cleaned.chars().take(MAX_RAW_CHARS).collect()
        };

        Ok(ExtractedText::new(text).with_warning(BYTE_SCAN_WARNING))
    }
}

#[async_trait]
impl TextSource for ByteScanBackend {
    fn name(&self) -> &'static str {
        "byte-scan"
    }

    async fn extract(&self, payload: &[u8]) -> Result<ExtractedText, ExtractionError> {
        self.extract_sync(payload)
    }
}

fn show_text_operands(raw: &str) -> Option<String> {
    let mut pieces = Vec::new();
    for caps in SHOW_TEXT.captures_iter(raw) {
        if let Some(single) = caps.get(1) {
            pieces.push(unescape(single.as_str()));
        } else if let Some(array) = caps.get(2) {
            let joined: String = LITERAL
                .captures_iter(array.as_str())
                .map(|c| unescape(&c[1]))
                .collect();
            pieces.push(joined);
        }
    }
    non_empty(clean(&pieces.join(" ")))
}

fn stream_bodies(raw: &str) -> Option<String> {
    let bodies: Vec<String> = STREAM_BODY
        .captures_iter(raw)
        .map(|c| clean(&c[1]))
        .filter(|body| body.chars().count() > MIN_STREAM_CHARS)
        .collect();
    non_empty(bodies.join(" "))
}

/// Resolve the escapes allowed inside a PDF literal string
fn unescape(literal: &str) -> String {
    let mut out = String::with_capacity(literal.len());
    let mut chars = literal.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some(other) => out.push(other),
            None => {}
        }
    }
    out
}

/// Replace non-printables with spaces and collapse whitespace
fn clean(text: &str) -> String {
    text.split(|c: char| !(c.is_ascii_graphic() || c == ' '))
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

fn non_empty(text: String) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}
