//! Heuristic readability check for extracted text
//!
//! Parsers fed a PDF with broken font encodings happily return glyph soup.
//! These checks catch the common failure shapes: too short, too few letters,
//! too many symbols, no real words, or long runs of tiny tokens.

use lazy_static::lazy_static;
use regex::Regex;

/// Default minimum trimmed length, in characters
pub const MIN_READABLE_CHARS: usize = 50;

lazy_static! {
    static ref WORD_3: Regex = Regex::new(r"[A-Za-z]{3,}").unwrap();
    static ref WORD_2: Regex = Regex::new(r"[A-Za-z]{2,}").unwrap();
    static ref TINY_TOKEN_RUN: Regex =
        Regex::new(r"(?:\b[A-Za-z0-9]{1,3}\s+){30,}").unwrap();
    static ref CONTRACT_MARKERS: Vec<Regex> = vec![
        Regex::new(r"(?i)agreement").unwrap(),
        Regex::new(r"(?i)party").unwrap(),
        Regex::new(r"(?i)clause").unwrap(),
        Regex::new(r"(?i)terms?").unwrap(),
        Regex::new(r"(?i)conditions?").unwrap(),
        Regex::new(r"(?i)section").unwrap(),
    ];
}

/// Returns true if `text` looks like real prose rather than extraction noise.
///
/// `lenient` relaxes every threshold; use it for producers that are known to
/// emit clean text with unusual formatting.
pub fn is_readable_text(text: &str, lenient: bool) -> bool {
    meets_threshold(text, lenient, MIN_READABLE_CHARS)
}

/// Same as [`is_readable_text`] with a caller-chosen minimum length
pub fn meets_threshold(text: &str, lenient: bool, min_chars: usize) -> bool {
    let t = text.trim();
    let len = t.chars().count();
    if len == 0 || len < min_chars {
        return false;
    }

    let ratio = alnum_count(t) as f64 / len as f64;

    if lenient && len > 1000 {
        let words = t.split_whitespace().filter(|w| WORD_2.is_match(w)).count();
        return ratio > 0.3 && words > 10;
    }

    if ratio < if lenient { 0.25 } else { 0.45 } {
        return false;
    }

    let symbol_ratio = symbol_count(t) as f64 / len as f64;
    if symbol_ratio > if lenient { 0.35 } else { 0.2 } {
        return false;
    }

    let words = t.split_whitespace().filter(|w| WORD_3.is_match(w)).count();
    if words < if lenient { 10 } else { 20 } {
        return false;
    }

    if TINY_TOKEN_RUN.is_match(t) {
        return false;
    }

    if !lenient && len > 500 && !CONTRACT_MARKERS.iter().any(|re| re.is_match(t)) {
        return ratio > 0.6 && symbol_ratio < 0.15;
    }

    true
}

fn alnum_count(text: &str) -> usize {
    text.chars().filter(|c| c.is_ascii_alphanumeric()).count()
}

fn symbol_count(text: &str) -> usize {
    text.chars()
        .filter(|&c| {
            !(c.is_ascii_alphanumeric()
                || c == '_'
                || c.is_whitespace()
                || matches!(c, '.' | ',' | ';' | ':' | '(' | ')' | '-' | '/'))
        })
        .count()
}
