// Best-effort metadata extraction from normalized contract text
use lazy_static::lazy_static;
use regex::Regex;
use shared_types::{DocMeta, DEFAULT_TITLE};

lazy_static! {
    /// Agreement heading such as "Master Services Agreement"
    static ref TITLE_PATTERN: Regex =
        Regex::new(r"(?i)(service|software|master|consulting|license)\s+agreement").unwrap();

    /// "between X and Y", where Y runs to the next `.`, `,`, `;` or the end of text
    static ref PARTIES_PATTERN: Regex =
        Regex::new(r"(?i)between\s+(.+?)\s+and\s+(.+?)\s*(?:[.,;]|$)").unwrap();

    /// "Effective Date: January 1, 2024" or "effective date 2024-01-01"
    static ref EFFECTIVE_DATE_PATTERN: Regex = Regex::new(
        r"(?i)effective\s+date\s*[:\-]?\s*(\w+\s+\d{1,2},\s*\d{4}|\d{4}-\d{2}-\d{2})"
    )
    .unwrap();
}

/// Matched title span as it appears in the text, or the default title
pub fn extract_title(text: &str) -> String {
    TITLE_PATTERN
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| DEFAULT_TITLE.to_string())
}

pub fn extract_counterparties(text: &str) -> Option<[String; 2]> {
    let caps = PARTIES_PATTERN.captures(text)?;
    let first = caps.get(1)?.as_str().trim();
    let second = caps.get(2)?.as_str().trim();
    if first.is_empty() || second.is_empty() {
        return None;
    }
    Some([first.to_string(), second.to_string()])
}

/// Date substring exactly as written; no parsing or normalization
pub fn extract_effective_date(text: &str) -> Option<String> {
    EFFECTIVE_DATE_PATTERN
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Run all metadata scans independently over the same text.
///
/// Governing law is never extracted here; only the governing-law fix sets it.
pub fn extract_metadata(text: &str) -> DocMeta {
    DocMeta {
        counterparties: extract_counterparties(text),
        effective_date: extract_effective_date(text),
        governing_law: None,
    }
}
