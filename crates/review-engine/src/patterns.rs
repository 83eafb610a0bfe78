//! Keyword patterns used to bucket sentences and to trigger issues

use lazy_static::lazy_static;
use regex::Regex;
use shared_types::SectionKey;

lazy_static! {
    /// Sentence bucketing rules, evaluated top to bottom; the first match wins.
    ///
    /// The order is a priority list, not the document order: a sentence that
    /// mentions both fees and termination lands in Fees because Fees is
    /// tested first. Anything that matches no rule belongs to Misc.
    pub static ref BUCKET_RULES: Vec<(Regex, SectionKey)> = vec![
        (
            Regex::new(r"(?i)scope|services?|deliverables?|sla|statement\s+of\s+work").unwrap(),
            SectionKey::Scope,
        ),
        (
            Regex::new(r"(?i)fee|payment|invoice|billing|price|consideration").unwrap(),
            SectionKey::Fees,
        ),
        (
            Regex::new(r"(?i)term|termination|expire|renew").unwrap(),
            SectionKey::Term,
        ),
        (
            Regex::new(r"(?i)confidential|non-disclosure|nda|trade\s+secret").unwrap(),
            SectionKey::Confidentiality,
        ),
        (
            Regex::new(r"(?i)intellectual\s+property|ip|ownership|license").unwrap(),
            SectionKey::Ip,
        ),
        (
            Regex::new(r"(?i)representations?|warrant(y|ies)|as\s+is").unwrap(),
            SectionKey::Warranty,
        ),
        (
            Regex::new(r"(?i)indemnif(y|ication)|hold\s+harmless|defend").unwrap(),
            SectionKey::Indemnity,
        ),
        (
            Regex::new(r"(?i)limitation\s+of\s+liability|consequential|indirect\s+damages").unwrap(),
            SectionKey::Liability,
        ),
        (
            Regex::new(r"(?i)governing\s+law|venue|jurisdiction").unwrap(),
            SectionKey::Law,
        ),
        (
            Regex::new(r"(?i)compliance|regulation|lawful|anti-bribery|sanctions").unwrap(),
            SectionKey::Compliance,
        ),
        (
            Regex::new(r"(?i)privacy|personal\s+data|gdpr|hipaa").unwrap(),
            SectionKey::Privacy,
        ),
        (
            Regex::new(r"(?i)definition|means\s+").unwrap(),
            SectionKey::Definitions,
        ),
        (
            Regex::new(r"(?i)agreement\s+is\s+made|between\s+.*\s+and\s+").unwrap(),
            SectionKey::Intro,
        ),
    ];

    /// "best efforts" in any casing or spacing
    pub static ref BEST_EFFORTS: Regex = Regex::new(r"(?i)best\s+efforts").unwrap();

    /// An indemnify verb followed anywhere later by "from all claims"
    pub static ref OVERBROAD_INDEMNITY: Regex =
        Regex::new(r"(?i)indemnif(y|ies)\s+.*?from\s+all\s+claims").unwrap();
}
