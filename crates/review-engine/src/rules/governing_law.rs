use shared_types::{SectionKey, StructuredDoc};

pub const DEFAULT_JURISDICTION: &str = "Delaware";

pub const DELAWARE_CLAUSE: &str = "This Agreement shall be governed by and construed in accordance with the laws of the State of Delaware, without regard to its conflict of law principles.";

pub fn check_governing_law_missing(doc: &StructuredDoc) -> bool {
    doc.paragraph_count(SectionKey::Law) == 0
}

/// Insert the Delaware clause and record Delaware unless a jurisdiction is already set
pub fn fix_governing_law(doc: &StructuredDoc) -> StructuredDoc {
    let mut next = doc.with_paragraphs(SectionKey::Law, vec![DELAWARE_CLAUSE.to_string()]);
    if next.meta.governing_law.is_none() {
        next.meta.governing_law = Some(DEFAULT_JURISDICTION.to_string());
    }
    next
}
