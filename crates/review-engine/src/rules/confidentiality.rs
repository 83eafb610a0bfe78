use shared_types::{SectionKey, StructuredDoc};

pub const MUTUAL_CONFIDENTIALITY_CLAUSE: &str = "Each party agrees to keep confidential and not disclose any non-public information received from the other party, except as required by law or with prior written consent.";

pub fn check_confidentiality_missing(doc: &StructuredDoc) -> bool {
    doc.paragraph_count(SectionKey::Confidentiality) == 0
}

pub fn fix_confidentiality(doc: &StructuredDoc) -> StructuredDoc {
    doc.with_paragraphs(
        SectionKey::Confidentiality,
        vec![MUTUAL_CONFIDENTIALITY_CLAUSE.to_string()],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_empty_section() {
        assert!(check_confidentiality_missing(&StructuredDoc::empty()));
    }

    #[test]
    fn test_fix_inserts_single_clause() {
        let fixed = fix_confidentiality(&StructuredDoc::empty());
        assert_eq!(fixed.paragraph_count(SectionKey::Confidentiality), 1);
        assert!(!check_confidentiality_missing(&fixed));
        assert_eq!(fix_confidentiality(&fixed), fixed);
    }
}
