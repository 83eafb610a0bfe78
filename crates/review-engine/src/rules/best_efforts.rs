use crate::patterns::BEST_EFFORTS;
use shared_types::StructuredDoc;

pub const REPLACEMENT: &str = "commercially reasonable efforts";

/// Any paragraph in any section says "best efforts"
pub fn check_best_efforts(doc: &StructuredDoc) -> bool {
    doc.paragraphs().any(|(_, p)| BEST_EFFORTS.is_match(p))
}

/// Rewrite every "best efforts" across the whole document
pub fn fix_best_efforts(doc: &StructuredDoc) -> StructuredDoc {
    doc.map_paragraphs(|p| BEST_EFFORTS.replace_all(p, REPLACEMENT).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::SectionKey;

    fn doc() -> StructuredDoc {
        StructuredDoc::empty()
            .with_paragraphs(
                SectionKey::Scope,
                vec!["Vendor will use Best Efforts to deliver.".to_string()],
            )
            .with_paragraphs(
                SectionKey::Misc,
                vec!["Each party shall use best  efforts to perform.".to_string()],
            )
    }

    #[test]
    fn test_detects_phrase_in_any_section() {
        assert!(check_best_efforts(&doc()));
        assert!(!check_best_efforts(&StructuredDoc::empty()));
    }

    #[test]
    fn test_fix_rewrites_all_sections() {
        let fixed = fix_best_efforts(&doc());
        assert_eq!(
            fixed.section_text(SectionKey::Scope),
            "Vendor will use commercially reasonable efforts to deliver."
        );
        assert_eq!(
            fixed.section_text(SectionKey::Misc),
            "Each party shall use commercially reasonable efforts to perform."
        );
        assert!(!check_best_efforts(&fixed));
    }

    #[test]
    fn test_fix_is_idempotent() {
        let once = fix_best_efforts(&doc());
        assert_eq!(fix_best_efforts(&once), once);
    }
}
