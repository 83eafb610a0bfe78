use crate::patterns::OVERBROAD_INDEMNITY;
use shared_types::{SectionKey, StructuredDoc};

pub const LIMITED_INDEMNITY_CLAUSE: &str = "Each party shall indemnify, defend, and hold harmless the other party from third-party claims to the extent arising from its breach of this Agreement, negligence, or willful misconduct.";

/// The Indemnification text, read as one string, indemnifies "from all claims"
pub fn check_indemnity_overbroad(doc: &StructuredDoc) -> bool {
    OVERBROAD_INDEMNITY.is_match(&doc.section_text(SectionKey::Indemnity))
}

pub fn fix_indemnity(doc: &StructuredDoc) -> StructuredDoc {
    doc.with_paragraphs(
        SectionKey::Indemnity,
        vec![LIMITED_INDEMNITY_CLAUSE.to_string()],
    )
}
