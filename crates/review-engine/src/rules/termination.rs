use shared_types::{SectionKey, StructuredDoc};

pub const STANDARD_TERMINATION_CLAUSE: &str = "This Agreement commences on the Effective Date and continues unless terminated. Either party may terminate for material breach not cured within 30 days' notice. Either party may also terminate for convenience upon 30 days' written notice.";

pub fn check_termination_missing(doc: &StructuredDoc) -> bool {
    doc.paragraph_count(SectionKey::Term) == 0
}

pub fn fix_termination(doc: &StructuredDoc) -> StructuredDoc {
    doc.with_paragraphs(
        SectionKey::Term,
        vec![STANDARD_TERMINATION_CLAUSE.to_string()],
    )
}
