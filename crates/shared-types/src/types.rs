use serde::{Deserialize, Serialize};
use std::fmt;

/// Title used when no agreement heading is found in the source text
pub const DEFAULT_TITLE: &str = "Standardized Agreement";

/// Canonical contract section buckets.
///
/// Declaration order is the render order of a [`StructuredDoc`]; it is not the
/// classification priority (see `review_engine::classify`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKey {
    Intro,
    Definitions,
    Scope,
    Fees,
    Term,
    Confidentiality,
    Ip,
    Warranty,
    Indemnity,
    Liability,
    Privacy,
    Compliance,
    Law,
    Misc,
}

impl SectionKey {
    /// All keys in canonical document order
    pub const ALL: [SectionKey; 14] = [
        SectionKey::Intro,
        SectionKey::Definitions,
        SectionKey::Scope,
        SectionKey::Fees,
        SectionKey::Term,
        SectionKey::Confidentiality,
        SectionKey::Ip,
        SectionKey::Warranty,
        SectionKey::Indemnity,
        SectionKey::Liability,
        SectionKey::Privacy,
        SectionKey::Compliance,
        SectionKey::Law,
        SectionKey::Misc,
    ];

    /// Stable identifier, identical to the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKey::Intro => "intro",
            SectionKey::Definitions => "definitions",
            SectionKey::Scope => "scope",
            SectionKey::Fees => "fees",
            SectionKey::Term => "term",
            SectionKey::Confidentiality => "confidentiality",
            SectionKey::Ip => "ip",
            SectionKey::Warranty => "warranty",
            SectionKey::Indemnity => "indemnity",
            SectionKey::Liability => "liability",
            SectionKey::Privacy => "privacy",
            SectionKey::Compliance => "compliance",
            SectionKey::Law => "law",
            SectionKey::Misc => "misc",
        }
    }

    /// Display heading bound to the key
    pub fn title(&self) -> &'static str {
        match self {
            SectionKey::Intro => "Introduction",
            SectionKey::Definitions => "Definitions",
            SectionKey::Scope => "Scope of Services",
            SectionKey::Fees => "Fees and Payment",
            SectionKey::Term => "Term and Termination",
            SectionKey::Confidentiality => "Confidentiality",
            SectionKey::Ip => "Intellectual Property",
            SectionKey::Warranty => "Representations and Warranties",
            SectionKey::Indemnity => "Indemnification",
            SectionKey::Liability => "Limitation of Liability",
            SectionKey::Privacy => "Data Protection and Privacy",
            SectionKey::Compliance => "Compliance",
            SectionKey::Law => "Governing Law",
            SectionKey::Misc => "Miscellaneous",
        }
    }

    /// Position of the key in [`SectionKey::ALL`]
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn parse(s: &str) -> Option<SectionKey> {
        SectionKey::ALL.iter().copied().find(|k| k.as_str() == s)
    }
}

impl fmt::Display for SectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Best-effort metadata pulled from the contract text or supplied by fixes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub counterparties: Option<[String; 2]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub governing_law: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub key: SectionKey,
    pub title: String,
    pub paragraphs: Vec<String>,
}

impl Section {
    pub fn new(key: SectionKey, paragraphs: Vec<String>) -> Self {
        Self {
            key,
            title: key.title().to_string(),
            paragraphs,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }

    /// Paragraphs joined with single spaces
    pub fn text(&self) -> String {
        self.paragraphs.join(" ")
    }
}

/// A contract reorganized into the fixed canonical sections.
///
/// Every key of [`SectionKey::ALL`] is present exactly once, in order. Fixes
/// never edit a document in place: they build a new one through
/// [`StructuredDoc::with_paragraphs`] or [`StructuredDoc::map_paragraphs`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredDoc {
    pub title: String,
    pub meta: DocMeta,
    pub sections: Vec<Section>,
}

impl StructuredDoc {
    /// Document with the default title, no metadata and all sections empty
    pub fn empty() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            meta: DocMeta::default(),
            sections: SectionKey::ALL
                .iter()
                .map(|key| Section::new(*key, Vec::new()))
                .collect(),
        }
    }

    pub fn section(&self, key: SectionKey) -> Option<&Section> {
        self.sections.iter().find(|s| s.key == key)
    }

    /// Paragraph count of a section, zero if the section is absent
    pub fn paragraph_count(&self, key: SectionKey) -> usize {
        self.section(key).map_or(0, |s| s.paragraphs.len())
    }

    pub fn section_text(&self, key: SectionKey) -> String {
        self.section(key).map(Section::text).unwrap_or_default()
    }

    pub fn paragraphs(&self) -> impl Iterator<Item = (SectionKey, &str)> {
        self.sections
            .iter()
            .flat_map(|s| s.paragraphs.iter().map(move |p| (s.key, p.as_str())))
    }

    /// Copy of the document with one section's paragraphs replaced
    pub fn with_paragraphs(&self, key: SectionKey, paragraphs: Vec<String>) -> Self {
        let mut next = self.clone();
        if let Some(section) = next.sections.iter_mut().find(|s| s.key == key) {
            section.paragraphs = paragraphs;
        }
        next
    }

    /// Copy of the document with every paragraph of every section rewritten
    pub fn map_paragraphs<F>(&self, mut f: F) -> Self
    where
        F: FnMut(&str) -> String,
    {
        let mut next = self.clone();
        for section in &mut next.sections {
            section.paragraphs = section.paragraphs.iter().map(|p| f(p)).collect();
        }
        next
    }

    pub fn has_canonical_sections(&self) -> bool {
        self.sections.len() == SectionKey::ALL.len()
            && self
                .sections
                .iter()
                .zip(SectionKey::ALL.iter())
                .all(|(s, k)| s.key == *k)
    }
}

impl Default for StructuredDoc {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for StructuredDoc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", "=".repeat(self.title.chars().count().max(1)))?;
        if let Some([a, b]) = &self.meta.counterparties {
            writeln!(f, "Parties: {}, {}", a, b)?;
        }
        if let Some(date) = &self.meta.effective_date {
            writeln!(f, "Effective Date: {}", date)?;
        }
        for section in &self.sections {
            writeln!(f)?;
            writeln!(f, "## {}", section.title)?;
            for paragraph in &section.paragraphs {
                writeln!(f)?;
                writeln!(f, "{}", paragraph)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_doc_has_canonical_sections() {
        let doc = StructuredDoc::empty();
        assert!(doc.has_canonical_sections());
        assert_eq!(doc.title, DEFAULT_TITLE);
        assert!(doc.sections.iter().all(Section::is_empty));
    }

    #[test]
    fn test_section_key_order_matches_index() {
        for (i, key) in SectionKey::ALL.iter().enumerate() {
            assert_eq!(key.index(), i);
            assert_eq!(SectionKey::parse(key.as_str()), Some(*key));
        }
        assert_eq!(SectionKey::parse("nope"), None);
    }

    #[test]
    fn test_section_key_serializes_as_identifier() {
        let json = serde_json::to_string(&SectionKey::Law).unwrap();
        assert_eq!(json, "\"law\"");
        let json = serde_json::to_string(&SectionKey::Ip).unwrap();
        assert_eq!(json, "\"ip\"");
    }

    #[test]
    fn test_meta_omits_absent_fields() {
        let meta = DocMeta {
            effective_date: Some("2024-01-01".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&meta).unwrap();
        assert_eq!(json, r#"{"effectiveDate":"2024-01-01"}"#);
    }

    #[test]
    fn test_with_paragraphs_leaves_original_untouched() {
        let doc = StructuredDoc::empty();
        let next = doc.with_paragraphs(SectionKey::Law, vec!["Delaware law.".to_string()]);

        assert_eq!(doc.paragraph_count(SectionKey::Law), 0);
        assert_eq!(next.paragraph_count(SectionKey::Law), 1);
        assert!(next.has_canonical_sections());
    }

    #[test]
    fn test_map_paragraphs_rewrites_every_section() {
        let doc = StructuredDoc::empty()
            .with_paragraphs(SectionKey::Scope, vec!["alpha".to_string()])
            .with_paragraphs(SectionKey::Misc, vec!["alpha beta".to_string()]);
        let next = doc.map_paragraphs(|p| p.replace("alpha", "gamma"));

        assert_eq!(next.section_text(SectionKey::Scope), "gamma");
        assert_eq!(next.section_text(SectionKey::Misc), "gamma beta");
        assert_eq!(doc.section_text(SectionKey::Scope), "alpha");
    }

    #[test]
    fn test_display_renders_headings_and_meta() {
        let mut doc =
            StructuredDoc::empty().with_paragraphs(SectionKey::Fees, vec!["Pay on time.".into()]);
        doc.meta.counterparties = Some(["Acme Corp".to_string(), "Beta LLC".to_string()]);

        let text = doc.to_string();
        assert!(text.starts_with("Standardized Agreement\n"));
        assert!(text.contains("Parties: Acme Corp, Beta LLC"));
        assert!(text.contains("## Fees and Payment\n\nPay on time."));
        assert!(text.contains("## Miscellaneous"));
        assert!(!text.contains("Effective Date"));
    }
}
