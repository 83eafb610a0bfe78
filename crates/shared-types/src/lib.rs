pub mod issue;
pub mod source;
pub mod types;

pub use issue::{Issue, IssueKind};
pub use source::{ExtractedText, ExtractionError, TextSource};
pub use types::{DocMeta, Section, SectionKey, StructuredDoc, DEFAULT_TITLE};
