//! Raw text to structured document

use crate::classify::{bucket_sentences, build_sections};
use crate::config::ClassifierConfig;
use crate::extractors::{extract_metadata, extract_title};
use crate::normalize::normalize;
use crate::segment::split_sentences;
use shared_types::StructuredDoc;

/// Normalize, segment, classify and assemble a [`StructuredDoc`].
///
/// Never fails: blank input produces the default title and fourteen empty
/// sections.
pub fn build_document(raw: &str, config: &ClassifierConfig) -> StructuredDoc {
    let text = normalize(raw);

    let title = extract_title(&text);
    let meta = extract_metadata(&text);

    let sentences = split_sentences(&text);
    let buckets = bucket_sentences(&sentences);
    tracing::debug!(
        chars = text.len(),
        sentences = sentences.len(),
        "Classified contract text"
    );

    StructuredDoc {
        title,
        meta,
        sections: build_sections(&buckets, config),
    }
}
