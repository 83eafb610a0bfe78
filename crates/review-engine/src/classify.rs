//! Sentence bucketing and paragraph assembly

use crate::config::ClassifierConfig;
use crate::patterns::BUCKET_RULES;
use shared_types::{Section, SectionKey};

/// Sentences grouped by section, in source order within each bucket
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buckets {
    sentences: Vec<Vec<String>>,
}

impl Buckets {
    pub fn new() -> Self {
        Self {
            sentences: vec![Vec::new(); SectionKey::ALL.len()],
        }
    }

    pub fn push(&mut self, key: SectionKey, sentence: String) {
        self.sentences[key.index()].push(sentence);
    }

    pub fn get(&self, key: SectionKey) -> &[String] {
        &self.sentences[key.index()]
    }

    pub fn total(&self) -> usize {
        self.sentences.iter().map(Vec::len).sum()
    }
}

impl Default for Buckets {
    fn default() -> Self {
        Self::new()
    }
}

/// Bucket for a single sentence: the first matching rule, else Misc
pub fn classify_sentence(sentence: &str) -> SectionKey {
    BUCKET_RULES
        .iter()
        .find(|(pattern, _)| pattern.is_match(sentence))
        .map_or(SectionKey::Misc, |(_, key)| *key)
}

pub fn bucket_sentences<S: AsRef<str>>(sentences: &[S]) -> Buckets {
    let mut buckets = Buckets::new();
    for sentence in sentences {
        let sentence = sentence.as_ref();
        buckets.push(classify_sentence(sentence), sentence.to_string());
    }
    buckets
}

/// Build all canonical sections from bucketed sentences.
///
/// Each bucket keeps a prefix proportional to its share of the document,
/// scaled to the clamped overall budget and rounded up. A slice that would be
/// empty falls back to the whole bucket. The kept sentences are chunked into
/// paragraphs of at most `sentences_per_paragraph`.
pub fn build_sections(buckets: &Buckets, config: &ClassifierConfig) -> Vec<Section> {
    let total = buckets.total();
    let budget = config.budget(total);

    SectionKey::ALL
        .iter()
        .map(|key| {
            let pool = buckets.get(*key);
            let selected = &pool[..proportional_len(pool.len(), total, budget)];
            let paragraphs = paragraphize(selected, config.paragraph_size());
            tracing::debug!(
                section = key.as_str(),
                bucket = pool.len(),
                kept = selected.len(),
                "Built section"
            );
            Section::new(*key, paragraphs)
        })
        .collect()
}

/// ceil(len / total * budget), capped at `len`, with the empty-slice fallback
fn proportional_len(len: usize, total: usize, budget: usize) -> usize {
    if len == 0 || total == 0 {
        return len;
    }
    let share = (len * budget).div_ceil(total);
    if share == 0 {
        len
    } else {
        share.min(len)
    }
}

/// Join consecutive sentences into paragraphs, dropping blank results
pub fn paragraphize(sentences: &[String], per_paragraph: usize) -> Vec<String> {
    sentences
        .chunks(per_paragraph.max(1))
        .map(|chunk| chunk.join(" "))
        .filter(|p| !p.trim().is_empty())
        .collect()
}
