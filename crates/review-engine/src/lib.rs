//! Contract review core
//!
//! Turns extracted contract text into a [`StructuredDoc`] with fourteen
//! canonical sections, flags known drafting problems, and applies their
//! one-click remedies through a [`ReviewSession`].
//!
//! Pipeline: normalize → metadata → sentences → buckets → sections → issues.
//! Everything up to issue detection is pure; only the session holds state.

pub mod classify;
pub mod config;
pub mod document;
pub mod error;
pub mod extractors;
pub mod normalize;
pub mod patterns;
pub mod render;
pub mod report;
pub mod rules;
pub mod segment;
pub mod session;

pub use config::ClassifierConfig;
pub use error::ReviewError;
pub use report::{ReviewReport, ReviewSummary};
pub use session::{FixOutcome, ReviewSession, SessionState};

use shared_types::{Issue, StructuredDoc, TextSource};

/// ReviewEngine entry point
#[derive(Debug, Clone, Default)]
pub struct ReviewEngine {
    config: ClassifierConfig,
}

impl ReviewEngine {
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    pub fn structure(&self, raw: &str) -> StructuredDoc {
        document::build_document(raw, &self.config)
    }

    pub fn detect(&self, document: &StructuredDoc) -> Vec<Issue> {
        rules::detect_issues(document)
    }

    /// Structure and check raw text in one pass
    pub fn review_text(&self, raw: &str) -> ReviewReport {
        let document = self.structure(raw);
        let issues = self.detect(&document);
        ReviewReport::new(&document, &issues)
    }

    /// One-shot review of a payload without keeping a session
    pub async fn review_source<S>(
        &self,
        source: &S,
        payload: &[u8],
    ) -> Result<ReviewReport, ReviewError>
    where
        S: TextSource + ?Sized,
    {
        let extracted = source.extract(payload).await?;
        Ok(self.review_text(&extracted.text))
    }

    pub fn session(&self) -> ReviewSession {
        ReviewSession::new(self.clone())
    }
}
