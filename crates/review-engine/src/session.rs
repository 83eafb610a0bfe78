//! Review session: the single mutable holder of a document under review
//!
//! ```text
//!  idle ──ingest──▶ loading ──ok──▶ ready ──apply_fix──▶ ready
//!                      │                │
//!                      └──err──▶ error ◀┘ (next ingest failure)
//! ```
//!
//! `ingest` is accepted from `idle`, `ready` and `error`. A session belongs to
//! one caller; it is not meant to be shared between concurrent users.

use crate::error::ReviewError;
use crate::report::ReviewReport;
use crate::rules;
use crate::ReviewEngine;
use serde::{Deserialize, Serialize};
use shared_types::{ExtractedText, Issue, StructuredDoc, TextSource};
use std::fmt;
use tracing::{error, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    Idle,
    Loading,
    Ready,
    Error,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SessionState::Idle => "idle",
            SessionState::Loading => "loading",
            SessionState::Ready => "ready",
            SessionState::Error => "error",
        };
        f.write_str(name)
    }
}

/// What [`ReviewSession::try_apply_fix`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FixOutcome {
    Applied,
    AlreadyResolved,
    UnknownIssue,
}

pub struct ReviewSession {
    engine: ReviewEngine,
    state: SessionState,
    raw_text: Option<String>,
    warning: Option<String>,
    document: Option<StructuredDoc>,
    issues: Vec<Issue>,
    error: Option<String>,
}

impl ReviewSession {
    pub fn new(engine: ReviewEngine) -> Self {
        Self {
            engine,
            state: SessionState::Idle,
            raw_text: None,
            warning: None,
            document: None,
            issues: Vec::new(),
            error: None,
        }
    }

    /// Extract text from `payload` and review it.
    ///
    /// On success the previous document, issues and resolutions are replaced.
    /// On failure the document is cleared and the error message is kept in
    /// [`ReviewSession::error`]; nothing is returned to the caller.
    pub async fn ingest<S>(&mut self, source: &S, payload: &[u8])
    where
        S: TextSource + ?Sized,
    {
        self.begin_loading();
        info!(source = source.name(), bytes = payload.len(), "Ingesting document");

        match source.extract(payload).await {
            Ok(extracted) => self.finish_ready(extracted),
            Err(err) => {
                error!(source = source.name(), error = %err, "Text extraction failed");
                self.finish_error(err.to_string());
            }
        }
    }

    /// Review text that has already been extracted
    pub fn ingest_text(&mut self, text: impl Into<String>) {
        self.begin_loading();
        self.finish_ready(ExtractedText::new(text));
    }

    fn begin_loading(&mut self) {
        if self.state == SessionState::Loading {
            warn!("ingest called while a previous ingest is still loading");
        }
        self.state = SessionState::Loading;
        self.error = None;
    }

    fn finish_ready(&mut self, extracted: ExtractedText) {
        if let Some(warning) = &extracted.warning {
            warn!(warning = %warning, "Extraction completed with a quality warning");
        }

        let document = self.engine.structure(&extracted.text);
        let issues = self.engine.detect(&document);
        info!(
            title = %document.title,
            issues = issues.len(),
            "Document ready for review"
        );

        self.raw_text = Some(extracted.text);
        self.warning = extracted.warning;
        self.document = Some(document);
        self.issues = issues;
        self.error = None;
        self.state = SessionState::Ready;
    }

    fn finish_error(&mut self, message: String) {
        self.raw_text = None;
        self.warning = None;
        self.document = None;
        self.issues.clear();
        self.error = Some(message);
        self.state = SessionState::Error;
    }

    /// Apply the fix for `issue_id` and mark that issue resolved.
    ///
    /// Unknown ids, already resolved issues and calls outside `ready` are
    /// silently ignored. Detection is not re-run, so other issues keep their
    /// flags even if this fix happened to cure them too.
    pub fn apply_fix(&mut self, issue_id: &str) {
        if let Err(err) = self.try_apply_fix(issue_id) {
            warn!(issue = issue_id, error = %err, "Ignoring fix request");
        }
    }

    /// [`ReviewSession::apply_fix`] with the outcome reported
    pub fn try_apply_fix(&mut self, issue_id: &str) -> Result<FixOutcome, ReviewError> {
        if self.state != SessionState::Ready {
            return Err(ReviewError::InvalidState {
                expected: SessionState::Ready,
                actual: self.state,
            });
        }
        let Some(document) = self.document.as_ref() else {
            return Err(ReviewError::InvalidState {
                expected: SessionState::Ready,
                actual: self.state,
            });
        };
        let Some(issue) = self.issues.iter_mut().find(|i| i.id() == issue_id) else {
            return Ok(FixOutcome::UnknownIssue);
        };
        if issue.resolved {
            return Ok(FixOutcome::AlreadyResolved);
        }

        let updated = rules::apply_fix(issue.kind, document);
        issue.mark_resolved();
        self.document = Some(updated);
        info!(issue = issue_id, "Applied fix");
        Ok(FixOutcome::Applied)
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == SessionState::Loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn structured_doc(&self) -> Option<&StructuredDoc> {
        self.document.as_ref()
    }

    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    pub fn open_issues(&self) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(|i| !i.resolved)
    }

    /// Extracted text behind the current document
    pub fn raw_text(&self) -> Option<&str> {
        self.raw_text.as_deref()
    }

    /// Quality warning reported by the text source, if any
    pub fn warning(&self) -> Option<&str> {
        self.warning.as_deref()
    }

    pub fn engine(&self) -> &ReviewEngine {
        &self.engine
    }

    /// Snapshot of the current document and issues; `None` outside `ready`
    pub fn report(&self) -> Option<ReviewReport> {
        let document = self.document.as_ref()?;
        Some(ReviewReport::new(document, &self.issues))
    }
}

impl Default for ReviewSession {
    fn default() -> Self {
        Self::new(ReviewEngine::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use shared_types::{ExtractionError, IssueKind, SectionKey};

    struct StubSource(Result<ExtractedText, ExtractionError>);

    #[async_trait]
    impl TextSource for StubSource {
        fn name(&self) -> &'static str {
            "stub"
        }

        async fn extract(&self, _payload: &[u8]) -> Result<ExtractedText, ExtractionError> {
            self.0.clone()
        }
    }

    #[test]
    fn test_new_session_is_idle() {
        let session = ReviewSession::default();
        assert_eq!(session.state(), SessionState::Idle);
        assert!(!session.is_loading());
        assert!(session.structured_doc().is_none());
        assert!(session.issues().is_empty());
        assert!(session.report().is_none());
    }

    #[test]
    fn test_ingest_success_moves_to_ready() {
        let mut session = ReviewSession::default();
        let source = StubSource(Ok(
            ExtractedText::new("Vendor shall use best efforts.").with_warning("ocr used")
        ));
        tokio_test::block_on(session.ingest(&source, b"%PDF-1.7"));

        assert_eq!(session.state(), SessionState::Ready);
        assert_eq!(session.error(), None);
        assert_eq!(session.warning(), Some("ocr used"));
        assert_eq!(session.raw_text(), Some("Vendor shall use best efforts."));
        assert!(session.issues().iter().any(|i| i.kind == IssueKind::BestEfforts));
    }

    #[test]
    fn test_ingest_failure_clears_document() {
        let mut session = ReviewSession::default();
        session.ingest_text("Payment is due monthly.");
        assert_eq!(session.state(), SessionState::Ready);

        let source = StubSource(Err(ExtractionError::PasswordProtected));
        tokio_test::block_on(session.ingest(&source, b"%PDF"));

        assert_eq!(session.state(), SessionState::Error);
        assert_eq!(session.error(), Some("Password-protected PDF"));
        assert!(session.structured_doc().is_none());
        assert!(session.issues().is_empty());
        assert!(session.raw_text().is_none());
    }

    #[test]
    fn test_error_state_recovers_on_next_ingest() {
        let mut session = ReviewSession::default();
        let failing = StubSource(Err(ExtractionError::EmptyPayload));
        tokio_test::block_on(session.ingest(&failing, b""));
        assert_eq!(session.state(), SessionState::Error);

        session.ingest_text("Governing law is New York.");
        assert_eq!(session.state(), SessionState::Ready);
        assert_eq!(session.error(), None);
    }

    #[test]
    fn test_reingest_discards_previous_resolutions() {
        let mut session = ReviewSession::default();
        session.ingest_text("Each party shall use best efforts to perform.");
        session.apply_fix("best-efforts");
        assert!(session.issues()[0].resolved);

        session.ingest_text("Each party shall use best efforts to perform.");
        assert!(!session.issues()[0].resolved);
    }

    #[test]
    fn test_apply_fix_outside_ready_is_rejected() {
        let mut session = ReviewSession::default();
        assert_eq!(
            session.try_apply_fix("best-efforts"),
            Err(ReviewError::InvalidState {
                expected: SessionState::Ready,
                actual: SessionState::Idle,
            })
        );
        session.apply_fix("best-efforts");
        assert_eq!(session.state(), SessionState::Idle);
    }

    #[test]
    fn test_apply_fix_outcomes() {
        let mut session = ReviewSession::default();
        session.ingest_text("Each party shall use best efforts to perform.");

        assert_eq!(session.try_apply_fix("no-such-issue"), Ok(FixOutcome::UnknownIssue));
        assert_eq!(session.try_apply_fix("best-efforts"), Ok(FixOutcome::Applied));
        let after_first = session.structured_doc().cloned();
        assert_eq!(
            session.try_apply_fix("best-efforts"),
            Ok(FixOutcome::AlreadyResolved)
        );
        assert_eq!(session.structured_doc().cloned(), after_first);
    }

    #[test]
    fn test_apply_fix_does_not_redetect() {
        let mut session = ReviewSession::default();
        session.ingest_text("Each party shall use best efforts to perform.");
        let before: Vec<_> = session.issues().iter().map(|i| i.kind).collect();

        session.apply_fix("governing-law-missing");

        let after: Vec<_> = session.issues().iter().map(|i| i.kind).collect();
        assert_eq!(before, after);
        let resolved: Vec<_> = session
            .issues()
            .iter()
            .filter(|i| i.resolved)
            .map(|i| i.kind)
            .collect();
        assert_eq!(resolved, vec![IssueKind::GoverningLawMissing]);
        assert_eq!(session.open_issues().count(), before.len() - 1);

        let doc = session.structured_doc().unwrap();
        assert_eq!(doc.paragraph_count(SectionKey::Law), 1);
    }
}
