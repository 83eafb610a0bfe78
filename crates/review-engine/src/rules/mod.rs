//! Drafting-issue checks and their one-shot remedies
//!
//! Every [`IssueKind`] maps to exactly one check and one fix through the
//! exhaustive matches below. Checks read the document they are given, so
//! running detection again after a fix naturally drops a cured issue.

pub mod best_efforts;
pub mod confidentiality;
pub mod governing_law;
pub mod indemnity;
pub mod termination;

use shared_types::{Issue, IssueKind, StructuredDoc};

/// Whether the condition behind `kind` is present in `doc`
pub fn is_triggered(kind: IssueKind, doc: &StructuredDoc) -> bool {
    match kind {
        IssueKind::BestEfforts => best_efforts::check_best_efforts(doc),
        IssueKind::GoverningLawMissing => governing_law::check_governing_law_missing(doc),
        IssueKind::ConfidentialityMissing => confidentiality::check_confidentiality_missing(doc),
        IssueKind::IndemnityOverbroad => indemnity::check_indemnity_overbroad(doc),
        IssueKind::TerminationMissing => termination::check_termination_missing(doc),
    }
}

/// Pure remedy for `kind`; `doc` is left untouched
pub fn apply_fix(kind: IssueKind, doc: &StructuredDoc) -> StructuredDoc {
    match kind {
        IssueKind::BestEfforts => best_efforts::fix_best_efforts(doc),
        IssueKind::GoverningLawMissing => governing_law::fix_governing_law(doc),
        IssueKind::ConfidentialityMissing => confidentiality::fix_confidentiality(doc),
        IssueKind::IndemnityOverbroad => indemnity::fix_indemnity(doc),
        IssueKind::TerminationMissing => termination::fix_termination(doc),
    }
}

/// Run every check and report the triggered ones, unresolved, in kind order.
///
/// A document without a single paragraph has nothing to review and yields no
/// issues, even though its sections are all missing.
pub fn detect_issues(doc: &StructuredDoc) -> Vec<Issue> {
    if doc.paragraphs().next().is_none() {
        return Vec::new();
    }
    IssueKind::ALL
        .iter()
        .copied()
        .filter(|kind| is_triggered(*kind, doc))
        .map(Issue::new)
        .collect()
}
