use crate::types::SectionKey;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of drafting problems the review engine knows how to fix.
///
/// Declaration order is the order issues are reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IssueKind {
    BestEfforts,
    GoverningLawMissing,
    ConfidentialityMissing,
    IndemnityOverbroad,
    TerminationMissing,
}

impl IssueKind {
    pub const ALL: [IssueKind; 5] = [
        IssueKind::BestEfforts,
        IssueKind::GoverningLawMissing,
        IssueKind::ConfidentialityMissing,
        IssueKind::IndemnityOverbroad,
        IssueKind::TerminationMissing,
    ];

    /// Stable identifier used by callers to request a fix
    pub fn id(&self) -> &'static str {
        match self {
            IssueKind::BestEfforts => "best-efforts",
            IssueKind::GoverningLawMissing => "governing-law-missing",
            IssueKind::ConfidentialityMissing => "confidentiality-missing",
            IssueKind::IndemnityOverbroad => "indemnity-overbroad",
            IssueKind::TerminationMissing => "termination-missing",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            IssueKind::BestEfforts => "Ambiguous 'best efforts' phrasing",
            IssueKind::GoverningLawMissing => "Missing Governing Law section",
            IssueKind::ConfidentialityMissing => "Missing Confidentiality section",
            IssueKind::IndemnityOverbroad => "Overbroad indemnification",
            IssueKind::TerminationMissing => "Missing termination clause",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            IssueKind::BestEfforts => {
                "Replace 'best efforts' with 'commercially reasonable efforts' to clarify obligations."
            }
            IssueKind::GoverningLawMissing => {
                "Add a standard governing law clause (placeholder: Delaware)."
            }
            IssueKind::ConfidentialityMissing => "Insert a baseline confidentiality clause.",
            IssueKind::IndemnityOverbroad => {
                "Limit indemnity to third-party claims arising from breach, negligence, or willful misconduct."
            }
            IssueKind::TerminationMissing => {
                "Add standard termination for convenience and for cause."
            }
        }
    }

    /// Section the UI should link the issue to
    pub fn location(&self) -> SectionKey {
        match self {
            IssueKind::BestEfforts => SectionKey::Misc,
            IssueKind::GoverningLawMissing => SectionKey::Law,
            IssueKind::ConfidentialityMissing => SectionKey::Confidentiality,
            IssueKind::IndemnityOverbroad => SectionKey::Indemnity,
            IssueKind::TerminationMissing => SectionKey::Term,
        }
    }

    pub fn from_id(id: &str) -> Option<IssueKind> {
        IssueKind::ALL.iter().copied().find(|k| k.id() == id)
    }
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// A detected drafting problem.
///
/// The remedy is not stored here: it is derived from `kind`, so an issue is
/// plain data and serializes without a function field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    #[serde(rename = "id")]
    pub kind: IssueKind,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<SectionKey>,
    pub resolved: bool,
}

impl Issue {
    pub fn new(kind: IssueKind) -> Self {
        Self {
            kind,
            title: kind.title().to_string(),
            description: kind.description().to_string(),
            location: Some(kind.location()),
            resolved: false,
        }
    }

    pub fn id(&self) -> &'static str {
        self.kind.id()
    }

    /// Resolution only moves forward; there is no way to reopen an issue.
    pub fn mark_resolved(&mut self) {
        self.resolved = true;
    }
}
