use serde::{Deserialize, Serialize};
use shared_types::{DocMeta, Issue, Section, StructuredDoc};

/// Serializable snapshot of a review: the document plus its issue list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewReport {
    pub title: String,
    pub meta: DocMeta,
    pub sections: Vec<Section>,
    pub issues: Vec<Issue>,
    pub summary: ReviewSummary,
    pub checked_at: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewSummary {
    pub total: usize,
    pub resolved: usize,
    pub open: usize,
}

impl ReviewSummary {
    pub fn from_issues(issues: &[Issue]) -> Self {
        let resolved = issues.iter().filter(|i| i.resolved).count();
        Self {
            total: issues.len(),
            resolved,
            open: issues.len() - resolved,
        }
    }
}

impl ReviewReport {
    pub fn new(document: &StructuredDoc, issues: &[Issue]) -> Self {
        Self {
            title: document.title.clone(),
            meta: document.meta.clone(),
            sections: document.sections.clone(),
            issues: issues.to_vec(),
            summary: ReviewSummary::from_issues(issues),
            checked_at: chrono::Utc::now().timestamp() as u64,
        }
    }

    pub fn document(&self) -> StructuredDoc {
        StructuredDoc {
            title: self.title.clone(),
            meta: self.meta.clone(),
            sections: self.sections.clone(),
        }
    }
}
