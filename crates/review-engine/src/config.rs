use serde::{Deserialize, Serialize};

/// Length controls for the structured document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Lower clamp for the overall sentence budget
    pub min_budget: usize,
    /// Upper clamp for the overall sentence budget
    pub max_budget: usize,
    /// Maximum sentences grouped into one paragraph
    pub sentences_per_paragraph: usize,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            min_budget: 80,
            max_budget: 300,
            sentences_per_paragraph: 4,
        }
    }
}

impl ClassifierConfig {
    /// Overall budget for a document of `total` sentences
    pub fn budget(&self, total: usize) -> usize {
        let (lo, hi) = if self.min_budget <= self.max_budget {
            (self.min_budget, self.max_budget)
        } else {
            (self.max_budget, self.min_budget)
        };
        total.clamp(lo, hi)
    }

    pub fn paragraph_size(&self) -> usize {
        self.sentences_per_paragraph.max(1)
    }
}
