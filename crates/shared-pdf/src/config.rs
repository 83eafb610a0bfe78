use serde::{Deserialize, Serialize};

/// Configuration for extraction behavior
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Largest accepted payload in bytes
    pub max_bytes: usize,
    /// Minimum trimmed length for text to count as readable
    pub min_text_chars: usize,
    /// Run the raw byte scanner when the parsers fail
    pub enable_byte_scan: bool,
    /// Reject unreadable output and move on to the next backend
    pub validate_output: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            max_bytes: 10 * 1024 * 1024,
            min_text_chars: 50,
            enable_byte_scan: true,
            validate_output: true,
        }
    }
}
