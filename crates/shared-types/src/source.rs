//! Boundary between the review core and whatever turns a document into text
//!
//! The core only sees [`TextSource`]; PDF backends, OCR services or plain text
//! readers all plug in behind it.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Successful extraction result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedText {
    pub text: String,
    /// Quality note from the producer (e.g. a degraded fallback was used)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl ExtractedText {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            warning: None,
        }
    }

    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warning = Some(warning.into());
        self
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Reasons a text source could not produce text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    #[error("Empty file uploaded")]
    EmptyPayload,

    #[error("File too large ({size} bytes, max {limit})")]
    PayloadTooLarge { size: usize, limit: usize },

    #[error("Invalid PDF: {0}")]
    InvalidPdf(String),

    #[error("Password-protected PDF")]
    PasswordProtected,

    #[error("No extractable text: {0}")]
    NoText(String),

    #[error("{backend} extraction failed: {message}")]
    Backend { backend: String, message: String },

    #[error("Could not extract text from document ({})", .0.join("; "))]
    AllBackendsFailed(Vec<String>),
}

/// Producer of plain text from an opaque document payload.
///
/// Implementations must report an empty result as an error rather than
/// returning blank text; the core treats any text it receives as usable.
#[async_trait]
pub trait TextSource: Send + Sync {
    /// Short identifier used in logs
    fn name(&self) -> &'static str;

    async fn extract(&self, payload: &[u8]) -> Result<ExtractedText, ExtractionError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(&'static str);

    #[async_trait]
    impl TextSource for Fixed {
        fn name(&self) -> &'static str {
            "fixed"
        }

        async fn extract(&self, _payload: &[u8]) -> Result<ExtractedText, ExtractionError> {
            if self.0.is_empty() {
                return Err(ExtractionError::NoText("fixed source is empty".to_string()));
            }
            Ok(ExtractedText::new(self.0))
        }
    }

    #[test]
    fn test_source_can_be_used_as_trait_object() {
        let sources: Vec<Box<dyn TextSource>> = vec![Box::new(Fixed("hello")), Box::new(Fixed(""))];

        let first = tokio_test::block_on(sources[0].extract(b"%PDF"));
        assert_eq!(first, Ok(ExtractedText::new("hello")));

        let second = tokio_test::block_on(sources[1].extract(b"%PDF"));
        assert!(matches!(second, Err(ExtractionError::NoText(_))));
    }

    #[test]
    fn test_error_messages_are_human_readable() {
        let err = ExtractionError::PayloadTooLarge {
            size: 20,
            limit: 10,
        };
        assert_eq!(err.to_string(), "File too large (20 bytes, max 10)");

        let err = ExtractionError::AllBackendsFailed(vec!["a: bad".into(), "b: worse".into()]);
        assert_eq!(
            err.to_string(),
            "Could not extract text from document (a: bad; b: worse)"
        );
    }

    #[test]
    fn test_blank_detection() {
        assert!(ExtractedText::new(" \n\t").is_blank());
        assert!(!ExtractedText::new("x").with_warning("w").is_blank());
    }
}
