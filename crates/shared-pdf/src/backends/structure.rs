//! lopdf backend: walks page content streams directly

use async_trait::async_trait;
use lopdf::Document;
use shared_types::{ExtractedText, ExtractionError, TextSource};
use tracing::debug;

use super::classify_parser_error;

/// Structural extraction via lopdf
#[derive(Debug, Default, Clone, Copy)]
pub struct LopdfBackend;

impl LopdfBackend {
    pub fn new() -> Self {
        Self
    }

    fn extract_sync(&self, payload: &[u8]) -> Result<ExtractedText, ExtractionError> {
        let doc = Document::load_mem(payload)
            .map_err(|e| ExtractionError::InvalidPdf(e.to_string()))?;

        if doc.trailer.get(b"Encrypt").is_ok() {
            return Err(ExtractionError::PasswordProtected);
        }

        let pages: Vec<u32> = doc.get_pages().keys().copied().collect();
        if pages.is_empty() {
            return Err(ExtractionError::NoText("document has no pages".to_string()));
        }
        debug!(pages = pages.len(), "lopdf extracting pages");

        let text = doc
            .extract_text(&pages)
            .map_err(|e| classify_parser_error(self.name(), e.to_string()))?;

        if text.trim().is_empty() {
            return Err(ExtractionError::NoText(
                "no text operators on any page".to_string(),
            ));
        }

        Ok(ExtractedText::new(text))
    }
}

#[async_trait]
impl TextSource for LopdfBackend {
    fn name(&self) -> &'static str {
        "lopdf"
    }

    async fn extract(&self, payload: &[u8]) -> Result<ExtractedText, ExtractionError> {
        self.extract_sync(payload)
    }
}
