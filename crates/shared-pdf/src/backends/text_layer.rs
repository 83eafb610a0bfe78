//! pdf-extract backend

use async_trait::async_trait;
use shared_types::{ExtractedText, ExtractionError, TextSource};

use super::classify_parser_error;
use crate::looks_like_pdf;

/// Reads the text layer with pdf-extract
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfExtractBackend;

impl PdfExtractBackend {
    pub fn new() -> Self {
        Self
    }

    fn extract_sync(&self, payload: &[u8]) -> Result<ExtractedText, ExtractionError> {
        if !looks_like_pdf(payload) {
            return Err(ExtractionError::InvalidPdf("missing %PDF header".to_string()));
        }

        let text = pdf_extract::extract_text_from_mem(payload)
            .map_err(|e| classify_parser_error(self.name(), e.to_string()))?;

        if text.trim().is_empty() {
            return Err(ExtractionError::NoText(
                "PDF has no text layer (scanned or image-based?)".to_string(),
            ));
        }

        Ok(ExtractedText::new(text))
    }
}

#[async_trait]
impl TextSource for PdfExtractBackend {
    fn name(&self) -> &'static str {
        "pdf-extract"
    }

    async fn extract(&self, payload: &[u8]) -> Result<ExtractedText, ExtractionError> {
        self.extract_sync(payload)
    }
}
