//! PDF text producers for the contract review core
//!
//! Each backend implements [`shared_types::TextSource`]. [`FallbackChain`]
//! tries them in order and returns the first readable result:
//!
//! | Order | Backend | Notes |
//! |-------|---------|-------|
//! | 1 | [`PdfExtractBackend`] | pdf-extract, best layout for simple PDFs |
//! | 2 | [`LopdfBackend`] | structural parse of page content streams |
//! | 3 | [`ByteScanBackend`] | last resort, scans raw bytes, always warns |

pub mod backends;
pub mod chain;
pub mod config;
pub mod quality;

pub use backends::{ByteScanBackend, LopdfBackend, PdfExtractBackend};
pub use chain::FallbackChain;
pub use config::ExtractionConfig;
pub use quality::is_readable_text;

/// Cheap header sniff; does not parse the file
pub fn looks_like_pdf(data: &[u8]) -> bool {
    data.len() > 4 && &data[0..4] == b"%PDF"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_looks_like_pdf() {
        assert!(looks_like_pdf(b"%PDF-1.7\n"));
        assert!(!looks_like_pdf(b"%PD"));
        assert!(!looks_like_pdf(b"Not a PDF file"));
    }
}
