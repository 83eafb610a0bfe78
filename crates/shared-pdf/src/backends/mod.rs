//! Individual text producers
//!
//! Each backend is usable on its own as a [`shared_types::TextSource`];
//! [`crate::FallbackChain`] strings them together.

mod byte_scan;
mod structure;
mod text_layer;

pub use byte_scan::{ByteScanBackend, BYTE_SCAN_WARNING};
pub use structure::LopdfBackend;
pub use text_layer::PdfExtractBackend;

/// Map a parser error message onto the shared error vocabulary
pub(crate) fn classify_parser_error(backend: &str, message: String) -> shared_types::ExtractionError {
    use shared_types::ExtractionError;

    let lower = message.to_lowercase();
    if lower.contains("encrypted") || lower.contains("password") {
        ExtractionError::PasswordProtected
    } else if lower.contains("invalid") || lower.contains("malformed") || lower.contains("corrupt") {
        ExtractionError::InvalidPdf(message)
    } else {
        ExtractionError::Backend {
            backend: backend.to_string(),
            message,
        }
    }
}
