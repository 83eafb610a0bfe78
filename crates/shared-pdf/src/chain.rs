//! Ordered fallback across text producers

use async_trait::async_trait;
use shared_types::{ExtractedText, ExtractionError, TextSource};
use tracing::{debug, info, warn};

use crate::backends::{ByteScanBackend, LopdfBackend, PdfExtractBackend};
use crate::config::ExtractionConfig;
use crate::quality::meets_threshold;

/// Attached when only unreadable output was available
pub const QUALITY_WARNING: &str =
    "Extracted text failed readability check - results may be unreliable";

/// Tries each backend in order until one yields readable text
pub struct FallbackChain {
    config: ExtractionConfig,
    backends: Vec<Box<dyn TextSource>>,
}

impl FallbackChain {
    /// pdf-extract, then lopdf, then (if enabled) the byte scanner
    pub fn new(config: ExtractionConfig) -> Self {
        let mut backends: Vec<Box<dyn TextSource>> =
            vec![Box::new(PdfExtractBackend::new()), Box::new(LopdfBackend::new())];
        if config.enable_byte_scan {
            backends.push(Box::new(ByteScanBackend::new()));
        }
        Self::with_backends(config, backends)
    }

    pub fn with_backends(config: ExtractionConfig, backends: Vec<Box<dyn TextSource>>) -> Self {
        Self { config, backends }
    }

    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    pub fn backend_names(&self) -> Vec<&'static str> {
        self.backends.iter().map(|b| b.name()).collect()
    }

    fn validate_payload(&self, payload: &[u8]) -> Result<(), ExtractionError> {
        if payload.is_empty() {
            return Err(ExtractionError::EmptyPayload);
        }
        if payload.len() > self.config.max_bytes {
            return Err(ExtractionError::PayloadTooLarge {
                size: payload.len(),
                limit: self.config.max_bytes,
            });
        }
        Ok(())
    }

    fn is_acceptable(&self, extracted: &ExtractedText) -> bool {
        !self.config.validate_output
            || meets_threshold(&extracted.text, false, self.config.min_text_chars)
    }
}

impl Default for FallbackChain {
    fn default() -> Self {
        Self::new(ExtractionConfig::default())
    }
}

#[async_trait]
impl TextSource for FallbackChain {
    fn name(&self) -> &'static str {
        "fallback-chain"
    }

    async fn extract(&self, payload: &[u8]) -> Result<ExtractedText, ExtractionError> {
        self.validate_payload(payload)?;

        let mut failures = Vec::new();
        let mut degraded: Option<ExtractedText> = None;

        for backend in &self.backends {
            match backend.extract(payload).await {
                Ok(extracted) if extracted.is_blank() => {
                    debug!(backend = backend.name(), "backend returned blank text");
                    failures.push(format!("{}: returned no text", backend.name()));
                }
                Ok(extracted) if self.is_acceptable(&extracted) => {
                    info!(
                        backend = backend.name(),
                        chars = extracted.text.len(),
                        "text extracted"
                    );
                    return Ok(extracted);
                }
                Ok(extracted) => {
                    debug!(backend = backend.name(), "output failed readability check");
                    failures.push(format!("{}: unreadable output", backend.name()));
                    degraded.get_or_insert(extracted);
                }
                Err(e) => {
                    warn!(backend = backend.name(), error = %e, "backend failed");
                    failures.push(format!("{}: {}", backend.name(), e));
                }
            }
        }

        match degraded {
            Some(extracted) => {
                let warning = match extracted.warning.as_deref() {
                    Some(existing) => format!("{}; {}", existing, QUALITY_WARNING),
                    None => QUALITY_WARNING.to_string(),
                };
                warn!("returning text that failed readability check");
                Ok(ExtractedText {
                    text: extracted.text,
                    warning: Some(warning),
                })
            }
            None => Err(ExtractionError::AllBackendsFailed(failures)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::BYTE_SCAN_WARNING;
    use pretty_assertions::assert_eq;

    const READABLE: &str = "This Services Agreement is entered into by and between the \
        Provider and the Customer. Each party agrees to the following terms and \
        conditions. The Provider shall deliver the services described in each \
        statement of work, and the Customer shall pay all undisputed invoices \
        within thirty days of receipt.";

    struct Stub {
        name: &'static str,
        result: Result<ExtractedText, ExtractionError>,
    }

    impl Stub {
        fn ok(name: &'static str, text: &str) -> Box<dyn TextSource> {
            Box::new(Self {
                name,
                result: Ok(ExtractedText::new(text)),
            })
        }

        fn err(name: &'static str, error: ExtractionError) -> Box<dyn TextSource> {
            Box::new(Self {
                name,
                result: Err(error),
            })
        }
    }

    #[async_trait]
    impl TextSource for Stub {
        fn name(&self) -> &'static str {
            self.name
        }

        async fn extract(&self, _payload: &[u8]) -> Result<ExtractedText, ExtractionError> {
            self.result.clone()
        }
    }

    fn run(chain: &FallbackChain, payload: &[u8]) -> Result<ExtractedText, ExtractionError> {
        tokio_test::block_on(chain.extract(payload))
    }

    #[test]
    fn test_empty_payload_rejected() {
        let chain = FallbackChain::with_backends(
            ExtractionConfig::default(),
            vec![Stub::ok("a", READABLE)],
        );
        assert_eq!(run(&chain, b""), Err(ExtractionError::EmptyPayload));
    }

    #[test]
    fn test_oversized_payload_rejected() {
        let config = ExtractionConfig {
            max_bytes: 4,
            ..Default::default()
        };
        let chain = FallbackChain::with_backends(config, vec![Stub::ok("a", READABLE)]);
        assert_eq!(
            run(&chain, b"12345"),
            Err(ExtractionError::PayloadTooLarge { size: 5, limit: 4 })
        );
    }

    #[test]
    fn test_falls_through_errors() {
        let chain = FallbackChain::with_backends(
            ExtractionConfig::default(),
            vec![
                Stub::err("a", ExtractionError::InvalidPdf("bad xref".into())),
                Stub::ok("b", READABLE),
            ],
        );
        assert_eq!(run(&chain, b"%PDF").unwrap().text, READABLE);
    }

    #[test]
    fn test_skips_unreadable_output_when_better_exists() {
        let chain = FallbackChain::with_backends(
            ExtractionConfig::default(),
            vec![Stub::ok("a", "#@!$ %^&*"), Stub::ok("b", READABLE)],
        );
        let result = run(&chain, b"%PDF").unwrap();
        assert_eq!(result.text, READABLE);
        assert_eq!(result.warning, None);
    }

    #[test]
    fn test_unreadable_output_returned_with_warning_as_last_resort() {
        let chain = FallbackChain::with_backends(
            ExtractionConfig::default(),
            vec![
                Stub::ok("a", "short but real"),
                Stub::err("b", ExtractionError::PasswordProtected),
            ],
        );
        let result = run(&chain, b"%PDF").unwrap();
        assert_eq!(result.text, "short but real");
        assert_eq!(result.warning.as_deref(), Some(QUALITY_WARNING));
    }

    #[test]
    fn test_blank_text_is_never_success() {
        let chain = FallbackChain::with_backends(
            ExtractionConfig::default(),
            vec![Stub::ok("a", "   \n "), Stub::err("b", ExtractionError::PasswordProtected)],
        );
        match run(&chain, b"%PDF") {
            Err(ExtractionError::AllBackendsFailed(failures)) => {
                assert_eq!(
                    failures,
                    vec![
                        "a: returned no text".to_string(),
                        "b: Password-protected PDF".to_string()
                    ]
                );
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_validation_can_be_disabled() {
        let config = ExtractionConfig {
            validate_output: false,
            ..Default::default()
        };
        let chain = FallbackChain::with_backends(
            config,
            vec![Stub::ok("a", "tiny"), Stub::ok("b", READABLE)],
        );
        let result = run(&chain, b"%PDF").unwrap();
        assert_eq!(result.text, "tiny");
        assert_eq!(result.warning, None);
    }

    #[test]
    fn test_standard_backend_order() {
        assert_eq!(
            FallbackChain::default().backend_names(),
            vec!["pdf-extract", "lopdf", "byte-scan"]
        );
        let config = ExtractionConfig {
            enable_byte_scan: false,
            ..Default::default()
        };
        assert_eq!(
            FallbackChain::new(config).backend_names(),
            vec!["pdf-extract", "lopdf"]
        );
    }

    #[test]
    fn test_standard_chain_reaches_byte_scan() {
        let result = run(&FallbackChain::default(), READABLE.as_bytes()).unwrap();
        assert_eq!(result.text, READABLE);
        assert_eq!(result.warning.as_deref(), Some(BYTE_SCAN_WARNING));
    }
}
