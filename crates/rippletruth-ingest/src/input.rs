// ─────────────────────────────────────────────────────────────────────
// RippleTruth — Input Resolver
// ─────────────────────────────────────────────────────────────────────
//! Normalizes text / URL / image input into one string for the pipeline.
//!
//! A blank source is the only error. Fetch and OCR failures come back
//! as sentinel strings; callers pass the result to
//! `RipplePipeline::analyze_resolved`, which refuses them.

use std::sync::Arc;

use rippletruth_types::{RippleConfig, RippleError, RippleResult};

use crate::fetch::{HttpFetcher, TextFetcher};
use crate::ocr::OcrService;

/// One unit of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Text(String),
    Url(String),
    /// Encoded image bytes.
    Image(Vec<u8>),
}

impl InputSource {
    pub fn kind(&self) -> &'static str {
        match self {
            InputSource::Text(_) => "text",
            InputSource::Url(_) => "url",
            InputSource::Image(_) => "image",
        }
    }
}

/// Routes each [`InputSource`] to its collaborator.
pub struct InputResolver {
    fetcher: Arc<dyn TextFetcher>,
    ocr: Arc<OcrService>,
}

impl InputResolver {
    pub fn new(fetcher: Arc<dyn TextFetcher>, ocr: Arc<OcrService>) -> Self {
        Self { fetcher, ocr }
    }

    /// HTTP fetcher from `config`, plus the given OCR service.
    pub fn from_config(config: &RippleConfig, ocr: Arc<OcrService>) -> RippleResult<Self> {
        Ok(Self::new(Arc::new(HttpFetcher::new(config)?), ocr))
    }

    /// Resolve `source` to plain text or a collaborator sentinel.
    pub fn resolve_input(&self, source: &InputSource) -> RippleResult<String> {
        log::debug!("resolve: source={}", source.kind());
        match source {
            InputSource::Text(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    return Err(RippleError::InputUnavailable);
                }
                Ok(trimmed.to_string())
            }
            InputSource::Url(url) => {
                let trimmed = url.trim();
                if trimmed.is_empty() {
                    return Err(RippleError::InputUnavailable);
                }
                Ok(self.fetcher.fetch_url_text(trimmed))
            }
            InputSource::Image(bytes) => {
                if bytes.is_empty() {
                    return Err(RippleError::InputUnavailable);
                }
                Ok(self.ocr.ocr_extract(bytes))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ocr::ExternalOcr;
    use rippletruth_types::is_sentinel;

    struct StaticFetcher;

    impl TextFetcher for StaticFetcher {
        fn fetch_url_text(&self, url: &str) -> String {
            if url.contains("missing") {
                "[Error 404 — Not Found]".to_string()
            } else {
                format!("Article body from {url}")
            }
        }
    }

    fn resolver() -> InputResolver {
        InputResolver::new(
            Arc::new(StaticFetcher),
            Arc::new(OcrService::new(ExternalOcr::new(|_| Ok("Scanned flyer text".into())))),
        )
    }

    #[test]
    fn test_text_is_trimmed() {
        let out = resolver()
            .resolve_input(&InputSource::Text("  The vote is today.\n".into()))
            .unwrap();
        assert_eq!(out, "The vote is today.");
    }

    #[test]
    fn test_blank_sources_are_unavailable() {
        let r = resolver();
        for src in [
            InputSource::Text("   ".into()),
            InputSource::Url("".into()),
            InputSource::Image(Vec::new()),
        ] {
            assert!(matches!(r.resolve_input(&src), Err(RippleError::InputUnavailable)));
        }
    }

    #[test]
    fn test_url_routes_to_fetcher() {
        let r = resolver();
        let ok = r
            .resolve_input(&InputSource::Url(" https://news.example/a ".into()))
            .unwrap();
        assert_eq!(ok, "Article body from https://news.example/a");
        let failed = r
            .resolve_input(&InputSource::Url("https://news.example/missing".into()))
            .unwrap();
        assert!(is_sentinel(&failed));
    }

    #[test]
    fn test_image_routes_to_ocr() {
        let out = resolver().resolve_input(&InputSource::Image(vec![1, 2, 3])).unwrap();
        assert_eq!(out, "Scanned flyer text");
    }

    #[test]
    fn test_default_ocr_yields_sentinel() {
        let r = InputResolver::new(Arc::new(StaticFetcher), Arc::new(OcrService::default()));
        let out = r.resolve_input(&InputSource::Image(vec![0xFF])).unwrap();
        assert!(is_sentinel(&out));
    }
}
