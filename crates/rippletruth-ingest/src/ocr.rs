// ─────────────────────────────────────────────────────────────────────
// RippleTruth — OCR Service
// ─────────────────────────────────────────────────────────────────────
//! Image-to-text behind an `OcrBackend` trait. The service is created
//! once at startup and shared read-only; there is no global model.
//!
//! No recognizer ships with the kernel. `UnavailableOcr` is the default
//! backend; hosts plug a real engine in through `ExternalOcr`.

use rippletruth_types::sentinel::{error_sentinel, no_readable_sentinel};
use rippletruth_types::RippleResult;

/// Trait for OCR engines.
pub trait OcrBackend: Send + Sync {
    /// Recognize text in encoded image bytes (PNG, JPEG, …).
    fn recognize(&self, image: &[u8]) -> RippleResult<String>;

    fn is_available(&self) -> bool {
        true
    }
}

/// Backend for platforms without an OCR engine.
pub struct UnavailableOcr;

impl OcrBackend for UnavailableOcr {
    fn recognize(&self, _image: &[u8]) -> RippleResult<String> {
        Ok(String::new())
    }

    fn is_available(&self) -> bool {
        false
    }
}

type RecognizeFn = Box<dyn Fn(&[u8]) -> RippleResult<String> + Send + Sync>;

/// OCR backend that delegates to a host-supplied function.
///
/// Used by the PyO3 layer to route recognition back to Python.
pub struct ExternalOcr {
    recognize_fn: RecognizeFn,
}

impl ExternalOcr {
    pub fn new(f: impl Fn(&[u8]) -> RippleResult<String> + Send + Sync + 'static) -> Self {
        Self {
            recognize_fn: Box::new(f),
        }
    }
}

impl OcrBackend for ExternalOcr {
    fn recognize(&self, image: &[u8]) -> RippleResult<String> {
        (self.recognize_fn)(image)
    }
}

/// Shared OCR entry point.
pub struct OcrService {
    backend: Box<dyn OcrBackend>,
}

impl Default for OcrService {
    fn default() -> Self {
        Self::new(UnavailableOcr)
    }
}

impl OcrService {
    pub fn new(backend: impl OcrBackend + 'static) -> Self {
        Self {
            backend: Box::new(backend),
        }
    }

    pub fn is_available(&self) -> bool {
        self.backend.is_available()
    }

    /// Extract text from `image`, or return a sentinel. Never fails.
    pub fn ocr_extract(&self, image: &[u8]) -> String {
        if !self.backend.is_available() {
            return no_readable_sentinel(
                "text: OCR unavailable on this platform — image processing disabled. \
                 Please use text or URL mode instead.",
            );
        }
        if image.is_empty() {
            return no_readable_sentinel("text detected in image");
        }
        match self.backend.recognize(image) {
            Ok(text) => {
                let lines: Vec<&str> = text
                    .lines()
                    .map(str::trim)
                    .filter(|l| !l.is_empty())
                    .collect();
                if lines.is_empty() {
                    no_readable_sentinel("text detected in image")
                } else {
                    lines.join("\n")
                }
            }
            Err(e) => {
                log::warn!("ocr: backend failed: {e}");
                error_sentinel(format!("OCR failed: {e}"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rippletruth_types::{is_sentinel, RippleError};

    #[test]
    fn test_unavailable_backend_sentinel() {
        let svc = OcrService::default();
        assert!(!svc.is_available());
        let out = svc.ocr_extract(b"\x89PNG....");
        assert!(out.starts_with("[No readable text: OCR unavailable on this platform"));
        assert!(is_sentinel(&out));
    }

    #[test]
    fn test_external_backend_joins_lines() {
        let svc = OcrService::new(ExternalOcr::new(|_| {
            Ok("  Vote now!  \n\n  The ballot closes today. ".into())
        }));
        assert_eq!(svc.ocr_extract(b"img"), "Vote now!\nThe ballot closes today.");
    }

    #[test]
    fn test_blank_output_is_no_readable() {
        let svc = OcrService::new(ExternalOcr::new(|_| Ok(" \n \t ".into())));
        assert_eq!(svc.ocr_extract(b"img"), "[No readable text detected in image]");
    }

    #[test]
    fn test_empty_image_is_no_readable() {
        let svc = OcrService::new(ExternalOcr::new(|_| Ok("never called".into())));
        assert_eq!(svc.ocr_extract(&[]), "[No readable text detected in image]");
    }

    #[test]
    fn test_backend_error_is_error_sentinel() {
        let svc = OcrService::new(ExternalOcr::new(|_| {
            Err(RippleError::Ocr("decoder crashed".into()))
        }));
        let out = svc.ocr_extract(b"img");
        assert_eq!(out, "[Error: OCR failed: OCR error: decoder crashed]");
    }
}
