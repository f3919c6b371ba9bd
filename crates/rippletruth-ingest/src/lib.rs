// ─────────────────────────────────────────────────────────────────────
// RippleTruth — Ingest Collaborators
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Everything that touches the outside world before or after scoring:
//! URL fetch + article extraction, OCR, and optional language-model
//! enhancement.
//!
//! Collaborators never hand an error value to the scoring pipeline.
//! Failures come back as `[Error …` / `[No readable …` sentinel strings
//! (see `rippletruth_types::sentinel`) or, for enhancement, as an inline
//! warning string.

pub mod fetch;
pub mod input;
pub mod llm;
pub mod ocr;

pub use fetch::{extract_paragraph_text, HttpFetcher, TextFetcher};
pub use input::{InputResolver, InputSource};
pub use llm::{ChatBackend, EnhanceMode, LlmEnhancer, OpenAiChat};
pub use ocr::{ExternalOcr, OcrBackend, OcrService, UnavailableOcr};
