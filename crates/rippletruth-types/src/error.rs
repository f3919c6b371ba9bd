// ─────────────────────────────────────────────────────────────────────
// RippleTruth — Error Hierarchy
// ─────────────────────────────────────────────────────────────────────

use thiserror::Error;

/// Root error type for all RippleTruth failures.
///
/// The scoring pipeline itself is total and never produces one of these;
/// they only appear at the ingest boundary and in configuration handling.
#[derive(Error, Debug)]
pub enum RippleError {
    /// No text, URL or image was supplied.
    #[error("no input provided: supply text, a URL or an image")]
    InputUnavailable,

    /// A collaborator returned a sentinel string. Displayed verbatim.
    #[error("{0}")]
    Extraction(String),

    /// URL fetch or HTML extraction failed.
    #[error("fetch error: {0}")]
    Fetch(String),

    /// OCR backend failed or is unavailable.
    #[error("OCR error: {0}")]
    Ocr(String),

    /// Language-model enhancement failed.
    #[error("enhancement error: {0}")]
    Enhancement(String),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// Invalid input (mode tag, parameters).
    #[error("validation error: {0}")]
    Validation(String),
}

pub type RippleResult<T> = Result<T, RippleError>;
