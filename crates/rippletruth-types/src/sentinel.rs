// ─────────────────────────────────────────────────────────────────────
// RippleTruth — Collaborator Sentinel Contract
// ─────────────────────────────────────────────────────────────────────
//! Ingest collaborators (URL fetch, OCR) never fail with an error value
//! that reaches the scoring pipeline. They return a bracketed sentinel
//! string instead, and the orchestrator short-circuits on it.

/// Prefix for fetch / OCR / transport failures.
pub const ERROR_PREFIX: &str = "[Error";

/// Prefix for "nothing extractable" outcomes.
pub const NO_READABLE_PREFIX: &str = "[No readable";

/// True if `text` is a collaborator failure sentinel.
pub fn is_sentinel(text: &str) -> bool {
    let t = text.trim_start();
    t.starts_with(ERROR_PREFIX) || t.starts_with(NO_READABLE_PREFIX)
}

/// Build an `[Error …]` sentinel.
pub fn error_sentinel(detail: impl AsRef<str>) -> String {
    format!("{ERROR_PREFIX}: {}]", detail.as_ref())
}

/// Build a `[No readable …]` sentinel.
pub fn no_readable_sentinel(detail: impl AsRef<str>) -> String {
    format!("{NO_READABLE_PREFIX} {}]", detail.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_error_prefix() {
        assert!(is_sentinel("[Error loading URL: timeout]"));
        assert!(is_sentinel("  [Error 403 Forbidden]"));
    }

    #[test]
    fn test_detects_no_readable_prefix() {
        assert!(is_sentinel("[No readable article text found]"));
    }

    #[test]
    fn test_plain_text_is_not_sentinel() {
        assert!(!is_sentinel("The economy is great."));
        assert!(!is_sentinel("[Note] an aside"));
        assert!(!is_sentinel(""));
    }

    #[test]
    fn test_builders_round_trip() {
        assert!(is_sentinel(&error_sentinel("boom")));
        assert_eq!(error_sentinel("boom"), "[Error: boom]");
        assert_eq!(
            no_readable_sentinel("text detected in image"),
            "[No readable text detected in image]"
        );
    }
}
