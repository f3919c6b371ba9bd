// ─────────────────────────────────────────────────────────────────────
// RippleTruth — Tokenization Helpers
// ─────────────────────────────────────────────────────────────────────

/// Lower-cased whitespace tokens. Punctuation stays attached.
pub fn whitespace_tokens(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_lowercase).collect()
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Lower-cased runs of word characters with at least `min_chars` chars.
pub fn word_tokens(text: &str, min_chars: usize) -> Vec<String> {
    text.split(|c: char| !is_word_char(c))
        .filter(|t| !t.is_empty() && t.chars().count() >= min_chars)
        .map(str::to_lowercase)
        .collect()
}

/// Number of keywords from `list` that occur as substrings of `haystack`.
/// Each keyword counts at most once.
pub fn count_present(haystack: &str, list: &[&str]) -> usize {
    list.iter().filter(|k| haystack.contains(*k)).count()
}

pub fn contains_any(haystack: &str, list: &[&str]) -> bool {
    list.iter().any(|k| haystack.contains(k))
}

/// Arithmetic mean; `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

/// Population standard deviation.
pub fn population_std(values: &[f64]) -> Option<f64> {
    let m = mean(values)?;
    let var = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64;
    Some(var.sqrt())
}

/// Sample variance (n − 1 denominator); `None` below two values.
pub fn sample_variance(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let m = mean(values)?;
    Some(values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / (values.len() - 1) as f64)
}
