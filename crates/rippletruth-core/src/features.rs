// ─────────────────────────────────────────────────────────────────────
// RippleTruth — Feature Extractor
// ─────────────────────────────────────────────────────────────────────
//! Five independent token-level signals over raw text.
//!
//! | signal | degenerate input | default |
//! |---|---|---|
//! | intent_strength | no tokens | 0.0 |
//! | stability | < 2 qualifying sentences | 0.5 |
//! | emotion | no lexicon hits | 0.5 |
//! | volatility | < 4 tokens | 0.1 |
//! | harmonics | no tokens | 0.0 |
//!
//! Every signal is clamped into [0, 1]; none can divide by zero.

use std::collections::{BTreeMap, HashSet};

use rippletruth_types::{clamp_score, FeatureVector};

use crate::tables;
use crate::text::{count_present, mean, population_std, whitespace_tokens, word_tokens};

/// Extract the [`FeatureVector`] for `text`.
pub fn extract(text: &str) -> FeatureVector {
    let tokens = whitespace_tokens(text);
    let fv = FeatureVector::new(
        intent_strength(&tokens),
        semantic_stability(text),
        emotional_vector(text),
        emotional_volatility(&tokens),
        narrative_harmonics(&tokens),
    );
    log::debug!(
        "features: intent={:.4} stability={:.4} emotion={:.4} volatility={:.4} harmonics={:.4}",
        fv.intent_strength,
        fv.stability,
        fv.emotion,
        fv.volatility,
        fv.harmonics
    );
    fv
}

/// Directive-word density × 4, clamped.
pub fn intent_strength(tokens: &[String]) -> f64 {
    if tokens.is_empty() {
        return 0.0;
    }
    let hits = tokens
        .iter()
        .filter(|t| tables::DIRECTIVE_WORDS.contains(&t.as_str()))
        .count();
    clamp_score(hits as f64 / tokens.len() as f64 * tables::INTENT_SCALE, 0.0, 1.0)
}

/// Mean cosine similarity of consecutive sentence term vectors.
pub fn semantic_stability(text: &str) -> f64 {
    let sentences: Vec<&str> = text
        .split('.')
        .map(str::trim)
        .filter(|s| s.chars().count() >= tables::MIN_SENTENCE_CHARS)
        .collect();
    if sentences.len() < 2 {
        return tables::STABILITY_DEFAULT;
    }

    let vectors: Vec<Vec<f64>> = sentences.iter().map(|s| sentence_vector(s)).collect();
    let sims: Vec<f64> = vectors
        .windows(2)
        .map(|pair| match cosine_similarity(&pair[0], &pair[1]) {
            Some(sim) => sim,
            None => tables::STABILITY_PAIR_FALLBACK,
        })
        .collect();

    let avg = mean(&sims).unwrap_or(tables::STABILITY_PAIR_FALLBACK);
    clamp_score(avg, 0.0, 1.0)
}

/// Term-count vector for one sentence over its own sorted vocabulary.
///
/// The vocabulary is private to the sentence, so two vectors are only
/// comparable position-by-position when their dimensions agree. A
/// sentence with no content words maps to a fixed-width zero vector.
pub fn sentence_vector(sentence: &str) -> Vec<f64> {
    let mut counts: BTreeMap<String, f64> = BTreeMap::new();
    for token in word_tokens(sentence, 2) {
        if tables::STOP_WORDS.contains(&token.as_str()) {
            continue;
        }
        *counts.entry(token).or_insert(0.0) += 1.0;
    }
    if counts.is_empty() {
        return vec![0.0; tables::EMPTY_VOCAB_DIM];
    }
    counts.into_values().collect()
}

/// Cosine similarity; `None` when the dimensions differ, 0.0 when either
/// vector has zero norm.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> Option<f64> {
    if a.len() != b.len() {
        return None;
    }
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let na = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let nb = b.iter().map(|x| x * x).sum::<f64>().sqrt();
    if na == 0.0 || nb == 0.0 {
        return Some(0.0);
    }
    Some(dot / (na * nb))
}

/// Net sentiment over the emotion lexicon, rescaled from [-1, 1] to [0, 1].
pub fn emotional_vector(text: &str) -> f64 {
    let lowered = text.to_lowercase();
    let pos = count_present(&lowered, tables::EMOTION_POSITIVE) as f64;
    let neg = count_present(&lowered, tables::EMOTION_NEGATIVE) as f64;
    let emo = (pos - neg) / (pos + neg).max(1.0);
    clamp_score((emo + 1.0) / 2.0, 0.0, 1.0)
}

/// Population std-dev of per-token emotional intensity.
pub fn emotional_volatility(tokens: &[String]) -> f64 {
    if tokens.len() < tables::MIN_VOLATILITY_TOKENS {
        return tables::VOLATILITY_DEFAULT;
    }
    let values: Vec<f64> = tokens
        .iter()
        .map(|t| {
            if tables::INTENSITY_HIGH.contains(&t.as_str()) {
                tables::INTENSITY_HIGH_VALUE
            } else if tables::INTENSITY_CALM.contains(&t.as_str()) {
                tables::INTENSITY_CALM_VALUE
            } else {
                tables::INTENSITY_BASE_VALUE
            }
        })
        .collect();
    clamp_score(population_std(&values).unwrap_or(0.0), 0.0, 1.0)
}

/// Repetition ratio × 3, clamped.
pub fn narrative_harmonics(tokens: &[String]) -> f64 {
    if tokens.is_empty() {
        return 0.0;
    }
    let unique: HashSet<&str> = tokens.iter().map(String::as_str).collect();
    let ratio = (tokens.len() - unique.len()) as f64 / tokens.len() as f64;
    clamp_score(ratio * tables::HARMONIC_SCALE, 0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(s: &str) -> Vec<String> {
        whitespace_tokens(s)
    }

    #[test]
    fn test_empty_string_defaults() {
        let fv = extract("");
        assert_eq!(fv.intent_strength, 0.0);
        assert_eq!(fv.stability, 0.5);
        assert_eq!(fv.emotion, 0.5);
        assert_eq!(fv.volatility, 0.1);
        assert_eq!(fv.harmonics, 0.0);
    }

    #[test]
    fn test_intent_strength_saturates() {
        let text = "must never always must never always must never always must never always \
                    must never always we act now today together";
        assert_eq!(toks(text).len(), 20);
        assert_eq!(intent_strength(&toks(text)), 1.0);
    }

    #[test]
    fn test_intent_strength_fraction() {
        // 1 of 8 tokens → 0.125 × 4 = 0.5
        let t = toks("they will do what they say they do");
        assert!((intent_strength(&t) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_intent_ignores_attached_punctuation() {
        assert_eq!(intent_strength(&toks("we must.")), 0.0);
    }

    #[test]
    fn test_stability_single_sentence() {
        assert_eq!(semantic_stability("Only one sentence here"), 0.5);
    }

    #[test]
    fn test_stability_short_fragments_ignored() {
        assert_eq!(semantic_stability("Hi. Ok. Yes. The rest is a sentence"), 0.5);
    }

    #[test]
    fn test_stability_identical_sentences() {
        let s =
            semantic_stability("Markets rallied strongly today. Markets rallied strongly today.");
        assert!((s - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_stability_dimension_mismatch_falls_back() {
        // 2 content words vs 4 content words → incomparable → 0.3
        let s = semantic_stability("Markets rallied. Prices fell sharply overnight.");
        assert!((s - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_stability_stopword_only_sentences() {
        // Both map to the 32-wide zero vector → similarity 0.
        let s = semantic_stability("It is what it is. They were there then.");
        assert_eq!(s, 0.0);
    }

    #[test]
    fn test_sentence_vector_sorted_counts() {
        assert_eq!(sentence_vector("zebra apple zebra"), vec![1.0, 2.0]);
    }

    #[test]
    fn test_cosine_similarity_cases() {
        assert_eq!(cosine_similarity(&[1.0, 0.0], &[1.0, 0.0, 0.0]), None);
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 1.0]), Some(0.0));
        let s = cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]).unwrap();
        assert_eq!(s, 0.0);
    }

    #[test]
    fn test_emotion_positive_only() {
        assert_eq!(emotional_vector("The economy is great and will improve."), 1.0);
    }

    #[test]
    fn test_emotion_balanced() {
        assert_eq!(emotional_vector("good and bad"), 0.5);
    }

    #[test]
    fn test_emotion_negative_only() {
        assert_eq!(emotional_vector("terrible fear"), 0.0);
    }

    #[test]
    fn test_volatility_short_default() {
        assert_eq!(emotional_volatility(&toks("kill calm now")), 0.1);
    }

    #[test]
    fn test_volatility_uniform_tokens() {
        assert_eq!(emotional_volatility(&toks("one two three four")), 0.0);
    }

    #[test]
    fn test_volatility_alternating() {
        let v = emotional_volatility(&toks("kill calm kill calm"));
        assert!((v - 0.45).abs() < 1e-12);
    }

    #[test]
    fn test_harmonics() {
        // 6 tokens, 3 unique → 0.5 × 3 = 1.5 → 1.0
        assert_eq!(narrative_harmonics(&toks("a b c a b c")), 1.0);
        // 5 tokens, 4 unique → 0.2 × 3 = 0.6
        assert!((narrative_harmonics(&toks("a b c d a")) - 0.6).abs() < 1e-12);
        assert_eq!(narrative_harmonics(&[]), 0.0);
    }

    #[test]
    fn test_punctuation_only() {
        let fv = extract("?!?!... ,,, ;;");
        for v in [fv.intent_strength, fv.stability, fv.emotion, fv.volatility, fv.harmonics] {
            assert!((0.0..=1.0).contains(&v));
        }
    }
}
