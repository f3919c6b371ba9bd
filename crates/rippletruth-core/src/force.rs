// ─────────────────────────────────────────────────────────────────────
// RippleTruth — Linguistic Force Scorer
// ─────────────────────────────────────────────────────────────────────
//! Independent five-component "force" model over the raw text:
//! emotionality, assertion, volatility, intent strength and coherence,
//! fused with fixed weights into a 0–100 force score.
//!
//! This runs on its own tokenization and does not share signals with
//! the intention pipeline.

use rippletruth_types::{clamp_score, round_to, LinguisticForce};

use crate::tables;
use crate::text::{mean, sample_variance, word_tokens};

/// Default for volatility when there are fewer than two fragments.
const VOLATILITY_DEFAULT: f64 = 0.1;
/// Default for coherence when there are fewer than two sentences.
const COHERENCE_DEFAULT: f64 = 0.5;

/// Measure the linguistic force of `text`.
pub fn measure(text: &str) -> LinguisticForce {
    let tokens = word_tokens(text, 1);

    let emotionality = emotionality(&tokens);
    let assertion = assertion_level(&tokens);
    let volatility = linguistic_chaos(text);
    let intent_strength = directional_intent(text);
    let coherence = coherence(text);

    let fused = emotionality * tables::FORCE_W_EMOTIONALITY
        + assertion * tables::FORCE_W_ASSERTION
        + volatility * tables::FORCE_W_VOLATILITY
        + intent_strength * tables::FORCE_W_INTENT
        + coherence * tables::FORCE_W_COHERENCE;
    let force_score = round_to(clamp_score(fused * 100.0, 0.0, 100.0), 2);

    log::debug!("force: score={force_score:.2}");

    LinguisticForce {
        emotionality,
        assertion,
        volatility,
        intent_strength,
        coherence,
        force_score,
    }
}

/// Emotional-word hits per 20 tokens, capped at 1.
pub fn emotionality(tokens: &[String]) -> f64 {
    let count = tokens
        .iter()
        .filter(|t| tables::FORCE_EMOTIONAL_WORDS.contains(&t.as_str()))
        .count() as f64;
    let norm = (tokens.len() as f64 / 20.0).max(1.0);
    (count / norm).min(1.0)
}

/// Certainty: strong modals minus half the weak ones, squashed into [0, 1].
pub fn assertion_level(tokens: &[String]) -> f64 {
    let strong = tokens
        .iter()
        .filter(|t| tables::FORCE_STRONG_MODALS.contains(&t.as_str()))
        .count() as f64;
    let weak = tokens
        .iter()
        .filter(|t| tables::FORCE_WEAK_MODALS.contains(&t.as_str()))
        .count() as f64;
    clamp_score((strong - weak * 0.5 + 3.0) / 6.0, 0.0, 1.0)
}

fn sentence_lengths(text: &str) -> Vec<f64> {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .map(|f| f.split_whitespace().count() as f64)
        .collect()
}

/// Coefficient of variation of sentence lengths.
pub fn linguistic_chaos(text: &str) -> f64 {
    let lengths = sentence_lengths(text);
    let (Some(var), Some(m)) = (sample_variance(&lengths), mean(&lengths)) else {
        return VOLATILITY_DEFAULT;
    };
    clamp_score(var.sqrt() / m.max(1.0), 0.0, 1.0)
}

/// Directional-term occurrences over five, capped at 1.
pub fn directional_intent(text: &str) -> f64 {
    let lowered = text.to_lowercase();
    let count: usize = tables::FORCE_DIRECTIONAL_TERMS
        .iter()
        .map(|term| lowered.matches(term).count())
        .sum();
    (count as f64 / 5.0).min(1.0)
}

/// Orderliness: high spread of sentence lengths lowers coherence.
pub fn coherence(text: &str) -> f64 {
    let lengths = sentence_lengths(text);
    match sample_variance(&lengths) {
        Some(var) => clamp_score(1.0 / (1.0 + var.sqrt()), 0.0, 1.0),
        None => COHERENCE_DEFAULT,
    }
}
