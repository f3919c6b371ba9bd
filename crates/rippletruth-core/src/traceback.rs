// ─────────────────────────────────────────────────────────────────────
// RippleTruth — Traceback Scorer
// ─────────────────────────────────────────────────────────────────────
//! Origin traceback: multiplicative reweighting of fixed actor priors,
//! plus amplification, mutation likelihood and the reliability index.
//!
//! The reliability formula is bounded well inside [1, 99] for any
//! feature vector in [0, 1]^5 (roughly 9.9 to 95); the clamp only
//! guards against non-finite input.

use rippletruth_types::{
    clamp_score, round_to, Actor, ActorDistribution, FeatureVector, IntentionMetrics,
    TracebackResult,
};

use crate::tables::{self, ACTOR_TABLE};

/// Compute the traceback for one analysis.
///
/// `metrics = None` yields [`TracebackResult::skipped`] rather than an error.
pub fn traceback(features: &FeatureVector, metrics: Option<&IntentionMetrics>) -> TracebackResult {
    let Some(m) = metrics else {
        log::warn!("traceback: intention metrics missing, skipping");
        return TracebackResult::skipped();
    };

    let actor_distribution = actor_distribution(features, m.ripple_score);
    let mutation_likelihood = mutation_likelihood(features.stability, features.volatility);
    let amplification_pattern = amplification_pattern(m.ucip, m.ttcf);
    let reliability_index = reliability_index(features.stability, m);

    let interpretation = describe(
        &actor_distribution,
        amplification_pattern,
        mutation_likelihood,
        reliability_index,
    );

    TracebackResult {
        actor_distribution,
        amplification_pattern,
        mutation_likelihood,
        reliability_index,
        interpretation,
    }
}

/// Reweight each prior by the feature/metric signature and renormalize.
pub fn actor_distribution(features: &FeatureVector, ripple_score: f64) -> ActorDistribution {
    let mut scores = [0.0; Actor::COUNT];
    for (score, w) in scores.iter_mut().zip(ACTOR_TABLE.iter()) {
        *score = w.prior
            * (1.0 + features.intent_strength * w.intent)
            * (1.0 + features.stability * w.stability)
            * (1.0 + features.harmonics * w.harmonic)
            * (1.0 + ripple_score * w.ripple);
    }
    ActorDistribution::from_scores(scores)
}

pub fn mutation_likelihood(stability: f64, volatility: f64) -> f64 {
    clamp_score(0.6 * (1.0 - stability) + 0.4 * volatility, 0.0, 1.0)
}

pub fn amplification_pattern(ucip: f64, ttcf: f64) -> f64 {
    let amp = ucip * 0.5 - ttcf * 0.5;
    clamp_score((amp + 1.0) / 2.0, 0.0, 1.0)
}

pub fn reliability_index(stability: f64, m: &IntentionMetrics) -> f64 {
    let raw = 0.35 * stability
        + 0.25 * m.ucip
        + 0.15 * (1.0 - m.ttcf)
        + 0.15 * m.ripple_score
        + 0.10 * (1.0 - m.drift);
    clamp_score(
        raw * 100.0,
        tables::RELIABILITY_FLOOR,
        tables::RELIABILITY_CEILING,
    )
}

fn describe(
    distribution: &ActorDistribution,
    amplification: f64,
    mutation: f64,
    reliability: f64,
) -> String {
    let dominant = distribution
        .dominant()
        .map(Actor::label)
        .unwrap_or("Unknown");
    let amp_label = if amplification < tables::AMPLIFICATION_LOW_CUTOFF {
        "Low"
    } else {
        "High"
    };
    format!(
        "A narrative originating from **{dominant}** with an amplification profile of \
         **{amp_label} amplification**, and a mutation likelihood of **{}**, produces a \
         RippleTruth reliability score of **{:.1}/100**.",
        round_to(mutation, 2),
        reliability
    )
}
