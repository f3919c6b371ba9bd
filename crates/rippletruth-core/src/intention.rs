// ─────────────────────────────────────────────────────────────────────
// RippleTruth — Intention Scorer
// ─────────────────────────────────────────────────────────────────────
//! Sequential intention-field formula chain:
//!
//! ```text
//! FILS        = 0.6·intent + 0.25·stability + 0.15·emotion
//! UCIP        = 0.5·FILS + 0.3·stability + 0.2·harmonics
//! TTCF        = 0.7·volatility + 0.3·(0.2·volatility)
//! Drift       = (|FILS − UCIP| + (1 − TTCF)) / 2
//! RippleScore = 0.45·FILS + 0.45·UCIP − 0.25·Drift
//! ```
//!
//! Each result is clamped to [0, 1]. Later stages consume earlier
//! results at full precision; rounding happens only for reporting.

use rippletruth_types::{clamp_score, FeatureVector, IntentionMetrics};

/// Damping applied to volatility to form TTCF's low-band term.
const LOWBAND_DAMPING: f64 = 0.2;

pub fn compute_fils(intent_strength: f64, stability: f64, emotion: f64) -> f64 {
    clamp_score(0.6 * intent_strength + 0.25 * stability + 0.15 * emotion, 0.0, 1.0)
}

pub fn compute_ucip(fils: f64, stability: f64, harmonics: f64) -> f64 {
    clamp_score(0.5 * fils + 0.3 * stability + 0.2 * harmonics, 0.0, 1.0)
}

pub fn compute_ttcf(volatility: f64) -> f64 {
    let lowband = volatility * LOWBAND_DAMPING;
    clamp_score(0.7 * volatility + 0.3 * lowband, 0.0, 1.0)
}

pub fn compute_drift(fils: f64, ucip: f64, ttcf: f64) -> f64 {
    clamp_score(((fils - ucip).abs() + (1.0 - ttcf)) / 2.0, 0.0, 1.0)
}

pub fn compute_ripple_score(fils: f64, ucip: f64, drift: f64) -> f64 {
    clamp_score(0.45 * fils + 0.45 * ucip - 0.25 * drift, 0.0, 1.0)
}

/// Run the full chain for one feature vector.
pub fn score(features: &FeatureVector) -> IntentionMetrics {
    let fils = compute_fils(features.intent_strength, features.stability, features.emotion);
    let ucip = compute_ucip(fils, features.stability, features.harmonics);
    let ttcf = compute_ttcf(features.volatility);
    let drift = compute_drift(fils, ucip, ttcf);
    let ripple_score = compute_ripple_score(fils, ucip, drift);

    log::debug!(
        "intention: FILS={fils:.4} UCIP={ucip:.4} TTCF={ttcf:.4} Drift={drift:.4} RippleScore={ripple_score:.4}"
    );

    IntentionMetrics {
        fils,
        ucip,
        ttcf,
        drift,
        ripple_score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{a} != {b}");
    }

    #[test]
    fn test_empty_text_features() {
        // Defaults for the empty string.
        let fv = FeatureVector::new(0.0, 0.5, 0.5, 0.1, 0.0);
        let m = score(&fv);
        approx(m.fils, 0.2);
        approx(m.ucip, 0.25);
        approx(m.ttcf, 0.076);
        approx(m.drift, (0.05 + 0.924) / 2.0);
        approx(m.ripple_score, 0.45 * 0.2 + 0.45 * 0.25 - 0.25 * 0.487);
    }

    #[test]
    fn test_ttcf_formula() {
        approx(compute_ttcf(1.0), 0.76);
        approx(compute_ttcf(0.0), 0.0);
    }

    #[test]
    fn test_ripple_clamps_at_zero() {
        assert_eq!(compute_ripple_score(0.0, 0.0, 1.0), 0.0);
    }

    #[test]
    fn test_saturated_features() {
        let m = score(&FeatureVector::new(1.0, 1.0, 1.0, 1.0, 1.0));
        approx(m.fils, 1.0);
        approx(m.ucip, 1.0);
        approx(m.drift, 0.12);
        assert!(m.ripple_score <= 1.0);
    }

    #[test]
    fn test_rounded_for_reporting() {
        let m = score(&FeatureVector::new(0.123456, 0.654321, 0.5, 0.3333, 0.1111));
        let r = m.rounded();
        // FILS = 0.31265385 at full precision.
        approx(m.fils, 0.31265385);
        approx(r.fils, 0.3127);
    }
}
