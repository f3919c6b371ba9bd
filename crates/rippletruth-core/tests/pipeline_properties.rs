// ─────────────────────────────────────────────────────────────────────
// RippleTruth — Pipeline Property Tests
// ─────────────────────────────────────────────────────────────────────

use proptest::prelude::*;

use rippletruth_core::intention::compute_ripple_score;
use rippletruth_core::{
    extract, fact_stack, force, render_markdown, score, traceback, RipplePipeline,
};
use rippletruth_types::FeatureVector;

fn unit() -> impl Strategy<Value = f64> {
    0.0f64..=1.0
}

fn feature_vector() -> impl Strategy<Value = FeatureVector> {
    (unit(), unit(), unit(), unit(), unit())
        .prop_map(|(i, s, e, v, h)| FeatureVector::new(i, s, e, v, h))
}

fn in_unit(x: f64) -> bool {
    (0.0..=1.0).contains(&x)
}

proptest! {
    #[test]
    fn features_bounded_for_any_text(s in ".{0,300}") {
        let fv = extract(&s);
        prop_assert!(in_unit(fv.intent_strength));
        prop_assert!(in_unit(fv.stability));
        prop_assert!(in_unit(fv.emotion));
        prop_assert!(in_unit(fv.volatility));
        prop_assert!(in_unit(fv.harmonics));
    }

    #[test]
    fn features_bounded_for_sentence_like_text(s in "[a-zA-Z .!?,]{0,600}") {
        let fv = extract(&s);
        prop_assert!(in_unit(fv.stability));
        prop_assert!(in_unit(fv.volatility));
    }

    #[test]
    fn metrics_bounded(fv in feature_vector()) {
        let m = score(&fv);
        for v in [m.fils, m.ucip, m.ttcf, m.drift, m.ripple_score] {
            prop_assert!(in_unit(v), "metric out of range: {v}");
        }
    }

    #[test]
    fn ripple_score_monotone_in_fils_and_ucip(
        a in unit(), b in unit(), u in unit(), drift in unit()
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(compute_ripple_score(lo, u, drift) <= compute_ripple_score(hi, u, drift));
        prop_assert!(compute_ripple_score(u, lo, drift) <= compute_ripple_score(u, hi, drift));
    }

    #[test]
    fn actor_distribution_sums_to_one(fv in feature_vector()) {
        let m = score(&fv);
        let t = traceback(&fv, Some(&m));
        prop_assert!((t.actor_distribution.total() - 1.0).abs() < 1e-9);
        prop_assert!(t.actor_distribution.iter().all(|(_, p)| p >= 0.0));
    }

    #[test]
    fn reliability_strictly_inside_bounds(fv in feature_vector()) {
        let m = score(&fv);
        let t = traceback(&fv, Some(&m));
        prop_assert!(t.reliability_index > 1.0 && t.reliability_index < 99.0);
    }

    #[test]
    fn force_and_fact_scores_bounded(s in "[a-zA-Z .!?,']{0,400}") {
        let f = force::measure(&s);
        prop_assert!((0.0..=100.0).contains(&f.force_score));
        let fs = fact_stack::analyze(&s);
        prop_assert!((0.0..=100.0).contains(&fs.stability_score));
    }

    #[test]
    fn analyze_is_idempotent(s in ".{0,200}") {
        let pipeline = RipplePipeline::default();
        let a = pipeline.analyze(&s);
        let b = pipeline.analyze(&s);
        prop_assert_eq!(render_markdown(&a), render_markdown(&b));
        prop_assert_eq!(a.to_json().ok(), b.to_json().ok());
    }
}
