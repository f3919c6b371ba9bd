// ─────────────────────────────────────────────────────────────────────
// RippleTruth — Interpretation Composer
// ─────────────────────────────────────────────────────────────────────
//! Banded prose over the narrative profile, metrics and traceback.
//!
//! Bands use strict `>` comparisons; a value sitting exactly on a cut
//! point falls into the lower band.

use rippletruth_types::{
    Actor, IntentionMetrics, LinguisticForce, NarrativeProfile, TracebackResult,
};

use crate::tables::{self, Band, Level};

fn phrase(
    band: Band,
    value: f64,
    high: &'static str,
    moderate: &'static str,
    low: &'static str,
) -> &'static str {
    match band.level(value) {
        Level::High => high,
        Level::Moderate => moderate,
        Level::Low => low,
    }
}

fn narrative_paragraph(n: &NarrativeProfile) -> String {
    format!(
        "The text presents a **{}** narrative with a **{} polarity**, delivered in a **{} tone**, \
         and structured as a **{}**.",
        n.topic.label().to_lowercase(),
        n.polarity.label().to_lowercase(),
        n.tone.label().to_lowercase(),
        n.structure.label().to_lowercase(),
    )
}

fn intention_paragraph(m: &IntentionMetrics) -> String {
    let fils = phrase(
        tables::BAND_FILS,
        m.fils,
        "strong emotional propulsion driving reader direction",
        "moderate emotional activation",
        "low emotional propulsion",
    );
    let ucip = phrase(
        tables::BAND_UCIP,
        m.ucip,
        "high internal coherence",
        "moderate coherence",
        "low coherence",
    );
    let ttcf = phrase(
        tables::BAND_TTCF,
        m.ttcf,
        "high chaos/distortion",
        "moderate chaos",
        "low chaos",
    );
    let drift = phrase(
        tables::BAND_DRIFT,
        m.drift,
        "large intention drift",
        "moderate drift",
        "minimal drift",
    );
    let rs = phrase(
        tables::BAND_RIPPLE,
        m.ripple_score,
        "a strong RippleScore",
        "a moderate RippleScore",
        "a weak RippleScore",
    );
    format!(
        "Intention-field metrics show {fils}, paired with {ucip}; the signal carries {ttcf}. \
         Drift analysis shows {drift}, ending with {rs}."
    )
}

fn traceback_paragraph(t: &TracebackResult) -> String {
    let actor = t
        .actor_distribution
        .dominant()
        .map(Actor::label)
        .unwrap_or("Unknown");
    let amp = phrase(
        tables::BAND_AMPLIFICATION,
        t.amplification_pattern,
        "high amplification potential",
        "moderate amplification",
        "low amplification",
    );
    let mutation = phrase(
        tables::BAND_MUTATION,
        t.mutation_likelihood,
        "high mutation likelihood",
        "moderate mutation likelihood",
        "low mutation likelihood",
    );
    format!(
        "Traceback modeling points to **{actor}** as the most probable origin. The message \
         exhibits {amp}, and mutation analysis indicates {mutation}. The reliability score is \
         **{:.1}/100**.",
        t.reliability_index
    )
}

fn force_paragraph(f: &LinguisticForce) -> String {
    let level = phrase(
        tables::BAND_FORCE,
        f.force_score,
        "high linguistic force",
        "moderate linguistic force",
        "low linguistic force",
    );
    let (component, _) = f.dominant_component();
    format!(
        "Linguistic force analysis scores the message at **{:.2}/100**, indicating {level}, \
         led by {component}.",
        f.force_score
    )
}

/// Compose the interpretation paragraphs, separated by blank lines.
pub fn compose(
    narrative: &NarrativeProfile,
    metrics: &IntentionMetrics,
    traceback: &TracebackResult,
    force: Option<&LinguisticForce>,
) -> String {
    let mut paragraphs = vec![
        narrative_paragraph(narrative),
        intention_paragraph(metrics),
        traceback_paragraph(traceback),
    ];
    if let Some(f) = force {
        paragraphs.push(force_paragraph(f));
    }
    paragraphs.join("\n\n")
}
