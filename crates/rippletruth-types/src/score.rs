// ─────────────────────────────────────────────────────────────────────
// RippleTruth — Score Types
// ─────────────────────────────────────────────────────────────────────

use std::fmt;

use serde::{Deserialize, Serialize};

/// Clamp a value to [lo, hi], mapping NaN to lo and Inf to nearest bound.
#[inline]
pub fn clamp_score(value: f64, lo: f64, hi: f64) -> f64 {
    if value.is_nan() {
        log::warn!("clamp_score: NaN detected, clamping to {lo:.4}");
        return lo;
    }
    if value.is_infinite() {
        let boundary = if value > 0.0 { hi } else { lo };
        log::warn!("clamp_score: Inf detected, clamping to {boundary:.4}");
        return boundary;
    }
    value.clamp(lo, hi)
}

/// Round half away from zero to `places` decimal places.
#[inline]
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Five raw narrative signals extracted from text, each in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    /// Directive-language density.
    pub intent_strength: f64,
    /// Mean cross-sentence similarity.
    pub stability: f64,
    /// Net sentiment rescaled to [0, 1]; 0.5 is neutral.
    pub emotion: f64,
    /// Spread of per-token emotional intensity.
    pub volatility: f64,
    /// Lexical repetition.
    pub harmonics: f64,
}

impl FeatureVector {
    /// Construct with every field clamped into [0, 1].
    pub fn new(
        intent_strength: f64,
        stability: f64,
        emotion: f64,
        volatility: f64,
        harmonics: f64,
    ) -> Self {
        Self {
            intent_strength: clamp_score(intent_strength, 0.0, 1.0),
            stability: clamp_score(stability, 0.0, 1.0),
            emotion: clamp_score(emotion, 0.0, 1.0),
            volatility: clamp_score(volatility, 0.0, 1.0),
            harmonics: clamp_score(harmonics, 0.0, 1.0),
        }
    }
}

/// Intention-field metrics derived from a [`FeatureVector`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntentionMetrics {
    #[serde(rename = "FILS")]
    pub fils: f64,
    #[serde(rename = "UCIP")]
    pub ucip: f64,
    #[serde(rename = "TTCF")]
    pub ttcf: f64,
    #[serde(rename = "Drift")]
    pub drift: f64,
    #[serde(rename = "RippleScore")]
    pub ripple_score: f64,
}

impl IntentionMetrics {
    /// Copy rounded to 4 decimal places, for external reporting.
    pub fn rounded(&self) -> Self {
        Self {
            fils: round_to(self.fils, 4),
            ucip: round_to(self.ucip, 4),
            ttcf: round_to(self.ttcf, 4),
            drift: round_to(self.drift, 4),
            ripple_score: round_to(self.ripple_score, 4),
        }
    }
}

/// Coarse source categories for the origin traceback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Actor {
    PoliticalActor,
    MediaJournalist,
    CitizenCivilian,
    InstitutionOrganization,
}

impl Actor {
    pub const COUNT: usize = 4;

    /// Declaration order; indexes every per-actor table.
    pub const ALL: [Actor; Actor::COUNT] = [
        Actor::PoliticalActor,
        Actor::MediaJournalist,
        Actor::CitizenCivilian,
        Actor::InstitutionOrganization,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            Actor::PoliticalActor => "Political Actor",
            Actor::MediaJournalist => "Media / Journalist",
            Actor::CitizenCivilian => "Citizen / Civilian",
            Actor::InstitutionOrganization => "Institution / Organization",
        }
    }
}

impl fmt::Display for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Probability per [`Actor`], stored in `Actor::ALL` order.
///
/// A computed distribution sums to 1.0; the all-zero distribution marks a
/// skipped traceback.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ActorDistribution {
    pub probabilities: [f64; Actor::COUNT],
}

impl ActorDistribution {
    /// Normalize raw non-negative scores into a distribution.
    /// Returns the empty distribution when the scores carry no mass.
    pub fn from_scores(scores: [f64; Actor::COUNT]) -> Self {
        let total: f64 = scores.iter().sum();
        if !(total.is_finite() && total > 0.0) {
            return Self::default();
        }
        let mut probabilities = [0.0; Actor::COUNT];
        for (p, s) in probabilities.iter_mut().zip(scores) {
            *p = s / total;
        }
        Self { probabilities }
    }

    pub fn get(&self, actor: Actor) -> f64 {
        self.probabilities[actor.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Actor, f64)> + '_ {
        Actor::ALL.iter().map(move |&a| (a, self.get(a)))
    }

    pub fn total(&self) -> f64 {
        self.probabilities.iter().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() <= 0.0
    }

    /// Arg-max actor; first in declaration order wins ties.
    pub fn dominant(&self) -> Option<Actor> {
        if self.is_empty() {
            return None;
        }
        let mut best = Actor::ALL[0];
        for (actor, p) in self.iter() {
            if p > self.get(best) {
                best = actor;
            }
        }
        Some(best)
    }
}

/// Origin traceback outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TracebackResult {
    pub actor_distribution: ActorDistribution,
    /// 0 = damped / stable, 1 = amplifying.
    pub amplification_pattern: f64,
    pub mutation_likelihood: f64,
    /// Reliability ("RippleTruth Index") in [1, 99]; 0 only when skipped.
    pub reliability_index: f64,
    pub interpretation: String,
}

impl TracebackResult {
    pub const SKIPPED_MESSAGE: &'static str = "Intention signals missing — traceback skipped.";

    /// All-zero result returned when no intention metrics are available.
    pub fn skipped() -> Self {
        Self {
            actor_distribution: ActorDistribution::default(),
            amplification_pattern: 0.0,
            mutation_likelihood: 0.0,
            reliability_index: 0.0,
            interpretation: Self::SKIPPED_MESSAGE.to_string(),
        }
    }

    pub fn is_skipped(&self) -> bool {
        self.actor_distribution.is_empty()
    }
}

/// Linguistic force ("PsiQuant") sub-score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinguisticForce {
    pub emotionality: f64,
    pub assertion: f64,
    pub volatility: f64,
    pub intent_strength: f64,
    pub coherence: f64,
    /// Weighted 0–100 force, rounded to 2 decimals.
    pub force_score: f64,
}

impl LinguisticForce {
    /// Name and value of the largest component; first wins ties.
    pub fn dominant_component(&self) -> (&'static str, f64) {
        let parts = [
            ("emotionality", self.emotionality),
            ("assertion", self.assertion),
            ("volatility", self.volatility),
            ("intent strength", self.intent_strength),
            ("coherence", self.coherence),
        ];
        let mut best = parts[0];
        for part in parts {
            if part.1 > best.1 {
                best = part;
            }
        }
        best
    }
}

/// Fact-consistency analysis of the input text.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FactStack {
    pub claims: Vec<String>,
    pub contradictions: Vec<String>,
    pub exaggerations: Vec<String>,
    /// 0–100; 50 when no claims were found.
    pub stability_score: f64,
}
