// ─────────────────────────────────────────────────────────────────────
// RippleTruth — Report Type
// ─────────────────────────────────────────────────────────────────────

use serde::{Deserialize, Serialize};

use crate::narrative::NarrativeProfile;
use crate::score::{FactStack, FeatureVector, IntentionMetrics, LinguisticForce, TracebackResult};

/// Structured intelligence report for one input text.
///
/// Carries the same sections as the rendered markdown document. Optional
/// sub-results are `None` when their stage was skipped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub narrative: NarrativeProfile,
    pub features: FeatureVector,
    /// Rounded to 4 decimal places.
    pub metrics: IntentionMetrics,
    pub linguistic_force: Option<LinguisticForce>,
    pub fact_stack: Option<FactStack>,
    pub traceback: TracebackResult,
    pub human_narrative: String,
    pub enhancement: Option<String>,
    pub interpretation: String,
}

impl Report {
    /// Attach a language-model expansion (or its warning string).
    pub fn with_enhancement(mut self, enhancement: impl Into<String>) -> Self {
        self.enhancement = Some(enhancement.into());
        self
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
