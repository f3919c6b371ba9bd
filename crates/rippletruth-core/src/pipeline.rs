// ─────────────────────────────────────────────────────────────────────
// RippleTruth — Pipeline Orchestrator
// ─────────────────────────────────────────────────────────────────────
//! Runs the stages in fixed order and assembles the report.
//!
//! `analyze` is total over any string. `analyze_resolved` is the entry
//! point for text handed back by an ingest collaborator: it refuses
//! sentinel strings instead of scoring them.

use rippletruth_types::{is_sentinel, Report, RippleConfig, RippleError, RippleResult};

use crate::report::{assemble, ReportParts};
use crate::{classifier, fact_stack, features, force, human, intention, interpret, traceback};

/// Stateless orchestrator over an immutable [`RippleConfig`].
#[derive(Debug, Clone, Default)]
pub struct RipplePipeline {
    config: RippleConfig,
}

impl RipplePipeline {
    pub fn new(config: RippleConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RippleConfig {
        &self.config
    }

    /// Score `text` end to end.
    pub fn analyze(&self, text: &str) -> Report {
        let narrative = classifier::classify(text);
        log::debug!(
            "classify: topic={} polarity={} tone={} structure={}",
            narrative.topic,
            narrative.polarity,
            narrative.tone,
            narrative.structure
        );

        let fv = features::extract(text);

        let metrics = intention::score(&fv);
        let trace = traceback::traceback(&fv, Some(&metrics));
        log::debug!(
            "traceback: reliability={:.1} amplification={:.4} mutation={:.4}",
            trace.reliability_index,
            trace.amplification_pattern,
            trace.mutation_likelihood
        );

        let linguistic_force = self
            .config
            .enable_linguistic_force
            .then(|| force::measure(text));
        let fact_stack = self.config.enable_fact_stack.then(|| fact_stack::analyze(text));

        let human_narrative = human::summarize(&narrative, &metrics);
        let interpretation =
            interpret::compose(&narrative, &metrics, &trace, linguistic_force.as_ref());

        assemble(ReportParts {
            narrative,
            features: fv,
            metrics,
            linguistic_force,
            fact_stack,
            traceback: trace,
            human_narrative,
            enhancement: None,
            interpretation,
        })
    }

    /// Score collaborator output, refusing `[Error …` / `[No readable …` sentinels.
    pub fn analyze_resolved(&self, text: &str) -> RippleResult<Report> {
        if is_sentinel(text) {
            log::warn!("pipeline: collaborator sentinel, skipping analysis");
            return Err(RippleError::Extraction(text.to_string()));
        }
        Ok(self.analyze(text))
    }
}
