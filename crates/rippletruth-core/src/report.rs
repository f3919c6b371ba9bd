// ─────────────────────────────────────────────────────────────────────
// RippleTruth — Report Assembler
// ─────────────────────────────────────────────────────────────────────
//! Collects stage outputs into a [`Report`] and renders it as a markdown
//! document with a fixed section order:
//!
//! Narrative Analysis → Intention Metrics → Linguistic Force → Fact Stack
//! → Traceback Modeling → Human Narrative → AI Enhancement (if present)
//! → Interpretation.

use std::fmt::Write as _;

use rippletruth_types::{
    FactStack, FeatureVector, IntentionMetrics, LinguisticForce, NarrativeProfile, Report,
    TracebackResult,
};

pub const FORCE_PLACEHOLDER: &str = "_Linguistic force analysis not available._";
pub const FACT_STACK_PLACEHOLDER: &str = "_Fact-Stack analysis not available._";
pub const NO_ACTOR_DATA: &str = "_No actor data available_";

/// Stage outputs handed to [`assemble`].
#[derive(Debug, Clone)]
pub struct ReportParts {
    pub narrative: NarrativeProfile,
    pub features: FeatureVector,
    /// Full precision; rounded on assembly.
    pub metrics: IntentionMetrics,
    pub linguistic_force: Option<LinguisticForce>,
    pub fact_stack: Option<FactStack>,
    pub traceback: TracebackResult,
    pub human_narrative: String,
    pub enhancement: Option<String>,
    pub interpretation: String,
}

/// Build the report, rounding metrics to 4 decimal places.
pub fn assemble(parts: ReportParts) -> Report {
    Report {
        narrative: parts.narrative,
        features: parts.features,
        metrics: parts.metrics.rounded(),
        linguistic_force: parts.linguistic_force,
        fact_stack: parts.fact_stack,
        traceback: parts.traceback,
        human_narrative: parts.human_narrative,
        enhancement: parts.enhancement,
        interpretation: parts.interpretation,
    }
}

fn section(title: &str, body: &str) -> String {
    format!("## {title}\n{}\n\n", body.trim())
}

fn narrative_block(n: &NarrativeProfile) -> String {
    format!(
        "**Topic:** {}  \n**Polarity:** {}  \n**Tone:** {}  \n**Structure:** {}",
        n.topic, n.polarity, n.tone, n.structure
    )
}

fn intention_block(m: &IntentionMetrics) -> String {
    format!(
        "**FILS (Forward Intention Load):** {}  \n\
         **UCIP (Coherence Index):** {}  \n\
         **TTCF (Chaos Factor):** {}  \n\
         **Drift:** {}  \n\
         **RippleScore:** {}",
        m.fils, m.ucip, m.ttcf, m.drift, m.ripple_score
    )
}

fn force_block(force: Option<&LinguisticForce>) -> String {
    let Some(f) = force else {
        return FORCE_PLACEHOLDER.to_string();
    };
    let (component, _) = f.dominant_component();
    format!(
        "**Force Score:** {:.2}/100  \n\
         **Emotionality:** {:.4}  \n\
         **Assertion:** {:.4}  \n\
         **Volatility:** {:.4}  \n\
         **Intent Strength:** {:.4}  \n\
         **Coherence:** {:.4}  \n\
         **Dominant Component:** {component}",
        f.force_score, f.emotionality, f.assertion, f.volatility, f.intent_strength, f.coherence
    )
}

fn bullet_list(out: &mut String, heading: &str, items: &[String], empty: &str) {
    let _ = writeln!(out, "**{heading}:**");
    if items.is_empty() {
        let _ = writeln!(out, "{empty}");
    }
    for item in items {
        let _ = writeln!(out, "- {item}");
    }
    out.push('\n');
}

fn fact_stack_block(fact_stack: Option<&FactStack>) -> String {
    let Some(fs) = fact_stack else {
        return FACT_STACK_PLACEHOLDER.to_string();
    };
    let mut out = String::new();
    bullet_list(&mut out, "Claims", &fs.claims, "_No extractable claims detected._");
    bullet_list(&mut out, "Contradictions", &fs.contradictions, "_None detected._");
    bullet_list(&mut out, "Exaggerations", &fs.exaggerations, "_None detected._");
    let _ = write!(out, "**Stability Score:** {:.1}/100", fs.stability_score);
    out
}

fn traceback_block(t: &TracebackResult) -> String {
    let actors = if t.actor_distribution.is_empty() {
        NO_ACTOR_DATA.to_string()
    } else {
        t.actor_distribution
            .iter()
            .map(|(actor, p)| format!("- **{}:** {:.1}%", actor.label(), p * 100.0))
            .collect::<Vec<_>>()
            .join("\n")
    };
    format!(
        "### Actor Probability Model\n{actors}\n\n\
         **Amplification Pattern:** {:.4}  \n\
         **Mutation Likelihood:** {:.4}  \n\
         **RippleTruth Index:** {:.1}/100\n\n\
         {}",
        t.amplification_pattern, t.mutation_likelihood, t.reliability_index, t.interpretation
    )
}

/// Render the full markdown document.
pub fn render_markdown(report: &Report) -> String {
    let mut out = String::new();
    out.push_str(&section("Narrative Analysis", &narrative_block(&report.narrative)));
    out.push_str(&section("Intention Metrics", &intention_block(&report.metrics)));
    out.push_str(&section(
        "Linguistic Force",
        &force_block(report.linguistic_force.as_ref()),
    ));
    out.push_str(&section("Fact Stack", &fact_stack_block(report.fact_stack.as_ref())));
    out.push_str(&section("Traceback Modeling", &traceback_block(&report.traceback)));
    out.push_str(&section("Human Narrative", &report.human_narrative));
    if let Some(enhancement) = &report.enhancement {
        out.push_str(&section("AI Enhancement", enhancement));
    }
    out.push_str(&section("Interpretation", &report.interpretation));
    out
}
