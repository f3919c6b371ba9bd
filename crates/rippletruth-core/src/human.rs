// ─────────────────────────────────────────────────────────────────────
// RippleTruth — Human Narrative Layer
// ─────────────────────────────────────────────────────────────────────
//! Plain-language Who / What / Where / When / Why summary of the metrics,
//! for readers who do not want the raw scores.

use rippletruth_types::{IntentionMetrics, NarrativeProfile};

fn who(ripple_score: f64) -> &'static str {
    if ripple_score < 0.15 {
        "likely a private individual expressing a low-impact opinion"
    } else if ripple_score < 0.35 {
        "consistent with commentary-style messaging or early-stage political framing"
    } else if ripple_score < 0.65 {
        "similar to messaging from advocacy groups, political actors, or issue influencers"
    } else {
        "high-intensity messaging often seen in coordinated political operations or strategic comms"
    }
}

fn what(fils: f64) -> &'static str {
    if fils < 0.25 {
        "sets context without pushing a specific conclusion"
    } else if fils < 0.5 {
        "attempts to shape perception or guide interpretation subtly"
    } else {
        "directs the audience toward a clear emotional or political position"
    }
}

fn where_(drift: f64) -> &'static str {
    if drift < 0.2 {
        "appears early in the narrative cycle — no momentum yet"
    } else if drift < 0.45 {
        "sits in the middle phase of narrative development"
    } else {
        "sits in a volatile narrative region where messaging may intensify"
    }
}

fn when(ttcf: f64) -> &'static str {
    if ttcf < 0.15 {
        "low urgency — stable emotional landscape"
    } else if ttcf < 0.35 {
        "moderate urgency — emotional fluctuation beginning"
    } else {
        "high urgency — chaos rising or emotional energy building"
    }
}

fn why(ripple_score: f64) -> &'static str {
    if ripple_score < 0.2 {
        "The message has limited persuasive force but may seed early-stage framing."
    } else if ripple_score < 0.45 {
        "The message contributes to topic priming and audience conditioning."
    } else if ripple_score < 0.7 {
        "This message participates actively in shaping beliefs and can influence opinion trends."
    } else {
        "This message carries strong persuasive force and may drive behavioral alignment or political mobilization."
    }
}

/// Render the human-mode summary block.
pub fn summarize(narrative: &NarrativeProfile, metrics: &IntentionMetrics) -> String {
    let tone = narrative.tone.label().to_lowercase();
    let polarity = narrative.polarity.label().to_lowercase();
    let structure = narrative.structure.label().to_lowercase();
    let topic = narrative.topic.label().to_lowercase();

    format!(
        "### Narrative Intelligence Summary (Human Mode)\n\n\
         **Who is likely behind it:**\n\
         This message is **{who}**.\n\n\
         **What the message is trying to do:**\n\
         It **{what}**, delivered with a **{tone} emotional tone** and a **{polarity} polarity**.\n\n\
         **Where it sits in the broader conversation:**\n\
         It **{where_}**, based on coherence (UCIP {ucip:.2}) and drift dynamics ({drift:.2}).\n\n\
         **When messages like this typically appear:**\n\
         This represents **{when}**, indicating how emotionally charged or chaotic the narrative environment is.\n\n\
         **Why this message matters:**\n\
         {why}\n\n\
         ### Bottom Line\n\
         This message is a **{structure}** related to **{topic}**, with a RippleScore of **{ripple:.2}**, \
         indicating its overall influence potential within the narrative field.",
        who = who(metrics.ripple_score),
        what = what(metrics.fils),
        where_ = where_(metrics.drift),
        when = when(metrics.ttcf),
        why = why(metrics.ripple_score),
        ucip = metrics.ucip,
        drift = metrics.drift,
        ripple = metrics.ripple_score,
    )
}
