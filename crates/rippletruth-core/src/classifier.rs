// ─────────────────────────────────────────────────────────────────────
// RippleTruth — Narrative Classifier
// ─────────────────────────────────────────────────────────────────────
//! Rule-priority narrative classification. No weighting, no scoring:
//! each sub-field returns on its first matching rule.

use rippletruth_types::{NarrativeProfile, Polarity, Structure, Tone, Topic};

use crate::tables;
use crate::text::{contains_any, count_present};

/// Classify `text` into topic, polarity, tone and structure.
///
/// Never fails; text without keyword hits yields `NarrativeProfile::default()`.
pub fn classify(text: &str) -> NarrativeProfile {
    let cleaned = text.trim().to_lowercase();
    NarrativeProfile {
        topic: detect_topic(&cleaned),
        polarity: detect_polarity(&cleaned),
        tone: detect_tone(&cleaned),
        structure: detect_structure(&cleaned),
    }
}

fn detect_topic(text: &str) -> Topic {
    let rules: [(&[&str], Topic); 5] = [
        (tables::TOPIC_IMMIGRATION, Topic::Immigration),
        (tables::TOPIC_ECONOMY, Topic::Economy),
        (tables::TOPIC_ELECTIONS, Topic::Elections),
        (tables::TOPIC_CRIME, Topic::Crime),
        (tables::TOPIC_FOREIGN_POLICY, Topic::ForeignPolicy),
    ];
    rules
        .iter()
        .find(|(words, _)| contains_any(text, words))
        .map(|&(_, topic)| topic)
        .unwrap_or_default()
}

fn detect_polarity(text: &str) -> Polarity {
    let pos = count_present(text, tables::POLARITY_POSITIVE);
    let neg = count_present(text, tables::POLARITY_NEGATIVE);
    match pos.cmp(&neg) {
        std::cmp::Ordering::Greater => Polarity::Positive,
        std::cmp::Ordering::Less => Polarity::Negative,
        std::cmp::Ordering::Equal => Polarity::Neutral,
    }
}

fn detect_tone(text: &str) -> Tone {
    if contains_any(text, tables::TONE_HIGH) {
        Tone::HighEmotionalLoad
    } else if contains_any(text, tables::TONE_MODERATE) {
        Tone::ModerateEmotionalLoad
    } else {
        Tone::LowEmotionalLoad
    }
}

fn detect_structure(text: &str) -> Structure {
    let rules: [(&[&str], Structure); 4] = [
        (tables::STRUCTURE_REASON, Structure::ClaimWithReason),
        (tables::STRUCTURE_CONCLUSION, Structure::ArgumentConclusion),
        (tables::STRUCTURE_REPORTED, Structure::ReportedInformation),
        (tables::STRUCTURE_EMPHATIC, Structure::EmphaticStatement),
    ];
    rules
        .iter()
        .find(|(words, _)| contains_any(text, words))
        .map(|&(_, structure)| structure)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_economy_positive() {
        let p = classify("The economy is great and will improve.");
        assert_eq!(p.topic, Topic::Economy);
        assert_eq!(p.polarity, Polarity::Positive);
        assert_eq!(p.tone, Tone::LowEmotionalLoad);
        assert_eq!(p.structure, Structure::GeneralStatement);
    }

    #[test]
    fn test_empty_defaults() {
        assert_eq!(classify(""), NarrativeProfile::default());
    }

    #[test]
    fn test_topic_priority() {
        // Both immigration and economy terms: immigration wins.
        let p = classify("Border policy is hurting the economy");
        assert_eq!(p.topic, Topic::Immigration);
    }

    #[test]
    fn test_foreign_policy_label() {
        let p = classify("The military readied a strike");
        assert_eq!(p.topic, Topic::ForeignPolicy);
    }

    #[test]
    fn test_negative_polarity_and_high_tone() {
        let p = classify("Fear and danger everywhere, a corrupt fraud");
        assert_eq!(p.polarity, Polarity::Negative);
        assert_eq!(p.tone, Tone::HighEmotionalLoad);
    }

    #[test]
    fn test_moderate_tone() {
        assert_eq!(classify("Some concern remains").tone, Tone::ModerateEmotionalLoad);
    }

    #[test]
    fn test_structure_priority() {
        assert_eq!(
            classify("It failed because of this, therefore we act!").structure,
            Structure::ClaimWithReason
        );
        assert_eq!(classify("Thus it ends!").structure, Structure::ArgumentConclusion);
        assert_eq!(classify("Sources say it is so").structure, Structure::ReportedInformation);
        assert_eq!(classify("Stop it!").structure, Structure::EmphaticStatement);
    }
}
