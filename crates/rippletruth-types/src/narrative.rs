// ─────────────────────────────────────────────────────────────────────
// RippleTruth — Narrative Profile Types
// ─────────────────────────────────────────────────────────────────────

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Topic {
    Immigration,
    Economy,
    Elections,
    Crime,
    ForeignPolicy,
    #[default]
    General,
}

impl Topic {
    pub fn label(self) -> &'static str {
        match self {
            Topic::Immigration => "Immigration",
            Topic::Economy => "Economy",
            Topic::Elections => "Elections",
            Topic::Crime => "Crime",
            Topic::ForeignPolicy => "Foreign Policy",
            Topic::General => "General",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Polarity {
    Positive,
    Negative,
    #[default]
    Neutral,
}

impl Polarity {
    pub fn label(self) -> &'static str {
        match self {
            Polarity::Positive => "Positive",
            Polarity::Negative => "Negative",
            Polarity::Neutral => "Neutral",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Tone {
    HighEmotionalLoad,
    ModerateEmotionalLoad,
    #[default]
    LowEmotionalLoad,
}

impl Tone {
    pub fn label(self) -> &'static str {
        match self {
            Tone::HighEmotionalLoad => "High Emotional Load",
            Tone::ModerateEmotionalLoad => "Moderate Emotional Load",
            Tone::LowEmotionalLoad => "Low Emotional Load",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Structure {
    ClaimWithReason,
    ArgumentConclusion,
    ReportedInformation,
    EmphaticStatement,
    #[default]
    GeneralStatement,
}

impl Structure {
    pub fn label(self) -> &'static str {
        match self {
            Structure::ClaimWithReason => "Claim with Reason",
            Structure::ArgumentConclusion => "Argument / Conclusion",
            Structure::ReportedInformation => "Reported Information",
            Structure::EmphaticStatement => "Emphatic / Emotional Statement",
            Structure::GeneralStatement => "General Statement",
        }
    }
}

macro_rules! display_via_label {
    ($($t:ty),*) => {
        $(impl fmt::Display for $t {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        })*
    };
}

display_via_label!(Topic, Polarity, Tone, Structure);

/// Rule-based narrative classification of one input text.
///
/// `Default` is the all-defaults profile returned for text with no
/// keyword matches (including the empty string).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NarrativeProfile {
    pub topic: Topic,
    pub polarity: Polarity,
    pub tone: Tone,
    pub structure: Structure,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile() {
        let p = NarrativeProfile::default();
        assert_eq!(p.topic, Topic::General);
        assert_eq!(p.polarity, Polarity::Neutral);
        assert_eq!(p.tone, Tone::LowEmotionalLoad);
        assert_eq!(p.structure, Structure::GeneralStatement);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Topic::ForeignPolicy.to_string(), "Foreign Policy");
        assert_eq!(Structure::ArgumentConclusion.to_string(), "Argument / Conclusion");
        assert_eq!(Tone::HighEmotionalLoad.to_string(), "High Emotional Load");
    }
}
