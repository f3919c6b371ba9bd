// ─────────────────────────────────────────────────────────────────────
// RippleTruth — Canonical Tables
// ─────────────────────────────────────────────────────────────────────
//! Keyword lists, actor weight vectors and band thresholds.
//!
//! Everything tunable lives here so the formula code never carries
//! inline literals. Bump [`TABLES_VERSION`] on any change: reports are
//! only comparable across runs that share a table version.

use rippletruth_types::Actor;

pub const TABLES_VERSION: &str = "2025.11";

// ── Narrative classifier ────────────────────────────────────────────

/// Topic rules in priority order; first hit wins.
pub const TOPIC_IMMIGRATION: &[&str] = &["immigration", "border", "migrant"];
pub const TOPIC_ECONOMY: &[&str] = &["economy", "inflation", "jobs", "market"];
pub const TOPIC_ELECTIONS: &[&str] = &["election", "vote", "campaign", "ballot"];
pub const TOPIC_CRIME: &[&str] = &["crime", "violence", "police"];
pub const TOPIC_FOREIGN_POLICY: &[&str] = &["war", "military", "strike", "attack"];

pub const POLARITY_POSITIVE: &[&str] = &["good", "great", "hope", "success", "progress", "peace"];
pub const POLARITY_NEGATIVE: &[&str] = &["bad", "fear", "danger", "threat", "corrupt", "fraud"];

pub const TONE_HIGH: &[&str] = &["panic", "fear", "urgent", "chaos", "anger"];
pub const TONE_MODERATE: &[&str] = &["concern", "worry", "uncertain"];

pub const STRUCTURE_REASON: &[&str] = &["because", "due to"];
pub const STRUCTURE_CONCLUSION: &[&str] = &["therefore", "thus"];
pub const STRUCTURE_REPORTED: &[&str] = &["report", "sources say"];
pub const STRUCTURE_EMPHATIC: &[&str] = &["!"];

// ── Feature extractor ───────────────────────────────────────────────

pub const DIRECTIVE_WORDS: &[&str] = &[
    "must", "will", "never", "always", "ordered", "demand", "require", "refuse", "announce",
    "warn", "threaten", "vow", "declare",
];
pub const INTENT_SCALE: f64 = 4.0;

pub const EMOTION_POSITIVE: &[&str] = &["good", "great", "love", "trust", "hope"];
pub const EMOTION_NEGATIVE: &[&str] = &["bad", "terrible", "hate", "fear", "danger"];

pub const INTENSITY_HIGH: &[&str] = &["kill", "attack", "threat", "outrage"];
pub const INTENSITY_CALM: &[&str] = &["calm", "discuss", "consider"];
pub const INTENSITY_HIGH_VALUE: f64 = 1.0;
pub const INTENSITY_CALM_VALUE: f64 = 0.1;
pub const INTENSITY_BASE_VALUE: f64 = 0.4;

pub const HARMONIC_SCALE: f64 = 3.0;

/// Sentences shorter than this (chars, after trim) do not count for stability.
pub const MIN_SENTENCE_CHARS: usize = 5;
/// Stability when fewer than two sentences qualify.
pub const STABILITY_DEFAULT: f64 = 0.5;
/// Pair similarity when two sentence vectors cannot be compared.
pub const STABILITY_PAIR_FALLBACK: f64 = 0.3;
/// Dimension of the placeholder vector for a sentence with no vocabulary.
pub const EMPTY_VOCAB_DIM: usize = 32;
/// Volatility when fewer than [`MIN_VOLATILITY_TOKENS`] tokens are present.
pub const VOLATILITY_DEFAULT: f64 = 0.1;
pub const MIN_VOLATILITY_TOKENS: usize = 4;

/// English stop words removed before building sentence term vectors.
pub const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "across", "after", "afterwards", "again", "against", "all", "almost",
    "alone", "along", "already", "also", "although", "always", "am", "among", "amongst",
    "amoungst", "amount", "an", "and", "another", "any", "anyhow", "anyone", "anything", "anyway",
    "anywhere", "are", "around", "as", "at", "back", "be", "became", "because", "become",
    "becomes", "becoming", "been", "before", "beforehand", "behind", "being", "below", "beside",
    "besides", "between", "beyond", "bill", "both", "bottom", "but", "by", "call", "can",
    "cannot", "cant", "co", "con", "could", "couldnt", "cry", "de", "describe", "detail", "do",
    "done", "down", "due", "during", "each", "eg", "eight", "either", "eleven", "else",
    "elsewhere", "empty", "enough", "etc", "even", "ever", "every", "everyone", "everything",
    "everywhere", "except", "few", "fifteen", "fifty", "fill", "find", "fire", "first", "five",
    "for", "former", "formerly", "forty", "found", "four", "from", "front", "full", "further",
    "get", "give", "go", "had", "has", "hasnt", "have", "he", "hence", "her", "here",
    "hereafter", "hereby", "herein", "hereupon", "hers", "herself", "him", "himself", "his",
    "how", "however", "hundred", "i", "ie", "if", "in", "inc", "indeed", "interest", "into",
    "is", "it", "its", "itself", "keep", "last", "latter", "latterly", "least", "less", "ltd",
    "made", "many", "may", "me", "meanwhile", "might", "mill", "mine", "more", "moreover",
    "most", "mostly", "move", "much", "must", "my", "myself", "name", "namely", "neither",
    "never", "nevertheless", "next", "nine", "no", "nobody", "none", "noone", "nor", "not",
    "nothing", "now", "nowhere", "of", "off", "often", "on", "once", "one", "only", "onto", "or",
    "other", "others", "otherwise", "our", "ours", "ourselves", "out", "over", "own", "part",
    "per", "perhaps", "please", "put", "rather", "re", "same", "see", "seem", "seemed",
    "seeming", "seems", "serious", "several", "she", "should", "show", "side", "since",
    "sincere", "six", "sixty", "so", "some", "somehow", "someone", "something", "sometime",
    "sometimes", "somewhere", "still", "such", "system", "take", "ten", "than", "that", "the",
    "their", "them", "themselves", "then", "thence", "there", "thereafter", "thereby",
    "therefore", "therein", "thereupon", "these", "they", "thick", "thin", "third", "this",
    "those", "though", "three", "through", "throughout", "thru", "thus", "to", "together", "too",
    "top", "toward", "towards", "twelve", "twenty", "two", "un", "under", "until", "up", "upon",
    "us", "very", "via", "was", "we", "well", "were", "what", "whatever", "when", "whence",
    "whenever", "where", "whereafter", "whereas", "whereby", "wherein", "whereupon", "wherever",
    "whether", "which", "while", "whither", "who", "whoever", "whole", "whom", "whose", "why",
    "will", "with", "within", "without", "would", "yet", "you", "your", "yours", "yourself",
    "yourselves",
];

// ── Traceback ───────────────────────────────────────────────────────

/// Per-actor prior and reweighting coefficients.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActorWeights {
    pub actor: Actor,
    pub prior: f64,
    pub intent: f64,
    pub stability: f64,
    pub harmonic: f64,
    pub ripple: f64,
}

/// Indexed by `Actor::index()`. Priors sum to 1.0.
pub const ACTOR_TABLE: [ActorWeights; Actor::COUNT] = [
    ActorWeights {
        actor: Actor::PoliticalActor,
        prior: 0.32,
        intent: 1.0,
        stability: 0.9,
        harmonic: 1.0,
        ripple: 1.1,
    },
    ActorWeights {
        actor: Actor::MediaJournalist,
        prior: 0.22,
        intent: 0.6,
        stability: 1.0,
        harmonic: 1.2,
        ripple: 1.0,
    },
    ActorWeights {
        actor: Actor::CitizenCivilian,
        prior: 0.28,
        intent: 0.4,
        stability: 0.6,
        harmonic: 0.3,
        ripple: 0.5,
    },
    ActorWeights {
        actor: Actor::InstitutionOrganization,
        prior: 0.18,
        intent: 0.2,
        stability: 0.8,
        harmonic: 0.8,
        ripple: 0.9,
    },
];

/// Amplification below this reads as "Low" in the traceback sentence.
pub const AMPLIFICATION_LOW_CUTOFF: f64 = 0.45;
pub const RELIABILITY_FLOOR: f64 = 1.0;
pub const RELIABILITY_CEILING: f64 = 99.0;

// ── Interpretation bands ────────────────────────────────────────────

/// Two strict cut points splitting [0, 1] into low / moderate / high.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub moderate: f64,
    pub high: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Low,
    Moderate,
    High,
}

impl Band {
    /// `value > high` → High, `value > moderate` → Moderate, else Low.
    pub fn level(self, value: f64) -> Level {
        if value > self.high {
            Level::High
        } else if value > self.moderate {
            Level::Moderate
        } else {
            Level::Low
        }
    }
}

pub const BAND_FILS: Band = Band { moderate: 0.40, high: 0.65 };
pub const BAND_UCIP: Band = Band { moderate: 0.30, high: 0.55 };
pub const BAND_TTCF: Band = Band { moderate: 0.25, high: 0.50 };
pub const BAND_DRIFT: Band = Band { moderate: 0.20, high: 0.40 };
pub const BAND_RIPPLE: Band = Band { moderate: 0.35, high: 0.60 };
pub const BAND_AMPLIFICATION: Band = Band { moderate: 0.30, high: 0.55 };
pub const BAND_MUTATION: Band = Band { moderate: 0.30, high: 0.55 };
/// On the 0–100 force scale.
pub const BAND_FORCE: Band = Band { moderate: 33.0, high: 66.0 };

// ── Linguistic force ────────────────────────────────────────────────

pub const FORCE_EMOTIONAL_WORDS: &[&str] = &[
    "outrage", "corrupt", "evil", "lie", "destroy", "fraud", "attack", "stolen", "hate",
    "traitor", "fight", "chaos", "collapse", "disaster",
];
pub const FORCE_STRONG_MODALS: &[&str] = &["will", "must", "cannot", "always", "never"];
pub const FORCE_WEAK_MODALS: &[&str] = &["might", "could", "possibly", "perhaps"];
pub const FORCE_DIRECTIONAL_TERMS: &[&str] = &[
    "should", "must", "need to", "urge", "call for", "demand", "insist", "push", "drive", "force",
];

pub const FORCE_W_EMOTIONALITY: f64 = 0.22;
pub const FORCE_W_ASSERTION: f64 = 0.20;
pub const FORCE_W_VOLATILITY: f64 = 0.18;
pub const FORCE_W_INTENT: f64 = 0.20;
pub const FORCE_W_COHERENCE: f64 = 0.20;

// ── Fact stack ──────────────────────────────────────────────────────

pub const FACT_MIN_CLAIM_WORDS: usize = 5;
pub const FACT_OPPOSITE_PAIRS: &[(&str, &str)] = &[
    ("did not", "did"),
    ("was not", "was"),
    ("were not", "were"),
    ("false", "true"),
    ("never", "always"),
    ("none", "all"),
];
pub const FACT_EXTREME_WORDS: &[&str] = &[
    "everyone", "no one", "always", "never", "completely", "entirely", "absolutely", "proven",
    "undeniable", "irrefutable",
];
pub const FACT_BASE_STABILITY: f64 = 90.0;
pub const FACT_CONTRADICTION_PENALTY: f64 = 12.0;
pub const FACT_EXAGGERATION_PENALTY: f64 = 5.0;
pub const FACT_NEUTRAL_STABILITY: f64 = 50.0;
