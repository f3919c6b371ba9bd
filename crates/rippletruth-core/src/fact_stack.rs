// ─────────────────────────────────────────────────────────────────────
// RippleTruth — Fact Stack
// ─────────────────────────────────────────────────────────────────────
//! Claim extraction and a shallow consistency check: opposite-phrase
//! contradictions between claims, extreme-language exaggerations, and a
//! 0–100 stability score penalized by both.

use std::sync::LazyLock;

use regex::Regex;
use rippletruth_types::{clamp_score, FactStack};

use crate::tables;
use crate::text::contains_any;

/// Declarative verbs that make a sentence a checkable claim.
static CLAIM_VERB: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(is|are|was|were|has|have|had|will|did|does|said|claims?)\b").ok()
});

/// Analyze `text` into claims, contradictions and exaggerations.
pub fn analyze(text: &str) -> FactStack {
    let claims = extract_claims(text);
    if claims.is_empty() {
        return FactStack {
            stability_score: tables::FACT_NEUTRAL_STABILITY,
            ..FactStack::default()
        };
    }

    let contradictions = find_contradictions(&claims);
    let exaggerations: Vec<String> = claims
        .iter()
        .filter(|c| contains_any(c, tables::FACT_EXTREME_WORDS))
        .cloned()
        .collect();

    let stability_score = clamp_score(
        tables::FACT_BASE_STABILITY
            - tables::FACT_CONTRADICTION_PENALTY * contradictions.len() as f64
            - tables::FACT_EXAGGERATION_PENALTY * exaggerations.len() as f64,
        0.0,
        100.0,
    );

    log::debug!(
        "fact_stack: claims={} contradictions={} exaggerations={}",
        claims.len(),
        contradictions.len(),
        exaggerations.len()
    );

    FactStack {
        claims,
        contradictions,
        exaggerations,
        stability_score,
    }
}

/// Split after `.`, `!` or `?` when followed by whitespace.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((_, c)) = chars.next() {
        if !matches!(c, '.' | '!' | '?') {
            continue;
        }
        let Some(&(end, next)) = chars.peek() else {
            break;
        };
        if !next.is_whitespace() {
            continue;
        }
        out.push(&text[start..end]);
        while chars.peek().is_some_and(|&(_, w)| w.is_whitespace()) {
            chars.next();
        }
        start = chars.peek().map_or(text.len(), |&(i, _)| i);
    }
    if start < text.len() {
        out.push(&text[start..]);
    }
    out
}

/// Lower-cased declarative sentences of at least five words.
pub fn extract_claims(text: &str) -> Vec<String> {
    let Some(verb) = CLAIM_VERB.as_ref() else {
        log::warn!("fact_stack: claim pattern unavailable");
        return Vec::new();
    };
    split_sentences(text)
        .into_iter()
        .map(str::trim)
        .filter(|s| s.split_whitespace().count() >= tables::FACT_MIN_CLAIM_WORDS)
        .filter(|s| !s.contains('?'))
        .filter(|s| verb.is_match(s))
        .map(|s| s.to_lowercase())
        .collect()
}

/// Opposite-phrase pairs across claims; repeated claims never conflict.
fn find_contradictions(claims: &[String]) -> Vec<String> {
    let mut out = Vec::new();
    for a in claims {
        for b in claims {
            if a == b {
                continue;
            }
            for (neg, pos) in tables::FACT_OPPOSITE_PAIRS {
                if a.contains(neg) && b.contains(pos) {
                    out.push(format!("Conflict between: '{a}' AND '{b}'"));
                }
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_claims_is_neutral() {
        let fs = analyze("Hello there. Short one!");
        assert!(fs.claims.is_empty());
        assert_eq!(fs.stability_score, 50.0);
    }

    #[test]
    fn test_empty_text() {
        let fs = analyze("");
        assert_eq!(fs, FactStack { stability_score: 50.0, ..FactStack::default() });
    }

    #[test]
    fn test_split_requires_whitespace() {
        let parts = split_sentences("Version 1.5 shipped.  Then it broke! Why? ok");
        assert_eq!(parts, vec!["Version 1.5 shipped.", "Then it broke!", "Why?", "ok"]);
    }

    #[test]
    fn test_questions_and_short_sentences_dropped() {
        let claims = extract_claims(
            "Is this really what they said? The minister said it was fine. It was.",
        );
        assert_eq!(claims, vec!["the minister said it was fine.".to_string()]);
    }

    #[test]
    fn test_contradiction_and_exaggeration() {
        let text = "The report was not accurate. The report was accurate according to staff. \
                    Is this true? Everyone agrees it is absolutely proven.";
        let fs = analyze(text);
        assert_eq!(fs.claims.len(), 3);
        assert_eq!(fs.contradictions.len(), 1);
        assert_eq!(
            fs.contradictions[0],
            "Conflict between: 'the report was not accurate.' AND \
             'the report was accurate according to staff.'"
        );
        assert_eq!(
            fs.exaggerations,
            vec!["everyone agrees it is absolutely proven.".to_string()]
        );
        assert_eq!(fs.stability_score, 73.0);
    }

    #[test]
    fn test_repeated_claim_is_not_a_contradiction() {
        let claim = "They never said it was always true. ";
        let fs = analyze(&claim.repeat(12));
        assert_eq!(fs.claims.len(), 12);
        assert!(fs.contradictions.is_empty());
        assert_eq!(fs.exaggerations.len(), 12);
        assert_eq!(fs.stability_score, 30.0);
    }

    #[test]
    fn test_identical_claims_skip_self_pairs() {
        let fs = analyze("The report was not accurate. The report was not accurate.");
        assert_eq!(fs.claims.len(), 2);
        assert_eq!(fs.claims[0], fs.claims[1]);
        assert!(fs.contradictions.is_empty());
        assert_eq!(fs.stability_score, 90.0);
    }

    #[test]
    fn test_duplicates_still_conflict_with_opposites() {
        let text = "The report was not accurate. The report was not accurate. \
                    The report was accurate according to staff.";
        let fs = analyze(text);
        assert_eq!(fs.claims.len(), 3);
        assert_eq!(fs.contradictions.len(), 2);
        assert_eq!(fs.stability_score, 66.0);
    }

    #[test]
    fn test_stability_floors_at_zero() {
        let text = "Everyone was not told the truth today. \
                    Everyone was told the truth today by staff. \
                    No one was not warned about it at all. \
                    No one was warned about it by anyone here.";
        let fs = analyze(text);
        assert_eq!(fs.contradictions.len(), 6);
        assert_eq!(fs.stability_score, 0.0);
    }
}
