//! Common regex patterns for review signal extraction.
//!
//! Anchor phrases match in any case; the captured name token must start with
//! an uppercase letter in the source text.

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::review::Hairstyle;

lazy_static! {
    // Contextual name anchors, in rule order
    pub static ref NAME_TO_AT: Regex = Regex::new(
        r"(?i:to)\s+([A-Z][a-z]{1,20})\s+(?i:at)"
    ).unwrap();

    pub static ref NAME_TO_SENTENCE_END: Regex = Regex::new(
        r"(?i:to)\s+([A-Z][a-z]{1,20})[.!]"
    ).unwrap();

    pub static ref NAME_BY: Regex = Regex::new(
        r"(?i:by)\s+([A-Z][a-z]{1,20})"
    ).unwrap();

    pub static ref NAME_ASK_FOR: Regex = Regex::new(
        r"(?i:ask for)\s+([A-Z][a-z]{1,20})"
    ).unwrap();

    pub static ref NAME_MENTION: Regex = Regex::new(
        r"(?i:mention)[\s:]+([A-Z][a-z]{1,20})"
    ).unwrap();

    pub static ref NAME_SHOUTOUT: Regex = Regex::new(
        r"(?i:shoutout to)\s+([A-Z][a-z]{1,20})"
    ).unwrap();

    pub static ref NAME_SPECIAL_MENTION: Regex = Regex::new(
        r"(?i:special mention)[\s:]*([A-Z][a-z]{1,20})"
    ).unwrap();

    pub static ref NAME_TODAY_WAS: Regex = Regex::new(
        r"(?i:today)\s+([A-Z][a-z]{1,20})\s+(?i:was)"
    ).unwrap();

    pub static ref NAME_WITH_AFTER: Regex = Regex::new(
        r"(?i:with)\s+([A-Z][a-z]{1,20})\s+(?i:after)"
    ).unwrap();

    // Any standalone capitalized word
    pub static ref CAPITALIZED_TOKEN: Regex = Regex::new(
        r"\b[A-Z][a-z]{1,20}\b"
    ).unwrap();

    // One alternation per canonical style, synonyms in vocabulary order
    pub static ref HAIRSTYLE_PATTERNS: Vec<(Hairstyle, Regex)> = Hairstyle::ALL
        .into_iter()
        .map(|style| (style, synonym_pattern(style.synonyms())))
        .collect();
}

/// Build a case-insensitive, word-bounded alternation over literal phrases.
fn synonym_pattern(phrases: &[&str]) -> Regex {
    let alternation = phrases
        .iter()
        .map(|phrase| regex::escape(phrase))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)\b(?:{})\b", alternation)).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_is_case_insensitive_capture_is_not() {
        assert!(NAME_ASK_FOR.is_match("ASK FOR Chris"));
        assert!(NAME_ASK_FOR.is_match("Ask for Chris"));
        assert!(!NAME_ASK_FOR.is_match("ask for chris"));
    }

    #[test]
    fn test_synonym_pattern_bounds_phrases() {
        let pattern = synonym_pattern(&["skin fade", "fade"]);
        assert!(pattern.is_match("a SKIN FADE please"));
        assert!(pattern.is_match("fade."));
        assert!(!pattern.is_match("faded"));
        assert!(!pattern.is_match("skinfade"));
    }

    #[test]
    fn test_one_pattern_per_style() {
        assert_eq!(HAIRSTYLE_PATTERNS.len(), Hairstyle::ALL.len());
    }
}
