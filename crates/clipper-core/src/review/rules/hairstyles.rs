//! Hairstyle term normalization.

use std::collections::BTreeSet;

use crate::models::review::Hairstyle;

use super::patterns::HAIRSTYLE_PATTERNS;
use super::{ExtractionMatch, FieldExtractor};

/// Canonical hairstyle extractor.
pub struct HairstyleExtractor;

impl HairstyleExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HairstyleExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for HairstyleExtractor {
    type Output = ExtractionMatch<Hairstyle>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    /// At most one match per style, in vocabulary order. `source` holds the
    /// synonym phrase as written in the text.
    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        HAIRSTYLE_PATTERNS
            .iter()
            .filter_map(|(style, pattern)| {
                pattern.find(text).map(|m| {
                    ExtractionMatch::new(*style, 0.9, m.as_str())
                        .with_position(m.start(), m.end())
                        .with_rule(style.label())
                })
            })
            .collect()
    }
}

/// Extract the set of canonical hairstyle labels mentioned in review text.
///
/// Absent or empty text yields an empty set.
pub fn extract_hairstyles<'a>(text: impl Into<Option<&'a str>>) -> BTreeSet<String> {
    match text.into() {
        Some(text) if !text.is_empty() => HairstyleExtractor::new()
            .extract_all(text)
            .into_iter()
            .map(|m| m.value.label().to_string())
            .collect(),
        _ => BTreeSet::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn set(labels: &[&str]) -> BTreeSet<String> {
        labels.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_and_absent_input() {
        assert!(extract_hairstyles("").is_empty());
        assert!(extract_hairstyles(None::<&str>).is_empty());
    }

    #[test]
    fn test_synonyms_map_to_canonical_labels() {
        assert_eq!(extract_hairstyles("He got a skin fade and a man bun."), set(&["fade", "man bun"]));
        assert_eq!(extract_hairstyles("Tried a top knot with cornrows"), set(&["braids", "man bun"]));
        assert_eq!(extract_hairstyles("kept my locs, added a mohican"), set(&["dreadlocks", "mohawk"]));
        assert_eq!(extract_hairstyles("slick back on top"), set(&["slicked back"]));
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(extract_hairstyles("FADE"), set(&["fade"]));
        assert_eq!(extract_hairstyles("Buzz Cut"), set(&["buzz cut"]));
    }

    #[test]
    fn test_word_boundaries() {
        assert!(extract_hairstyles("I was afraid it would go wrong").is_empty());
        assert!(extract_hairstyles("got buzzed short").is_empty());
        assert!(extract_hairstyles("the crew at the shop").is_empty());
        assert!(extract_hairstyles("unbraided").is_empty());
    }

    #[test]
    fn test_overlapping_phrases_hit_both_styles() {
        assert_eq!(extract_hairstyles("a clean taper fade"), set(&["fade", "taper"]));
        assert_eq!(extract_hairstyles("tapered sides"), set(&["taper"]));
    }

    #[test]
    fn test_one_match_per_style() {
        let matches = HairstyleExtractor::new().extract_all("fade, faded, skin fade");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].value, Hairstyle::Fade);
        assert_eq!(matches[0].source, "fade");
        assert_eq!(matches[0].position, Some((0, 4)));
    }

    #[test]
    fn test_matched_source_keeps_original_case() {
        let first = HairstyleExtractor::new().extract("Best POMPADOUR in town").unwrap();
        assert_eq!(first.value, Hairstyle::Pompadour);
        assert_eq!(first.source, "POMPADOUR");
    }

    #[test]
    fn test_every_synonym_resolves_to_its_label() {
        for style in Hairstyle::ALL {
            for synonym in style.synonyms() {
                let found = extract_hairstyles(*synonym);
                assert!(found.contains(style.label()), "{} -> {}", synonym, style);
            }
        }
    }
}
