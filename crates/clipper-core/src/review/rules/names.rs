//! Staff name candidate extraction.
//!
//! Two passes feed one candidate set: contextual anchors ("ask for X",
//! "shoutout to X", ...) and a fallback that accepts every capitalized word.
//! Shop and location words are removed at the end. The result is a candidate
//! list for later filtering, not a verified set of names.

use std::collections::BTreeSet;

use regex::Regex;

use super::patterns::{
    CAPITALIZED_TOKEN, NAME_ASK_FOR, NAME_BY, NAME_MENTION, NAME_SHOUTOUT,
    NAME_SPECIAL_MENTION, NAME_TODAY_WAS, NAME_TO_AT, NAME_TO_SENTENCE_END, NAME_WITH_AFTER,
};
use super::{ExtractionMatch, FieldExtractor};

/// Capitalized words that are shop or location vocabulary, never names.
pub const NAME_STOPWORDS: [&str; 6] = ["Main", "Street", "Barbershop", "Downtown", "Barber", "Shop"];

/// Lowercased words the capitalized fallback skips.
const FALLBACK_SKIP: [&str; 4] = ["i", "the", "a", "an"];

/// Rule that produced a name candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameRule {
    /// "to Tony at ..."
    ToAt,
    /// "to Maria!" / "to Maria."
    ToSentenceEnd,
    /// "by Sam"
    By,
    /// "ask for Chris"
    AskFor,
    /// "mention: Luis"
    Mention,
    /// "shoutout to Maria"
    Shoutout,
    /// "special mention Luis"
    SpecialMention,
    /// "today Sam was ..."
    TodayWas,
    /// "with Dre after ..."
    WithAfter,
    /// Any standalone capitalized word.
    Capitalized,
}

impl NameRule {
    /// Contextual rules in application order.
    pub const CONTEXTUAL: [NameRule; 9] = [
        NameRule::ToAt,
        NameRule::ToSentenceEnd,
        NameRule::By,
        NameRule::AskFor,
        NameRule::Mention,
        NameRule::Shoutout,
        NameRule::SpecialMention,
        NameRule::TodayWas,
        NameRule::WithAfter,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            NameRule::ToAt => "to_at",
            NameRule::ToSentenceEnd => "to_sentence_end",
            NameRule::By => "by",
            NameRule::AskFor => "ask_for",
            NameRule::Mention => "mention",
            NameRule::Shoutout => "shoutout",
            NameRule::SpecialMention => "special_mention",
            NameRule::TodayWas => "today_was",
            NameRule::WithAfter => "with_after",
            NameRule::Capitalized => "capitalized",
        }
    }

    pub fn confidence(&self) -> f32 {
        match self {
            NameRule::Capitalized => 0.4,
            _ => 0.8,
        }
    }

    /// Pattern for this rule. Contextual patterns capture the name in group 1.
    pub fn pattern(&self) -> &'static Regex {
        match self {
            NameRule::ToAt => &NAME_TO_AT,
            NameRule::ToSentenceEnd => &NAME_TO_SENTENCE_END,
            NameRule::By => &NAME_BY,
            NameRule::AskFor => &NAME_ASK_FOR,
            NameRule::Mention => &NAME_MENTION,
            NameRule::Shoutout => &NAME_SHOUTOUT,
            NameRule::SpecialMention => &NAME_SPECIAL_MENTION,
            NameRule::TodayWas => &NAME_TODAY_WAS,
            NameRule::WithAfter => &NAME_WITH_AFTER,
            NameRule::Capitalized => &CAPITALIZED_TOKEN,
        }
    }
}

/// Name candidate extractor.
pub struct NameExtractor;

impl NameExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NameExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for NameExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    /// All candidate occurrences, contextual matches first. The same name may
    /// appear more than once.
    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let mut results = Vec::new();

        for rule in NameRule::CONTEXTUAL {
            for caps in rule.pattern().captures_iter(text) {
                let (Some(full_match), Some(token)) = (caps.get(0), caps.get(1)) else {
                    continue;
                };
                let name = normalize_name(token.as_str());
                if !is_candidate(&name) {
                    continue;
                }
                results.push(
                    ExtractionMatch::new(name, rule.confidence(), full_match.as_str())
                        .with_position(token.start(), token.end())
                        .with_rule(rule.name()),
                );
            }
        }

        let fallback = NameRule::Capitalized;
        for token in fallback.pattern().find_iter(text) {
            let word = token.as_str();
            if FALLBACK_SKIP.contains(&word.to_lowercase().as_str()) || !is_candidate(word) {
                continue;
            }
            results.push(
                ExtractionMatch::new(word.to_string(), fallback.confidence(), word)
                    .with_position(token.start(), token.end())
                    .with_rule(fallback.name()),
            );
        }

        results
    }
}

fn is_candidate(name: &str) -> bool {
    !name.is_empty() && !NAME_STOPWORDS.contains(&name)
}

/// Uppercase the first letter and lowercase the rest.
pub fn normalize_name(token: &str) -> String {
    let mut chars = token.trim().chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Extract the set of candidate staff names from review text.
///
/// Absent or empty text yields an empty set.
pub fn extract_candidate_names<'a>(text: impl Into<Option<&'a str>>) -> BTreeSet<String> {
    match text.into() {
        Some(text) if !text.is_empty() => NameExtractor::new()
            .extract_all(text)
            .into_iter()
            .map(|m| m.value)
            .collect(),
        _ => BTreeSet::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn set(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_and_absent_input() {
        assert!(extract_candidate_names("").is_empty());
        assert!(extract_candidate_names(None::<&str>).is_empty());
        assert!(extract_candidate_names("no capitals here at all.").is_empty());
    }

    #[test]
    fn test_contextual_and_fallback_names() {
        let text = "Went to Tony at Main Street Barber — he did an amazing fade. Highly recommend Jason too.";
        let names = extract_candidate_names(text);

        assert!(names.contains("Tony"));
        assert!(names.contains("Jason"));
        // Fallback keeps sentence-initial words.
        assert_eq!(names, set(&["Highly", "Jason", "Tony", "Went"]));
    }

    #[test]
    fn test_stopwords_removed() {
        let names = extract_candidate_names("Tony went to Main Street Barbershop");

        for stop in NAME_STOPWORDS {
            assert!(!names.contains(stop), "{} should be filtered", stop);
        }
        assert_eq!(names, set(&["Tony"]));
    }

    #[test]
    fn test_shoutout_requires_capitalized_name() {
        assert_eq!(extract_candidate_names("Shoutout to Maria!"), set(&["Maria", "Shoutout"]));
        assert!(extract_candidate_names("shoutout to maria").is_empty());
    }

    #[test]
    fn test_special_mention_review() {
        let text = "Fantastic service by the crew at Downtown Barbershop. Special mention: Luis!";
        let names = extract_candidate_names(text);

        assert_eq!(names, set(&["Fantastic", "Luis", "Special"]));
        assert!(!names.contains("Crew"));
    }

    /// Contextual matches as (name, rule), fallback matches left out.
    fn contextual(text: &str) -> Vec<(String, &'static str)> {
        NameExtractor::new()
            .extract_all(text)
            .into_iter()
            .filter_map(|m| match m.rule {
                Some("capitalized") | None => None,
                Some(rule) => Some((m.value, rule)),
            })
            .collect()
    }

    fn pairs(expected: &[(&str, &'static str)]) -> Vec<(String, &'static str)> {
        expected.iter().map(|(name, rule)| (name.to_string(), *rule)).collect()
    }

    #[test]
    fn test_anchor_rules_report_their_name() {
        let text = "but today Sam was on duty. Ask for Chris, or book with Dre after work.";

        assert_eq!(
            contextual(text),
            pairs(&[("Chris", "ask_for"), ("Sam", "today_was"), ("Dre", "with_after")])
        );
    }

    #[test]
    fn test_to_at_rule() {
        assert_eq!(contextual("Went to Tony at noon"), pairs(&[("Tony", "to_at")]));
        assert_eq!(contextual("Went TO Tony AT noon"), pairs(&[("Tony", "to_at")]));
    }

    #[test]
    fn test_to_sentence_end_rule() {
        assert_eq!(contextual("thanks to Maria!"), pairs(&[("Maria", "to_sentence_end")]));
        assert_eq!(contextual("Thanks TO Maria."), pairs(&[("Maria", "to_sentence_end")]));
    }

    #[test]
    fn test_by_rule() {
        assert_eq!(contextual("cut by Sam"), pairs(&[("Sam", "by")]));
        assert_eq!(contextual("cut BY Sam"), pairs(&[("Sam", "by")]));
    }

    #[test]
    fn test_mention_rules() {
        assert_eq!(
            contextual("Special Mention: Luis"),
            pairs(&[("Luis", "mention"), ("Luis", "special_mention")])
        );
        assert_eq!(contextual("honorable mention Dre"), pairs(&[("Dre", "mention")]));
    }

    #[test]
    fn test_shoutout_rule() {
        assert_eq!(contextual("shoutout to Kim"), pairs(&[("Kim", "shoutout")]));
        assert_eq!(contextual("SHOUTOUT TO Kim"), pairs(&[("Kim", "shoutout")]));
    }

    #[test]
    fn test_anchor_finds_names_the_fallback_misses() {
        // "McDonald" has no word boundary after "Mc", so only the anchor sees it.
        assert_eq!(contextual("by McDonald"), pairs(&[("Mc", "by")]));
        assert_eq!(extract_candidate_names("by McDonald"), set(&["Mc"]));
    }

    #[test]
    fn test_all_matches_collected() {
        let extractor = NameExtractor::new();
        let matches = extractor.extract_all("ask for Chris or ask for Marcus");
        let asked: Vec<&str> = matches
            .iter()
            .filter(|m| m.rule == Some("ask_for"))
            .map(|m| m.value.as_str())
            .collect();

        assert_eq!(asked, vec!["Chris", "Marcus"]);
    }

    #[test]
    fn test_match_position_points_at_name() {
        let text = "Ask for Chris";
        let first = NameExtractor::new().extract(text).unwrap();

        assert_eq!(first.value, "Chris");
        assert_eq!(first.position, Some((8, 13)));
        assert_eq!(first.source, "Ask for Chris");
        assert_eq!(&text[8..13], "Chris");
    }

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("tony"), "Tony");
        assert_eq!(normalize_name("MARIA"), "Maria");
        assert_eq!(normalize_name(" Luis "), "Luis");
        assert_eq!(normalize_name(""), "");
    }

    #[test]
    fn test_deterministic() {
        let text = "The barber (not sure of his name) did fine, but ask for Chris if you want a fade.";
        assert_eq!(extract_candidate_names(text), extract_candidate_names(text));
        assert_eq!(extract_candidate_names(text), set(&["Chris"]));
    }

    #[test]
    fn test_output_never_contains_empty_string() {
        let names = extract_candidate_names("To . By ! Mention: ");
        assert!(names.iter().all(|n| !n.is_empty()));
    }
}
