//! Rule-based signal extractors for barbershop reviews.

pub mod hairstyles;
pub mod names;
pub mod patterns;

pub use hairstyles::{extract_hairstyles, HairstyleExtractor};
pub use names::{extract_candidate_names, normalize_name, NameExtractor, NameRule, NAME_STOPWORDS};
pub use patterns::*;

use serde::Serialize;

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from text.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Extract all occurrences of the field.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}

/// Extraction context with confidence scores.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractionMatch<T> {
    /// Extracted value.
    pub value: T,
    /// Confidence score (0.0 - 1.0).
    pub confidence: f32,
    /// Byte span of the value in the source text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<(usize, usize)>,
    /// Source text that was matched.
    pub source: String,
    /// Rule that produced the match.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<&'static str>,
}

impl<T> ExtractionMatch<T> {
    pub fn new(value: T, confidence: f32, source: impl Into<String>) -> Self {
        Self {
            value,
            confidence,
            position: None,
            source: source.into(),
            rule: None,
        }
    }

    pub fn with_position(mut self, start: usize, end: usize) -> Self {
        self.position = Some((start, end));
        self
    }

    pub fn with_rule(mut self, rule: &'static str) -> Self {
        self.rule = Some(rule);
        self
    }
}
