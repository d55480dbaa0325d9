//! Review analyzer combining the name and hairstyle extractors.

use std::cmp::Reverse;
use std::collections::{BTreeSet, HashMap};
use std::time::Instant;

use chrono::Utc;
use tracing::{debug, info};

use crate::error::ExtractionError;
use crate::models::config::ClipperConfig;
use crate::models::review::{BatchReport, ReviewRecord, ReviewSignals, SignalMatches, StyleCount};

use super::rules::{FieldExtractor, HairstyleExtractor, NameExtractor};
use super::Result;

/// Runs both extractors over reviews and packages the results.
pub struct ReviewAnalyzer {
    /// Whether to attach per-rule match details.
    include_matches: bool,
    /// Maximum reviews per batch (0 = unlimited).
    max_reviews: usize,
    /// Number of styles kept in the batch tally (0 = all).
    top_styles: usize,
}

impl ReviewAnalyzer {
    /// Create an analyzer with default settings.
    pub fn new() -> Self {
        Self {
            include_matches: false,
            max_reviews: 0,
            top_styles: 0,
        }
    }

    /// Create an analyzer from loaded configuration.
    pub fn from_config(config: &ClipperConfig) -> Self {
        Self::new()
            .with_matches(config.extraction.include_matches)
            .with_max_reviews(config.batch.max_reviews)
            .with_top_styles(config.batch.top_styles)
    }

    /// Set whether match details are attached.
    pub fn with_matches(mut self, include: bool) -> Self {
        self.include_matches = include;
        self
    }

    /// Cap the number of reviews analyzed per batch.
    pub fn with_max_reviews(mut self, max_reviews: usize) -> Self {
        self.max_reviews = max_reviews;
        self
    }

    /// Cap the number of styles in the batch tally.
    pub fn with_top_styles(mut self, top_styles: usize) -> Self {
        self.top_styles = top_styles;
        self
    }

    /// Analyze one review text. Absent or empty text gives empty signals.
    pub fn analyze<'a>(&self, text: impl Into<Option<&'a str>>) -> ReviewSignals {
        let Some(text) = text.into().filter(|t| !t.is_empty()) else {
            return ReviewSignals {
                matches: self.include_matches.then(SignalMatches::default),
                ..Default::default()
            };
        };

        let names = NameExtractor::new().extract_all(text);
        let hairstyles = HairstyleExtractor::new().extract_all(text);

        let candidate_names: BTreeSet<&str> = names.iter().map(|m| m.value.as_str()).collect();
        let labels: BTreeSet<&str> = hairstyles.iter().map(|m| m.value.label()).collect();

        debug!(
            "Extracted {} name candidates and {} hairstyles",
            candidate_names.len(),
            labels.len()
        );

        ReviewSignals {
            id: None,
            candidate_names: candidate_names.into_iter().map(str::to_string).collect(),
            hairstyles: labels.into_iter().map(str::to_string).collect(),
            matches: self.include_matches.then(|| SignalMatches {
                names,
                hairstyles,
            }),
        }
    }

    /// Analyze a review record, keeping its id.
    pub fn analyze_record(&self, record: &ReviewRecord) -> ReviewSignals {
        let mut signals = self.analyze(record.text.as_deref());
        signals.id = record.id.clone();
        signals
    }

    /// Analyze a batch of reviews and tally hairstyle mentions.
    pub fn analyze_batch(&self, records: &[ReviewRecord]) -> Result<BatchReport> {
        if records.is_empty() {
            return Err(ExtractionError::NoReviews);
        }

        let start = Instant::now();
        let limit = match self.max_reviews {
            0 => records.len(),
            n => n.min(records.len()),
        };
        if limit < records.len() {
            info!("Analyzing first {} of {} reviews", limit, records.len());
        }

        let reviews: Vec<ReviewSignals> = records[..limit]
            .iter()
            .map(|record| self.analyze_record(record))
            .collect();

        let mut hairstyles = tally_hairstyles(&reviews);
        if self.top_styles > 0 {
            hairstyles.truncate(self.top_styles);
        }

        let report = BatchReport {
            generated_at: Utc::now(),
            total_reviews: reviews.len(),
            reviews_with_names: reviews.iter().filter(|r| !r.candidate_names.is_empty()).count(),
            reviews_with_hairstyles: reviews.iter().filter(|r| !r.hairstyles.is_empty()).count(),
            hairstyles,
            reviews,
        };

        info!(
            "Analyzed {} reviews: {} with names, {} with hairstyles",
            report.total_reviews, report.reviews_with_names, report.reviews_with_hairstyles
        );
        debug!("Batch analysis took {:?}", start.elapsed());

        Ok(report)
    }
}

impl Default for ReviewAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Count reviews per canonical style, most frequent first, ties by label.
pub fn tally_hairstyles<'a>(signals: impl IntoIterator<Item = &'a ReviewSignals>) -> Vec<StyleCount> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for review in signals {
        for style in &review.hairstyles {
            *counts.entry(style.as_str()).or_default() += 1;
        }
    }

    let mut tally: Vec<StyleCount> = counts
        .into_iter()
        .map(|(style, count)| StyleCount {
            style: style.to_string(),
            count,
        })
        .collect();
    tally.sort_by(|a, b| (Reverse(a.count), &a.style).cmp(&(Reverse(b.count), &b.style)));
    tally
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::review::rules::{extract_candidate_names, extract_hairstyles};
    use pretty_assertions::assert_eq;

    const SAMPLE_REVIEWS: [&str; 5] = [
        "Went to Tony at Main Street Barber — he did an amazing fade. Highly recommend Jason too.",
        "Shoutout to Maria for the perfect cut! Booked with her after seeing her work.",
        "I always go to the shop but today Sam was on duty and gave me a great trim.",
        "The barber (not sure of his name) did fine, but ask for Chris if you want a fade.",
        "Fantastic service by the crew at Downtown Barbershop. Special mention: Luis!",
    ];

    fn records() -> Vec<ReviewRecord> {
        SAMPLE_REVIEWS
            .iter()
            .enumerate()
            .map(|(i, text)| ReviewRecord::new((i + 1).to_string(), *text))
            .collect()
    }

    #[test]
    fn test_analyze_agrees_with_extractors() {
        let analyzer = ReviewAnalyzer::new();
        for text in SAMPLE_REVIEWS {
            let signals = analyzer.analyze(text);
            let names: Vec<String> = extract_candidate_names(text).into_iter().collect();
            let styles: Vec<String> = extract_hairstyles(text).into_iter().collect();

            assert_eq!(signals.candidate_names, names);
            assert_eq!(signals.hairstyles, styles);
            assert!(signals.matches.is_none());
        }
    }

    #[test]
    fn test_analyze_absent_text() {
        let signals = ReviewAnalyzer::new().with_matches(true).analyze(None::<&str>);

        assert!(signals.candidate_names.is_empty());
        assert!(signals.hairstyles.is_empty());
        let matches = signals.matches.unwrap();
        assert!(matches.names.is_empty());
        assert!(matches.hairstyles.is_empty());
    }

    #[test]
    fn test_analyze_with_matches() {
        let signals = ReviewAnalyzer::new()
            .with_matches(true)
            .analyze("today Sam was great with my taper");

        assert_eq!(signals.candidate_names, vec!["Sam"]);
        assert_eq!(signals.hairstyles, vec!["taper"]);

        let matches = signals.matches.unwrap();
        assert_eq!(matches.names[0].rule, Some("today_was"));
        assert_eq!(matches.hairstyles[0].source, "taper");
    }

    #[test]
    fn test_analyze_record_keeps_id() {
        let record = ReviewRecord {
            id: Some("r-1".into()),
            text: None,
        };
        let signals = ReviewAnalyzer::new().analyze_record(&record);
        assert_eq!(signals.id.as_deref(), Some("r-1"));
    }

    #[test]
    fn test_analyze_batch() {
        let report = ReviewAnalyzer::new().analyze_batch(&records()).unwrap();

        assert_eq!(report.total_reviews, 5);
        assert_eq!(report.reviews_with_names, 5);
        assert_eq!(report.reviews_with_hairstyles, 2);
        assert_eq!(
            report.hairstyles,
            vec![StyleCount {
                style: "fade".into(),
                count: 2
            }]
        );
        assert_eq!(report.reviews[2].candidate_names, vec!["Sam"]);
        assert_eq!(report.reviews[4].id.as_deref(), Some("5"));
    }

    #[test]
    fn test_analyze_batch_limit() {
        let report = ReviewAnalyzer::new()
            .with_max_reviews(2)
            .analyze_batch(&records())
            .unwrap();

        assert_eq!(report.total_reviews, 2);
        assert_eq!(report.reviews.len(), 2);
    }

    #[test]
    fn test_analyze_batch_empty() {
        let err = ReviewAnalyzer::new().analyze_batch(&[]).unwrap_err();
        assert!(matches!(err, ExtractionError::NoReviews));
    }

    #[test]
    fn test_tally_order() {
        let analyzer = ReviewAnalyzer::new();
        let reviews: Vec<ReviewSignals> = [
            "taper and a fade",
            "a mohawk",
            "fresh fade",
            "braids with a taper",
        ]
        .into_iter()
        .map(|text| analyzer.analyze(text))
        .collect();

        let tally = tally_hairstyles(&reviews);
        let flat: Vec<(&str, usize)> = tally.iter().map(|s| (s.style.as_str(), s.count)).collect();

        assert_eq!(
            flat,
            vec![("fade", 2), ("taper", 2), ("braids", 1), ("mohawk", 1)]
        );
    }

    #[test]
    fn test_top_styles_truncates_tally() {
        let report = ReviewAnalyzer::new()
            .with_top_styles(1)
            .analyze_batch(&[
                ReviewRecord::new("1", "undercut"),
                ReviewRecord::new("2", "undercut and afro"),
            ])
            .unwrap();

        assert_eq!(report.hairstyles.len(), 1);
        assert_eq!(report.hairstyles[0].style, "undercut");
    }
}
