//! Review and extracted-signal data models.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::review::rules::ExtractionMatch;

/// Canonical hairstyle vocabulary.
///
/// Every variant serializes as its label, so downstream consumers see
/// `"buzz cut"` rather than `"BuzzCut"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Hairstyle {
    #[serde(rename = "fade")]
    Fade,
    #[serde(rename = "pompadour")]
    Pompadour,
    #[serde(rename = "undercut")]
    Undercut,
    #[serde(rename = "buzz cut")]
    BuzzCut,
    #[serde(rename = "crew cut")]
    CrewCut,
    #[serde(rename = "mohawk")]
    Mohawk,
    #[serde(rename = "afro")]
    Afro,
    #[serde(rename = "braids")]
    Braids,
    #[serde(rename = "ponytail")]
    Ponytail,
    #[serde(rename = "dreadlocks")]
    Dreadlocks,
    #[serde(rename = "man bun")]
    ManBun,
    #[serde(rename = "taper")]
    Taper,
    #[serde(rename = "slicked back")]
    SlickedBack,
}

impl Hairstyle {
    /// All canonical styles in vocabulary order.
    pub const ALL: [Hairstyle; 13] = [
        Hairstyle::Fade,
        Hairstyle::Pompadour,
        Hairstyle::Undercut,
        Hairstyle::BuzzCut,
        Hairstyle::CrewCut,
        Hairstyle::Mohawk,
        Hairstyle::Afro,
        Hairstyle::Braids,
        Hairstyle::Ponytail,
        Hairstyle::Dreadlocks,
        Hairstyle::ManBun,
        Hairstyle::Taper,
        Hairstyle::SlickedBack,
    ];

    /// Canonical label.
    pub fn label(&self) -> &'static str {
        match self {
            Hairstyle::Fade => "fade",
            Hairstyle::Pompadour => "pompadour",
            Hairstyle::Undercut => "undercut",
            Hairstyle::BuzzCut => "buzz cut",
            Hairstyle::CrewCut => "crew cut",
            Hairstyle::Mohawk => "mohawk",
            Hairstyle::Afro => "afro",
            Hairstyle::Braids => "braids",
            Hairstyle::Ponytail => "ponytail",
            Hairstyle::Dreadlocks => "dreadlocks",
            Hairstyle::ManBun => "man bun",
            Hairstyle::Taper => "taper",
            Hairstyle::SlickedBack => "slicked back",
        }
    }

    /// Surface phrases that map to this style, in match order.
    pub fn synonyms(&self) -> &'static [&'static str] {
        match self {
            Hairstyle::Fade => &["fade", "faded", "skin fade", "low fade", "high fade", "taper fade"],
            Hairstyle::Pompadour => &["pompadour"],
            Hairstyle::Undercut => &["undercut"],
            Hairstyle::BuzzCut => &["buzz cut", "buzz"],
            Hairstyle::CrewCut => &["crew cut"],
            Hairstyle::Mohawk => &["mohawk", "mohican"],
            Hairstyle::Afro => &["afro"],
            Hairstyle::Braids => &["braid", "braids", "cornrows"],
            Hairstyle::Ponytail => &["ponytail"],
            Hairstyle::Dreadlocks => &["dread", "dreadlocks", "locs", "locks"],
            Hairstyle::ManBun => &["man bun", "top knot"],
            Hairstyle::Taper => &["taper", "tapered"],
            Hairstyle::SlickedBack => &["slicked back", "slick back"],
        }
    }
}

impl fmt::Display for Hairstyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Hairstyle {
    type Err = String;

    /// Parse a canonical label (case-insensitive). Synonyms are not accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Hairstyle::ALL
            .into_iter()
            .find(|style| style.label() == wanted)
            .ok_or_else(|| format!("unknown hairstyle: {}", s))
    }
}

/// A single review as read from input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReviewRecord {
    /// Caller-supplied identifier (or the 1-based input position).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Review text; `None` when the source value was absent or not a string.
    pub text: Option<String>,
}

impl ReviewRecord {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            text: Some(text.into()),
        }
    }
}

/// Signals extracted from one review.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReviewSignals {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Candidate staff names, sorted.
    pub candidate_names: Vec<String>,

    /// Canonical hairstyle labels, sorted.
    pub hairstyles: Vec<String>,

    /// Per-rule match details, when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matches: Option<SignalMatches>,
}

impl ReviewSignals {
    /// Candidate names joined with `", "`, the flat form stored alongside reviews.
    pub fn names_joined(&self) -> String {
        self.candidate_names.join(", ")
    }
}

/// Raw matches behind a [`ReviewSignals`] record.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SignalMatches {
    pub names: Vec<ExtractionMatch<String>>,
    pub hairstyles: Vec<ExtractionMatch<Hairstyle>>,
}

/// Number of reviews mentioning a canonical style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyleCount {
    pub style: String,
    pub count: usize,
}

/// Aggregated result of analyzing a batch of reviews.
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub generated_at: DateTime<Utc>,
    pub total_reviews: usize,
    pub reviews_with_names: usize,
    pub reviews_with_hairstyles: usize,
    /// Style frequencies, most frequent first.
    pub hairstyles: Vec<StyleCount>,
    pub reviews: Vec<ReviewSignals>,
}
