//! Review signal extraction module.

mod analyzer;
pub mod input;
pub mod rules;

pub use analyzer::{tally_hairstyles, ReviewAnalyzer};
pub use input::{load_reviews, parse_reviews, InputFormat};

use crate::error::ExtractionError;

/// Result type for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractionError>;
