//! Error types for the clipper-core library.

use thiserror::Error;

/// Main error type for the clipper library.
#[derive(Error, Debug)]
pub enum ClipperError {
    /// Review input or extraction error.
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to review input and signal extraction.
///
/// The extractors themselves never fail; these cover the review records
/// handed to them.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// A review record could not be decoded.
    #[error("malformed review input at line {line}: {reason}")]
    MalformedInput { line: usize, reason: String },

    /// The input held no review records.
    #[error("no reviews found")]
    NoReviews,
}

/// Result type for the clipper library.
pub type Result<T> = std::result::Result<T, ClipperError>;
