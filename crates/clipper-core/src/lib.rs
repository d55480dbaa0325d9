//! Core library for barbershop review signals.
//!
//! This crate provides:
//! - Staff name candidate extraction (contextual anchors plus a capitalized-word fallback)
//! - Hairstyle term normalization to a fixed canonical vocabulary
//! - Review input decoding and batch analysis with hairstyle tallies
//!
//! Both extractors are pure: the rule tables are immutable statics shared by
//! every caller.

pub mod error;
pub mod models;
pub mod review;

pub use error::{ClipperError, ExtractionError, Result};
pub use models::config::ClipperConfig;
pub use models::review::{BatchReport, Hairstyle, ReviewRecord, ReviewSignals, StyleCount};
pub use review::rules::{extract_candidate_names, extract_hairstyles};
pub use review::{load_reviews, parse_reviews, tally_hairstyles, InputFormat, ReviewAnalyzer};
