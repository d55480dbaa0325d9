//! Configuration structures for review analysis.
//!
//! The extraction rule tables are fixed and not configurable; these settings
//! only shape how results are collected and reported.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{ClipperError, Result};

/// Main configuration for the clipper pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClipperConfig {
    /// Signal extraction configuration.
    pub extraction: ExtractionConfig,

    /// Batch processing configuration.
    pub batch: BatchConfig,

    /// Output configuration.
    pub output: OutputConfig,
}

/// Signal extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Attach per-rule match details (span, source fragment, confidence).
    pub include_matches: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            include_matches: false,
        }
    }
}

/// Batch processing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Maximum reviews analyzed per input file (0 = unlimited).
    pub max_reviews: usize,

    /// Keep going when an input file cannot be read or decoded.
    pub continue_on_error: bool,

    /// Number of hairstyles kept in the tally (0 = all).
    pub top_styles: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            max_reviews: 500,
            continue_on_error: false,
            top_styles: 0,
        }
    }
}

/// Output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Pretty-print JSON output.
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

impl ClipperConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| ClipperError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: ClipperConfig =
            serde_json::from_str(r#"{ "batch": { "top_styles": 3 } }"#).unwrap();

        assert_eq!(config.batch.top_styles, 3);
        assert_eq!(config.batch.max_reviews, 500);
        assert!(!config.batch.continue_on_error);
        assert!(!config.extraction.include_matches);
        assert!(config.output.pretty);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = ClipperConfig::default();
        config.extraction.include_matches = true;
        config.batch.max_reviews = 0;
        config.save(&path).unwrap();

        let loaded = ClipperConfig::from_file(&path).unwrap();
        assert!(loaded.extraction.include_matches);
        assert_eq!(loaded.batch.max_reviews, 0);
    }

    #[test]
    fn test_invalid_config_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = ClipperConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, ClipperError::Config(_)));
    }
}
