//! Review input decoding.
//!
//! Accepts plain text (one review per line), a JSON array, or JSON Lines.
//! JSON elements are either a bare string or an object with optional `id`
//! and `text` fields; a `text` that is missing or not a string becomes
//! `None` rather than an error.

use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::error::{ExtractionError, Result};
use crate::models::review::ReviewRecord;

/// Review input format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// One review per non-blank line.
    Lines,
    /// A JSON array of reviews.
    Json,
    /// One JSON review per non-blank line.
    JsonLines,
}

impl InputFormat {
    /// Pick a format from the file extension.
    pub fn from_path(path: &Path) -> Self {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match extension.as_str() {
            "json" => InputFormat::Json,
            "jsonl" | "ndjson" => InputFormat::JsonLines,
            _ => InputFormat::Lines,
        }
    }
}

/// Read and decode a review file, choosing the format by extension.
pub fn load_reviews(path: &Path) -> Result<Vec<ReviewRecord>> {
    let content = std::fs::read_to_string(path)?;
    let format = InputFormat::from_path(path);
    debug!("Loading reviews from {} as {:?}", path.display(), format);
    parse_reviews(&content, format)
}

/// Decode reviews from already-loaded content.
pub fn parse_reviews(content: &str, format: InputFormat) -> Result<Vec<ReviewRecord>> {
    let records: Vec<ReviewRecord> = match format {
        InputFormat::Lines => content
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(i, line)| ReviewRecord::new((i + 1).to_string(), line.trim()))
            .collect(),
        InputFormat::Json => {
            let document: Value = serde_json::from_str(content).map_err(|e| {
                ExtractionError::MalformedInput {
                    line: e.line(),
                    reason: e.to_string(),
                }
            })?;
            let Value::Array(items) = document else {
                return Err(ExtractionError::MalformedInput {
                    line: 1,
                    reason: "expected a JSON array of reviews".to_string(),
                }
                .into());
            };
            items
                .iter()
                .enumerate()
                .map(|(i, item)| record_from_value(item, i + 1))
                .collect()
        }
        InputFormat::JsonLines => {
            let mut records = Vec::new();
            for (i, line) in content.lines().enumerate() {
                if line.trim().is_empty() {
                    continue;
                }
                let item: Value = serde_json::from_str(line).map_err(|e| {
                    ExtractionError::MalformedInput {
                        line: i + 1,
                        reason: e.to_string(),
                    }
                })?;
                records.push(record_from_value(&item, i + 1));
            }
            records
        }
    };

    Ok(records)
}

fn record_from_value(item: &Value, position: usize) -> ReviewRecord {
    match item {
        Value::String(text) => ReviewRecord {
            id: Some(position.to_string()),
            text: Some(text.clone()),
        },
        Value::Object(fields) => {
            let id = match fields.get("id") {
                Some(Value::String(id)) => id.clone(),
                Some(Value::Number(id)) => id.to_string(),
                _ => position.to_string(),
            };
            let text = fields.get("text").and_then(Value::as_str).map(str::to_string);
            ReviewRecord { id: Some(id), text }
        }
        _ => ReviewRecord {
            id: Some(position.to_string()),
            text: None,
        },
    }
}
