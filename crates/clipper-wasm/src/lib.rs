//! WASM bindings for barbershop review signal extraction.
//!
//! This crate provides WebAssembly bindings for use in browsers and Node.js.
//! Inputs arrive as untyped JS values; anything that is not a string is
//! treated as an empty review.

use js_sys::Array;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use clipper_core::{Hairstyle, ReviewAnalyzer};

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Version information.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Candidate staff names found in a review, sorted.
#[wasm_bindgen]
pub fn extract_candidate_names(text: JsValue) -> Array {
    clipper_core::extract_candidate_names(text.as_string().as_deref())
        .into_iter()
        .map(JsValue::from)
        .collect()
}

/// Canonical hairstyle labels found in a review, sorted.
#[wasm_bindgen]
pub fn extract_hairstyles(text: JsValue) -> Array {
    clipper_core::extract_hairstyles(text.as_string().as_deref())
        .into_iter()
        .map(JsValue::from)
        .collect()
}

/// Both signals for one review as a plain object.
#[wasm_bindgen]
pub fn analyze_review(text: JsValue) -> Result<JsValue, JsValue> {
    ReviewSignalExtractor::new().analyze(text)
}

/// The canonical vocabulary as `[{ label, synonyms }]`.
#[wasm_bindgen]
pub fn hairstyle_vocabulary() -> Result<JsValue, JsValue> {
    #[derive(Serialize)]
    struct VocabularyEntry {
        label: &'static str,
        synonyms: &'static [&'static str],
    }

    let entries: Vec<VocabularyEntry> = Hairstyle::ALL
        .into_iter()
        .map(|style| VocabularyEntry {
            label: style.label(),
            synonyms: style.synonyms(),
        })
        .collect();

    serde_wasm_bindgen::to_value(&entries).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Review analyzer class for browser use.
#[wasm_bindgen]
pub struct ReviewSignalExtractor {
    include_matches: bool,
}

#[wasm_bindgen]
impl ReviewSignalExtractor {
    /// Create a new extractor.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            include_matches: false,
        }
    }

    /// Attach per-rule match details to results.
    #[wasm_bindgen]
    pub fn set_include_matches(&mut self, include: bool) {
        self.include_matches = include;
    }

    /// Analyze one review.
    #[wasm_bindgen]
    pub fn analyze(&self, text: JsValue) -> Result<JsValue, JsValue> {
        let signals = ReviewAnalyzer::new()
            .with_matches(self.include_matches)
            .analyze(text.as_string().as_deref());

        serde_wasm_bindgen::to_value(&signals).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl Default for ReviewSignalExtractor {
    fn default() -> Self {
        Self::new()
    }
}
