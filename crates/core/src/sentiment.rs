//! Sentiment classification result.

use serde::{Deserialize, Serialize};

/// Label and confidence score returned by the classifier.
///
/// Scores are normalized to `[0.0, 1.0]`. Transient, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    pub label: String,
    pub score: f64,
}

impl SentimentResult {
    pub fn new(label: &str, score: f64) -> Self {
        Self {
            label: label.to_string(),
            score,
        }
    }

    /// Fixed maximal result used on the direct path, where the gate is bypassed.
    pub fn maximal() -> Self {
        Self::new("POSITIVE", 1.0)
    }
}
