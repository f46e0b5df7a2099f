//! Sentiment classifier client.

use async_trait::async_trait;
use serde_json::{json, Value};
use swapwatch_core::SentimentResult;

use crate::error::ClassifyError;

/// Default inference endpoint when none is configured.
pub const DEFAULT_MODEL_URL: &str =
    "https://api-inference.huggingface.co/models/distilbert-base-uncased-finetuned-sst-2-english";

/// Scores free text into a label and a confidence in `[0.0, 1.0]`.
#[async_trait]
pub trait Classifier: Send + Sync {
    async fn score(&self, text: &str) -> Result<SentimentResult, ClassifyError>;
}

/// REST client for the Hugging Face inference API.
pub struct HuggingFaceClassifier {
    client: reqwest::Client,
    model_url: String,
    api_token: String,
}

impl HuggingFaceClassifier {
    pub fn new(model_url: &str, api_token: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            model_url: model_url.to_string(),
            api_token: api_token.to_string(),
        }
    }
}

#[async_trait]
impl Classifier for HuggingFaceClassifier {
    async fn score(&self, text: &str) -> Result<SentimentResult, ClassifyError> {
        let response = self
            .client
            .post(&self.model_url)
            .bearer_auth(&self.api_token)
            .json(&json!({ "inputs": text }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClassifyError::Status(status.as_u16()));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| ClassifyError::MalformedResponse(e.to_string()))?;

        first_entry(&body)
    }
}

/// Extract the first `{label, score}` entry. The inference API nests the
/// result list one level per input, so unwrap a single level of nesting when
/// present.
fn first_entry(body: &Value) -> Result<SentimentResult, ClassifyError> {
    let mut entry = body
        .as_array()
        .and_then(|entries| entries.first())
        .ok_or_else(|| ClassifyError::MalformedResponse("empty result list".to_string()))?;

    if entry.is_array() {
        entry = entry
            .as_array()
            .and_then(|entries| entries.first())
            .ok_or_else(|| ClassifyError::MalformedResponse("empty result list".to_string()))?;
    }

    let label = entry
        .get("label")
        .and_then(Value::as_str)
        .ok_or_else(|| ClassifyError::MalformedResponse("missing label".to_string()))?;
    let score = entry
        .get("score")
        .and_then(Value::as_f64)
        .ok_or_else(|| ClassifyError::MalformedResponse("missing score".to_string()))?;

    if !(0.0..=1.0).contains(&score) {
        return Err(ClassifyError::ScoreOutOfRange(score));
    }

    Ok(SentimentResult::new(label, score))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_first_entry_flat_list() {
        let body = json!([{"label": "POSITIVE", "score": 0.98}]);
        let result = first_entry(&body).unwrap();
        assert_eq!(result.label, "POSITIVE");
        assert_eq!(result.score, 0.98);
    }

    #[test]
    fn test_first_entry_nested_list() {
        let body = json!([[
            {"label": "NEGATIVE", "score": 0.6},
            {"label": "POSITIVE", "score": 0.4}
        ]]);
        let result = first_entry(&body).unwrap();
        assert_eq!(result.label, "NEGATIVE");
        assert_eq!(result.score, 0.6);
    }

    #[test]
    fn test_first_entry_rejects_empty() {
        assert!(matches!(
            first_entry(&json!([])),
            Err(ClassifyError::MalformedResponse(_))
        ));
        assert!(matches!(
            first_entry(&json!([[]])),
            Err(ClassifyError::MalformedResponse(_))
        ));
        assert!(matches!(
            first_entry(&json!({"error": "loading"})),
            Err(ClassifyError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_first_entry_rejects_missing_fields() {
        assert!(matches!(
            first_entry(&json!([{"score": 0.5}])),
            Err(ClassifyError::MalformedResponse(_))
        ));
        assert!(matches!(
            first_entry(&json!([{"label": "POSITIVE"}])),
            Err(ClassifyError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_first_entry_rejects_out_of_range_score() {
        assert!(matches!(
            first_entry(&json!([{"label": "POSITIVE", "score": 1.5}])),
            Err(ClassifyError::ScoreOutOfRange(_))
        ));
        assert!(matches!(
            first_entry(&json!([{"label": "POSITIVE", "score": -0.1}])),
            Err(ClassifyError::ScoreOutOfRange(_))
        ));
    }
}
