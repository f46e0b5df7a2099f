//! Alert delivery to the downstream sink.

use async_trait::async_trait;
use chrono::Utc;
use serde::Serialize;
use swapwatch_core::AlertPayload;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum ForwardError {
    #[error("sink request failed: {0}")]
    RequestFailed(String),

    #[error("sink returned HTTP {0}")]
    Status(u16),
}

impl From<reqwest::Error> for ForwardError {
    fn from(err: reqwest::Error) -> Self {
        ForwardError::RequestFailed(err.to_string())
    }
}

/// Delivers assembled alerts. Returns the sink's response body verbatim;
/// the body is never parsed or acted upon.
#[async_trait]
pub trait Forwarder: Send + Sync {
    async fn send(&self, payload: &AlertPayload) -> Result<String, ForwardError>;
}

/// Body shape the sink expects: the alert under `analisis`, stamped with the
/// delivery time.
#[derive(Serialize)]
struct SinkBody<'a> {
    timestamp: String,
    analisis: &'a AlertPayload,
}

/// Forwarder that POSTs alerts to a webhook sink.
pub struct WebhookForwarder {
    client: reqwest::Client,
    sink_url: String,
}

impl WebhookForwarder {
    pub fn new(sink_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            sink_url: sink_url.to_string(),
        }
    }
}

#[async_trait]
impl Forwarder for WebhookForwarder {
    async fn send(&self, payload: &AlertPayload) -> Result<String, ForwardError> {
        let body = SinkBody {
            timestamp: Utc::now().to_rfc3339(),
            analisis: payload,
        };

        let response = self.client.post(&self.sink_url).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ForwardError::Status(status.as_u16()));
        }

        let ack = response.text().await?;
        info!(token = %payload.token, score = payload.score, "Alert delivered");
        Ok(ack)
    }
}
