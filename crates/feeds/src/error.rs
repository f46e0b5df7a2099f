//! Error types for external data collaborators.

use thiserror::Error;

/// Errors fetching the upstream swap batch.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("upstream request failed: {0}")]
    RequestFailed(String),

    #[error("upstream returned HTTP {0}")]
    Status(u16),

    #[error("failed to parse upstream response: {0}")]
    ParseError(String),
}

impl From<reqwest::Error> for FeedError {
    fn from(err: reqwest::Error) -> Self {
        FeedError::RequestFailed(err.to_string())
    }
}

/// Errors from the sentiment classifier.
///
/// None of these are retried within a run; whether they abort the run or
/// degrade to a default score is the gate's policy decision, not the
/// client's.
#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("classifier request failed: {0}")]
    RequestFailed(String),

    #[error("classifier returned HTTP {0}")]
    Status(u16),

    #[error("malformed classifier response: {0}")]
    MalformedResponse(String),

    #[error("classifier score {0} outside [0.0, 1.0]")]
    ScoreOutOfRange(f64),
}

impl From<reqwest::Error> for ClassifyError {
    fn from(err: reqwest::Error) -> Self {
        ClassifyError::RequestFailed(err.to_string())
    }
}
