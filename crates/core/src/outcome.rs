//! Terminal pipeline outcomes.

use serde::Serialize;

/// How a pipeline run was triggered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerMode {
    /// Externally supplied event; dedup, whale tracking and the sentiment
    /// gate are all bypassed.
    Direct,
    /// Event selected from a fetched batch of recent swaps.
    Discovered,
}

/// Terminal outcome of one pipeline run.
///
/// Every run ends in exactly one of these, or in a `PipelineError`. There is
/// no other exit path.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RunOutcome {
    /// Discovered batch was empty or nothing met the amount threshold.
    NoQualifyingEvent,
    /// Transaction signature already claimed within its TTL.
    Duplicate,
    /// Sentiment score fell below the admission threshold.
    LowScore { score: f64 },
    /// Alert delivered; `ack` echoes the sink's response body verbatim.
    Forwarded { ack: String },
}

impl RunOutcome {
    /// Short label for logging.
    pub fn label(&self) -> &'static str {
        match self {
            RunOutcome::NoQualifyingEvent => "no_qualifying_event",
            RunOutcome::Duplicate => "duplicate",
            RunOutcome::LowScore { .. } => "low_score",
            RunOutcome::Forwarded { .. } => "forwarded",
        }
    }
}
