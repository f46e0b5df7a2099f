//! Pipeline error taxonomy.

use swapwatch_alerts::ForwardError;
use swapwatch_feeds::{ClassifyError, FeedError};
use swapwatch_store::StoreError;
use thiserror::Error;

/// Fatal errors for a single pipeline run. None are retried; each preserves
/// the originating cause. A claim taken before the failure stands for its
/// TTL, keeping delivery at-most-once per signature.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("upstream fetch failed: {0}")]
    Upstream(#[from] FeedError),

    #[error("classifier failed: {0}")]
    Classifier(#[from] ClassifyError),

    #[error("store operation failed: {0}")]
    Store(#[from] StoreError),

    #[error("forward failed: {0}")]
    Forward(#[from] ForwardError),
}
