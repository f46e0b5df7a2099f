//! Decision pipeline: deduplication, wallet activity tracking, sentiment
//! gating, and per-event orchestration.

pub mod dedup;
pub mod error;
pub mod pipeline;
pub mod sentiment;
pub mod whale;

pub use dedup::Deduplicator;
pub use error::PipelineError;
pub use pipeline::SwapPipeline;
pub use sentiment::{ClassifierFailurePolicy, GateDecision, SentimentGate};
pub use whale::WalletActivityTracker;
