//! Per-event pipeline orchestration.
//!
//! One run is a strictly sequential flow: select, claim, count, gate, build,
//! forward. Concurrency exists only across independent runs; the shared
//! store is the sole coordination point between them.

use std::sync::Arc;
use swapwatch_alerts::{build_alert, Forwarder};
use swapwatch_core::{RunOutcome, SentimentResult, SwapEvent, TriggerMode};
use swapwatch_feeds::{select_candidate, SwapSource};
use tracing::{debug, info};

use crate::dedup::Deduplicator;
use crate::error::PipelineError;
use crate::sentiment::{GateDecision, SentimentGate};
use crate::whale::WalletActivityTracker;

/// Orchestrates one pipeline run per trigger.
///
/// All collaborators are injected at construction; the pipeline itself holds
/// no shared mutable state and takes no locks.
pub struct SwapPipeline {
    source: Arc<dyn SwapSource>,
    dedup: Deduplicator,
    wallets: WalletActivityTracker,
    gate: SentimentGate,
    forwarder: Arc<dyn Forwarder>,
    min_amount_usd: f64,
}

impl SwapPipeline {
    pub fn new(
        source: Arc<dyn SwapSource>,
        dedup: Deduplicator,
        wallets: WalletActivityTracker,
        gate: SentimentGate,
        forwarder: Arc<dyn Forwarder>,
        min_amount_usd: f64,
    ) -> Self {
        Self {
            source,
            dedup,
            wallets,
            gate,
            forwarder,
            min_amount_usd,
        }
    }

    /// Run on an externally supplied event.
    ///
    /// Deduplication, wallet tracking and the sentiment gate are all
    /// bypassed: no store access happens and the event forwards with a fixed
    /// maximal score.
    pub async fn run_direct(&self, event: SwapEvent) -> Result<RunOutcome, PipelineError> {
        debug!(signature = %event.signature, "Received direct event");

        let sentiment = SentimentResult::maximal();
        let payload = build_alert(&event, false, &sentiment, TriggerMode::Direct);
        let ack = self.forwarder.send(&payload).await?;

        info!(
            signature = %event.signature,
            token = %event.token_symbol,
            "Forwarded direct event"
        );
        Ok(RunOutcome::Forwarded { ack })
    }

    /// Run on a discovered batch: fetch recent swaps, select the largest
    /// qualifying candidate, then claim, count, gate and forward it.
    pub async fn run_discovered(&self) -> Result<RunOutcome, PipelineError> {
        let batch = self.source.fetch_recent().await?;

        let Some(event) = select_candidate(&batch, self.min_amount_usd) else {
            info!(
                batch_len = batch.len(),
                min_amount_usd = self.min_amount_usd,
                "No qualifying event"
            );
            return Ok(RunOutcome::NoQualifyingEvent);
        };
        debug!(
            signature = %event.signature,
            amount_usd = event.amount_usd,
            "Candidate selected"
        );

        if !self.dedup.claim(&event.signature).await? {
            info!(signature = %event.signature, "Duplicate event, skipped");
            return Ok(RunOutcome::Duplicate);
        }

        let count = self.wallets.touch(&event.wallet).await?;
        let whale = self.wallets.is_whale(count);
        debug!(wallet = %event.wallet, count, whale, "Wallet activity recorded");

        let text = format!(
            "Large {} swap worth ${:.2}",
            event.token_symbol, event.amount_usd
        );
        let sentiment = match self.gate.evaluate(&text).await? {
            GateDecision::Pass(result) => result,
            GateDecision::Drop(result) => {
                info!(
                    signature = %event.signature,
                    score = result.score,
                    "Low score, skipped"
                );
                return Ok(RunOutcome::LowScore {
                    score: result.score,
                });
            }
        };

        let payload = build_alert(&event, whale, &sentiment, TriggerMode::Discovered);
        let ack = self.forwarder.send(&payload).await?;

        info!(
            signature = %event.signature,
            token = %event.token_symbol,
            score = sentiment.score,
            whale,
            "Forwarded"
        );
        Ok(RunOutcome::Forwarded { ack })
    }
}
