//! Candidate selection over a fetched batch.

use swapwatch_core::SwapEvent;

/// Pick the single qualifying candidate from a batch.
///
/// Filters to `amount_usd >= min_amount_usd`, then takes the record with the
/// maximum amount. Ties keep the first-seen record.
pub fn select_candidate(events: &[SwapEvent], min_amount_usd: f64) -> Option<SwapEvent> {
    let mut best: Option<&SwapEvent> = None;
    for event in events {
        if event.amount_usd < min_amount_usd {
            continue;
        }
        match best {
            Some(current) if event.amount_usd <= current.amount_usd => {}
            _ => best = Some(event),
        }
    }
    best.cloned()
}
