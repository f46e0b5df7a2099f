//! Duplicate suppression via atomic store claims.

use std::sync::Arc;
use swapwatch_store::{Store, StoreError};

const CLAIM_PREFIX: &str = "swap:seen:";

/// Claims transaction signatures in the shared store.
///
/// A claim is one atomic set-if-absent-with-expiry; the claim itself is the
/// durable processed marker, so the pipeline never writes a second one at the
/// end of a run.
pub struct Deduplicator {
    store: Arc<dyn Store>,
    ttl_secs: u64,
}

impl Deduplicator {
    pub fn new(store: Arc<dyn Store>, ttl_secs: u64) -> Self {
        Self { store, ttl_secs }
    }

    /// Claim a signature. Returns `false` when the signature is already held,
    /// meaning the event is in flight or was already forwarded.
    pub async fn claim(&self, signature: &str) -> Result<bool, StoreError> {
        let key = format!("{CLAIM_PREFIX}{signature}");
        self.store.set_nx_ex(&key, "1", self.ttl_secs).await
    }
}
