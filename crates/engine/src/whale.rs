//! Per-wallet activity tracking.

use std::sync::Arc;
use swapwatch_store::{Store, StoreError};

const WALLET_PREFIX: &str = "swap:wallet:";

/// Rolling activity counter per sender wallet.
///
/// Every touch increments the counter and re-arms its TTL, so sustained
/// activity keeps the window alive and the count growing. A gap longer than
/// the window expires the key and the count restarts from zero.
pub struct WalletActivityTracker {
    store: Arc<dyn Store>,
    window_secs: u64,
    whale_min_count: i64,
}

impl WalletActivityTracker {
    pub fn new(store: Arc<dyn Store>, window_secs: u64, whale_min_count: i64) -> Self {
        Self {
            store,
            window_secs,
            whale_min_count,
        }
    }

    /// Record activity for a wallet. Returns the count inclusive of this
    /// event.
    pub async fn touch(&self, wallet: &str) -> Result<i64, StoreError> {
        let key = format!("{WALLET_PREFIX}{wallet}");
        self.store.incr_expire(&key, self.window_secs).await
    }

    /// Whether a count qualifies the wallet as a whale.
    pub fn is_whale(&self, count: i64) -> bool {
        count >= self.whale_min_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swapwatch_store::MemoryStore;

    fn tracker(store: Arc<MemoryStore>) -> WalletActivityTracker {
        WalletActivityTracker::new(store, 3600, 2)
    }

    #[tokio::test]
    async fn test_touch_counts_per_wallet() {
        let store = Arc::new(MemoryStore::new());
        let tracker = tracker(store);

        assert_eq!(tracker.touch("w1").await.unwrap(), 1);
        assert_eq!(tracker.touch("w1").await.unwrap(), 2);
        assert_eq!(tracker.touch("w2").await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_whale_boundary() {
        let store = Arc::new(MemoryStore::new());
        let tracker = tracker(store);

        assert!(!tracker.is_whale(0));
        assert!(!tracker.is_whale(1));
        assert!(tracker.is_whale(2));
        assert!(tracker.is_whale(3));
    }

    #[tokio::test]
    async fn test_count_restarts_after_window() {
        let store = Arc::new(MemoryStore::new());
        let tracker = tracker(Arc::clone(&store));

        assert_eq!(tracker.touch("w1").await.unwrap(), 1);
        assert_eq!(tracker.touch("w1").await.unwrap(), 2);

        store.expire_now("swap:wallet:w1");
        assert_eq!(tracker.touch("w1").await.unwrap(), 1);
    }
}
