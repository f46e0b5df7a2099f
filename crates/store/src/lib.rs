//! Shared key-value store abstraction.
//!
//! The store is the only cross-invocation coordination point in the system:
//! dedup claims and wallet activity counters both live here. Implementations
//! must provide the two atomic primitives the pipeline relies on —
//! set-if-absent-with-expiry and increment-with-expiry.

use async_trait::async_trait;
use thiserror::Error;

/// Errors from store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store connection failed: {0}")]
    Connection(String),

    #[error("store operation failed: {0}")]
    Operation(String),
}

impl From<redis::RedisError> for StoreError {
    fn from(err: redis::RedisError) -> Self {
        if err.is_io_error()
            || err.is_timeout()
            || err.is_connection_refusal()
            || err.is_connection_dropped()
        {
            StoreError::Connection(err.to_string())
        } else {
            StoreError::Operation(err.to_string())
        }
    }
}

/// Key-value store with TTL-bound entries.
#[async_trait]
pub trait Store: Send + Sync {
    /// Atomic set-if-absent-with-expiry. Returns `true` if the key was set,
    /// `false` if it already existed. Never a check followed by a write.
    async fn set_nx_ex(&self, key: &str, value: &str, ttl_secs: u64) -> Result<bool, StoreError>;

    /// Atomic increment that re-arms the key's TTL. Returns the new value.
    /// A key that does not exist (or has expired) counts from zero.
    async fn incr_expire(&self, key: &str, ttl_secs: u64) -> Result<i64, StoreError>;

    /// Fetch a value; `None` if absent or expired.
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Whether a live entry exists for the key.
    async fn exists(&self, key: &str) -> Result<bool, StoreError>;
}

mod client;
mod memory;

pub use client::RedisStore;
pub use memory::MemoryStore;
