//! In-process store for tests and local runs.

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use crate::{Store, StoreError};

#[derive(Debug, Clone)]
struct MemEntry {
    value: String,
    expires_at: Instant,
}

impl MemEntry {
    fn is_expired(&self, now: Instant) -> bool {
        self.expires_at <= now
    }
}

/// DashMap-backed store with TTL simulation and an operation journal.
///
/// Per-key atomicity comes from the map's entry guard, matching the
/// guarantees the Redis backend gets from single commands. The journal
/// records every operation so tests can assert a run touched the store
/// exactly as expected (or not at all).
#[derive(Default)]
pub struct MemoryStore {
    entries: DashMap<String, MemEntry>,
    journal: Mutex<Vec<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&self, op: &str, key: &str) {
        self.lock_journal().push(format!("{op} {key}"));
    }

    fn lock_journal(&self) -> std::sync::MutexGuard<'_, Vec<String>> {
        match self.journal.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Every operation performed so far, in order, as `"op key"` strings.
    pub fn journal(&self) -> Vec<String> {
        self.lock_journal().clone()
    }

    /// Force a key's TTL to elapse immediately. Test hook for exercising
    /// expiry paths without waiting out real time.
    pub fn expire_now(&self, key: &str) {
        if let Some(mut entry) = self.entries.get_mut(key) {
            entry.expires_at = Instant::now();
        }
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn set_nx_ex(&self, key: &str, value: &str, ttl_secs: u64) -> Result<bool, StoreError> {
        self.record("set_nx_ex", key);
        let now = Instant::now();
        let fresh = MemEntry {
            value: value.to_string(),
            expires_at: now + Duration::from_secs(ttl_secs),
        };

        match self.entries.entry(key.to_string()) {
            Entry::Occupied(mut occupied) => {
                if occupied.get().is_expired(now) {
                    occupied.insert(fresh);
                    Ok(true)
                } else {
                    Ok(false)
                }
            }
            Entry::Vacant(vacant) => {
                vacant.insert(fresh);
                Ok(true)
            }
        }
    }

    async fn incr_expire(&self, key: &str, ttl_secs: u64) -> Result<i64, StoreError> {
        self.record("incr_expire", key);
        let now = Instant::now();

        let mut entry = self.entries.entry(key.to_string()).or_insert(MemEntry {
            value: "0".to_string(),
            expires_at: now + Duration::from_secs(ttl_secs),
        });
        if entry.is_expired(now) {
            entry.value = "0".to_string();
        }

        let count: i64 = entry
            .value
            .parse()
            .map_err(|_| StoreError::Operation(format!("value at {key} is not an integer")))?;
        let count = count + 1;

        entry.value = count.to_string();
        entry.expires_at = now + Duration::from_secs(ttl_secs);
        Ok(count)
    }

    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.record("get", key);
        let now = Instant::now();
        Ok(self
            .entries
            .get(key)
            .filter(|entry| !entry.is_expired(now))
            .map(|entry| entry.value.clone()))
    }

    async fn exists(&self, key: &str) -> Result<bool, StoreError> {
        self.record("exists", key);
        let now = Instant::now();
        Ok(self
            .entries
            .get(key)
            .is_some_and(|entry| !entry.is_expired(now)))
    }
}
