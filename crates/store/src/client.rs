//! Redis-backed store.

use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::AsyncCommands;

use crate::{Store, StoreError};

/// Store backed by a single multiplexed Redis connection.
///
/// The connection handle is cheap to clone; each operation clones it rather
/// than locking.
pub struct RedisStore {
    connection: MultiplexedConnection,
}

impl RedisStore {
    /// Connect to Redis at the given URL (e.g. `redis://localhost:6379`).
    pub async fn connect(url: &str) -> Result<Self, StoreError> {
        let client =
            redis::Client::open(url).map_err(|e| StoreError::Connection(e.to_string()))?;
        let connection = client.get_multiplexed_async_connection().await?;
        Ok(Self { connection })
    }
}

#[async_trait]
impl Store for RedisStore {
    async fn set_nx_ex(&self, key: &str, value: &str, ttl_secs: u64) -> Result<bool, StoreError> {
        let mut conn = self.connection.clone();

        // SET with EX and NX in one command; a separate EXISTS check would
        // admit a race between concurrent claimers.
        let result: Option<String> = redis::cmd("SET")
            .arg(key)
            .arg(value)
            .arg("EX")
            .arg(ttl_secs)
            .arg("NX")
            .query_async(&mut conn)
            .await?;

        Ok(result.is_some())
    }

    async fn incr_expire(&self, key: &str, ttl_secs: u64) -> Result<i64, StoreError> {
        let mut conn = self.connection.clone();

        let mut pipe = redis::pipe();
        pipe.atomic();
        pipe.cmd("INCR").arg(key);
        pipe.cmd("EXPIRE").arg(key).arg(ttl_secs).ignore();

        let (count,): (i64,) = pipe.query_async(&mut conn).await?;
        Ok(count)
    }

    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let mut conn = self.connection.clone();
        let value: Option<String> = conn.get(key).await?;
        Ok(value)
    }

    async fn exists(&self, key: &str) -> Result<bool, StoreError> {
        let mut conn = self.connection.clone();
        let found: bool = conn.exists(key).await?;
        Ok(found)
    }
}
