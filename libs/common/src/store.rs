//! Key-value store used to persist session blobs
//!
//! `KvStore` hides whether the blobs live in Redis or in process memory.
//! The in-memory variant is used for local runs and tests.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tracing::debug;

use crate::cache::RedisPool;
use crate::error::StoreResult;

/// Stored value with an optional expiry
#[derive(Debug)]
struct MemoryEntry {
    value: String,
    expires_at: Option<Instant>,
}

impl MemoryEntry {
    fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|expires_at| now >= expires_at)
    }
}

/// In-process key-value store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, MemoryEntry>>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a key-value pair with optional TTL
    ///
    /// Expired entries are purged on every write.
    pub async fn set(&self, key: &str, value: &str, ttl_seconds: Option<u64>) {
        let mut entries = self.entries.lock().await;
        let now = Instant::now();

        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired(now));
        let purged = before - entries.len();
        if purged > 0 {
            debug!("Purged {} expired keys", purged);
        }

        let expires_at = ttl_seconds.map(|ttl| now + Duration::from_secs(ttl));
        entries.insert(
            key.to_string(),
            MemoryEntry {
                value: value.to_string(),
                expires_at,
            },
        );
    }

    /// Get a value by key, dropping it if it has expired
    pub async fn get(&self, key: &str) -> Option<String> {
        let mut entries = self.entries.lock().await;

        let expired = match entries.get(key) {
            Some(entry) => entry.is_expired(Instant::now()),
            None => return None,
        };

        if expired {
            debug!("Evicting expired key: {}", key);
            entries.remove(key);
            return None;
        }

        entries.get(key).map(|entry| entry.value.clone())
    }

    /// Delete a key
    pub async fn delete(&self, key: &str) {
        self.entries.lock().await.remove(key);
    }
}

/// Key-value store backend
#[derive(Clone)]
pub enum KvStore {
    /// Redis-backed store
    Redis(RedisPool),
    /// Process-local store
    Memory(MemoryStore),
}

impl KvStore {
    /// Convenience constructor for an empty in-memory store
    pub fn memory() -> Self {
        KvStore::Memory(MemoryStore::new())
    }

    /// Set a key-value pair with optional TTL
    pub async fn set(&self, key: &str, value: &str, ttl_seconds: Option<u64>) -> StoreResult<()> {
        match self {
            KvStore::Redis(pool) => pool.set(key, value, ttl_seconds).await,
            KvStore::Memory(store) => {
                store.set(key, value, ttl_seconds).await;
                Ok(())
            }
        }
    }

    /// Get a value by key
    pub async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        match self {
            KvStore::Redis(pool) => pool.get(key).await,
            KvStore::Memory(store) => Ok(store.get(key).await),
        }
    }

    /// Delete a key
    pub async fn delete(&self, key: &str) -> StoreResult<()> {
        match self {
            KvStore::Redis(pool) => pool.delete(key).await,
            KvStore::Memory(store) => {
                store.delete(key).await;
                Ok(())
            }
        }
    }

    /// Check if the backend is reachable
    pub async fn health_check(&self) -> StoreResult<bool> {
        match self {
            KvStore::Redis(pool) => pool.health_check().await,
            KvStore::Memory(_) => Ok(true),
        }
    }

    /// Short backend name for logs
    pub fn backend_name(&self) -> &'static str {
        match self {
            KvStore::Redis(_) => "redis",
            KvStore::Memory(_) => "memory",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_set_get_delete() -> StoreResult<()> {
        let store = KvStore::memory();

        store.set("key", "value", None).await?;
        assert_eq!(store.get("key").await?, Some("value".to_string()));

        store.set("key", "other", None).await?;
        assert_eq!(store.get("key").await?, Some("other".to_string()));

        store.delete("key").await?;
        assert_eq!(store.get("key").await?, None);

        Ok(())
    }

    #[tokio::test]
    async fn test_memory_expired_entry_is_absent() {
        let store = MemoryStore::new();
        store.set("short", "lived", Some(0)).await;
        assert_eq!(store.get("short").await, None);
    }

    #[tokio::test]
    async fn test_memory_write_purges_abandoned_entries() {
        let store = MemoryStore::new();
        store.set("abandoned:1", "stale", Some(0)).await;
        store.set("abandoned:2", "stale", Some(0)).await;
        store.set("kept", "fresh", Some(60)).await;

        let entries = store.entries.lock().await;
        assert_eq!(entries.len(), 1);
        assert!(entries.contains_key("kept"));
    }

    #[tokio::test]
    async fn test_memory_clones_share_entries() {
        let store = MemoryStore::new();
        let clone = store.clone();
        store.set("shared", "yes", None).await;
        assert_eq!(clone.get("shared").await, Some("yes".to_string()));
    }

    #[tokio::test]
    async fn test_memory_health_check() -> StoreResult<()> {
        let store = KvStore::memory();
        assert!(store.health_check().await?);
        assert_eq!(store.backend_name(), "memory");
        Ok(())
    }
}
