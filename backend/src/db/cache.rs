//! Keyed time-to-live cache.
//!
//! Entries are served while younger than the TTL and reloaded on the next
//! access afterwards. No lock is held while a loader runs: concurrent misses
//! may all load, and the last insert wins. Loaders are expected to be
//! idempotent, so any winner holds the same value.

use std::collections::HashMap;
use std::future::Future;
use std::hash::Hash;
use std::time::{Duration, Instant};

use log::debug;
use parking_lot::RwLock;

/// Default lifetime of a cached dataset.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(3600);

struct CacheEntry<V> {
    value: V,
    stored_at: Instant,
}

/// Keyed cache whose entries expire a fixed duration after insertion.
pub struct TtlCache<K, V> {
    ttl: Duration,
    entries: RwLock<HashMap<K, CacheEntry<V>>>,
}

impl<K, V> TtlCache<K, V>
where
    K: Eq + Hash + Clone + std::fmt::Debug,
    V: Clone,
{
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: RwLock::new(HashMap::new()),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Fresh value for `key`, if any.
    pub fn get(&self, key: &K) -> Option<V> {
        let entries = self.entries.read();
        entries
            .get(key)
            .filter(|entry| entry.stored_at.elapsed() < self.ttl)
            .map(|entry| entry.value.clone())
    }

    pub fn insert(&self, key: K, value: V) {
        self.entries.write().insert(
            key,
            CacheEntry {
                value,
                stored_at: Instant::now(),
            },
        );
    }

    /// Drop `key` so the next access reloads it.
    pub fn invalidate(&self, key: &K) {
        self.entries.write().remove(key);
    }

    pub fn invalidate_all(&self) {
        self.entries.write().clear();
    }

    /// Return the cached value or run `load` and cache its result.
    ///
    /// Errors from `load` are returned as-is and nothing is cached.
    pub async fn get_or_try_load<F, Fut, E>(&self, key: K, load: F) -> Result<V, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>>,
    {
        if let Some(value) = self.get(&key) {
            debug!("Cache hit for {:?}", key);
            return Ok(value);
        }

        debug!("Cache miss for {:?}, loading", key);
        let value = load().await?;
        self.insert(key, value.clone());
        Ok(value)
    }
}
