use chrono::{DateTime, TimeDelta, Utc};
use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard},
};

use super::{cache_key, Clock, SystemClock};
use crate::model::ChunkBounds;

/// how long a presence result stays valid, in minutes.
pub const DEFAULT_TTL_MINUTES: i64 = 120;

#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry {
    pub result: bool,
    pub created_at: DateTime<Utc>,
}

/// time-expiring map from (chunk, taxa filter) to whether that chunk has any
/// matching observations.
///
/// entries are never swept in the background. an entry found to be stale on
/// lookup is removed and reported as a miss. the map has no size bound and
/// grows for the life of the cache. concurrent `put`s for the same key are
/// last-write-wins.
pub struct ObservationCache {
    entries: Mutex<HashMap<String, CacheEntry>>,
    ttl: TimeDelta,
    clock: Arc<dyn Clock>,
}

impl Default for ObservationCache {
    fn default() -> Self {
        Self::new(
            TimeDelta::minutes(DEFAULT_TTL_MINUTES),
            Arc::new(SystemClock),
        )
    }
}

impl ObservationCache {
    pub fn new(ttl: TimeDelta, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            ttl,
            clock,
        }
    }

    /// looks up a presence result, evicting it if it has outlived the ttl.
    pub fn get(&self, bounds: &ChunkBounds, taxa_ids: Option<&[i64]>) -> Option<bool> {
        let key = cache_key(bounds, taxa_ids);
        let now = self.clock.now();
        let mut entries = self.lock();
        match entries.get(&key) {
            Some(entry) if now - entry.created_at < self.ttl => {
                log::debug!("cache hit for chunk {bounds}");
                Some(entry.result)
            }
            Some(_) => {
                log::debug!("cache entry expired for chunk {bounds}");
                entries.remove(&key);
                None
            }
            None => {
                log::debug!("cache miss for chunk {bounds}");
                None
            }
        }
    }

    pub fn put(&self, bounds: &ChunkBounds, taxa_ids: Option<&[i64]>, value: bool) {
        let key = cache_key(bounds, taxa_ids);
        let entry = CacheEntry {
            result: value,
            created_at: self.clock.now(),
        };
        self.lock().insert(key, entry);
        log::debug!("cached result for chunk {bounds}: {value}");
    }

    /// number of stored entries, including stale ones not yet looked up.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, CacheEntry>> {
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}
