//! Memoizing cache - main entry point for lookups.

use crate::error::Error;
use crate::key::CacheKey;
use crate::observability::{CacheMetrics, NoOpMetrics};
use crate::producer::{self, Producer};
use crate::stats::{CacheStats, Counters};
use std::collections::hash_map::{self, HashMap};
use std::fmt;
use std::time::Instant;

/// Lazily-populated memoizing cache.
///
/// On a lookup the cache returns the stored value for a key, or asks its
/// producer for one and stores the answer. Every production is recorded as a
/// miss (value stored) or a not-found (no value, nothing stored); answers from
/// the store are recorded as hits. Entries are never evicted or replaced.
///
/// `E` is the producer's error type. It must absorb the cache's own
/// [`Error`], which is only ever [`Error::InvalidArgument`] for a null key.
///
/// # Example
///
/// ```
/// use memo_kit::MemoCache;
///
/// let mut cache = MemoCache::from_fn(|key: &String| key.len());
///
/// assert_eq!(cache.get(&"first".to_string()).unwrap(), 5);
/// assert_eq!(cache.get(&"second".to_string()).unwrap(), 6);
/// assert_eq!(cache.get(&"first".to_string()).unwrap(), 5);
///
/// assert_eq!(cache.hits(), 1);
/// assert_eq!(cache.misses(), 2);
/// assert_eq!(cache.len(), 2);
/// ```
pub struct MemoCache<K, V, E = Error> {
    store: HashMap<K, V>,
    producer: Option<Producer<K, V, E>>,
    counters: Counters,
    metrics: Box<dyn CacheMetrics>,
}

impl<K, V> MemoCache<K, V, Error> {
    /// Create a cache with no producer.
    ///
    /// Such a cache never stores anything: lookups of absent keys yield no
    /// value and record no outcome.
    pub fn without_producer() -> Self {
        Self::with_producer(None)
    }

    /// Create a cache whose producer always has a value for a key.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(&K) -> V + Send + Sync + 'static,
    {
        Self::with_producer(Some(producer::total(f)))
    }
}

impl<K, V, E> MemoCache<K, V, E> {
    /// Create a cache backed by the given producer closure.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&K) -> std::result::Result<Option<V>, E> + Send + Sync + 'static,
    {
        Self::with_producer(Some(producer::from_fn(f)))
    }

    /// Create a cache from an optional, possibly shared, producer.
    pub fn with_producer(producer: Option<Producer<K, V, E>>) -> Self {
        MemoCache {
            store: HashMap::new(),
            producer,
            counters: Counters::default(),
            metrics: Box::new(NoOpMetrics),
        }
    }

    /// Set custom metrics handler.
    pub fn with_metrics(mut self, metrics: Box<dyn CacheMetrics>) -> Self {
        self.metrics = metrics;
        self
    }

    /// The configured producer, if any.
    ///
    /// Exposed for identity checks (`Arc::ptr_eq`); call [`lookup`](Self::lookup)
    /// to produce values.
    pub fn producer(&self) -> Option<&Producer<K, V, E>> {
        self.producer.as_ref()
    }

    /// Number of cached keys.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Same as [`len`](Self::len).
    pub fn entries(&self) -> usize {
        self.store.len()
    }

    /// Check if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Iterate over cached keys, in no particular order.
    ///
    /// Each call starts a fresh pass over the current entries.
    pub fn keys(&self) -> hash_map::Keys<'_, K, V> {
        self.store.keys()
    }

    /// Iterate over cached values, in no particular order.
    pub fn values(&self) -> hash_map::Values<'_, K, V> {
        self.store.values()
    }

    /// Lookups answered from the store since construction.
    pub fn hits(&self) -> u64 {
        self.counters.hits
    }

    /// Lookups whose produced value was cached since construction.
    pub fn misses(&self) -> u64 {
        self.counters.misses
    }

    /// Lookups whose producer had no value since construction.
    pub fn not_found(&self) -> u64 {
        self.counters.not_found
    }

    /// Snapshot of all counters.
    pub fn stats(&self) -> CacheStats {
        self.counters.snapshot(self.store.len())
    }

    /// Print cache statistics to debug log.
    pub fn log_stats(&self) {
        let stats = self.stats();
        debug!(
            "Cache Stats: {} entries, {} hits, {} misses, {} not found (hit ratio {:.2})",
            stats.entries,
            stats.hits,
            stats.misses,
            stats.not_found,
            stats.hit_ratio()
        );
    }
}

impl<K, V, E> MemoCache<K, V, E>
where
    K: CacheKey,
    V: Clone,
    E: From<Error>,
{
    /// Check if `key` is cached. Does not touch the counters or the producer.
    ///
    /// A lookup may add the key, so call this first to observe membership
    /// before a lookup.
    pub fn contains_key(&self, key: &K) -> bool {
        self.store.contains_key(key)
    }

    /// Return the value for `key`, producing and caching it if needed.
    ///
    /// - Cached: counts a hit and returns the stored value.
    /// - Not cached, no producer: returns `None`, records nothing.
    /// - Producer has a value: stores it, counts a miss, returns it.
    /// - Producer has no value: counts a not-found, returns `None`.
    ///
    /// # Errors
    ///
    /// - `Error::InvalidArgument` (converted into `E`) if `key` is null. This is
    ///   checked first and leaves the cache untouched.
    /// - Any error returned by the producer, unchanged. No outcome is counted
    ///   and nothing is stored.
    pub fn lookup(&mut self, key: &K) -> std::result::Result<Option<V>, E> {
        if key.is_null() {
            self.metrics.record_invalid_key();
            return Err(Error::null_key().into());
        }

        if let Some(value) = self.store.get(key) {
            self.counters.record_hit();
            self.metrics.record_hit(key);
            return Ok(Some(value.clone()));
        }

        let Some(producer) = self.producer.as_ref() else {
            trace!("No producer configured, {:?} passes through", key);
            return Ok(None);
        };

        let timer = Instant::now();
        let produced = match producer(key) {
            Ok(produced) => produced,
            Err(e) => {
                self.metrics.record_error(key, timer.elapsed());
                return Err(e);
            }
        };

        match produced {
            Some(value) => {
                self.store.insert(key.clone(), value.clone());
                self.counters.record_miss();
                self.metrics.record_miss(key, timer.elapsed());
                Ok(Some(value))
            }
            None => {
                self.counters.record_not_found();
                self.metrics.record_not_found(key, timer.elapsed());
                Ok(None)
            }
        }
    }

    /// Like [`lookup`](Self::lookup), but an absent value comes back as
    /// `V::default()` (`0`, `""`, ...).
    ///
    /// A produced value equal to the default is indistinguishable from no
    /// value here; use `lookup` when that matters.
    ///
    /// # Errors
    ///
    /// Same as [`lookup`](Self::lookup).
    pub fn get(&mut self, key: &K) -> std::result::Result<V, E>
    where
        V: Default,
    {
        self.lookup(key).map(Option::unwrap_or_default)
    }
}

impl<K, V, E> Default for MemoCache<K, V, E> {
    fn default() -> Self {
        Self::with_producer(None)
    }
}

impl<K: fmt::Debug, V: fmt::Debug, E> fmt::Debug for MemoCache<K, V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoCache")
            .field("store", &self.store)
            .field("has_producer", &self.producer.is_some())
            .field("stats", &self.stats())
            .finish()
    }
}
