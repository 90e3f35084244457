//! Thread-shareable memoizing cache.
//!
//! Provides a convenient wrapper around [`MemoCache`] with `Arc` for easy sharing.

use crate::cache::HitStats;
use crate::error::Error;
use crate::key::CacheKey;
use crate::memo::MemoCache;
use crate::stats::CacheStats;
use parking_lot::Mutex;
use std::sync::Arc;

/// Memoizing cache that can be cloned across threads.
///
/// Wraps `MemoCache` in `Arc<Mutex<_>>`. One lock guards the store and the
/// counters together, so each lookup is recorded exactly once and a producer
/// runs at most once per key even under contention. The producer runs while
/// the lock is held: a slow producer serialises all lookups.
///
/// # Example
///
/// ```
/// use memo_kit::{MemoCache, SharedMemoCache};
/// use std::thread;
///
/// let cache = SharedMemoCache::new(MemoCache::from_fn(|key: &u64| key * 2));
///
/// let handles: Vec<_> = (0..4)
///     .map(|_| {
///         let cache = cache.clone(); // Cheap - just Arc increment
///         thread::spawn(move || cache.get(&21).unwrap())
///     })
///     .collect();
///
/// for handle in handles {
///     assert_eq!(handle.join().unwrap(), 42);
/// }
/// assert_eq!(cache.stats().misses, 1);
/// assert_eq!(cache.stats().hits, 3);
/// ```
pub struct SharedMemoCache<K, V, E = Error> {
    inner: Arc<Mutex<MemoCache<K, V, E>>>,
}

impl<K, V, E> Clone for SharedMemoCache<K, V, E> {
    fn clone(&self) -> Self {
        SharedMemoCache {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<K, V, E> SharedMemoCache<K, V, E> {
    /// Share an existing cache.
    pub fn new(cache: MemoCache<K, V, E>) -> Self {
        SharedMemoCache {
            inner: Arc::new(Mutex::new(cache)),
        }
    }

    /// Run `f` against the cache while holding the lock.
    ///
    /// Use for read-only inspection that needs a consistent view across
    /// several calls.
    pub fn inspect<R>(&self, f: impl FnOnce(&MemoCache<K, V, E>) -> R) -> R {
        f(&self.inner.lock())
    }

    /// Number of cached keys.
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Check if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Snapshot of all counters.
    pub fn stats(&self) -> CacheStats {
        self.inner.lock().stats()
    }

    /// Print cache statistics to debug log.
    pub fn log_stats(&self) {
        self.inner.lock().log_stats();
    }
}

impl<K, V, E> SharedMemoCache<K, V, E>
where
    K: CacheKey,
    V: Clone,
    E: From<Error>,
{
    /// Check if `key` is cached.
    pub fn contains_key(&self, key: &K) -> bool {
        self.inner.lock().contains_key(key)
    }

    /// Return the value for `key`, producing and caching it if needed.
    ///
    /// # Errors
    ///
    /// Same as [`MemoCache::lookup`].
    pub fn lookup(&self, key: &K) -> std::result::Result<Option<V>, E> {
        self.inner.lock().lookup(key)
    }

    /// Return the value for `key`, or `V::default()` when there is none.
    ///
    /// # Errors
    ///
    /// Same as [`MemoCache::lookup`].
    pub fn get(&self, key: &K) -> std::result::Result<V, E>
    where
        V: Default,
    {
        self.inner.lock().get(key)
    }

    /// Snapshot of the cached keys.
    pub fn keys(&self) -> Vec<K> {
        self.inner.lock().keys().cloned().collect()
    }

    /// Snapshot of the cached values.
    pub fn values(&self) -> Vec<V> {
        self.inner.lock().values().cloned().collect()
    }
}

impl<K, V, E> From<MemoCache<K, V, E>> for SharedMemoCache<K, V, E> {
    fn from(cache: MemoCache<K, V, E>) -> Self {
        Self::new(cache)
    }
}

impl<K, V, E> HitStats for SharedMemoCache<K, V, E> {
    fn hits(&self) -> u64 {
        self.inner.lock().hits()
    }

    fn misses(&self) -> u64 {
        self.inner.lock().misses()
    }

    fn not_found(&self) -> u64 {
        self.inner.lock().not_found()
    }

    fn entries(&self) -> usize {
        self.inner.lock().entries()
    }

    fn stats(&self) -> CacheStats {
        SharedMemoCache::stats(self)
    }
}
