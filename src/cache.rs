//! Traits shared by cache implementations.
//!
//! [`Cache`] is the lookup-plus-introspection surface and [`HitStats`] the
//! counter surface. Code that only reports on cache effectiveness can take
//! `&impl HitStats` and work with both [`MemoCache`] and
//! [`SharedMemoCache`](crate::SharedMemoCache).

use crate::error::Error;
use crate::key::CacheKey;
use crate::memo::MemoCache;
use crate::stats::CacheStats;

/// Trait for key/value caches that fill themselves on lookup.
pub trait Cache<K, V> {
    /// Error returned by lookups.
    type Error;

    /// Return the value for `key`, computing it on a miss.
    ///
    /// # Errors
    ///
    /// Returns `Err` for a null key or when computing the value fails.
    fn lookup(&mut self, key: &K) -> std::result::Result<Option<V>, Self::Error>;

    /// Return the value for `key`, or `V::default()` when there is none.
    ///
    /// # Errors
    ///
    /// Same as [`lookup`](Cache::lookup).
    fn get(&mut self, key: &K) -> std::result::Result<V, Self::Error>
    where
        V: Default,
    {
        Ok(self.lookup(key)?.unwrap_or_default())
    }

    /// Check if `key` is cached.
    fn contains_key(&self, key: &K) -> bool;

    /// Number of cached keys.
    fn len(&self) -> usize;

    /// Check if the cache holds no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over cached keys.
    fn keys<'a>(&'a self) -> Box<dyn Iterator<Item = &'a K> + 'a>;

    /// Iterate over cached values.
    fn values<'a>(&'a self) -> Box<dyn Iterator<Item = &'a V> + 'a>;
}

/// Trait exposing lookup outcome counters.
pub trait HitStats {
    /// Lookups answered from the store.
    fn hits(&self) -> u64;

    /// Lookups whose produced value was cached.
    fn misses(&self) -> u64;

    /// Lookups whose producer had no value.
    fn not_found(&self) -> u64;

    /// Number of cached keys.
    fn entries(&self) -> usize;

    /// Snapshot of all counters.
    fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits(),
            misses: self.misses(),
            not_found: self.not_found(),
            entries: self.entries(),
        }
    }
}

impl<K, V, E> Cache<K, V> for MemoCache<K, V, E>
where
    K: CacheKey,
    V: Clone,
    E: From<Error>,
{
    type Error = E;

    fn lookup(&mut self, key: &K) -> std::result::Result<Option<V>, E> {
        MemoCache::lookup(self, key)
    }

    fn contains_key(&self, key: &K) -> bool {
        MemoCache::contains_key(self, key)
    }

    fn len(&self) -> usize {
        MemoCache::len(self)
    }

    fn keys<'a>(&'a self) -> Box<dyn Iterator<Item = &'a K> + 'a> {
        Box::new(MemoCache::keys(self))
    }

    fn values<'a>(&'a self) -> Box<dyn Iterator<Item = &'a V> + 'a> {
        Box::new(MemoCache::values(self))
    }
}

impl<K, V, E> HitStats for MemoCache<K, V, E> {
    fn hits(&self) -> u64 {
        MemoCache::hits(self)
    }

    fn misses(&self) -> u64 {
        MemoCache::misses(self)
    }

    fn not_found(&self) -> u64 {
        MemoCache::not_found(self)
    }

    fn entries(&self) -> usize {
        MemoCache::entries(self)
    }

    fn stats(&self) -> CacheStats {
        MemoCache::stats(self)
    }
}
