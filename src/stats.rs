//! Lookup outcome counters.

use serde::{Deserialize, Serialize};

/// Running outcome counters owned by a cache.
///
/// `entries` is not stored here; it is always read from the store so the two
/// can never disagree.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct Counters {
    pub(crate) hits: u64,
    pub(crate) misses: u64,
    pub(crate) not_found: u64,
}

impl Counters {
    pub(crate) fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub(crate) fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub(crate) fn record_not_found(&mut self) {
        self.not_found += 1;
    }

    pub(crate) fn snapshot(&self, entries: usize) -> CacheStats {
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            not_found: self.not_found,
            entries,
        }
    }
}

/// Point-in-time view of a cache's statistics.
///
/// # Example
///
/// ```
/// use memo_kit::MemoCache;
///
/// let mut cache = MemoCache::from_fn(|key: &String| key.len());
/// cache.get(&"first".to_string()).unwrap();
/// cache.get(&"first".to_string()).unwrap();
///
/// let stats = cache.stats();
/// assert_eq!(stats.hits, 1);
/// assert_eq!(stats.misses, 1);
/// assert_eq!(stats.entries, 1);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheStats {
    /// Lookups answered from the store.
    pub hits: u64,
    /// Lookups where the producer yielded a value that is now cached.
    pub misses: u64,
    /// Lookups where the producer yielded no value.
    pub not_found: u64,
    /// Number of cached keys.
    pub entries: usize,
}

impl CacheStats {
    /// Total lookups that recorded an outcome.
    pub fn lookups(&self) -> u64 {
        self.hits + self.misses + self.not_found
    }

    /// Fraction of recorded lookups served from the store (0.0 to 1.0).
    pub fn hit_ratio(&self) -> f64 {
        let total = self.lookups();
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_snapshot() {
        let mut counters = Counters::default();
        counters.record_hit();
        counters.record_hit();
        counters.record_miss();
        counters.record_not_found();

        let stats = counters.snapshot(1);
        assert_eq!(stats.hits, 2);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.not_found, 1);
        assert_eq!(stats.entries, 1);
        assert_eq!(stats.lookups(), 4);
    }

    #[test]
    fn test_hit_ratio() {
        let stats = CacheStats {
            hits: 2,
            misses: 1,
            not_found: 1,
            entries: 1,
        };
        assert_eq!(stats.hit_ratio(), 0.5);
        assert_eq!(CacheStats::default().hit_ratio(), 0.0);
    }

    #[test]
    fn test_stats_json() {
        let stats = CacheStats {
            hits: 1,
            misses: 2,
            not_found: 0,
            entries: 2,
        };
        let json = serde_json::to_string(&stats).expect("Failed to serialize");
        assert_eq!(json, r#"{"hits":1,"misses":2,"not_found":0,"entries":2}"#);

        let back: CacheStats = serde_json::from_str(&json).expect("Failed to deserialize");
        assert_eq!(back, stats);
    }
}
