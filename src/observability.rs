//! Observability hooks for lookup outcomes.
//!
//! The counters kept by every cache answer "how effective is this cache".
//! [`CacheMetrics`] answers "what just happened": it is called once per lookup
//! with the outcome and, when the producer ran, how long it took.
//!
//! ```ignore
//! use memo_kit::observability::CacheMetrics;
//! use std::fmt::Debug;
//! use std::time::Duration;
//!
//! struct PrometheusMetrics;
//!
//! impl CacheMetrics for PrometheusMetrics {
//!     fn record_miss(&self, _key: &dyn Debug, duration: Duration) {
//!         // histogram!("producer_latency").record(duration);
//!     }
//! }
//!
//! let cache = MemoCache::new(producer).with_metrics(Box::new(PrometheusMetrics));
//! ```
//!
//! Hooks not overridden fall back to the default methods, which log via the
//! `log` crate. [`LogMetrics`] uses every default; [`NoOpMetrics`] (what a
//! cache starts with) records nothing.
//!
//! Keys are passed as `&dyn Debug`, so hooks stay independent of the cache's
//! key type.

use std::fmt::Debug;
use std::time::Duration;

/// Trait for lookup outcome collection.
pub trait CacheMetrics: Send + Sync {
    /// Record a lookup answered from the store.
    fn record_hit(&self, key: &dyn Debug) {
        debug!("Cache HIT: {:?}", key);
    }

    /// Record a lookup where the producer yielded a value that was cached.
    fn record_miss(&self, key: &dyn Debug, duration: Duration) {
        debug!("Cache MISS: {:?} produced in {:?}", key, duration);
    }

    /// Record a lookup where the producer yielded no value.
    fn record_not_found(&self, key: &dyn Debug, duration: Duration) {
        debug!("Cache NOT FOUND: {:?} after {:?}", key, duration);
    }

    /// Record a lookup rejected because the key was null.
    fn record_invalid_key(&self) {
        warn!("Cache lookup rejected: null key");
    }

    /// Record a producer failure. The error itself goes back to the caller.
    fn record_error(&self, key: &dyn Debug, duration: Duration) {
        warn!("Cache producer ERROR for {:?} after {:?}", key, duration);
    }
}

/// Metrics implementation that only logs, using every default method.
#[derive(Clone, Debug, Default)]
pub struct LogMetrics;

impl CacheMetrics for LogMetrics {}

/// Default metrics implementation (no-op).
#[derive(Clone, Debug, Default)]
pub struct NoOpMetrics;

impl CacheMetrics for NoOpMetrics {
    fn record_hit(&self, _key: &dyn Debug) {}
    fn record_miss(&self, _key: &dyn Debug, _duration: Duration) {}
    fn record_not_found(&self, _key: &dyn Debug, _duration: Duration) {}
    fn record_invalid_key(&self) {}
    fn record_error(&self, _key: &dyn Debug, _duration: Duration) {}
}
