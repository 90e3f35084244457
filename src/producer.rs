//! Value producers invoked on cache misses.
//!
//! A producer computes the value for a key the cache does not hold yet. It has
//! three possible answers:
//!
//! - `Ok(Some(value))`: a usable value, which the cache stores.
//! - `Ok(None)`: the key has no value. Nothing is stored and the producer will
//!   be asked again on the next lookup for that key.
//! - `Err(e)`: the producer failed. The error goes back to the caller as is.
//!
//! Producers are held as `Arc<dyn Fn>` so the same producer can back several
//! caches and be compared by identity with [`Arc::ptr_eq`].
//!
//! # Mocking for Tests
//!
//! [`from_map`] builds a producer backed by a fixed table, handy when a test
//! needs to control exactly which keys have values:
//!
//! ```
//! use memo_kit::{producer, MemoCache};
//! use std::collections::HashMap;
//!
//! let table = HashMap::from([("alice".to_string(), 31u32)]);
//! let mut cache: MemoCache<String, u32> = MemoCache::with_producer(Some(producer::from_map(table)));
//!
//! assert_eq!(cache.lookup(&"alice".to_string()).unwrap(), Some(31));
//! assert_eq!(cache.lookup(&"bob".to_string()).unwrap(), None);
//! assert_eq!(cache.not_found(), 1);
//! ```

use crate::error::Error;
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;

/// Shared producer function: key to optional value, optionally failing.
pub type Producer<K, V, E = Error> =
    Arc<dyn Fn(&K) -> std::result::Result<Option<V>, E> + Send + Sync>;

/// Wrap a closure as a [`Producer`].
pub fn from_fn<K, V, E, F>(f: F) -> Producer<K, V, E>
where
    F: Fn(&K) -> std::result::Result<Option<V>, E> + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Wrap an infallible closure that always has a value.
pub fn total<K, V, E, F>(f: F) -> Producer<K, V, E>
where
    F: Fn(&K) -> V + Send + Sync + 'static,
{
    Arc::new(move |key: &K| Ok(Some(f(key))))
}

/// Wrap an infallible closure that may have no value for a key.
pub fn optional<K, V, E, F>(f: F) -> Producer<K, V, E>
where
    F: Fn(&K) -> Option<V> + Send + Sync + 'static,
{
    Arc::new(move |key: &K| Ok(f(key)))
}

/// Producer answering from a fixed table. Keys missing from the table have
/// no value.
pub fn from_map<K, V, E>(table: HashMap<K, V>) -> Producer<K, V, E>
where
    K: Eq + Hash + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    Arc::new(move |key: &K| Ok(table.get(key).cloned()))
}
