//! # memo-kit
//!
//! A lazily-populated memoizing cache with usage statistics.
//!
//! ## Features
//!
//! - **Compute Once:** A value is produced at most once per key and reused afterwards
//! - **Explicit Absence:** Producers can answer "no value", which is never cached
//! - **Outcome Statistics:** Hits, misses, not-found lookups and entry counts
//! - **Untouched Errors:** Producer errors reach the caller exactly as returned
//! - **Shareable:** [`SharedMemoCache`] for use across threads
//!
//! ## Quick Start
//!
//! ```
//! use memo_kit::MemoCache;
//!
//! // 1. Create cache with a producer
//! let mut cache = MemoCache::from_fn(|word: &String| word.len());
//!
//! // 2. First lookup runs the producer
//! assert_eq!(cache.get(&"first".to_string()).unwrap(), 5);
//!
//! // 3. Second lookup is served from the cache
//! assert_eq!(cache.get(&"first".to_string()).unwrap(), 5);
//! assert_eq!((cache.hits(), cache.misses()), (1, 1));
//! ```
//!
//! ### Producers without a value
//!
//! ```
//! use memo_kit::{Error, MemoCache};
//!
//! let mut cache = MemoCache::new(|word: &String| {
//!     if word.eq_ignore_ascii_case("null") {
//!         Ok::<_, Error>(None)
//!     } else {
//!         Ok(Some(word.len().to_string()))
//!     }
//! });
//!
//! assert_eq!(cache.lookup(&"null".to_string()).unwrap(), None);
//! assert_eq!(cache.not_found(), 1);
//! assert!(cache.is_empty());
//! ```
//!
//! ### Null keys
//!
//! ```
//! use memo_kit::{Error, MemoCache};
//!
//! let mut cache = MemoCache::from_fn(|word: &Option<String>| word.as_ref().map_or(0, String::len));
//! assert!(matches!(cache.get(&None), Err(Error::InvalidArgument(_))));
//! ```

#[macro_use]
extern crate log;

pub mod cache;
pub mod error;
pub mod filter;
pub mod key;
pub mod memo;
pub mod observability;
pub mod producer;
pub mod service;
pub mod stats;

// Re-exports for convenience
pub use cache::{Cache, HitStats};
pub use error::{Error, Result};
pub use filter::{Criteria, WhiteList};
pub use key::CacheKey;
pub use memo::MemoCache;
pub use producer::Producer;
pub use service::SharedMemoCache;
pub use stats::CacheStats;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
