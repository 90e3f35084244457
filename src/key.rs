//! Cache key requirements and null-key detection.

use std::fmt::Debug;
use std::hash::Hash;
use std::rc::Rc;
use std::sync::Arc;

/// Trait that every key of a [`MemoCache`](crate::MemoCache) must implement.
///
/// Rust references are never null, so a key type declares its own null value
/// through [`is_null`](CacheKey::is_null). Looking up a null key fails with
/// [`Error::InvalidArgument`](crate::Error::InvalidArgument) no matter what the
/// cache holds.
///
/// `Option<T>` treats `None` as null. Strings, integers, `char` and `bool` have
/// no null value.
///
/// # Example
///
/// ```
/// use memo_kit::CacheKey;
///
/// #[derive(Clone, Debug, PartialEq, Eq, Hash)]
/// struct AccountId(u64);
///
/// impl CacheKey for AccountId {
///     fn is_null(&self) -> bool {
///         self.0 == 0
///     }
/// }
///
/// assert!(AccountId(0).is_null());
/// assert!(!Some("x").is_null());
/// assert!(None::<&str>.is_null());
/// ```
pub trait CacheKey: Eq + Hash + Clone + Debug {
    /// Return true if this key is the null key for its type.
    fn is_null(&self) -> bool {
        false
    }
}

impl<T: CacheKey> CacheKey for Option<T> {
    fn is_null(&self) -> bool {
        match self {
            Some(inner) => inner.is_null(),
            None => true,
        }
    }
}

impl<T: CacheKey> CacheKey for Box<T> {
    fn is_null(&self) -> bool {
        (**self).is_null()
    }
}

impl<T: CacheKey> CacheKey for Rc<T> {
    fn is_null(&self) -> bool {
        (**self).is_null()
    }
}

impl<T: CacheKey> CacheKey for Arc<T> {
    fn is_null(&self) -> bool {
        (**self).is_null()
    }
}

impl CacheKey for &str {}

macro_rules! never_null {
    ($($ty:ty),* $(,)?) => {
        $(impl CacheKey for $ty {})*
    };
}

never_null!(
    String, char, bool, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize,
);

impl<A: CacheKey, B: CacheKey> CacheKey for (A, B) {
    fn is_null(&self) -> bool {
        self.0.is_null() || self.1.is_null()
    }
}
