//! Membership filters.

/// Trait for predicates that accept or reject candidates.
pub trait Criteria<T> {
    /// Return true if `candidate` passes.
    fn meets_criteria(&self, candidate: &T) -> bool;

    /// Keep only the passing candidates, preserving input order.
    fn filter<I>(&self, candidates: I) -> Vec<T>
    where
        I: IntoIterator<Item = T>,
    {
        candidates
            .into_iter()
            .filter(|candidate| self.meets_criteria(candidate))
            .collect()
    }
}

/// Fixed set of allowed values.
///
/// An empty whitelist allows everything.
///
/// # Example
///
/// ```
/// use memo_kit::filter::{Criteria, WhiteList};
///
/// let allowed = WhiteList::from(vec!["alpha", "gamma"]);
/// assert!(allowed.meets_criteria(&"alpha"));
/// assert!(!allowed.meets_criteria(&"beta"));
/// assert_eq!(allowed.filter(["gamma", "beta", "alpha"]), vec!["gamma", "alpha"]);
///
/// let open: WhiteList<&str> = WhiteList::new();
/// assert_eq!(open.filter(["beta"]), vec!["beta"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WhiteList<T> {
    items: Vec<T>,
}

impl<T> WhiteList<T> {
    /// Create an empty whitelist, which allows everything.
    pub fn new() -> Self {
        WhiteList { items: Vec::new() }
    }

    /// Add an allowed value.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Number of allowed values.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if no values are listed (everything passes).
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over the allowed values.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T: PartialEq> WhiteList<T> {
    /// Check if `item` is listed, ignoring the empty-allows-all rule.
    pub fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }
}

impl<T: PartialEq> Criteria<T> for WhiteList<T> {
    fn meets_criteria(&self, candidate: &T) -> bool {
        self.items.is_empty() || self.items.contains(candidate)
    }

    fn filter<I>(&self, candidates: I) -> Vec<T>
    where
        I: IntoIterator<Item = T>,
    {
        if self.items.is_empty() {
            return candidates.into_iter().collect();
        }
        candidates
            .into_iter()
            .filter(|candidate| self.items.contains(candidate))
            .collect()
    }
}

impl<T> From<Vec<T>> for WhiteList<T> {
    fn from(items: Vec<T>) -> Self {
        WhiteList { items }
    }
}

impl<T> FromIterator<T> for WhiteList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        WhiteList {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for WhiteList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<'a, T> IntoIterator for &'a WhiteList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
