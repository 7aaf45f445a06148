use std::collections::hash_set;
use std::collections::HashSet;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::serializable::Serializable;
use crate::traits::{Collection, Set};

/// A hash-backed set that is serializable by construction.
#[derive(Clone, Debug)]
#[derive(Eq, PartialEq)]
#[derive(Serialize, Deserialize)]
#[serde(bound = "")]
pub struct SerHashSet<T: Serializable + Eq + Hash> {
    inner: HashSet<T>,
}

impl<T: Serializable + Eq + Hash> SerHashSet<T> {
    pub fn new() -> Self {
        Self {
            inner: HashSet::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: HashSet::with_capacity(capacity),
        }
    }

    /// Returns `true` if the value was not yet present.
    pub fn insert(&mut self, value: T) -> bool {
        self.inner.insert(value)
    }

    pub fn remove(&mut self, value: &T) -> bool {
        self.inner.remove(value)
    }

    pub fn contains(&self, value: &T) -> bool {
        self.inner.contains(value)
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }

    pub fn retain<F: FnMut(&T) -> bool>(&mut self, f: F) {
        self.inner.retain(f);
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> hash_set::Iter<'_, T> {
        self.inner.iter()
    }
}

impl<T: Serializable + Eq + Hash> Default for SerHashSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Serializable + Eq + Hash> From<HashSet<T>> for SerHashSet<T> {
    fn from(inner: HashSet<T>) -> Self {
        Self { inner }
    }
}

impl<T: Serializable + Eq + Hash> FromIterator<T> for SerHashSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}

impl<T: Serializable + Eq + Hash> Extend<T> for SerHashSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.inner.extend(iter);
    }
}

impl<'a, T: Serializable + Eq + Hash> IntoIterator for &'a SerHashSet<T> {
    type Item = &'a T;
    type IntoIter = hash_set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

impl<T: Serializable + Eq + Hash> Collection<T> for SerHashSet<T> {
    fn len(&self) -> usize {
        self.inner.len()
    }

    fn contains(&self, value: &T) -> bool {
        self.inner.contains(value)
    }

    fn to_vec(&self) -> Vec<T> {
        self.inner.iter().cloned().collect()
    }
}

impl<T: Serializable + Eq + Hash> Set<T> for SerHashSet<T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deduplicates() {
        let mut set = SerHashSet::new();
        assert!(set.insert("Frodo".to_string()));
        assert!(!set.insert("Frodo".to_string()));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn remove_and_contains() {
        let mut set: SerHashSet<i32> = (0..4).collect();
        assert!(set.contains(&2));
        assert!(set.remove(&2));
        assert!(!set.contains(&2));
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn byte_round_trip() {
        let set: SerHashSet<String> = ["A", "B"].iter().map(|s| s.to_string()).collect();
        let back = SerHashSet::from_bytes(set.to_bytes().unwrap()).unwrap();
        assert_eq!(set, back);
    }
}
