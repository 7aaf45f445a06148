use std::collections::hash_set;
use std::collections::HashSet;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::serializable::Serializable;
use crate::traits::{Collection, Set};
use crate::{Error, Result};

/// An unmodifiable, serializable hash-backed set. Built by copy-in; every
/// mutating operation fails with [`Error::UnsupportedOperation`].
#[derive(Clone, Debug)]
#[derive(Eq, PartialEq)]
#[derive(Serialize, Deserialize)]
#[serde(bound = "")]
pub struct UnmodifiableSet<T: Serializable + Eq + Hash> {
    inner: HashSet<T>,
}

impl<T: Serializable + Eq + Hash> UnmodifiableSet<T> {
    pub fn new() -> Self {
        Self {
            inner: HashSet::new(),
        }
    }

    pub fn singleton(value: T) -> Self {
        let mut inner = HashSet::with_capacity(1);
        inner.insert(value);
        Self { inner }
    }

    /// Copies every element of `source` into a private backing store.
    /// Duplicates collapse as in any set.
    pub fn copy_of<I: IntoIterator<Item = T>>(source: I) -> Self {
        Self {
            inner: source.into_iter().collect(),
        }
    }

    pub fn contains(&self, value: &T) -> bool {
        self.inner.contains(value)
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

    pub fn insert(&mut self, _value: T) -> Result<bool> {
        Err(Error::UnsupportedOperation("insert"))
    }

    pub fn remove(&mut self, _value: &T) -> Result<bool> {
        Err(Error::UnsupportedOperation("remove"))
    }

    pub fn clear(&mut self) -> Result<()> {
        Err(Error::UnsupportedOperation("clear"))
    }

    pub fn retain<F: FnMut(&T) -> bool>(&mut self, _f: F) -> Result<()> {
        Err(Error::UnsupportedOperation("retain"))
    }

    pub fn extend_from<I: IntoIterator<Item = T>>(&mut self, _source: I) -> Result<()> {
        Err(Error::UnsupportedOperation("extend_from"))
    }
}

impl<T: Serializable + Eq + Hash> Default for UnmodifiableSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T: Serializable + Eq + Hash> IntoIterator for &'a UnmodifiableSet<T> {
    type Item = &'a T;
    type IntoIter = hash_set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

impl<T: Serializable + Eq + Hash> Collection<T> for UnmodifiableSet<T> {
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

impl<T: Serializable + Eq + Hash> Set<T> for UnmodifiableSet<T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_every_mutation_and_keeps_content() {
        let mut set = UnmodifiableSet::copy_of(["A".to_string(), "B".to_string()]);

        assert!(matches!(
            set.insert("C".to_string()),
            Err(Error::UnsupportedOperation(_))
        ));
        assert!(matches!(
            set.remove(&"A".to_string()),
            Err(Error::UnsupportedOperation(_))
        ));
        assert!(matches!(set.clear(), Err(Error::UnsupportedOperation(_))));
        assert!(matches!(
            set.retain(|_| false),
            Err(Error::UnsupportedOperation(_))
        ));
        assert!(matches!(
            set.extend_from(vec!["C".to_string()]),
            Err(Error::UnsupportedOperation(_))
        ));

        assert_eq!(set.len(), 2);
        assert!(set.contains(&"A".to_string()));
    }

    #[test]
    fn copy_in_isolates_from_source() {
        let mut source: HashSet<String> = ["A", "B"].iter().map(|s| s.to_string()).collect();
        let set = UnmodifiableSet::copy_of(source.iter().cloned());

        source.remove("A");

        assert_eq!(set.len(), 2);
        assert!(set.contains(&"A".to_string()));
    }

    #[test]
    fn singleton_holds_one_element() {
        let set = UnmodifiableSet::singleton(7);
        assert_eq!(set.len(), 1);
        assert!(set.contains(&7));
    }

    #[test]
    fn byte_round_trip() {
        let set = UnmodifiableSet::copy_of([1, 2, 3]);
        let back = UnmodifiableSet::from_bytes(set.to_bytes().unwrap()).unwrap();
        assert_eq!(set, back);
    }
}
