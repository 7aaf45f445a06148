use std::ops::Range;
use std::slice;

use serde::{Deserialize, Serialize};

use crate::serializable::Serializable;
use crate::traits::{Collection, List};
use crate::{Error, Result};

/// An unmodifiable, serializable list. Built by copy-in; every mutating
/// operation fails with [`Error::UnsupportedOperation`].
#[derive(Clone, Debug)]
#[derive(Eq, PartialEq)]
#[derive(Serialize, Deserialize)]
#[serde(bound = "")]
pub struct UnmodifiableList<T: Serializable> {
    items: Vec<T>,
}

impl<T: Serializable> UnmodifiableList<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn singleton(value: T) -> Self {
        Self { items: vec![value] }
    }

    /// Copies every element of `source` into a private backing store.
    pub fn copy_of<I: IntoIterator<Item = T>>(source: I) -> Self {
        Self {
            items: source.into_iter().collect(),
        }
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Copy of the elements at `range`, as a new unmodifiable list. Panics
    /// if the range is out of bounds.
    pub fn sub_list(&self, range: Range<usize>) -> UnmodifiableList<T> {
        Self {
            items: self.items[range].to_vec(),
        }
    }

    pub fn push(&mut self, _value: T) -> Result<()> {
        Err(Error::UnsupportedOperation("push"))
    }

    pub fn insert(&mut self, _index: usize, _value: T) -> Result<()> {
        Err(Error::UnsupportedOperation("insert"))
    }

    pub fn remove(&mut self, _index: usize) -> Result<T> {
        Err(Error::UnsupportedOperation("remove"))
    }

    pub fn set(&mut self, _index: usize, _value: T) -> Result<T> {
        Err(Error::UnsupportedOperation("set"))
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

    pub fn drain(&mut self, _range: Range<usize>) -> Result<Vec<T>> {
        Err(Error::UnsupportedOperation("drain"))
    }
}

impl<T: Serializable> Default for UnmodifiableList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T: Serializable> IntoIterator for &'a UnmodifiableList<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: Serializable + PartialEq> Collection<T> for UnmodifiableList<T> {
    fn len(&self) -> usize {
        self.items.len()
    }

    fn contains(&self, value: &T) -> bool {
        self.items.contains(value)
    }

    fn to_vec(&self) -> Vec<T> {
        self.items.clone()
    }
}

impl<T: Serializable + PartialEq> List<T> for UnmodifiableList<T> {
    type Slice = UnmodifiableList<T>;

    fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    fn sub_list(&self, range: Range<usize>) -> UnmodifiableList<T> {
        UnmodifiableList::sub_list(self, range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> UnmodifiableList<String> {
        UnmodifiableList::copy_of(["a", "b", "c"].iter().map(|s| s.to_string()))
    }

    #[test]
    fn rejects_every_mutation_and_keeps_content() {
        let mut list = sample();

        assert!(matches!(
            list.push("d".to_string()),
            Err(Error::UnsupportedOperation(_))
        ));
        assert!(matches!(
            list.insert(0, "d".to_string()),
            Err(Error::UnsupportedOperation(_))
        ));
        assert!(matches!(list.remove(0), Err(Error::UnsupportedOperation(_))));
        assert!(matches!(
            list.set(0, "d".to_string()),
            Err(Error::UnsupportedOperation(_))
        ));
        assert!(matches!(list.clear(), Err(Error::UnsupportedOperation(_))));
        assert!(matches!(
            list.retain(|_| false),
            Err(Error::UnsupportedOperation(_))
        ));
        assert!(matches!(
            list.extend_from(vec!["d".to_string()]),
            Err(Error::UnsupportedOperation(_))
        ));
        assert!(matches!(list.drain(0..1), Err(Error::UnsupportedOperation(_))));

        assert_eq!(list.as_slice(), &["a", "b", "c"]);
    }

    #[test]
    fn copy_in_isolates_from_source() {
        let mut source = vec!["a".to_string(), "b".to_string()];
        let list = UnmodifiableList::copy_of(source.iter().cloned());

        source.remove(0);

        assert_eq!(list.len(), 2);
        assert_eq!(list.get(0).map(String::as_str), Some("a"));
    }

    #[test]
    fn sub_list_is_unmodifiable_too() {
        let mut sub = sample().sub_list(0..2);
        assert_eq!(sub.len(), 2);
        assert!(matches!(sub.clear(), Err(Error::UnsupportedOperation(_))));
    }

    #[test]
    fn byte_round_trip() {
        let list = sample();
        let back = UnmodifiableList::from_bytes(list.to_bytes().unwrap()).unwrap();
        assert_eq!(list, back);
    }
}
