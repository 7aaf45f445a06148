use std::ops::Range;
use std::slice;

use serde::{Deserialize, Serialize};

use crate::serializable::Serializable;
use crate::traits::{Collection, List};

/// A growable list that is serializable by construction, backed by `Vec`.
#[derive(Clone, Debug)]
#[derive(Eq, PartialEq)]
#[derive(Serialize, Deserialize)]
#[serde(bound = "")]
pub struct SerVec<T: Serializable> {
    items: Vec<T>,
}

impl<T: Serializable> SerVec<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, value: T) {
        self.items.push(value);
    }

    /// Panics if `index > len`, as `Vec::insert` does.
    pub fn insert(&mut self, index: usize, value: T) {
        self.items.insert(index, value);
    }

    /// Panics if `index >= len`, as `Vec::remove` does.
    pub fn remove(&mut self, index: usize) -> T {
        self.items.remove(index)
    }

    /// Replaces the element at `index`, returning the previous one. Panics
    /// if `index >= len`.
    pub fn set(&mut self, index: usize, value: T) -> T {
        std::mem::replace(&mut self.items[index], value)
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

    pub fn clear(&mut self) {
        self.items.clear();
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

    /// Copy of the elements at `range`, as a new serializable list. Panics
    /// if the range is out of bounds.
    pub fn sub_list(&self, range: Range<usize>) -> SerVec<T> {
        Self {
            items: self.items[range].to_vec(),
        }
    }
}

impl<T: Serializable> Default for SerVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Serializable> From<Vec<T>> for SerVec<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T: Serializable> FromIterator<T> for SerVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T: Serializable> Extend<T> for SerVec<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<'a, T: Serializable> IntoIterator for &'a SerVec<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: Serializable + PartialEq> Collection<T> for SerVec<T> {
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

impl<T: Serializable + PartialEq> List<T> for SerVec<T> {
    type Slice = SerVec<T>;

    fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    fn sub_list(&self, range: Range<usize>) -> SerVec<T> {
        SerVec::sub_list(self, range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_get_set_remove() {
        let mut list = SerVec::new();
        list.push("a".to_string());
        list.push("b".to_string());

        assert_eq!(list.len(), 2);
        assert_eq!(list.get(1).map(String::as_str), Some("b"));

        let previous = list.set(0, "z".to_string());
        assert_eq!(previous, "a");
        assert_eq!(list.remove(0), "z");
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn sub_list_is_a_copy() {
        let list: SerVec<i32> = (0..6).collect();
        let mut sub = list.sub_list(1..4);

        assert_eq!(sub.as_slice(), &[1, 2, 3]);

        sub.push(99);
        assert_eq!(list.len(), 6);
    }

    #[test]
    fn byte_round_trip() {
        let list: SerVec<String> = ["Bilbo", "Frodo"].iter().map(|s| s.to_string()).collect();
        let back = SerVec::from_bytes(list.to_bytes().unwrap()).unwrap();
        assert_eq!(list, back);
    }
}
