//! Free-function constructors for the container wrappers.

use std::hash::Hash;

use crate::comparator::SerializableComparator;
use crate::mutable::{SerHashSet, SerTreeSet, SerVec};
use crate::serializable::Serializable;
use crate::unmodifiable::{
    UnmodifiableList, UnmodifiableMap, UnmodifiableSet, UnmodifiableSortedSet,
};

/// Mutable serializable list holding the given values, in order. An empty
/// source yields an empty list.
pub fn as_list<T, I>(values: I) -> SerVec<T>
where
    T: Serializable,
    I: IntoIterator<Item = T>,
{
    values.into_iter().collect()
}

/// Mutable serializable set holding the given values, deduplicated.
pub fn as_set<T, I>(values: I) -> SerHashSet<T>
where
    T: Serializable + Eq + Hash,
    I: IntoIterator<Item = T>,
{
    values.into_iter().collect()
}

/// Empty unmodifiable list. Empty containers do not allocate, so a fresh
/// instance costs nothing.
pub fn empty_list<T: Serializable>() -> UnmodifiableList<T> {
    UnmodifiableList::new()
}

/// Empty unmodifiable set.
pub fn empty_set<T: Serializable + Eq + Hash>() -> UnmodifiableSet<T> {
    UnmodifiableSet::new()
}

/// Empty unmodifiable map.
pub fn empty_map<K, V>() -> UnmodifiableMap<K, V>
where
    K: Serializable + Eq + Hash,
    V: Serializable,
{
    UnmodifiableMap::new()
}

/// Unmodifiable set holding exactly one value.
pub fn singleton<T: Serializable + Eq + Hash>(value: T) -> UnmodifiableSet<T> {
    UnmodifiableSet::singleton(value)
}

/// Unmodifiable list holding exactly one value.
pub fn singleton_list<T: Serializable>(value: T) -> UnmodifiableList<T> {
    UnmodifiableList::singleton(value)
}

/// Unmodifiable map holding exactly one entry.
pub fn singleton_map<K, V>(key: K, value: V) -> UnmodifiableMap<K, V>
where
    K: Serializable + Eq + Hash,
    V: Serializable,
{
    UnmodifiableMap::singleton(key, value)
}

/// Unmodifiable list holding copies of the given values.
pub fn unmodifiable_list<T, I>(values: I) -> UnmodifiableList<T>
where
    T: Serializable,
    I: IntoIterator<Item = T>,
{
    UnmodifiableList::copy_of(values)
}

/// Unmodifiable set holding copies of the given values, deduplicated.
pub fn unmodifiable_set<T, I>(values: I) -> UnmodifiableSet<T>
where
    T: Serializable + Eq + Hash,
    I: IntoIterator<Item = T>,
{
    UnmodifiableSet::copy_of(values)
}

/// Unmodifiable map holding copies of the given entries. Later pairs win
/// when keys repeat.
pub fn unmodifiable_map<K, V, I>(entries: I) -> UnmodifiableMap<K, V>
where
    K: Serializable + Eq + Hash,
    V: Serializable,
    I: IntoIterator<Item = (K, V)>,
{
    UnmodifiableMap::copy_of(entries)
}

/// Unmodifiable sorted set holding copies of the source's elements, ordered
/// by the source's comparator.
pub fn unmodifiable_sorted_set<T, C>(source: &SerTreeSet<T, C>) -> UnmodifiableSortedSet<T, C>
where
    T: Serializable,
    C: SerializableComparator<T>,
{
    UnmodifiableSortedSet::copy_of_sorted(source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparator::{NaturalOrder, Reversed};
    use crate::traits::Collection;

    #[test]
    fn as_list_keeps_order_and_duplicates() {
        let list = as_list([3, 1, 3]);
        assert_eq!(list.to_vec(), vec![3, 1, 3]);
    }

    #[test]
    fn as_set_deduplicates() {
        let set = as_set([3, 1, 3]);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn empty_instances_are_empty() {
        assert!(empty_list::<i32>().is_empty());
        assert!(empty_set::<i32>().is_empty());
        assert!(empty_map::<i32, String>().is_empty());
    }

    #[test]
    fn singletons_hold_one_element() {
        assert_eq!(singleton(7).len(), 1);
        assert_eq!(singleton_list("x".to_string()).len(), 1);

        let map = singleton_map("k".to_string(), 1);
        assert_eq!(map.len(), 1);
        assert_eq!(map.get(&"k".to_string()), Some(&1));
    }

    #[test]
    fn unmodifiable_copies_reject_mutation() {
        let mut list = unmodifiable_list([1, 2, 3]);
        assert!(list.push(4).is_err());

        let mut set = unmodifiable_set([1, 2, 2]);
        assert_eq!(set.len(), 2);
        assert!(set.insert(3).is_err());

        let mut map = unmodifiable_map([("a".to_string(), 1)]);
        assert!(map.insert("b".to_string(), 2).is_err());
    }

    #[test]
    fn sorted_copy_preserves_comparator() {
        let mut source = SerTreeSet::with_comparator(Reversed(NaturalOrder));
        source.extend([1, 2, 3]);

        let set = unmodifiable_sorted_set(&source);
        assert_eq!(set.to_vec(), vec![3, 2, 1]);
    }
}
