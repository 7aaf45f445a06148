use std::collections::BTreeSet;
use std::ops::Bound;

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::comparator::{NaturalOrder, OrderedBy, Reversed, SerializableComparator};
use crate::mutable::SerTreeSet;
use crate::serializable::Serializable;
use crate::traits::{Collection, Set, SortedSet};
use crate::{Error, Result};

/// An unmodifiable, serializable sorted set. Built by copy-in; every
/// mutating operation fails with [`Error::UnsupportedOperation`].
///
/// Range views (`sub_set`, `head_set`, `tail_set`, `descending_set`) are
/// built by copy-in as well, never as live views over a backing structure:
/// the extra copying buys a result that is truly unmodifiable.
#[derive(Clone, Debug)]
pub struct UnmodifiableSortedSet<T, C = NaturalOrder>
where
    T: Serializable,
    C: SerializableComparator<T>,
{
    comparator: C,
    inner: BTreeSet<OrderedBy<T, C>>,
}

impl<T, C> UnmodifiableSortedSet<T, C>
where
    T: Serializable,
    C: SerializableComparator<T>,
{
    pub fn new() -> Self
    where
        C: Default,
    {
        Self::copy_of_with(C::default(), [])
    }

    pub fn singleton(value: T) -> Self
    where
        C: Default,
    {
        Self::copy_of_with(C::default(), [value])
    }

    /// Copies every element of `source` into a private backing store,
    /// ordered naturally.
    pub fn copy_of<I: IntoIterator<Item = T>>(source: I) -> Self
    where
        C: Default,
    {
        Self::copy_of_with(C::default(), source)
    }

    /// Copies every element of `source` into a private backing store,
    /// ordered by `comparator`.
    pub fn copy_of_with<I: IntoIterator<Item = T>>(comparator: C, source: I) -> Self {
        let inner = source
            .into_iter()
            .map(|value| OrderedBy::new(value, comparator.clone()))
            .collect();
        Self { comparator, inner }
    }

    /// Copies the elements of a sorted source, retaining its comparator.
    pub fn copy_of_sorted(source: &SerTreeSet<T, C>) -> Self {
        Self::copy_of_with(source.comparator().clone(), source.iter().cloned())
    }

    fn probe(&self, value: &T) -> OrderedBy<T, C> {
        OrderedBy::new(value.clone(), self.comparator.clone())
    }

    pub fn contains(&self, value: &T) -> bool {
        let probe = self.probe(value);
        self.inner.contains(&probe)
    }

    pub fn first(&self) -> Option<&T> {
        self.inner.first().map(OrderedBy::value)
    }

    pub fn last(&self) -> Option<&T> {
        self.inner.last().map(OrderedBy::value)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Elements in ascending order under this set's comparator.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.inner.iter().map(OrderedBy::value)
    }

    /// Unmodifiable copy of the elements in `[from, to)`. Panics if
    /// `from > to` under this set's ordering.
    pub fn sub_set(&self, from: &T, to: &T) -> Self {
        Self {
            comparator: self.comparator.clone(),
            inner: self.inner.range(self.probe(from)..self.probe(to)).cloned().collect(),
        }
    }

    /// Unmodifiable copy of the elements strictly before `to`.
    pub fn head_set(&self, to: &T) -> Self {
        Self {
            comparator: self.comparator.clone(),
            inner: self.inner.range(..self.probe(to)).cloned().collect(),
        }
    }

    /// Unmodifiable copy of the elements at or after `from`.
    pub fn tail_set(&self, from: &T) -> Self {
        Self {
            comparator: self.comparator.clone(),
            inner: self.inner.range(self.probe(from)..).cloned().collect(),
        }
    }

    /// Unmodifiable copy of the elements within the given bounds, each bound
    /// inclusive or exclusive as requested. Panics if the bounds are
    /// reversed under this set's ordering.
    pub fn range_set(&self, from: Bound<&T>, to: Bound<&T>) -> Self {
        Self {
            comparator: self.comparator.clone(),
            inner: self
                .inner
                .range((self.probe_bound(from), self.probe_bound(to)))
                .cloned()
                .collect(),
        }
    }

    fn probe_bound(&self, bound: Bound<&T>) -> Bound<OrderedBy<T, C>> {
        match bound {
            Bound::Included(value) => Bound::Included(self.probe(value)),
            Bound::Excluded(value) => Bound::Excluded(self.probe(value)),
            Bound::Unbounded => Bound::Unbounded,
        }
    }

    /// Elements in descending order under this set's comparator.
    pub fn descending_iter(&self) -> impl Iterator<Item = &T> {
        self.inner.iter().rev().map(OrderedBy::value)
    }

    /// Unmodifiable copy ordered by the inverse of this set's comparator.
    pub fn descending_set(&self) -> UnmodifiableSortedSet<T, Reversed<C>> {
        UnmodifiableSortedSet::copy_of_with(
            Reversed(self.comparator.clone()),
            self.iter().cloned(),
        )
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

impl<T, C> Default for UnmodifiableSortedSet<T, C>
where
    T: Serializable,
    C: SerializableComparator<T> + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> PartialEq for UnmodifiableSortedSet<T, C>
where
    T: Serializable,
    C: SerializableComparator<T>,
{
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<T, C> Eq for UnmodifiableSortedSet<T, C>
where
    T: Serializable,
    C: SerializableComparator<T>,
{
}

impl<T, C> Serialize for UnmodifiableSortedSet<T, C>
where
    T: Serializable,
    C: SerializableComparator<T>,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let elements: Vec<&T> = self.iter().collect();
        (&self.comparator, elements).serialize(serializer)
    }
}

impl<'de, T, C> Deserialize<'de> for UnmodifiableSortedSet<T, C>
where
    T: Serializable,
    C: SerializableComparator<T>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (comparator, elements): (C, Vec<T>) = Deserialize::deserialize(deserializer)?;
        Ok(Self::copy_of_with(comparator, elements))
    }
}

impl<T, C> Collection<T> for UnmodifiableSortedSet<T, C>
where
    T: Serializable,
    C: SerializableComparator<T>,
{
    fn len(&self) -> usize {
        self.inner.len()
    }

    fn contains(&self, value: &T) -> bool {
        UnmodifiableSortedSet::contains(self, value)
    }

    fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T, C> Set<T> for UnmodifiableSortedSet<T, C>
where
    T: Serializable,
    C: SerializableComparator<T>,
{
}

impl<T, C> SortedSet<T> for UnmodifiableSortedSet<T, C>
where
    T: Serializable,
    C: SerializableComparator<T>,
{
    type Cmp = C;
    type Range = UnmodifiableSortedSet<T, C>;
    type Descending = UnmodifiableSortedSet<T, Reversed<C>>;

    fn comparator(&self) -> &C {
        &self.comparator
    }

    fn first(&self) -> Option<&T> {
        UnmodifiableSortedSet::first(self)
    }

    fn last(&self) -> Option<&T> {
        UnmodifiableSortedSet::last(self)
    }

    fn sub_set(&self, from: &T, to: &T) -> Self {
        UnmodifiableSortedSet::sub_set(self, from, to)
    }

    fn head_set(&self, to: &T) -> Self {
        UnmodifiableSortedSet::head_set(self, to)
    }

    fn tail_set(&self, from: &T) -> Self {
        UnmodifiableSortedSet::tail_set(self, from)
    }

    fn descending_set(&self) -> UnmodifiableSortedSet<T, Reversed<C>> {
        UnmodifiableSortedSet::descending_set(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> UnmodifiableSortedSet<String> {
        UnmodifiableSortedSet::copy_of(
            ["Frodo", "Bilbo", "Samweis", "Pippin"]
                .iter()
                .map(|s| s.to_string()),
        )
    }

    #[test]
    fn iterates_in_order_and_rejects_mutation() {
        let mut set = sample();

        assert_eq!(set.to_vec(), vec!["Bilbo", "Frodo", "Pippin", "Samweis"]);

        assert!(matches!(
            set.insert("Gandalf".to_string()),
            Err(Error::UnsupportedOperation(_))
        ));
        assert!(matches!(
            set.remove(&"Frodo".to_string()),
            Err(Error::UnsupportedOperation(_))
        ));
        assert!(matches!(set.clear(), Err(Error::UnsupportedOperation(_))));
        assert!(matches!(
            set.retain(|_| false),
            Err(Error::UnsupportedOperation(_))
        ));
        assert!(matches!(
            set.extend_from(vec!["Gandalf".to_string()]),
            Err(Error::UnsupportedOperation(_))
        ));

        assert_eq!(set.len(), 4);
    }

    #[test]
    fn preserves_source_comparator() {
        let mut source = SerTreeSet::with_comparator(Reversed(NaturalOrder));
        source.extend([1, 2, 3]);

        let set = UnmodifiableSortedSet::copy_of_sorted(&source);
        assert_eq!(set.to_vec(), vec![3, 2, 1]);
        assert_eq!(set.first(), Some(&3));
    }

    #[test]
    fn copy_in_isolates_from_source() {
        let mut source = SerTreeSet::with_comparator(Reversed(NaturalOrder));
        source.extend([1, 2, 3]);

        let set = UnmodifiableSortedSet::copy_of_sorted(&source);
        source.remove(&3);

        assert_eq!(set.len(), 3);
        assert!(set.contains(&3));
        assert_eq!(set.first(), Some(&3));
    }

    #[test]
    fn range_set_honors_inclusive_bounds() {
        let set: UnmodifiableSortedSet<i32> = UnmodifiableSortedSet::copy_of(1..=5);

        let closed = set.range_set(Bound::Included(&2), Bound::Included(&4));
        assert_eq!(closed.to_vec(), vec![2, 3, 4]);

        let mut open = set.range_set(Bound::Excluded(&2), Bound::Excluded(&4));
        assert_eq!(open.to_vec(), vec![3]);
        assert!(matches!(open.clear(), Err(Error::UnsupportedOperation(_))));
    }

    #[test]
    fn descending_iter_walks_backwards() {
        let set = sample();
        let names: Vec<&str> = set.descending_iter().map(String::as_str).collect();
        assert_eq!(names, vec!["Samweis", "Pippin", "Frodo", "Bilbo"]);
    }

    #[test]
    fn range_views_are_unmodifiable_copies() {
        let set = sample();

        let mut head = set.head_set(&"Pippin".to_string());
        assert_eq!(head.to_vec(), vec!["Bilbo", "Frodo"]);
        assert!(matches!(head.clear(), Err(Error::UnsupportedOperation(_))));

        let sub = set.sub_set(&"Frodo".to_string(), &"Samweis".to_string());
        assert_eq!(sub.to_vec(), vec!["Frodo", "Pippin"]);

        let tail = set.tail_set(&"Samweis".to_string());
        assert_eq!(tail.to_vec(), vec!["Samweis"]);

        let descending = set.descending_set();
        assert_eq!(
            descending.to_vec(),
            vec!["Samweis", "Pippin", "Frodo", "Bilbo"]
        );
    }

    #[test]
    fn byte_round_trip() {
        let set = sample();
        let back = UnmodifiableSortedSet::from_bytes(set.to_bytes().unwrap()).unwrap();
        assert_eq!(set, back);
        assert_eq!(back.to_vec(), set.to_vec());
    }
}
