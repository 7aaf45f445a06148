use std::collections::BTreeSet;
use std::ops::Bound;

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::comparator::{NaturalOrder, OrderedBy, Reversed, SerializableComparator};
use crate::serializable::Serializable;
use crate::traits::{Collection, Set, SortedSet};

/// A tree-backed sorted set that is serializable by construction, ordered by
/// a serializable comparator (the element type's natural order by default).
///
/// The persisted form is the comparator followed by the elements in order;
/// the tree is rebuilt on decode.
#[derive(Clone, Debug)]
pub struct SerTreeSet<T, C = NaturalOrder>
where
    T: Serializable,
    C: SerializableComparator<T>,
{
    comparator: C,
    inner: BTreeSet<OrderedBy<T, C>>,
}

impl<T, C> SerTreeSet<T, C>
where
    T: Serializable,
    C: SerializableComparator<T>,
{
    pub fn new() -> Self
    where
        C: Default,
    {
        Self::with_comparator(C::default())
    }

    pub fn with_comparator(comparator: C) -> Self {
        Self {
            comparator,
            inner: BTreeSet::new(),
        }
    }

    /// Copies the elements of another sorted set, retaining its comparator.
    pub fn copy_of_sorted(source: &SerTreeSet<T, C>) -> Self {
        Self {
            comparator: source.comparator.clone(),
            inner: source.inner.iter().cloned().collect(),
        }
    }

    fn probe(&self, value: &T) -> OrderedBy<T, C> {
        OrderedBy::new(value.clone(), self.comparator.clone())
    }

    /// Returns `true` if the value was not yet present under this set's
    /// ordering.
    pub fn insert(&mut self, value: T) -> bool {
        let entry = OrderedBy::new(value, self.comparator.clone());
        self.inner.insert(entry)
    }

    pub fn remove(&mut self, value: &T) -> bool {
        let probe = self.probe(value);
        self.inner.remove(&probe)
    }

    /// Removes and returns the stored element equal to `value` under this
    /// set's ordering.
    pub fn take(&mut self, value: &T) -> Option<T> {
        let probe = self.probe(value);
        self.inner.take(&probe).map(OrderedBy::into_value)
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

    pub fn clear(&mut self) {
        self.inner.clear();
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

    /// New set holding copies of the elements in `[from, to)`. Panics if
    /// `from > to` under this set's ordering, as the backing tree's range
    /// does.
    pub fn sub_set(&self, from: &T, to: &T) -> Self {
        Self {
            comparator: self.comparator.clone(),
            inner: self.inner.range(self.probe(from)..self.probe(to)).cloned().collect(),
        }
    }

    /// New set holding copies of the elements strictly before `to`.
    pub fn head_set(&self, to: &T) -> Self {
        Self {
            comparator: self.comparator.clone(),
            inner: self.inner.range(..self.probe(to)).cloned().collect(),
        }
    }

    /// New set holding copies of the elements at or after `from`.
    pub fn tail_set(&self, from: &T) -> Self {
        Self {
            comparator: self.comparator.clone(),
            inner: self.inner.range(self.probe(from)..).cloned().collect(),
        }
    }

    /// New set holding copies of the elements within the given bounds, each
    /// bound inclusive or exclusive as requested. Panics if the bounds are
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

    /// New set holding copies of the elements, ordered by the inverse of
    /// this set's comparator.
    pub fn descending_set(&self) -> SerTreeSet<T, Reversed<C>> {
        let mut result = SerTreeSet::with_comparator(Reversed(self.comparator.clone()));
        result.extend(self.iter().cloned());
        result
    }
}

impl<T, C> Default for SerTreeSet<T, C>
where
    T: Serializable,
    C: SerializableComparator<T> + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> PartialEq for SerTreeSet<T, C>
where
    T: Serializable,
    C: SerializableComparator<T>,
{
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<T, C> Eq for SerTreeSet<T, C>
where
    T: Serializable,
    C: SerializableComparator<T>,
{
}

impl<T, C> FromIterator<T> for SerTreeSet<T, C>
where
    T: Serializable,
    C: SerializableComparator<T> + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T, C> Extend<T> for SerTreeSet<T, C>
where
    T: Serializable,
    C: SerializableComparator<T>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T, C> Serialize for SerTreeSet<T, C>
where
    T: Serializable,
    C: SerializableComparator<T>,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let elements: Vec<&T> = self.iter().collect();
        (&self.comparator, elements).serialize(serializer)
    }
}

impl<'de, T, C> Deserialize<'de> for SerTreeSet<T, C>
where
    T: Serializable,
    C: SerializableComparator<T>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (comparator, elements): (C, Vec<T>) = Deserialize::deserialize(deserializer)?;
        let mut set = Self::with_comparator(comparator);
        set.extend(elements);
        Ok(set)
    }
}

impl<T, C> Collection<T> for SerTreeSet<T, C>
where
    T: Serializable,
    C: SerializableComparator<T>,
{
    fn len(&self) -> usize {
        self.inner.len()
    }

    fn contains(&self, value: &T) -> bool {
        SerTreeSet::contains(self, value)
    }

    fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T, C> Set<T> for SerTreeSet<T, C>
where
    T: Serializable,
    C: SerializableComparator<T>,
{
}

impl<T, C> SortedSet<T> for SerTreeSet<T, C>
where
    T: Serializable,
    C: SerializableComparator<T>,
{
    type Cmp = C;
    type Range = SerTreeSet<T, C>;
    type Descending = SerTreeSet<T, Reversed<C>>;

    fn comparator(&self) -> &C {
        &self.comparator
    }

    fn first(&self) -> Option<&T> {
        SerTreeSet::first(self)
    }

    fn last(&self) -> Option<&T> {
        SerTreeSet::last(self)
    }

    fn sub_set(&self, from: &T, to: &T) -> Self {
        SerTreeSet::sub_set(self, from, to)
    }

    fn head_set(&self, to: &T) -> Self {
        SerTreeSet::head_set(self, to)
    }

    fn tail_set(&self, from: &T) -> Self {
        SerTreeSet::tail_set(self, from)
    }

    fn descending_set(&self) -> SerTreeSet<T, Reversed<C>> {
        SerTreeSet::descending_set(self)
    }
}
