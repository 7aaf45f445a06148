//! Capability-bounded container contracts.
//!
//! These traits add no operations beyond what the corresponding std container
//! shape offers; they narrow element types to [`Serializable`] and narrow
//! every derived view (key set, value collection, sub-range, sub-list) to a
//! serializable container of the same variant kind, via associated types.

use std::ops::Range;

use crate::comparator::SerializableComparator;
use crate::serializable::Serializable;

pub trait Collection<T: Serializable> {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn contains(&self, value: &T) -> bool;

    /// Snapshot of the contents, in the container's iteration order.
    fn to_vec(&self) -> Vec<T>;
}

pub trait List<T: Serializable>: Collection<T> {
    /// The container kind a sub-list is returned as: same variant kind and
    /// serializability as the list it was derived from.
    type Slice: Collection<T>;

    fn get(&self, index: usize) -> Option<&T>;

    /// Copy of the elements at `range`. Panics if the range is out of
    /// bounds, as slice indexing does.
    fn sub_list(&self, range: Range<usize>) -> Self::Slice;
}

/// Marker refinement of [`Collection`]: elements are unique.
pub trait Set<T: Serializable>: Collection<T> {}

pub trait SortedSet<T: Serializable>: Set<T> {
    type Cmp: SerializableComparator<T>;
    type Range: Set<T>;
    type Descending: Set<T>;

    fn comparator(&self) -> &Self::Cmp;

    fn first(&self) -> Option<&T>;

    fn last(&self) -> Option<&T>;

    /// Elements in `[from, to)`. Panics if `from > to` under this set's
    /// ordering, as the backing B-tree's range does.
    fn sub_set(&self, from: &T, to: &T) -> Self::Range;

    /// Elements strictly before `to`.
    fn head_set(&self, to: &T) -> Self::Range;

    /// Elements at or after `from`.
    fn tail_set(&self, from: &T) -> Self::Range;

    fn descending_set(&self) -> Self::Descending;
}

/// Map contract. Key and value views are narrowed to serializable container
/// kinds matching the map's own variant kind.
///
/// Entry-set narrowing is deliberately not part of this contract: turning
/// every iterated entry into a guaranteed-serializable snapshot is too
/// costly for a view whose normal use is iteration, not persistence. The
/// unmodifiable map offers `entry_set` as an inherent method instead.
pub trait Map<K: Serializable, V: Serializable> {
    type Keys: Set<K>;
    type Values: Collection<V>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn get(&self, key: &K) -> Option<&V>;

    fn contains_key(&self, key: &K) -> bool;

    fn key_set(&self) -> Self::Keys;

    fn values(&self) -> Self::Values;
}

pub trait SortedMap<K: Serializable, V: Serializable>: Map<K, V> {
    type Cmp: SerializableComparator<K>;
    type Range: Map<K, V>;

    fn comparator(&self) -> &Self::Cmp;

    fn first_key(&self) -> Option<&K>;

    fn last_key(&self) -> Option<&K>;

    /// Entries with keys in `[from, to)`. Panics if `from > to` under this
    /// map's ordering.
    fn sub_map(&self, from: &K, to: &K) -> Self::Range;

    fn head_map(&self, to: &K) -> Self::Range;

    fn tail_map(&self, from: &K) -> Self::Range;
}
