use std::collections::BTreeMap;

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::comparator::{NaturalOrder, OrderedBy, SerializableComparator};
use crate::mutable::{SerTreeSet, SerVec};
use crate::serializable::Serializable;
use crate::traits::{Map, SortedMap};

/// A tree-backed sorted map that is serializable by construction, with keys
/// ordered by a serializable comparator.
///
/// The persisted form is the comparator followed by the entries in key
/// order; the tree is rebuilt on decode.
#[derive(Clone, Debug)]
pub struct SerTreeMap<K, V, C = NaturalOrder>
where
    K: Serializable,
    V: Serializable,
    C: SerializableComparator<K>,
{
    comparator: C,
    inner: BTreeMap<OrderedBy<K, C>, V>,
}

impl<K, V, C> SerTreeMap<K, V, C>
where
    K: Serializable,
    V: Serializable,
    C: SerializableComparator<K>,
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
            inner: BTreeMap::new(),
        }
    }

    fn probe(&self, key: &K) -> OrderedBy<K, C> {
        OrderedBy::new(key.clone(), self.comparator.clone())
    }

    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let key = OrderedBy::new(key, self.comparator.clone());
        self.inner.insert(key, value)
    }

    pub fn remove(&mut self, key: &K) -> Option<V> {
        let probe = self.probe(key);
        self.inner.remove(&probe)
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        let probe = self.probe(key);
        self.inner.get(&probe)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let probe = self.probe(key);
        self.inner.get_mut(&probe)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        let probe = self.probe(key);
        self.inner.contains_key(&probe)
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

    pub fn first_key(&self) -> Option<&K> {
        self.inner.first_key_value().map(|(k, _)| k.value())
    }

    pub fn last_key(&self) -> Option<&K> {
        self.inner.last_key_value().map(|(k, _)| k.value())
    }

    /// Entries in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.inner.iter().map(|(k, v)| (k.value(), v))
    }

    /// Serializable snapshot of the keys, ordered like this map.
    pub fn key_set(&self) -> SerTreeSet<K, C> {
        let mut keys = SerTreeSet::with_comparator(self.comparator.clone());
        keys.extend(self.inner.keys().map(|k| k.value().clone()));
        keys
    }

    /// Serializable snapshot of the values, in key order.
    pub fn values(&self) -> SerVec<V> {
        self.inner.values().cloned().collect()
    }

    /// New map holding copies of the entries with keys in `[from, to)`.
    /// Panics if `from > to` under this map's ordering.
    pub fn sub_map(&self, from: &K, to: &K) -> Self {
        Self {
            comparator: self.comparator.clone(),
            inner: self
                .inner
                .range(self.probe(from)..self.probe(to))
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        }
    }

    /// New map holding copies of the entries with keys strictly before `to`.
    pub fn head_map(&self, to: &K) -> Self {
        Self {
            comparator: self.comparator.clone(),
            inner: self
                .inner
                .range(..self.probe(to))
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        }
    }

    /// New map holding copies of the entries with keys at or after `from`.
    pub fn tail_map(&self, from: &K) -> Self {
        Self {
            comparator: self.comparator.clone(),
            inner: self
                .inner
                .range(self.probe(from)..)
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        }
    }
}

impl<K, V, C> Default for SerTreeMap<K, V, C>
where
    K: Serializable,
    V: Serializable,
    C: SerializableComparator<K> + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, C> PartialEq for SerTreeMap<K, V, C>
where
    K: Serializable,
    V: Serializable + PartialEq,
    C: SerializableComparator<K>,
{
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<K, V, C> FromIterator<(K, V)> for SerTreeMap<K, V, C>
where
    K: Serializable,
    V: Serializable,
    C: SerializableComparator<K> + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K, V, C> Extend<(K, V)> for SerTreeMap<K, V, C>
where
    K: Serializable,
    V: Serializable,
    C: SerializableComparator<K>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V, C> Serialize for SerTreeMap<K, V, C>
where
    K: Serializable,
    V: Serializable,
    C: SerializableComparator<K>,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let entries: Vec<(&K, &V)> = self.iter().collect();
        (&self.comparator, entries).serialize(serializer)
    }
}

impl<'de, K, V, C> Deserialize<'de> for SerTreeMap<K, V, C>
where
    K: Serializable,
    V: Serializable,
    C: SerializableComparator<K>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (comparator, entries): (C, Vec<(K, V)>) = Deserialize::deserialize(deserializer)?;
        let mut map = Self::with_comparator(comparator);
        map.extend(entries);
        Ok(map)
    }
}

impl<K, V, C> Map<K, V> for SerTreeMap<K, V, C>
where
    K: Serializable,
    V: Serializable + PartialEq,
    C: SerializableComparator<K>,
{
    type Keys = SerTreeSet<K, C>;
    type Values = SerVec<V>;

    fn len(&self) -> usize {
        self.inner.len()
    }

    fn get(&self, key: &K) -> Option<&V> {
        SerTreeMap::get(self, key)
    }

    fn contains_key(&self, key: &K) -> bool {
        SerTreeMap::contains_key(self, key)
    }

    fn key_set(&self) -> SerTreeSet<K, C> {
        SerTreeMap::key_set(self)
    }

    fn values(&self) -> SerVec<V> {
        SerTreeMap::values(self)
    }
}

impl<K, V, C> SortedMap<K, V> for SerTreeMap<K, V, C>
where
    K: Serializable,
    V: Serializable + PartialEq,
    C: SerializableComparator<K>,
{
    type Cmp = C;
    type Range = SerTreeMap<K, V, C>;

    fn comparator(&self) -> &C {
        &self.comparator
    }

    fn first_key(&self) -> Option<&K> {
        SerTreeMap::first_key(self)
    }

    fn last_key(&self) -> Option<&K> {
        SerTreeMap::last_key(self)
    }

    fn sub_map(&self, from: &K, to: &K) -> Self {
        SerTreeMap::sub_map(self, from, to)
    }

    fn head_map(&self, to: &K) -> Self {
        SerTreeMap::head_map(self, to)
    }

    fn tail_map(&self, from: &K) -> Self {
        SerTreeMap::tail_map(self, from)
    }
}
