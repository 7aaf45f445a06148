use std::collections::hash_map;
use std::collections::HashMap;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::mutable::{SerHashSet, SerVec};
use crate::serializable::Serializable;
use crate::traits::Map;

/// A hash-backed map that is serializable by construction.
///
/// `key_set` and `values` return fresh serializable snapshots computed from
/// the backing map on every call; nothing is cached, since the map can
/// change between calls.
#[derive(Clone, Debug)]
#[derive(Eq, PartialEq)]
#[derive(Serialize, Deserialize)]
#[serde(bound = "")]
pub struct SerHashMap<K, V>
where
    K: Serializable + Eq + Hash,
    V: Serializable,
{
    inner: HashMap<K, V>,
}

impl<K, V> SerHashMap<K, V>
where
    K: Serializable + Eq + Hash,
    V: Serializable,
{
    pub fn new() -> Self {
        Self {
            inner: HashMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: HashMap::with_capacity(capacity),
        }
    }

    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.inner.insert(key, value)
    }

    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.inner.remove(key)
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.inner.get(key)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.inner.get_mut(key)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.inner.contains_key(key)
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }

    pub fn retain<F: FnMut(&K, &mut V) -> bool>(&mut self, f: F) {
        self.inner.retain(f);
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, K, V> {
        self.inner.iter()
    }

    /// Serializable snapshot of the keys.
    pub fn key_set(&self) -> SerHashSet<K> {
        self.inner.keys().cloned().collect()
    }

    /// Serializable snapshot of the values.
    pub fn values(&self) -> SerVec<V> {
        self.inner.values().cloned().collect()
    }
}

impl<K, V> Default for SerHashMap<K, V>
where
    K: Serializable + Eq + Hash,
    V: Serializable,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> From<HashMap<K, V>> for SerHashMap<K, V>
where
    K: Serializable + Eq + Hash,
    V: Serializable,
{
    fn from(inner: HashMap<K, V>) -> Self {
        Self { inner }
    }
}

impl<K, V> FromIterator<(K, V)> for SerHashMap<K, V>
where
    K: Serializable + Eq + Hash,
    V: Serializable,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}

impl<K, V> Extend<(K, V)> for SerHashMap<K, V>
where
    K: Serializable + Eq + Hash,
    V: Serializable,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.inner.extend(iter);
    }
}

impl<K, V> Map<K, V> for SerHashMap<K, V>
where
    K: Serializable + Eq + Hash,
    V: Serializable + PartialEq,
{
    type Keys = SerHashSet<K>;
    type Values = SerVec<V>;

    fn len(&self) -> usize {
        self.inner.len()
    }

    fn get(&self, key: &K) -> Option<&V> {
        self.inner.get(key)
    }

    fn contains_key(&self, key: &K) -> bool {
        self.inner.contains_key(key)
    }

    fn key_set(&self) -> SerHashSet<K> {
        SerHashMap::key_set(self)
    }

    fn values(&self) -> SerVec<V> {
        SerHashMap::values(self)
    }
}
