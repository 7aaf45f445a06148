use std::collections::hash_map;
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::OnceLock;

use derivative::Derivative;
use serde::{Deserialize, Serialize};

use crate::serializable::Serializable;
use crate::traits::Map;
use crate::unmodifiable::{UnmodifiableEntrySet, UnmodifiableList, UnmodifiableSet};
use crate::{Error, Result};

/// An unmodifiable, serializable map. Built by copy-in; every mutating
/// operation fails with [`Error::UnsupportedOperation`].
///
/// The key, value and entry views are themselves unmodifiable containers,
/// built once on first access and cached. The caches are skipped by the
/// persisted form and rebuilt lazily after decode.
#[derive(Clone, Debug)]
#[derive(Derivative)]
#[derivative(PartialEq)]
#[derive(Serialize, Deserialize)]
#[serde(bound = "")]
pub struct UnmodifiableMap<K, V>
where
    K: Serializable + Eq + Hash,
    V: Serializable,
{
    inner: HashMap<K, V>,

    #[serde(skip)]
    #[derivative(PartialEq = "ignore")]
    key_cache: OnceLock<UnmodifiableSet<K>>,

    #[serde(skip)]
    #[derivative(PartialEq = "ignore")]
    value_cache: OnceLock<UnmodifiableList<V>>,

    #[serde(skip)]
    #[derivative(PartialEq = "ignore")]
    entry_cache: OnceLock<UnmodifiableEntrySet<K, V>>,
}

impl<K, V> UnmodifiableMap<K, V>
where
    K: Serializable + Eq + Hash,
    V: Serializable,
{
    pub fn new() -> Self {
        Self::from_inner(HashMap::new())
    }

    pub fn singleton(key: K, value: V) -> Self {
        let mut inner = HashMap::with_capacity(1);
        inner.insert(key, value);
        Self::from_inner(inner)
    }

    /// Copies every entry of `source` into a private backing store. Later
    /// pairs win when keys repeat.
    pub fn copy_of<I: IntoIterator<Item = (K, V)>>(source: I) -> Self {
        Self::from_inner(source.into_iter().collect())
    }

    fn from_inner(inner: HashMap<K, V>) -> Self {
        Self {
            inner,
            key_cache: OnceLock::new(),
            value_cache: OnceLock::new(),
            entry_cache: OnceLock::new(),
        }
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.inner.get(key)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.inner.contains_key(key)
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

    /// Unmodifiable view of the keys, built on first access.
    pub fn key_set(&self) -> &UnmodifiableSet<K> {
        self.key_cache
            .get_or_init(|| UnmodifiableSet::copy_of(self.inner.keys().cloned()))
    }

    /// Unmodifiable view of the values, built on first access.
    pub fn values(&self) -> &UnmodifiableList<V> {
        self.value_cache
            .get_or_init(|| UnmodifiableList::copy_of(self.inner.values().cloned()))
    }

    /// Unmodifiable view of the entries, built on first access.
    pub fn entry_set(&self) -> &UnmodifiableEntrySet<K, V> {
        self.entry_cache.get_or_init(|| {
            UnmodifiableEntrySet::copy_of(
                self.inner.iter().map(|(k, v)| (k.clone(), v.clone())),
            )
        })
    }

    pub fn insert(&mut self, _key: K, _value: V) -> Result<Option<V>> {
        Err(Error::UnsupportedOperation("insert"))
    }

    pub fn put_all<I: IntoIterator<Item = (K, V)>>(&mut self, _source: I) -> Result<()> {
        Err(Error::UnsupportedOperation("put_all"))
    }

    pub fn remove(&mut self, _key: &K) -> Result<Option<V>> {
        Err(Error::UnsupportedOperation("remove"))
    }

    pub fn clear(&mut self) -> Result<()> {
        Err(Error::UnsupportedOperation("clear"))
    }

    pub fn retain<F: FnMut(&K, &V) -> bool>(&mut self, _f: F) -> Result<()> {
        Err(Error::UnsupportedOperation("retain"))
    }
}

impl<K, V> Default for UnmodifiableMap<K, V>
where
    K: Serializable + Eq + Hash,
    V: Serializable,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, K, V> IntoIterator for &'a UnmodifiableMap<K, V>
where
    K: Serializable + Eq + Hash,
    V: Serializable,
{
    type Item = (&'a K, &'a V);
    type IntoIter = hash_map::Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

impl<K, V> Map<K, V> for UnmodifiableMap<K, V>
where
    K: Serializable + Eq + Hash,
    V: Serializable + PartialEq,
{
    type Keys = UnmodifiableSet<K>;
    type Values = UnmodifiableList<V>;

    fn len(&self) -> usize {
        self.inner.len()
    }

    fn get(&self, key: &K) -> Option<&V> {
        self.inner.get(key)
    }

    fn contains_key(&self, key: &K) -> bool {
        self.inner.contains_key(key)
    }

    fn key_set(&self) -> UnmodifiableSet<K> {
        UnmodifiableMap::key_set(self).clone()
    }

    fn values(&self) -> UnmodifiableList<V> {
        UnmodifiableMap::values(self).clone()
    }
}
