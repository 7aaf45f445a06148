use std::fmt;
use std::hash::{Hash, Hasher};
use std::slice;

use serde::{Deserialize, Serialize};

use crate::serializable::Serializable;
use crate::{Error, Result};

/// A serializable snapshot of one map entry. The key and value are owned
/// copies taken at construction time; `set_value` always fails.
#[derive(Clone, Debug)]
#[derive(Serialize, Deserialize)]
#[serde(bound = "")]
pub struct UnmodifiableEntry<K: Serializable, V: Serializable> {
    key: K,
    value: V,
}

impl<K: Serializable, V: Serializable> UnmodifiableEntry<K, V> {
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn into_pair(self) -> (K, V) {
        (self.key, self.value)
    }

    pub fn set_value(&mut self, _value: V) -> Result<V> {
        Err(Error::UnsupportedOperation("set_value"))
    }
}

impl<K, V> PartialEq for UnmodifiableEntry<K, V>
where
    K: Serializable + PartialEq,
    V: Serializable + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.value == other.value
    }
}

impl<K, V> Eq for UnmodifiableEntry<K, V>
where
    K: Serializable + Eq,
    V: Serializable + Eq,
{
}

impl<K, V> Hash for UnmodifiableEntry<K, V>
where
    K: Serializable + Hash,
    V: Serializable + Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
        self.value.hash(state);
    }
}

impl<K, V> fmt::Display for UnmodifiableEntry<K, V>
where
    K: Serializable + fmt::Display,
    V: Serializable + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

/// The entries of an unmodifiable map, snapshotted as unmodifiable entries.
#[derive(Clone, Debug)]
#[derive(Serialize, Deserialize)]
#[serde(bound = "")]
pub struct UnmodifiableEntrySet<K: Serializable, V: Serializable> {
    entries: Vec<UnmodifiableEntry<K, V>>,
}

impl<K: Serializable, V: Serializable> UnmodifiableEntrySet<K, V> {
    /// Snapshots every `(key, value)` pair of `source`.
    pub fn copy_of<I: IntoIterator<Item = (K, V)>>(source: I) -> Self {
        Self {
            entries: source
                .into_iter()
                .map(|(key, value)| UnmodifiableEntry::new(key, value))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, UnmodifiableEntry<K, V>> {
        self.entries.iter()
    }

    pub fn insert(&mut self, _entry: UnmodifiableEntry<K, V>) -> Result<bool> {
        Err(Error::UnsupportedOperation("insert"))
    }

    pub fn remove(&mut self, _entry: &UnmodifiableEntry<K, V>) -> Result<bool> {
        Err(Error::UnsupportedOperation("remove"))
    }

    pub fn clear(&mut self) -> Result<()> {
        Err(Error::UnsupportedOperation("clear"))
    }
}

impl<K, V> UnmodifiableEntrySet<K, V>
where
    K: Serializable + PartialEq,
    V: Serializable + PartialEq,
{
    pub fn contains(&self, entry: &UnmodifiableEntry<K, V>) -> bool {
        self.entries.contains(entry)
    }
}

impl<K, V> PartialEq for UnmodifiableEntrySet<K, V>
where
    K: Serializable + PartialEq,
    V: Serializable + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<'a, K: Serializable, V: Serializable> IntoIterator for &'a UnmodifiableEntrySet<K, V> {
    type Item = &'a UnmodifiableEntry<K, V>;
    type IntoIter = slice::Iter<'a, UnmodifiableEntry<K, V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_exposes_key_and_value_but_rejects_set_value() {
        let mut entry = UnmodifiableEntry::new("A".to_string(), "argh".to_string());

        assert_eq!(entry.key(), "A");
        assert_eq!(entry.value(), "argh");
        assert!(matches!(
            entry.set_value("cool".to_string()),
            Err(Error::UnsupportedOperation(_))
        ));
        assert_eq!(entry.value(), "argh");
    }

    #[test]
    fn entry_displays_as_key_equals_value() {
        let entry = UnmodifiableEntry::new("A".to_string(), 1);
        assert_eq!(entry.to_string(), "A=1");
    }

    #[test]
    fn entry_set_rejects_mutation() {
        let mut entries =
            UnmodifiableEntrySet::copy_of([("A".to_string(), 1), ("B".to_string(), 2)]);

        assert!(matches!(
            entries.insert(UnmodifiableEntry::new("C".to_string(), 3)),
            Err(Error::UnsupportedOperation(_))
        ));
        assert!(matches!(
            entries.remove(&UnmodifiableEntry::new("A".to_string(), 1)),
            Err(Error::UnsupportedOperation(_))
        ));
        assert!(matches!(
            entries.clear(),
            Err(Error::UnsupportedOperation(_))
        ));

        assert_eq!(entries.len(), 2);
        assert!(entries.contains(&UnmodifiableEntry::new("A".to_string(), 1)));
    }

    #[test]
    fn byte_round_trip() {
        let entry = UnmodifiableEntry::new(7u32, "seven".to_string());
        let back = UnmodifiableEntry::from_bytes(entry.to_bytes().unwrap()).unwrap();
        assert_eq!(entry, back);
    }
}
