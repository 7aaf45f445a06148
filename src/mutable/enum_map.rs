use std::hash::Hash;
use std::marker::PhantomData;

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::mutable::{SerHashSet, SerVec};
use crate::serializable::Serializable;
use crate::traits::Map;

/// Key type of a [`SerEnumMap`]: a fixed, finite enumeration whose variants
/// map to dense indices.
///
/// Enumerations are always considered serializable; implement this by hand:
///
/// ```
/// use sercoll::EnumKey;
///
/// #[derive(Clone, Copy, PartialEq, Eq)]
/// enum Season { Spring, Summer, Autumn, Winter }
///
/// impl EnumKey for Season {
///     const COUNT: usize = 4;
///
///     fn to_index(self) -> usize {
///         self as usize
///     }
///
///     fn from_index(index: usize) -> Option<Self> {
///         [Season::Spring, Season::Summer, Season::Autumn, Season::Winter]
///             .get(index)
///             .copied()
///     }
/// }
/// ```
pub trait EnumKey: Copy + Eq {
    const COUNT: usize;

    /// Dense index of this variant, below [`Self::COUNT`].
    fn to_index(self) -> usize;

    fn from_index(index: usize) -> Option<Self>;
}

/// A map keyed by a fixed enumeration, backed by one slot per variant.
///
/// The persisted form is the list of present `(key, value)` pairs in
/// variant order; the slots are rebuilt on decode.
#[derive(Clone, Debug)]
pub struct SerEnumMap<K, V>
where
    K: EnumKey,
    V: Serializable,
{
    slots: Vec<Option<V>>,
    _keys: PhantomData<K>,
}

impl<K, V> SerEnumMap<K, V>
where
    K: EnumKey,
    V: Serializable,
{
    pub fn new() -> Self {
        Self {
            slots: vec![None; K::COUNT],
            _keys: PhantomData,
        }
    }

    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.slots[key.to_index()].replace(value)
    }

    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.slots[key.to_index()].take()
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.slots[key.to_index()].as_ref()
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.slots[key.to_index()].is_some()
    }

    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
    }

    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Present entries, in variant order.
    pub fn iter(&self) -> impl Iterator<Item = (K, &V)> {
        self.slots.iter().enumerate().filter_map(|(index, slot)| {
            let key = K::from_index(index)?;
            slot.as_ref().map(|value| (key, value))
        })
    }
}

impl<K, V> SerEnumMap<K, V>
where
    K: EnumKey + Serializable + Hash,
    V: Serializable,
{
    /// Serializable snapshot of the keys.
    pub fn key_set(&self) -> SerHashSet<K> {
        self.iter().map(|(key, _)| key).collect()
    }

    /// Serializable snapshot of the values, in variant order.
    pub fn values(&self) -> SerVec<V> {
        self.iter().map(|(_, value)| value.clone()).collect()
    }
}

impl<K, V> Default for SerEnumMap<K, V>
where
    K: EnumKey,
    V: Serializable,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> PartialEq for SerEnumMap<K, V>
where
    K: EnumKey,
    V: Serializable + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.slots == other.slots
    }
}

impl<K, V> FromIterator<(K, V)> for SerEnumMap<K, V>
where
    K: EnumKey,
    V: Serializable,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K, V> Extend<(K, V)> for SerEnumMap<K, V>
where
    K: EnumKey,
    V: Serializable,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V> Serialize for SerEnumMap<K, V>
where
    K: EnumKey + Serialize,
    V: Serializable,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let entries: Vec<(K, &V)> = self.iter().collect();
        entries.serialize(serializer)
    }
}

impl<'de, K, V> Deserialize<'de> for SerEnumMap<K, V>
where
    K: EnumKey + Deserialize<'de>,
    V: Serializable,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries: Vec<(K, V)> = Deserialize::deserialize(deserializer)?;
        Ok(entries.into_iter().collect())
    }
}

impl<K, V> Map<K, V> for SerEnumMap<K, V>
where
    K: EnumKey + Serializable + Hash,
    V: Serializable + PartialEq,
{
    type Keys = SerHashSet<K>;
    type Values = SerVec<V>;

    fn len(&self) -> usize {
        SerEnumMap::len(self)
    }

    fn get(&self, key: &K) -> Option<&V> {
        SerEnumMap::get(self, key)
    }

    fn contains_key(&self, key: &K) -> bool {
        SerEnumMap::contains_key(self, key)
    }

    fn key_set(&self) -> SerHashSet<K> {
        SerEnumMap::key_set(self)
    }

    fn values(&self) -> SerVec<V> {
        SerEnumMap::values(self)
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    use super::*;
    use crate::traits::Collection;

    #[derive(Clone, Copy, Debug)]
    #[derive(Eq, PartialEq, Hash)]
    #[derive(Serialize, Deserialize)]
    enum Direction {
        North,
        East,
        South,
        West,
    }

    impl EnumKey for Direction {
        const COUNT: usize = 4;

        fn to_index(self) -> usize {
            self as usize
        }

        fn from_index(index: usize) -> Option<Self> {
            [
                Direction::North,
                Direction::East,
                Direction::South,
                Direction::West,
            ]
            .get(index)
            .copied()
        }
    }

    #[test]
    fn insert_get_remove() {
        let mut map = SerEnumMap::new();
        assert_eq!(map.insert(Direction::North, 1), None);
        assert_eq!(map.insert(Direction::North, 2), Some(1));
        assert_eq!(map.get(&Direction::North), Some(&2));
        assert_eq!(map.remove(&Direction::North), Some(2));
        assert!(map.is_empty());
    }

    #[test]
    fn iterates_in_variant_order() {
        let mut map = SerEnumMap::new();
        map.insert(Direction::West, 4);
        map.insert(Direction::East, 2);

        let keys: Vec<Direction> = map.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec![Direction::East, Direction::West]);
    }

    #[test]
    fn views_are_rewrapped() {
        let mut map = SerEnumMap::new();
        map.insert(Direction::South, 3);
        map.insert(Direction::North, 1);

        assert_eq!(map.key_set().len(), 2);
        assert_eq!(map.values().to_vec(), vec![1, 3]);
    }

    #[test]
    fn byte_round_trip() {
        let mut map = SerEnumMap::new();
        map.insert(Direction::East, "east".to_string());
        map.insert(Direction::West, "west".to_string());

        let back: SerEnumMap<Direction, String> =
            SerEnumMap::from_bytes(map.to_bytes().unwrap()).unwrap();

        assert_eq!(map, back);
    }
}
