//! Mutable wrapper implementations. Each delegates to a std container,
//! narrowed to the [`Serializable`](crate::Serializable) bound; derived
//! views are re-wrapped in the matching serializable type and recomputed per
//! call, since the backing container can change between calls.

pub mod enum_map;
pub mod hash_map;
pub mod hash_set;
pub mod tree_map;
pub mod tree_set;
pub mod vec;

pub use enum_map::{EnumKey, SerEnumMap};
pub use hash_map::SerHashMap;
pub use hash_set::SerHashSet;
pub use tree_map::SerTreeMap;
pub use tree_set::SerTreeSet;
pub use vec::SerVec;
