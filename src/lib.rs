//! Collection types that are serializable by construction.
//!
//! Every container in this crate bounds its elements by [`Serializable`], so
//! holding a value of one of these types is itself the guarantee that the
//! whole container can be encoded and decoded. Mutable wrappers live in
//! [`mutable`]; unmodifiable, copy-in wrappers that reject every mutating
//! operation live in [`unmodifiable`]; free-function constructors live in
//! [`factory`] and are re-exported at the root.

pub mod comparator;
pub mod factory;
pub mod mutable;
pub mod serializable;
pub mod traits;
pub mod unmodifiable;

pub use comparator::{Comparator, NaturalOrder, Reversed, SerializableComparator};
pub use factory::{
    as_list, as_set, empty_list, empty_map, empty_set, singleton, singleton_list, singleton_map,
    unmodifiable_list, unmodifiable_map, unmodifiable_set, unmodifiable_sorted_set,
};
pub use mutable::{EnumKey, SerEnumMap, SerHashMap, SerHashSet, SerTreeMap, SerTreeSet, SerVec};
pub use serializable::Serializable;
pub use traits::{Collection, List, Map, Set, SortedMap, SortedSet};
pub use unmodifiable::{
    UnmodifiableEntry, UnmodifiableEntrySet, UnmodifiableList, UnmodifiableMap, UnmodifiableSet,
    UnmodifiableSortedSet,
};

#[derive(Debug)]
#[derive(thiserror::Error)]
pub enum Error {
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(&'static str),

    #[error("{0}")]
    Encode(#[from] bincode::error::EncodeError),

    #[error("{0}")]
    Decode(#[from] bincode::error::DecodeError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
