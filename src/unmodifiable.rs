//! Unmodifiable wrapper implementations: read-only, serializable facades
//! over a private backing store.
//!
//! Construction is always copy-in: elements are copied out of the source at
//! construction time, so later changes to the source are not observable
//! through these containers. Every mutating operation returns
//! [`Error::UnsupportedOperation`](crate::Error::UnsupportedOperation)
//! before any side effect; iteration hands out shared references only.

pub mod entry;
pub mod list;
pub mod map;
pub mod set;
pub mod sorted_set;

pub use entry::{UnmodifiableEntry, UnmodifiableEntrySet};
pub use list::UnmodifiableList;
pub use map::UnmodifiableMap;
pub use set::UnmodifiableSet;
pub use sorted_set::UnmodifiableSortedSet;
