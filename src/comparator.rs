use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::serializable::Serializable;

/// An ordering over `T`. Implementations must supply a total order.
///
/// Ordinary comparison closures cannot be persisted; sorted containers in
/// this crate therefore take their ordering as a value of a comparator type,
/// which travels with the container through the byte form.
pub trait Comparator<T>: Clone {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// Intersection of [`Comparator`] and [`Serializable`]. Blanket-implemented.
pub trait SerializableComparator<T>: Comparator<T> + Serializable {}

impl<T, C> SerializableComparator<T> for C where C: Comparator<T> + Serializable {}

/// Comparator delegating to the element type's own `Ord`.
#[derive(Clone, Copy)]
#[derive(Debug, Default)]
#[derive(Eq, PartialEq)]
#[derive(Serialize, Deserialize)]
pub struct NaturalOrder;

impl<T: Ord> Comparator<T> for NaturalOrder {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Inverts another comparator. Descending views are ordered by this.
#[derive(Clone, Copy)]
#[derive(Debug, Default)]
#[derive(Eq, PartialEq)]
#[derive(Serialize, Deserialize)]
pub struct Reversed<C>(pub C);

impl<T, C: Comparator<T>> Comparator<T> for Reversed<C> {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(a, b).reverse()
    }
}

/// Pairs an element with its container's comparator so that the std B-tree
/// containers can order by it. All adapters inside one container carry
/// clones of the same comparator value.
#[derive(Clone, Debug)]
pub(crate) struct OrderedBy<T, C> {
    value: T,
    comparator: C,
}

impl<T, C> OrderedBy<T, C> {
    pub(crate) fn new(value: T, comparator: C) -> Self {
        Self { value, comparator }
    }

    pub(crate) fn value(&self) -> &T {
        &self.value
    }

    pub(crate) fn into_value(self) -> T {
        self.value
    }
}

impl<T, C: Comparator<T>> PartialEq for OrderedBy<T, C> {
    fn eq(&self, other: &Self) -> bool {
        self.comparator.compare(&self.value, &other.value) == Ordering::Equal
    }
}

impl<T, C: Comparator<T>> Eq for OrderedBy<T, C> {}

impl<T, C: Comparator<T>> PartialOrd for OrderedBy<T, C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T, C: Comparator<T>> Ord for OrderedBy<T, C> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.comparator.compare(&self.value, &other.value)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("Bilbo", "Frodo", Ordering::Less)]
    #[case("Frodo", "Frodo", Ordering::Equal)]
    #[case("Samweis", "Pippin", Ordering::Greater)]
    fn natural_order_compares(#[case] a: &str, #[case] b: &str, #[case] expected: Ordering) {
        assert_eq!(NaturalOrder.compare(&a, &b), expected);
    }

    #[rstest]
    #[case(1, 2, Ordering::Greater)]
    #[case(2, 2, Ordering::Equal)]
    #[case(3, 2, Ordering::Less)]
    fn reversed_inverts(#[case] a: i32, #[case] b: i32, #[case] expected: Ordering) {
        assert_eq!(Reversed(NaturalOrder).compare(&a, &b), expected);
    }

    #[test]
    fn ordered_by_sorts_through_comparator() {
        let a = OrderedBy::new(1, Reversed(NaturalOrder));
        let b = OrderedBy::new(2, Reversed(NaturalOrder));
        assert!(a > b);
        assert_ne!(a, b);
    }

    #[test]
    fn comparator_round_trips() {
        use crate::serializable::Serializable;

        let cmp = Reversed(NaturalOrder);
        let back = Reversed::<NaturalOrder>::from_bytes(cmp.to_bytes().unwrap()).unwrap();
        assert_eq!(cmp, back);
    }
}
