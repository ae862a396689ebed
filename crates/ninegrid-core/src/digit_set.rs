//! A set of digits 1-9, stored as a bitmask.

use std::{
    fmt::{self, Debug},
    ops::{BitAnd, BitOr},
};

use crate::digit::Digit;

/// A set of digits 1-9, represented as a 9-bit mask.
///
/// The implementation uses a 16-bit integer where bits 0-8 represent digits
/// 1-9 respectively, providing efficient storage and fast set operations.
/// It serves two roles: duplicate detection during rule checking, and
/// candidate note annotations on empty cells.
///
/// # Examples
///
/// ```
/// use ninegrid_core::{Digit, DigitSet};
///
/// let mut set = DigitSet::new();
/// assert!(set.insert(Digit::D1));
/// assert!(set.insert(Digit::D5));
/// assert!(!set.insert(Digit::D5)); // already present
///
/// assert_eq!(set.len(), 2);
/// assert!(set.contains(Digit::D5));
/// assert!(!set.contains(Digit::D2));
/// ```
///
/// # Set Operations
///
/// ```
/// use ninegrid_core::{Digit, DigitSet};
///
/// let a = DigitSet::from_iter([Digit::D1, Digit::D2, Digit::D3]);
/// let b = DigitSet::from_iter([Digit::D2, Digit::D3, Digit::D4]);
///
/// assert_eq!(a | b, DigitSet::from_iter([Digit::D1, Digit::D2, Digit::D3, Digit::D4]));
/// assert_eq!(a & b, DigitSet::from_iter([Digit::D2, Digit::D3]));
/// assert_eq!(a.difference(b), DigitSet::from_iter([Digit::D1]));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DigitSet {
    bits: u16,
}

impl DigitSet {
    /// The empty set.
    pub const EMPTY: Self = Self { bits: 0 };

    /// The set containing all nine digits.
    pub const FULL: Self = Self { bits: 0x1ff };

    /// Creates a new, empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    const fn bit(digit: Digit) -> u16 {
        1 << (digit.value() - 1)
    }

    /// Inserts a digit into the set.
    ///
    /// Returns `true` if the digit was newly inserted, `false` if it was
    /// already present. The `false` case is what duplicate detection keys on.
    pub fn insert(&mut self, digit: Digit) -> bool {
        let bit = Self::bit(digit);
        let newly = self.bits & bit == 0;
        self.bits |= bit;
        newly
    }

    /// Removes a digit from the set.
    ///
    /// Returns `true` if the digit was present.
    pub fn remove(&mut self, digit: Digit) -> bool {
        let bit = Self::bit(digit);
        let present = self.bits & bit != 0;
        self.bits &= !bit;
        present
    }

    /// Returns `true` if the set contains the digit.
    #[must_use]
    pub const fn contains(self, digit: Digit) -> bool {
        self.bits & Self::bit(digit) != 0
    }

    /// Returns the number of digits in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns `true` if the set contains no digits.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Returns the union of `self` and `other`.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self {
            bits: self.bits | other.bits,
        }
    }

    /// Returns the intersection of `self` and `other`.
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self {
            bits: self.bits & other.bits,
        }
    }

    /// Returns the digits in `self` that are not in `other`.
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self {
            bits: self.bits & !other.bits,
        }
    }

    /// Returns an iterator over the digits in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ninegrid_core::{Digit, DigitSet};
    ///
    /// let set = DigitSet::from_iter([Digit::D9, Digit::D1, Digit::D5]);
    /// let collected: Vec<_> = set.iter().collect();
    /// assert_eq!(collected, vec![Digit::D1, Digit::D5, Digit::D9]);
    /// ```
    pub fn iter(self) -> impl Iterator<Item = Digit> {
        Digit::ALL.into_iter().filter(move |d| self.contains(*d))
    }
}

impl FromIterator<Digit> for DigitSet {
    fn from_iter<T: IntoIterator<Item = Digit>>(iter: T) -> Self {
        let mut set = Self::new();
        for digit in iter {
            set.insert(digit);
        }
        set
    }
}

impl BitOr for DigitSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitAnd for DigitSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        self.intersection(rhs)
    }
}

impl Debug for DigitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::digit::Digit::*;

    #[test]
    fn test_insert_reports_duplicates() {
        let mut set = DigitSet::new();
        assert!(set.insert(D1));
        assert!(set.insert(D9));
        assert!(!set.insert(D1));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_remove() {
        let mut set = DigitSet::from_iter([D2, D4]);
        assert!(set.remove(D2));
        assert!(!set.remove(D2));
        assert_eq!(set.len(), 1);
        assert!(set.contains(D4));
    }

    #[test]
    fn test_iteration_order() {
        let set = DigitSet::from_iter([D9, D1, D5, D3]);
        let collected: Vec<_> = set.iter().collect();
        assert_eq!(collected, vec![D1, D3, D5, D9]);
    }

    #[test]
    fn test_operations() {
        let a = DigitSet::from_iter([D1, D2, D3]);
        let b = DigitSet::from_iter([D2, D3, D4]);

        assert_eq!(a.union(b).len(), 4);
        assert_eq!(a.intersection(b).len(), 2);
        assert_eq!(a.difference(b).len(), 1);
        assert_eq!(a | b, a.union(b));
        assert_eq!(a & b, a.intersection(b));
    }

    #[test]
    fn test_constants() {
        assert_eq!(DigitSet::EMPTY.len(), 0);
        assert!(DigitSet::EMPTY.is_empty());
        assert_eq!(DigitSet::FULL.len(), 9);

        for digit in Digit::ALL {
            assert!(DigitSet::FULL.contains(digit));
        }
    }

    proptest! {
        /// The set behaves like a `BTreeSet<u8>` over any insertion sequence.
        #[test]
        fn test_matches_model_set(values in proptest::collection::vec(1..=9u8, 0..32)) {
            let mut set = DigitSet::new();
            let mut model = std::collections::BTreeSet::new();

            for value in values {
                let digit = Digit::from_value(value);
                prop_assert_eq!(set.insert(digit), model.insert(value));
            }

            prop_assert_eq!(set.len(), model.len());
            let collected: Vec<u8> = set.iter().map(Digit::value).collect();
            let expected: Vec<u8> = model.into_iter().collect();
            prop_assert_eq!(collected, expected);
        }
    }
}
