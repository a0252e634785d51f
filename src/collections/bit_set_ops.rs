//! Boolean algebra of word-packed bit sets.
//!
//! Every binary operation accepts any `BitWordView` as right-hand side, whether shorter or longer than the set: missing
//! words, on either side, are `ALL_ZEROS`.

use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not, RangeInclusive, Sub, SubAssign};

use crate::{
    collections::{BitSetView, DynamicBitSet},
    utils::{BitWordRaw, BitWordView},
};

//
//  Intersection
//

impl DynamicBitSet {
    /// Returns the intersection of `self` and `other`.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use bit_packed::collections::DynamicBitSet;
    /// let set = DynamicBitSet::from_range(0..=63).and(&DynamicBitSet::from_range(32..=95));
    ///
    /// assert_eq!((32..=63).collect::<Vec<_>>(), set.to_vec());
    /// ```
    #[must_use]
    pub fn and<V>(&self, other: &V) -> Self
    where
        V: ?Sized + BitWordView,
    {
        let mut result = self.clone();

        result.and_in_place(other);

        result
    }

    /// Intersects `self` with `other`, in place.
    ///
    /// Words of `self` beyond the end of `other` are zeroed, but the storage is retained.
    pub fn and_in_place<V>(&mut self, other: &V)
    where
        V: ?Sized + BitWordView,
    {
        let other = other.words();
        let words = self.words_mut();

        let common = words.len().min(other.len());
        let (head, tail) = words.split_at_mut(common);

        for (word, o) in head.iter_mut().zip(other) {
            *word &= *o;
        }

        tail.fill(BitWordRaw::ALL_ZEROS);
    }
}

//
//  Union
//

impl DynamicBitSet {
    /// Returns the union of `self` and `other`.
    ///
    /// If `other` has no word at all, the result is a plain copy of `self`.
    ///
    /// #   Panics
    ///
    /// If the storage cannot be allocated.
    #[must_use]
    #[track_caller]
    pub fn or<V>(&self, other: &V) -> Self
    where
        V: ?Sized + BitWordView,
    {
        let mut result = self.clone();

        result.or_in_place(other);

        result
    }

    /// Unites `self` with `other`, in place.
    ///
    /// If `other` is longer than `self`, `self` first grows to exactly the length of `other`. If `other` has no word at
    /// all, does nothing.
    ///
    /// #   Panics
    ///
    /// If the storage cannot be allocated.
    #[track_caller]
    pub fn or_in_place<V>(&mut self, other: &V)
    where
        V: ?Sized + BitWordView,
    {
        let other = other.words();

        if other.is_empty() {
            return;
        }

        self.set_size(other.len());

        for (word, o) in self.words_mut().iter_mut().zip(other) {
            *word |= *o;
        }
    }
}

//
//  Complement
//

impl DynamicBitSet {
    /// Returns the complement of `self`, over all addressable bits.
    #[allow(clippy::should_implement_trait)]
    #[must_use]
    pub fn not(&self) -> Self {
        let mut result = self.clone();

        result.not_in_place();

        result
    }

    /// Complements `self`, in place, over all addressable bits.
    ///
    /// The storage does not grow: indexes beyond `self.num_bits()` remain absent.
    pub fn not_in_place(&mut self) {
        for word in self.words_mut() {
            *word = !*word;
        }
    }

    /// Complements `self`, in place, over the indexes from 0 to `max_bit`, both inclusive.
    ///
    /// The storage first grows, see `not_in_place_range`.
    ///
    /// #   Panics
    ///
    /// If the storage cannot be allocated.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use bit_packed::collections::DynamicBitSet;
    /// let mut set = DynamicBitSet::from_values([1, 3]);
    ///
    /// set.not_in_place_upto(4);
    ///
    /// assert_eq!(vec![0, 2, 4], set.to_vec());
    /// ```
    #[track_caller]
    pub fn not_in_place_upto(&mut self, max_bit: usize) {
        self.not_in_place_range(0..=max_bit);
    }

    /// Complements `self`, in place, over the indexes of `range`, both ends inclusive.
    ///
    /// The storage first grows to `max(len_in_words * 2, words to hold the end of range)`, even if the end of `range` is
    /// already addressable, and even if `range` is empty. See `grow_past`.
    ///
    /// #   Panics
    ///
    /// If the storage cannot be allocated.
    #[track_caller]
    pub fn not_in_place_range(&mut self, range: RangeInclusive<usize>) {
        let (min_bit, max_bit) = range.into_inner();

        self.grow_past(max_bit);

        self.flip_range(min_bit, max_bit);
    }

    /// Returns the complement of `self`, over all addressable bits, see `not`.
    #[must_use]
    pub fn complement(&self) -> Self {
        self.not()
    }

    /// Returns the complement of `self` relative to `universe`, that is the indexes of `universe` absent from `self`.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use bit_packed::collections::DynamicBitSet;
    /// let universe = DynamicBitSet::from_range(0..=5);
    ///
    /// let set = DynamicBitSet::from_values([1, 4, 9]).complement_in(&universe);
    ///
    /// assert_eq!(vec![0, 2, 3, 5], set.to_vec());
    /// ```
    #[must_use]
    pub fn complement_in<V>(&self, universe: &V) -> Self
    where
        V: ?Sized + BitWordView,
    {
        let mut result = DynamicBitSet::from_view(universe);

        result.subtract_in_place(self);

        result
    }
}

//
//  Difference
//

impl DynamicBitSet {
    /// Returns the difference of `self` and `other`, that is the indexes of `self` absent from `other`.
    #[must_use]
    pub fn subtract<V>(&self, other: &V) -> Self
    where
        V: ?Sized + BitWordView,
    {
        let mut result = self.clone();

        result.subtract_in_place(other);

        result
    }

    /// Removes every index of `other` from `self`, in place.
    ///
    /// Only the words common to both `self` and `other` are affected; the storage never grows.
    pub fn subtract_in_place<V>(&mut self, other: &V)
    where
        V: ?Sized + BitWordView,
    {
        for (word, o) in self.words_mut().iter_mut().zip(other.words()) {
            *word &= !*o;
        }
    }
}

//
//  Operators
//
//  The operators are implemented on references, so as not to consume the operands, and delegate to the named methods.
//

impl<V> BitAndAssign<&V> for DynamicBitSet
where
    V: ?Sized + BitWordView,
{
    fn bitand_assign(&mut self, rhs: &V) {
        self.and_in_place(rhs);
    }
}

impl<V> BitAnd<&V> for &DynamicBitSet
where
    V: ?Sized + BitWordView,
{
    type Output = DynamicBitSet;

    fn bitand(self, rhs: &V) -> Self::Output {
        self.and(rhs)
    }
}

impl<V> BitOrAssign<&V> for DynamicBitSet
where
    V: ?Sized + BitWordView,
{
    #[track_caller]
    fn bitor_assign(&mut self, rhs: &V) {
        self.or_in_place(rhs);
    }
}

impl<V> BitOr<&V> for &DynamicBitSet
where
    V: ?Sized + BitWordView,
{
    type Output = DynamicBitSet;

    #[track_caller]
    fn bitor(self, rhs: &V) -> Self::Output {
        self.or(rhs)
    }
}

impl<V> SubAssign<&V> for DynamicBitSet
where
    V: ?Sized + BitWordView,
{
    fn sub_assign(&mut self, rhs: &V) {
        self.subtract_in_place(rhs);
    }
}

impl<V> Sub<&V> for &DynamicBitSet
where
    V: ?Sized + BitWordView,
{
    type Output = DynamicBitSet;

    fn sub(self, rhs: &V) -> Self::Output {
        self.subtract(rhs)
    }
}

impl Not for &DynamicBitSet {
    type Output = DynamicBitSet;

    fn not(self) -> Self::Output {
        DynamicBitSet::not(self)
    }
}

impl<V> BitAnd<&V> for BitSetView<'_>
where
    V: ?Sized + BitWordView,
{
    type Output = DynamicBitSet;

    fn bitand(self, rhs: &V) -> Self::Output {
        self.to_owned_set().and(rhs)
    }
}

impl<V> BitOr<&V> for BitSetView<'_>
where
    V: ?Sized + BitWordView,
{
    type Output = DynamicBitSet;

    #[track_caller]
    fn bitor(self, rhs: &V) -> Self::Output {
        self.to_owned_set().or(rhs)
    }
}

impl<V> Sub<&V> for BitSetView<'_>
where
    V: ?Sized + BitWordView,
{
    type Output = DynamicBitSet;

    fn sub(self, rhs: &V) -> Self::Output {
        self.to_owned_set().subtract(rhs)
    }
}

// mod and_tests

// mod or_tests

#[cfg(test)]
mod not_tests {
    use super::*;

    #[test]
    fn whole() {
        let set = DynamicBitSet::from_values([0, 2]);

        let complement = set.not();

        assert_eq!(30, complement.len());
        assert!(!complement.contains(0));
        assert!(complement.contains(1));
        assert!(!complement.contains(2));
        assert!(complement.contains(31));
        assert!(!complement.contains(32));

        assert_eq!(complement, set.complement());
        assert_eq!(complement, !&set);
        assert_eq!(set, !&complement);
    }

    #[test]
    fn whole_empty() {
        let mut set = DynamicBitSet::new();

        set.not_in_place();

        assert!(set.is_empty());
        assert_eq!(0, set.len_in_words());
    }

    #[test]
    fn upto() {
        let mut set = DynamicBitSet::from_values([1, 3]);

        set.not_in_place_upto(40);

        let mut expected: Vec<_> = (0..=40).collect();
        expected.retain(|i| *i != 1 && *i != 3);

        assert_eq!(expected, set.to_vec());
        assert_eq!(2, set.len_in_words());
    }

    #[test]
    fn range() {
        let mut set = DynamicBitSet::from_values([0, 5, 70]);

        set.not_in_place_range(4..=66);

        let mut expected: Vec<_> = (4..=66).filter(|i| *i != 5).collect();
        expected.insert(0, 0);
        expected.push(70);

        assert_eq!(expected, set.to_vec());
    }

    #[test]
    fn upto_always_grows() {
        let mut set = DynamicBitSet::from_value(1);

        set.not_in_place_upto(4);

        assert_eq!(vec![0, 2, 3, 4], set.to_vec());
        assert_eq!(64, set.num_bits());

        set.not_in_place_upto(4);

        assert_eq!(vec![1], set.to_vec());
        assert_eq!(128, set.num_bits());
    }

    #[test]
    fn range_always_grows() {
        let mut set = DynamicBitSet::from_value(1);

        set.not_in_place_range(2..=4);

        assert_eq!(vec![1, 2, 3, 4], set.to_vec());
        assert_eq!(2, set.len_in_words());
        assert_eq!(64, set.num_bits());
    }

    #[test]
    fn range_empty() {
        let mut set = DynamicBitSet::from_value(1);

        #[allow(clippy::reversed_empty_ranges)]
        let empty = 50..=40;

        set.not_in_place_range(empty);

        assert_eq!(vec![1], set.to_vec());
        assert_eq!(2, set.len_in_words());
    }

    #[test]
    fn double_complement() {
        let set = DynamicBitSet::from_values([0, 7, 31, 32, 99]);

        let mut twice = set.clone();
        twice.not_in_place_upto(99);
        twice.not_in_place_upto(99);

        assert_eq!(set, twice);
    }

    #[test]
    fn complement_in() {
        let universe = DynamicBitSet::from_range(0..=5);
        let set = DynamicBitSet::from_values([1, 4, 90]);

        assert_eq!(vec![0, 2, 3, 5], set.complement_in(&universe).to_vec());
        assert_eq!(universe, DynamicBitSet::new().complement_in(&universe));
    }
} // mod not_tests

// mod subtract_tests
