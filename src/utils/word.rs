//  See `BitWordRaw` type.
//
//  #   Why a dedicated type?
//
//  Bundling methods on an existing type is possible only by "extension" traits, which then require the user to have
//  these traits in scope to invoke them.
//
//  A dedicated type, on top of avoiding type confusion, is more ergonomic as inherent methods can just be called
//  without any hassle.
//
//
//  #   Why `u32`?
//
//  The sets are meant to hold token types, and grammar symbols, of which there are rarely more than a few hundreds.
//  Word tables generated for such sets are emitted as literal `u32` constants, and a smaller word keeps those tables,
//  and the trailing slack of a set, tight.

use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

/// A word of bits.
///
/// Each bit of the word records the presence, or absence, of one index in a set. `BitWordRaw` offers efficient methods
/// to manipulate these bits in bulk.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[repr(transparent)]
pub struct BitWordRaw(pub u32);

/// The index of a word, in a sequence of words.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct IndexOfWordRaw(pub usize);

/// The index of a bit in a word.
///
/// The index of a bit in a word is expected to always be strictly less than 32. No index created by `BitWordRaw::split`
/// will ever violate this invariant.
///
/// #   Panics
///
/// In Debug, most operations taking an `IndexInWordRaw` will panic if its value is strictly greater than 31.
///
/// In Release, any high bit will be ignored (masked away).
///
/// #   Why `u32`?
///
/// In Rust, all shift operations take a `u32` as their right-hand argument, and the `IndexInWordRaw` will be used nigh
/// exclusively with shift operations.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct IndexInWordRaw(pub u32);

//
//  Constants.
//

impl BitWordRaw {
    /// Number of bits in a word.
    pub const BITS: usize = 32;

    /// An all-zeros word.
    pub const ALL_ZEROS: Self = Self(0);

    /// An all-ones word.
    pub const ALL_ONES: Self = Self(!0);
}

//
//  Static operations.
//

impl BitWordRaw {
    /// Splits an index into an index-of-word/index-in-word pair.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use bit_packed::utils::BitWordRaw;
    /// let (of_word, in_word) = BitWordRaw::split(69);
    ///
    /// assert_eq!(2, of_word.0);
    /// assert_eq!(5, in_word.0);
    /// ```
    #[inline]
    pub const fn split(index: usize) -> (IndexOfWordRaw, IndexInWordRaw) {
        //  Compute both / and % close together, so the optimizer fuses both in a single instruction.
        let of_word = index / Self::BITS;
        let in_word = index % Self::BITS;

        (IndexOfWordRaw(of_word), IndexInWordRaw(in_word as _))
    }

    /// Fuses a pair of index-of-word/index-in-word pair into an index.
    ///
    /// Returns None if the index-of-word is too large for the index. This will never happen for pairs obtained from
    /// `Self::split`, but may happen for user-provided pairs.
    ///
    /// #   Panics
    ///
    /// See `IndexInWordRaw`.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use bit_packed::utils::{BitWordRaw, IndexInWordRaw, IndexOfWordRaw};
    /// let index = BitWordRaw::fuse(IndexOfWordRaw(2), IndexInWordRaw(5)).expect("no overflow");
    ///
    /// assert_eq!(69, index);
    /// ```
    #[inline]
    pub const fn fuse(of_word: IndexOfWordRaw, in_word: IndexInWordRaw) -> Option<usize> {
        debug_assert!((in_word.0 as usize) < Self::BITS);

        //  FIXME: convert to `?` when it is const.
        let Some(index) = of_word.0.checked_mul(Self::BITS) else {
            return None;
        };

        //  Mask to ensure the addition doesn't overflow.
        let in_word = in_word.0 as usize % Self::BITS;

        Some(index + in_word)
    }

    /// Returns the number of words required to address `index`.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use bit_packed::utils::BitWordRaw;
    /// assert_eq!(1, BitWordRaw::words_to_hold(0));
    /// assert_eq!(1, BitWordRaw::words_to_hold(31));
    /// assert_eq!(2, BitWordRaw::words_to_hold(32));
    /// ```
    #[inline]
    pub const fn words_to_hold(index: usize) -> usize {
        //  Cannot overflow, as `index / BITS` is at most `usize::MAX / 32`.
        index / Self::BITS + 1
    }
}

#[cfg(test)]
mod static_tests {
    use super::*;

    #[test]
    fn split_brush() {
        assert_eq!((0, 0), compute_split(0));
        assert_eq!((0, 1), compute_split(1));
        assert_eq!((0, 30), compute_split(30));
        assert_eq!((0, 31), compute_split(31));

        assert_eq!((1, 0), compute_split(32));
        assert_eq!((1, 1), compute_split(33));
        assert_eq!((1, 31), compute_split(63));

        assert_eq!((2, 0), compute_split(64));
    }

    #[test]
    fn split_highest() {
        assert_eq!((usize::MAX / 32, 31), compute_split(usize::MAX));
    }

    #[test]
    fn fuse_brush() {
        assert_eq!(Some(0), compute_fuse(0, 0));
        assert_eq!(Some(31), compute_fuse(0, 31));
        assert_eq!(Some(32), compute_fuse(1, 0));
        assert_eq!(Some(63), compute_fuse(1, 31));
        assert_eq!(Some(64), compute_fuse(2, 0));
    }

    #[test]
    fn fuse_overflow() {
        let highest_of_word = usize::MAX / 32;

        assert_eq!(Some(usize::MAX), compute_fuse(highest_of_word, 31));
        assert_eq!(None, compute_fuse(highest_of_word + 1, 0));
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic]
    fn fuse_in_overflow() {
        compute_fuse(0, 32);
    }

    #[test]
    fn words_to_hold_brush() {
        assert_eq!(1, BitWordRaw::words_to_hold(0));
        assert_eq!(1, BitWordRaw::words_to_hold(31));
        assert_eq!(2, BitWordRaw::words_to_hold(32));
        assert_eq!(2, BitWordRaw::words_to_hold(40));
        assert_eq!(usize::MAX / 32 + 1, BitWordRaw::words_to_hold(usize::MAX));
    }

    fn compute_split(index: usize) -> (usize, u32) {
        let (o, i) = BitWordRaw::split(index);

        (o.0, i.0)
    }

    fn compute_fuse(of_word: usize, in_word: u32) -> Option<usize> {
        BitWordRaw::fuse(IndexOfWordRaw(of_word), IndexInWordRaw(in_word))
    }
} // mod static_tests

//
//  Bit operations.
//

impl BitWordRaw {
    /// Returns the number of bits set.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use bit_packed::utils::BitWordRaw;
    /// assert_eq!(0, BitWordRaw::ALL_ZEROS.count());
    /// assert_eq!(32, BitWordRaw::ALL_ONES.count());
    /// ```
    #[inline]
    pub const fn count(&self) -> usize {
        self.0.count_ones() as _
    }

    /// Returns whether the given bit is set.
    ///
    /// #   Panics
    ///
    /// See `IndexInWordRaw`.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use bit_packed::utils::{BitWordRaw, IndexInWordRaw};
    /// let word = BitWordRaw(0b1001);
    ///
    /// assert!(word.is_set(IndexInWordRaw(0)));
    /// assert!(word.is_set(IndexInWordRaw(3)));
    ///
    /// for i in (1..=2).chain(4..=31) {
    ///     assert!(!word.is_set(IndexInWordRaw(i)));
    /// }
    /// ```
    #[inline]
    pub const fn is_set(&self, bit: IndexInWordRaw) -> bool {
        let mask = Self::bit_mask(bit);

        (self.0 & mask) != 0
    }

    /// Sets a bit.
    ///
    /// Returns whether the bit is newly set, or not.
    ///
    /// #   Panics
    ///
    /// See `IndexInWordRaw`.
    #[inline]
    pub const fn set(&mut self, bit: IndexInWordRaw) -> bool {
        let mask = Self::bit_mask(bit);

        let result = (self.0 & mask) == 0;

        self.0 |= mask;

        result
    }

    /// Resets a bit.
    ///
    /// Returns whether the bit was set, or not.
    ///
    /// #   Panics
    ///
    /// See `IndexInWordRaw`.
    #[inline]
    pub const fn reset(&mut self, bit: IndexInWordRaw) -> bool {
        let mask = Self::bit_mask(bit);

        let result = (self.0 & mask) != 0;

        self.0 &= !mask;

        result
    }

    /// Flips all bits from `first` to `last`, both inclusive.
    ///
    /// Does nothing if `first` is strictly greater than `last`.
    ///
    /// #   Panics
    ///
    /// See `IndexInWordRaw`.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use bit_packed::utils::{BitWordRaw, IndexInWordRaw};
    /// let mut word = BitWordRaw(0b1001);
    ///
    /// word.flip(IndexInWordRaw(0), IndexInWordRaw(2));
    ///
    /// assert_eq!(0b1110, word.0);
    /// ```
    #[inline]
    pub const fn flip(&mut self, first: IndexInWordRaw, last: IndexInWordRaw) {
        if first.0 > last.0 {
            return;
        }

        self.0 ^= Self::mask_after(first) & Self::mask_before(last);
    }
}

// mod bit_tests

//
//  Query operations.
//

impl BitWordRaw {
    /// Returns the number of bits set that are at, or after, the given index.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use bit_packed::utils::{BitWordRaw, IndexInWordRaw};
    /// assert_eq!(0, BitWordRaw::ALL_ZEROS.count_after(IndexInWordRaw(0)));
    ///
    /// assert_eq!(32, BitWordRaw::ALL_ONES.count_after(IndexInWordRaw(0)));
    /// assert_eq!(1, BitWordRaw::ALL_ONES.count_after(IndexInWordRaw(31)));
    /// ```
    #[inline]
    pub const fn count_after(&self, bit: IndexInWordRaw) -> usize {
        let mask = Self::mask_after(bit);

        (self.0 & mask).count_ones() as _
    }

    /// Returns the index of the next set bit that is at, or after, the given index, if any.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use bit_packed::utils::{BitWordRaw, IndexInWordRaw};
    /// assert_eq!(None, BitWordRaw::ALL_ZEROS.next_after(IndexInWordRaw(0)));
    ///
    /// assert_eq!(Some(IndexInWordRaw(3)), BitWordRaw(0b1000).next_after(IndexInWordRaw(1)));
    /// ```
    #[inline]
    pub const fn next_after(&self, bit: IndexInWordRaw) -> Option<IndexInWordRaw> {
        let mask = Self::mask_after(bit);

        let zeros = (self.0 & mask).trailing_zeros();

        //  FIXME: convert to `.then_some` when it is const.
        if (zeros as usize) < Self::BITS {
            Some(IndexInWordRaw(zeros))
        } else {
            None
        }
    }
}

// mod query_tests

//
//  Bitwise traits.
//

impl BitAndAssign for BitWordRaw {
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl BitAnd for BitWordRaw {
    type Output = Self;

    #[inline]
    fn bitand(mut self, rhs: Self) -> Self::Output {
        self &= rhs;
        self
    }
}

impl BitOrAssign for BitWordRaw {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitOr for BitWordRaw {
    type Output = Self;

    #[inline]
    fn bitor(mut self, rhs: Self) -> Self::Output {
        self |= rhs;
        self
    }
}

impl BitXorAssign for BitWordRaw {
    #[inline]
    fn bitxor_assign(&mut self, rhs: Self) {
        self.0 ^= rhs.0;
    }
}

impl BitXor for BitWordRaw {
    type Output = Self;

    #[inline]
    fn bitxor(mut self, rhs: Self) -> Self::Output {
        self ^= rhs;
        self
    }
}

impl Not for BitWordRaw {
    type Output = Self;

    #[inline]
    fn not(self) -> Self::Output {
        Self(!self.0)
    }
}

// mod bitwise_tests

//
//  Implementation details
//

impl BitWordRaw {
    //  Mask of the bit.
    #[inline]
    const fn bit_mask(bit: IndexInWordRaw) -> u32 {
        debug_assert!((bit.0 as usize) < Self::BITS);

        //  Mask to ensure the shift doesn't overflow.
        let shift = bit.0 % Self::BITS as u32;

        1 << shift
    }

    //  Mask including `bit` and all bits after.
    #[inline]
    const fn mask_after(bit: IndexInWordRaw) -> u32 {
        let mask = Self::bit_mask(bit) - 1;

        !mask
    }

    //  Mask including `bit` and all bits before.
    #[inline]
    const fn mask_before(bit: IndexInWordRaw) -> u32 {
        (Self::bit_mask(bit) << 1).wrapping_sub(1)
    }
}
