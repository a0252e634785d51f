//  See the `BitWordView` trait, and the `WordBuffer` type.

use core::{
    cmp,
    hash::{Hash, Hasher},
};

use alloc::vec::Vec;

use crate::utils::{BitStoreError, BitWordRaw, IndexOfWordRaw};

//
//  API
//

/// A trait for read-only access to a sequence of `BitWordRaw`.
///
/// Word `k`, bit `b`, represents the presence of index `k * 32 + b`. Any word past the end of the sequence is
/// considered to be `ALL_ZEROS`.
///
/// The trait is pre-implemented for `[BitWordRaw]` and `[BitWordRaw; N]`, so that literal word tables may be used
/// directly as operands of set operations.
pub trait BitWordView {
    /// Returns the underlying words.
    fn words(&self) -> &[BitWordRaw];

    /// Returns the `BitWordRaw` at the given index.
    ///
    /// If `index` is past the end, an `ALL_ZEROS` word is returned.
    #[inline]
    fn get(&self, index: IndexOfWordRaw) -> BitWordRaw {
        self.words().get(index.0).copied().unwrap_or(BitWordRaw::ALL_ZEROS)
    }

    /// Returns the number of words, including any trailing `ALL_ZEROS` word.
    #[inline]
    fn len_in_words(&self) -> usize {
        self.words().len()
    }
}

impl<V> BitWordView for &V
where
    V: ?Sized + BitWordView,
{
    fn words(&self) -> &[BitWordRaw] {
        (**self).words()
    }
}

impl<V> BitWordView for &mut V
where
    V: ?Sized + BitWordView,
{
    fn words(&self) -> &[BitWordRaw] {
        (**self).words()
    }
}

impl BitWordView for [BitWordRaw] {
    #[inline]
    fn words(&self) -> &[BitWordRaw] {
        self
    }
}

impl<const N: usize> BitWordView for [BitWordRaw; N] {
    #[inline]
    fn words(&self) -> &[BitWordRaw] {
        self
    }
}

impl BitWordView for Vec<BitWordRaw> {
    #[inline]
    fn words(&self) -> &[BitWordRaw] {
        self
    }
}

/// Returns whether two sequences of words hold the same bits.
///
/// Trailing `ALL_ZEROS` words are insignificant: `[w]` and `[w, ALL_ZEROS]` are equal.
pub fn words_eq(left: &[BitWordRaw], right: &[BitWordRaw]) -> bool {
    if left.len() > right.len() {
        return words_eq(right, left);
    }

    let (head, tail) = right.split_at(left.len());

    left == head && tail.iter().all(|w| *w == BitWordRaw::ALL_ZEROS)
}

/// Returns the prefix of `words` stripped of its trailing `ALL_ZEROS` words.
///
/// Two sequences are `words_eq` if and only if their significant prefixes are equal, which makes this prefix suitable
/// for hashing.
pub fn significant_words(words: &[BitWordRaw]) -> &[BitWordRaw] {
    let end = words
        .iter()
        .rposition(|w| *w != BitWordRaw::ALL_ZEROS)
        .map_or(0, |i| i + 1);

    &words[..end]
}

// mod words_tests

//
//  WordBuffer
//

/// A growable buffer of words.
///
/// The buffer distinguishes its length, the number of words addressable by a set, from its capacity, the number of
/// words allocated. Only the length is observable through the sets; the capacity is exposed to audit memory usage.
///
/// The buffer only ever grows: no operation reduces its length.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct WordBuffer {
    words: Vec<BitWordRaw>,
}

//
//  Creation
//

impl WordBuffer {
    /// Returns a new, empty, instance.
    ///
    /// Does not allocate.
    pub const fn new() -> Self {
        Self { words: Vec::new() }
    }

    /// Returns a new instance of `len` `ALL_ZEROS` words.
    pub fn with_len(len: usize) -> Result<Self, BitStoreError> {
        let mut result = Self::new();

        result.set_size(len)?;

        Ok(result)
    }

    /// Returns a new instance over the given words.
    pub const fn from_words(words: Vec<BitWordRaw>) -> Self {
        Self { words }
    }

    /// Returns the underlying words.
    pub fn into_words(self) -> Vec<BitWordRaw> {
        self.words
    }
}

//
//  Access
//

impl WordBuffer {
    /// Returns the number of addressable words.
    #[inline]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns whether no word is addressable.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns the number of allocated words, always greater than or equal to `self.len()`.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.words.capacity()
    }

    /// Returns a reference to the addressable words.
    #[inline]
    pub fn words(&self) -> &[BitWordRaw] {
        &self.words
    }

    /// Returns a mutable reference to the addressable words.
    #[inline]
    pub fn words_mut(&mut self) -> &mut [BitWordRaw] {
        &mut self.words
    }

    /// Returns the `BitWordRaw` at the given index, or `ALL_ZEROS` if past the end.
    #[inline]
    pub fn get(&self, index: IndexOfWordRaw) -> BitWordRaw {
        self.words.as_slice().get(index.0).copied().unwrap_or(BitWordRaw::ALL_ZEROS)
    }

    /// Returns a mutable reference to the `BitWordRaw` at the given index, if addressable.
    #[inline]
    pub fn get_mut(&mut self, index: IndexOfWordRaw) -> Option<&mut BitWordRaw> {
        self.words.get_mut(index.0)
    }
}

//
//  Growth
//

impl WordBuffer {
    /// Ensures that the bit at `index` is addressable.
    ///
    /// If the bit is already addressable, does nothing. Otherwise, the length is at least doubled, and extended to
    /// `BitWordRaw::words_to_hold(index)` if doubling is not sufficient. New words are `ALL_ZEROS`.
    ///
    /// On error, `self` is left unchanged.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use bit_packed::utils::WordBuffer;
    /// let mut buffer = WordBuffer::with_len(3).expect("allocation");
    ///
    /// buffer.grow_to_include(100).expect("allocation");
    /// assert_eq!(6, buffer.len());
    ///
    /// buffer.grow_to_include(1_000).expect("allocation");
    /// assert_eq!(32, buffer.len());
    /// ```
    #[inline]
    pub fn grow_to_include(&mut self, index: usize) -> Result<(), BitStoreError> {
        let (of_word, _) = BitWordRaw::split(index);

        if of_word.0 < self.words.len() {
            return Ok(());
        }

        self.grow_past(index)
    }

    /// Grows the length to `max(len * 2, BitWordRaw::words_to_hold(index))`, even if `index` is already addressable.
    ///
    /// New words are `ALL_ZEROS`. On error, `self` is left unchanged.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use bit_packed::utils::WordBuffer;
    /// let mut buffer = WordBuffer::with_len(2).expect("allocation");
    ///
    /// buffer.grow_past(3).expect("allocation");
    /// assert_eq!(4, buffer.len());
    /// ```
    #[inline(never)]
    pub fn grow_past(&mut self, index: usize) -> Result<(), BitStoreError> {
        let doubled = self.words.len().saturating_mul(2);

        self.set_size(cmp::max(doubled, BitWordRaw::words_to_hold(index)))
    }

    /// Ensures that at least `len` words are addressable.
    ///
    /// Unlike `grow_to_include`, the length is extended to exactly `len`, if shorter. The length is never reduced.
    ///
    /// On error, `self` is left unchanged.
    pub fn set_size(&mut self, len: usize) -> Result<(), BitStoreError> {
        let Some(additional) = len.checked_sub(self.words.len()) else {
            return Ok(());
        };

        self.words.try_reserve_exact(additional)?;
        self.words.resize(len, BitWordRaw::ALL_ZEROS);

        Ok(())
    }
}

//
//  BitWordView
//

impl BitWordView for WordBuffer {
    #[inline]
    fn words(&self) -> &[BitWordRaw] {
        &self.words
    }
}

//
//  Common traits
//

impl Eq for WordBuffer {}

impl Hash for WordBuffer {
    fn hash<H>(&self, state: &mut H)
    where
        H: Hasher,
    {
        significant_words(&self.words).hash(state);
    }
}

impl PartialEq for WordBuffer {
    fn eq(&self, other: &Self) -> bool {
        words_eq(&self.words, &other.words)
    }
}

// mod buffer_tests
