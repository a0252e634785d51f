//! Core implementation of a word-packed set, generic over a words store.

use core::hash::{Hash, Hasher};

use alloc::vec::Vec;

use crate::utils::{BitIndexIter, BitWordRaw, BitWordView, significant_words, words_eq};

/// Core implementation of a word-packed set.
///
/// The core implements the read-only queries, shared between owned and borrowed sets.
#[derive(Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct BitSetCore<S> {
    words: S,
}

//
//  Creation
//

impl<S> BitSetCore<S> {
    /// Creates a new set over an existing words store.
    pub const fn new(words: S) -> Self {
        Self { words }
    }

    /// Returns the underlying store.
    pub const fn store(&self) -> &S {
        &self.words
    }

    /// Returns the underlying store, mutably.
    pub const fn store_mut(&mut self) -> &mut S {
        &mut self.words
    }

    /// Returns the underlying store.
    pub fn into_store(self) -> S {
        self.words
    }
}

//
//  Queries
//

impl<S> BitSetCore<S>
where
    S: BitWordView,
{
    /// Returns the underlying words.
    #[inline]
    pub fn words(&self) -> &[BitWordRaw] {
        self.words.words()
    }

    /// Returns whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.words().iter().all(|w| *w == BitWordRaw::ALL_ZEROS)
    }

    /// Returns the number of elements in the set.
    pub fn len(&self) -> usize {
        self.words().iter().map(BitWordRaw::count).sum()
    }

    /// Returns whether the set contains the index, or not.
    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        let (of_word, in_word) = BitWordRaw::split(index);

        self.words.get(of_word).is_set(in_word)
    }

    /// Returns the smallest index in the set, if any.
    pub fn first(&self) -> Option<usize> {
        self.iter().next()
    }

    /// Returns an iterator over the indexes of the set, in ascending order.
    pub fn iter(&self) -> BitIndexIter<'_> {
        BitIndexIter::new(self.words())
    }

    /// Returns the indexes of the set, in ascending order.
    pub fn to_vec(&self) -> Vec<usize> {
        self.iter().collect()
    }

    /// Returns the number of addressable bits.
    pub fn num_bits(&self) -> usize {
        self.words().len().saturating_mul(BitWordRaw::BITS)
    }

    /// Returns whether every index of `self` is also in `other`.
    pub fn is_subset_of<V>(&self, other: &V) -> bool
    where
        V: ?Sized + BitWordView,
    {
        let other = other.words();

        self.words().iter().enumerate().all(|(i, w)| {
            let o = other.get(i).copied().unwrap_or(BitWordRaw::ALL_ZEROS);

            *w & !o == BitWordRaw::ALL_ZEROS
        })
    }
}

//
//  Common traits
//

impl<S> BitWordView for BitSetCore<S>
where
    S: BitWordView,
{
    #[inline]
    fn words(&self) -> &[BitWordRaw] {
        self.words.words()
    }
}

impl<S> Eq for BitSetCore<S> where S: BitWordView {}

impl<S> Hash for BitSetCore<S>
where
    S: BitWordView,
{
    fn hash<H>(&self, state: &mut H)
    where
        H: Hasher,
    {
        significant_words(self.words.words()).hash(state);
    }
}

impl<S, T> PartialEq<BitSetCore<T>> for BitSetCore<S>
where
    S: BitWordView,
    T: BitWordView,
{
    fn eq(&self, other: &BitSetCore<T>) -> bool {
        words_eq(self.words.words(), other.words.words())
    }
}

// mod tests
