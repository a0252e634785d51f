//! Borrowed, read-only, implementation of a word-packed bit set.

use core::hash::{Hash, Hasher};

use alloc::vec::Vec;

use crate::{
    collections::{BitSetCore, DynamicBitSet},
    utils::{BitIndexIter, BitWordRaw, BitWordView},
};

/// Borrowed, read-only, implementation of a word-packed bit set.
///
/// A view aliases a sequence of words, whether those of a `DynamicBitSet`, or a literal table of words generated ahead
/// of time. Creating a view never allocates.
///
/// #   Examples
///
/// ```
/// #   use bit_packed::{collections::BitSetView, utils::BitWordRaw};
/// static FOLLOW: [BitWordRaw; 2] = [BitWordRaw(0b0110), BitWordRaw(0b1)];
///
/// let follow = BitSetView::from_raw(&FOLLOW);
///
/// assert!(follow.contains(2));
/// assert!(follow.contains(32));
/// assert_eq!("{1,2,32}", follow.to_string());
/// ```
#[derive(Clone, Copy, Default)]
pub struct BitSetView<'a>(BitSetCore<&'a [BitWordRaw]>);

//
//  Creation
//

impl<'a> BitSetView<'a> {
    /// Creates a view over `words`.
    pub const fn new(words: &'a [BitWordRaw]) -> Self {
        Self(BitSetCore::new(words))
    }

    /// Creates a view over `words`, see `new`.
    ///
    /// Word `k`, bit `b`, represents the presence of index `k * 32 + b`.
    pub const fn from_raw(words: &'a [BitWordRaw]) -> Self {
        Self::new(words)
    }

    /// Returns a copy of the set, independent from the aliased words.
    pub fn to_owned_set(&self) -> DynamicBitSet {
        DynamicBitSet::from_view(self)
    }
}

//
//  Queries
//

impl<'a> BitSetView<'a> {
    /// Returns whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of elements in the set.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether the set contains `element`, or not.
    pub fn contains(&self, element: usize) -> bool {
        self.0.contains(element)
    }

    /// Returns the smallest element of the set, if any.
    pub fn first(&self) -> Option<usize> {
        self.0.first()
    }

    /// Returns an iterator over the elements of the set, in ascending order.
    pub fn iter(&self) -> BitIndexIter<'a> {
        BitIndexIter::new(self.words())
    }

    /// Returns the elements of the set, in ascending order.
    pub fn to_vec(&self) -> Vec<usize> {
        self.0.to_vec()
    }

    /// Returns the aliased words.
    pub fn words(&self) -> &'a [BitWordRaw] {
        self.0.into_store()
    }

    /// Returns the number of addressable bits.
    pub fn num_bits(&self) -> usize {
        self.0.num_bits()
    }

    /// Returns the number of addressable words.
    pub fn len_in_words(&self) -> usize {
        self.words().len()
    }

    /// Returns whether every element of `self` is also an element of `other`.
    pub fn is_subset_of<V>(&self, other: &V) -> bool
    where
        V: ?Sized + BitWordView,
    {
        self.0.is_subset_of(other)
    }
}

//
//  BitWordView
//

impl BitWordView for BitSetView<'_> {
    #[inline]
    fn words(&self) -> &[BitWordRaw] {
        self.0.words()
    }
}

//
//  Common traits
//

impl Eq for BitSetView<'_> {}

impl Hash for BitSetView<'_> {
    fn hash<H>(&self, state: &mut H)
    where
        H: Hasher,
    {
        self.0.hash(state);
    }
}

impl<'b> PartialEq<BitSetView<'b>> for BitSetView<'_> {
    fn eq(&self, other: &BitSetView<'b>) -> bool {
        self.0.eq(&other.0)
    }
}

impl PartialEq<DynamicBitSet> for BitSetView<'_> {
    fn eq(&self, other: &DynamicBitSet) -> bool {
        self.eq(&other.as_view())
    }
}

impl<'a> IntoIterator for BitSetView<'a> {
    type Item = usize;
    type IntoIter = BitIndexIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> From<&'a DynamicBitSet> for BitSetView<'a> {
    fn from(set: &'a DynamicBitSet) -> Self {
        set.as_view()
    }
}

// mod tests
