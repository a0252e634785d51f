//! Dynamically sized implementation of a word-packed bit set.

use core::{
    hash::{Hash, Hasher},
    ops::RangeInclusive,
};

use alloc::vec::Vec;

use crate::{
    api::{BitKey, BitStoreError},
    collections::{BitSetCore, BitSetView},
    utils::{BitIndexIter, BitWordRaw, BitWordView, IndexInWordRaw, WordBuffer},
};

/// Dynamically sized implementation of a word-packed bit set.
///
/// The set grows its storage, on demand, to address any index inserted, removed, or flipped. The storage never
/// shrinks, and trailing `ALL_ZEROS` words are insignificant: they affect neither equality, nor membership, nor length.
///
/// #   Examples
///
/// ```
/// #   use bit_packed::collections::DynamicBitSet;
/// let mut set = DynamicBitSet::from_range(2..=5);
///
/// assert!(set.insert(40));
/// assert!(set.remove(3));
///
/// assert_eq!(vec![2, 4, 5, 40], set.to_vec());
/// assert_eq!("{2,4,5,40}", set.to_string());
/// ```
#[derive(Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct DynamicBitSet(BitSetCore<WordBuffer>);

//
//  Creation
//

impl DynamicBitSet {
    /// Creates a new, empty, set.
    ///
    /// Does not allocate.
    pub const fn new() -> Self {
        Self(BitSetCore::new(WordBuffer::new()))
    }

    /// Creates a new, empty, set able to address `max_index` without growing.
    ///
    /// #   Panics
    ///
    /// If the storage cannot be allocated.
    #[track_caller]
    pub fn with_capacity(max_index: usize) -> Self {
        let mut result = Self::new();

        result.grow_to_include(max_index);

        result
    }

    /// Creates a set containing exactly `value`.
    ///
    /// #   Panics
    ///
    /// If the storage cannot be allocated.
    #[track_caller]
    pub fn from_value(value: usize) -> Self {
        let mut result = Self::with_capacity(value);

        result.insert(value);

        result
    }

    /// Creates a set containing every index of `range`, both ends included.
    ///
    /// The storage is sized to address the end of the range, even if the range is empty.
    ///
    /// #   Panics
    ///
    /// If the storage cannot be allocated.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use bit_packed::collections::DynamicBitSet;
    /// let set = DynamicBitSet::from_range(2..=5);
    ///
    /// assert_eq!(vec![2, 3, 4, 5], set.to_vec());
    /// ```
    #[track_caller]
    pub fn from_range(range: RangeInclusive<usize>) -> Self {
        let mut result = Self::with_capacity(*range.end());

        result.flip_range(*range.start(), *range.end());

        result
    }

    /// Creates a set containing every value of `values`.
    ///
    /// Duplicates are harmless.
    ///
    /// #   Panics
    ///
    /// If the storage cannot be allocated.
    #[track_caller]
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        let mut result = Self::new();

        result.extend(values);

        result
    }

    /// Creates a set containing every index of `other`.
    ///
    /// The words are copied, hence the result is independent of `other`. To alias a set instead, see `as_view`.
    ///
    /// #   Panics
    ///
    /// If the storage cannot be allocated.
    #[track_caller]
    pub fn from_view<V>(other: &V) -> Self
    where
        V: ?Sized + BitWordView,
    {
        Self::from_words_raw(other.words().to_vec())
    }

    /// Creates a set from a literal table of words.
    ///
    /// Word `k`, bit `b`, represents the presence of index `k * 32 + b`.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use bit_packed::collections::DynamicBitSet;
    /// let set = DynamicBitSet::from_words(&[0b1001, 0b1]);
    ///
    /// assert_eq!(vec![0, 3, 32], set.to_vec());
    /// ```
    pub fn from_words(words: &[u32]) -> Self {
        Self::from_words_raw(words.iter().copied().map(BitWordRaw).collect())
    }

    /// Creates a set over the given words.
    pub const fn from_words_raw(words: Vec<BitWordRaw>) -> Self {
        Self(BitSetCore::new(WordBuffer::from_words(words)))
    }

    /// Creates a set containing the keys of `container`, which designate an index.
    ///
    /// Keys which do not designate an index, such as negative integers or non-numeric strings, are skipped.
    ///
    /// #   Panics
    ///
    /// If the storage cannot be allocated.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use std::collections::BTreeMap;
    /// #   use bit_packed::collections::DynamicBitSet;
    /// let map = BTreeMap::from([("3", "three"), ("one", "1"), ("7", "seven")]);
    ///
    /// let set = DynamicBitSet::from_keys(&map);
    ///
    /// assert_eq!(vec![3, 7], set.to_vec());
    /// ```
    #[track_caller]
    pub fn from_keys<C, K, V>(container: C) -> Self
    where
        C: IntoIterator<Item = (K, V)>,
        K: BitKey,
    {
        container.into_iter().filter_map(|(key, _)| key.bit_index()).collect()
    }

    /// Returns a borrowed, read-only, view of the set.
    ///
    /// Unlike `from_view`, or `clone`, the view aliases the words of `self`.
    pub fn as_view(&self) -> BitSetView<'_> {
        BitSetView::new(self.0.words())
    }
}

//
//  Growth
//

impl DynamicBitSet {
    /// Ensures that `index` is addressable, growing the storage if necessary.
    ///
    /// When growing, the number of words is at least doubled.
    ///
    /// #   Panics
    ///
    /// If the storage cannot be allocated.
    #[track_caller]
    pub fn grow_to_include(&mut self, index: usize) {
        if let Err(error) = self.try_grow_to_include(index) {
            grow_failed(error, index);
        }
    }

    /// Ensures that `index` is addressable, growing the storage if necessary.
    ///
    /// On error, `self` is left unchanged.
    pub fn try_grow_to_include(&mut self, index: usize) -> Result<(), BitStoreError> {
        self.0.store_mut().grow_to_include(index)
    }

    /// Grows the storage to `max(len_in_words * 2, words to hold index)`, even if `index` is already addressable.
    ///
    /// #   Panics
    ///
    /// If the storage cannot be allocated.
    #[track_caller]
    pub fn grow_past(&mut self, index: usize) {
        if let Err(error) = self.0.store_mut().grow_past(index) {
            grow_failed(error, index);
        }
    }

    /// Ensures that at least `len` words are addressable.
    ///
    /// Unlike `grow_to_include`, the number of words is extended to exactly `len`, if shorter.
    ///
    /// #   Panics
    ///
    /// If the storage cannot be allocated.
    #[track_caller]
    pub fn set_size(&mut self, len: usize) {
        if let Err(error) = self.0.store_mut().set_size(len) {
            grow_failed(error, len.saturating_mul(BitWordRaw::BITS));
        }
    }

    /// Returns the number of words allocated, which may exceed `self.len_in_words()`.
    pub fn capacity_in_words(&self) -> usize {
        self.0.store().capacity()
    }
}

//
//  Mutation
//

impl DynamicBitSet {
    /// Inserts `element` in the set.
    ///
    /// Returns whether `element` is newly inserted, or not.
    ///
    /// #   Panics
    ///
    /// If the storage cannot be allocated.
    #[track_caller]
    pub fn insert(&mut self, element: usize) -> bool {
        self.try_insert(element).unwrap_or_else(|error| grow_failed(error, element))
    }

    /// Inserts `element` in the set.
    ///
    /// Returns:
    ///
    /// -   `Ok(true)`: if `element` was successfully inserted.
    /// -   `Ok(false)`: if `element` was already present.
    /// -   `Err(_)`: if the storage could not grow to address `element`, in which case `self` is left unchanged.
    pub fn try_insert(&mut self, element: usize) -> Result<bool, BitStoreError> {
        let (word, in_word) = self.word_mut(element)?;

        Ok(word.set(in_word))
    }

    /// Inserts every index of `other` in the set.
    ///
    /// #   Panics
    ///
    /// If the storage cannot be allocated.
    #[track_caller]
    pub fn insert_all<V>(&mut self, other: &V)
    where
        V: ?Sized + BitWordView,
    {
        self.or_in_place(other);
    }

    /// Removes `element` from the set.
    ///
    /// Returns whether `element` was present, or not.
    ///
    /// The storage grows to address `element`, even though it was necessarily absent if not already addressable.
    ///
    /// #   Panics
    ///
    /// If the storage cannot be allocated.
    #[track_caller]
    pub fn remove(&mut self, element: usize) -> bool {
        self.try_remove(element).unwrap_or_else(|error| grow_failed(error, element))
    }

    /// Removes `element` from the set.
    ///
    /// Returns:
    ///
    /// -   `Ok(true)`: if `element` was present, and is now removed.
    /// -   `Ok(false)`: if `element` was absent.
    /// -   `Err(_)`: if the storage could not grow to address `element`, in which case `self` is left unchanged.
    pub fn try_remove(&mut self, element: usize) -> Result<bool, BitStoreError> {
        let (word, in_word) = self.word_mut(element)?;

        Ok(word.reset(in_word))
    }

    /// Removes `element` from the set, see `remove`.
    #[track_caller]
    pub fn clear_element(&mut self, element: usize) -> bool {
        self.remove(element)
    }

    /// Clears the set, removing all elements.
    ///
    /// The storage is retained.
    pub fn clear(&mut self) {
        self.0.store_mut().words_mut().fill(BitWordRaw::ALL_ZEROS);
    }
}

//
//  Queries
//

impl DynamicBitSet {
    /// Returns whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of elements in the set.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether the set contains `element`, or not.
    ///
    /// Any `element` beyond the storage is absent.
    pub fn contains(&self, element: usize) -> bool {
        self.0.contains(element)
    }

    /// Returns the smallest element of the set, if any.
    pub fn first(&self) -> Option<usize> {
        self.0.first()
    }

    /// Returns an iterator over the elements of the set, in ascending order.
    pub fn iter(&self) -> BitIndexIter<'_> {
        self.0.iter()
    }

    /// Returns the elements of the set, in ascending order.
    pub fn to_vec(&self) -> Vec<usize> {
        self.0.to_vec()
    }

    /// Returns the underlying words.
    ///
    /// The words alias the storage of the set, trailing `ALL_ZEROS` words included.
    pub fn words(&self) -> &[BitWordRaw] {
        self.0.words()
    }

    /// Returns a copy of the underlying words, as plain integers.
    pub fn to_packed(&self) -> Vec<u32> {
        self.0.words().iter().map(|w| w.0).collect()
    }

    /// Returns the number of addressable bits, which is unrelated to the number of elements.
    pub fn num_bits(&self) -> usize {
        self.0.num_bits()
    }

    /// Returns the number of addressable words.
    pub fn len_in_words(&self) -> usize {
        self.0.store().len()
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

impl BitWordView for DynamicBitSet {
    #[inline]
    fn words(&self) -> &[BitWordRaw] {
        self.0.words()
    }
}

//
//  Common traits
//

impl Eq for DynamicBitSet {}

impl Hash for DynamicBitSet {
    fn hash<H>(&self, state: &mut H)
    where
        H: Hasher,
    {
        self.0.hash(state);
    }
}

impl PartialEq for DynamicBitSet {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl PartialEq<BitSetView<'_>> for DynamicBitSet {
    fn eq(&self, other: &BitSetView<'_>) -> bool {
        self.as_view().eq(other)
    }
}

impl Extend<usize> for DynamicBitSet {
    #[track_caller]
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = usize>,
    {
        for element in iter {
            self.insert(element);
        }
    }
}

impl<'a> Extend<&'a usize> for DynamicBitSet {
    #[track_caller]
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = &'a usize>,
    {
        self.extend(iter.into_iter().copied());
    }
}

impl FromIterator<usize> for DynamicBitSet {
    #[track_caller]
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        Self::from_values(iter)
    }
}

impl<'a> IntoIterator for &'a DynamicBitSet {
    type Item = usize;
    type IntoIter = BitIndexIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl From<BitSetView<'_>> for DynamicBitSet {
    fn from(view: BitSetView<'_>) -> Self {
        Self::from_view(&view)
    }
}

//
//  Implementation details
//

impl DynamicBitSet {
    //  Returns the word holding `element`, growing if necessary, and the index of `element` within.
    fn word_mut(&mut self, element: usize) -> Result<(&mut BitWordRaw, IndexInWordRaw), BitStoreError> {
        let store = self.0.store_mut();

        store.grow_to_include(element)?;

        let (of_word, in_word) = BitWordRaw::split(element);

        //  `grow_to_include` guarantees `of_word` is addressable.
        let word = store.get_mut(of_word).ok_or(BitStoreError)?;

        Ok((word, in_word))
    }

    //  Flips every bit from `first` to `last`, both inclusive, which must be addressable.
    pub(crate) fn flip_range(&mut self, first: usize, last: usize) {
        if first > last {
            return;
        }

        let (first_word, first_bit) = BitWordRaw::split(first);
        let (last_word, last_bit) = BitWordRaw::split(last);

        let words = self.0.store_mut().words_mut();

        debug_assert!(last_word.0 < words.len(), "{} >= {}", last_word.0, words.len());

        for (i, word) in words.iter_mut().enumerate().take(last_word.0 + 1).skip(first_word.0) {
            let from = if i == first_word.0 { first_bit } else { IN_WORD_FIRST };
            let to = if i == last_word.0 { last_bit } else { IN_WORD_LAST };

            word.flip(from, to);
        }
    }

    //  Returns the words, mutably.
    pub(crate) fn words_mut(&mut self) -> &mut [BitWordRaw] {
        self.0.store_mut().words_mut()
    }
}

const IN_WORD_FIRST: IndexInWordRaw = IndexInWordRaw(0);
const IN_WORD_LAST: IndexInWordRaw = IndexInWordRaw(BitWordRaw::BITS as u32 - 1);

#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn grow_failed(error: BitStoreError, index: usize) -> ! {
    panic!("Cannot grow set to include {index}: {error}");
}

#[cfg(test)]
mod creation_tests {
    use std::collections::{BTreeMap, HashMap};

    use super::*;

    #[test]
    fn new() {
        let set = DynamicBitSet::new();

        assert!(set.is_empty());
        assert_eq!(0, set.len());
        assert_eq!(0, set.len_in_words());
        assert_eq!(0, set.num_bits());
        assert_eq!(None, set.first());
    }

    #[test]
    fn with_capacity() {
        let set = DynamicBitSet::with_capacity(64);

        assert!(set.is_empty());
        assert_eq!(3, set.len_in_words());
        assert_eq!(96, set.num_bits());
    }

    #[test]
    fn from_value() {
        let set = DynamicBitSet::from_value(40);

        assert_eq!(vec![40], set.to_vec());
        assert_eq!(2, set.len_in_words());
    }

    #[test]
    fn from_range() {
        assert_eq!(vec![2, 3, 4, 5], DynamicBitSet::from_range(2..=5).to_vec());
        assert_eq!(vec![7], DynamicBitSet::from_range(7..=7).to_vec());

        let wide = DynamicBitSet::from_range(30..=97);

        assert_eq!((30..=97).collect::<Vec<_>>(), wide.to_vec());
        assert_eq!(4, wide.len_in_words());
    }

    #[test]
    fn from_range_empty() {
        #[allow(clippy::reversed_empty_ranges)]
        let set = DynamicBitSet::from_range(5..=2);

        assert!(set.is_empty());
        assert_eq!(1, set.len_in_words());
    }

    #[test]
    fn from_values() {
        let set = DynamicBitSet::from_values([40, 3, 3, 0]);

        assert_eq!(vec![0, 3, 40], set.to_vec());
        assert_eq!(set, [0, 40, 3].into_iter().collect::<DynamicBitSet>());
    }

    #[test]
    fn from_view_copies() {
        let original = DynamicBitSet::from_values([1, 33]);

        let mut copy = DynamicBitSet::from_view(&original);

        copy.insert(2);

        assert_eq!(vec![1, 33], original.to_vec());
        assert_eq!(vec![1, 2, 33], copy.to_vec());
    }

    #[test]
    fn from_words() {
        let set = DynamicBitSet::from_words(&[0b1001, 0, 0b1]);

        assert_eq!(vec![0, 3, 64], set.to_vec());
        assert_eq!(vec![0b1001, 0, 0b1], set.to_packed());
    }

    #[test]
    fn from_keys() {
        let map: HashMap<i64, &str> = HashMap::from([(3, "a"), (-1, "b"), (40, "c")]);

        assert_eq!(vec![3, 40], DynamicBitSet::from_keys(&map).to_vec());

        let map: BTreeMap<String, ()> = BTreeMap::from([
            (String::from("12"), ()),
            (String::from("x"), ()),
            (String::from("0"), ()),
        ]);

        assert_eq!(vec![0, 12], DynamicBitSet::from_keys(map).to_vec());
    }

    #[test]
    fn as_view_aliases() {
        let set = DynamicBitSet::from_values([4, 8]);

        let view = set.as_view();

        assert!(core::ptr::eq(set.words(), view.words()));
        assert_eq!(set, view);
    }
} // mod creation_tests

// mod mutation_tests

#[cfg(test)]
mod query_tests {
    use std::collections::hash_map::DefaultHasher;

    use super::*;

    #[test]
    fn first() {
        assert_eq!(None, DynamicBitSet::new().first());
        assert_eq!(None, DynamicBitSet::with_capacity(100).first());
        assert_eq!(Some(33), DynamicBitSet::from_values([70, 33]).first());
    }

    #[test]
    fn iter() {
        let set = DynamicBitSet::from_values([64, 0, 31, 32]);

        assert_eq!(vec![0, 31, 32, 64], set.iter().collect::<Vec<_>>());
        assert_eq!(4, set.iter().len());
        assert_eq!(vec![0, 31, 32, 64], (&set).into_iter().collect::<Vec<_>>());
    }

    #[test]
    fn contains_beyond_storage() {
        let set = DynamicBitSet::from_value(3);

        assert!(!set.contains(32));
        assert!(!set.contains(usize::MAX));
    }

    #[test]
    fn words_alias() {
        let set = DynamicBitSet::from_values([0, 33]);

        assert_eq!(&[BitWordRaw(1), BitWordRaw(2)], set.words());
    }

    #[test]
    fn subset() {
        let small = DynamicBitSet::from_values([1, 40]);
        let large = DynamicBitSet::from_values([1, 2, 40]);

        assert!(small.is_subset_of(&large));
        assert!(!large.is_subset_of(&small));
        assert!(DynamicBitSet::new().is_subset_of(&small));
        assert!(small.is_subset_of(&small));
    }

    #[test]
    fn eq_trailing_zeros() {
        let short = DynamicBitSet::from_value(3);

        let mut long = DynamicBitSet::from_value(3);
        long.set_size(8);

        assert_eq!(short, long);
        assert_eq!(hash(&short), hash(&long));

        long.insert(200);

        assert_ne!(short, long);
    }

    fn hash(set: &DynamicBitSet) -> u64 {
        let mut hasher = DefaultHasher::new();

        set.hash(&mut hasher);

        hasher.finish()
    }
} // mod query_tests

// mod serde_tests
