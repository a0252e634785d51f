//  See structs.

use core::iter::FusedIterator;

use super::{BitWordRaw, IndexInWordRaw, IndexOfWordRaw};

//
//  In word iterator.
//

/// Forward iterator over the set bits of a `BitWordRaw`.
#[derive(Clone, Debug)]
pub struct BitInWordIter {
    next: IndexInWordRaw,
    word: BitWordRaw,
}

impl BitInWordIter {
    /// Creates a new iterator.
    pub const fn new(word: BitWordRaw) -> Self {
        let next = IndexInWordRaw(0);

        Self { next, word }
    }

    //  Gives the index.
    fn index(index: IndexInWordRaw) -> Option<IndexInWordRaw> {
        (index.0 < BITS_32).then_some(index)
    }
}

impl Iterator for BitInWordIter {
    type Item = IndexInWordRaw;

    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = Self::index(self.next).map_or(0, |next| self.word.count_after(next));

        (count, Some(count))
    }

    fn count(self) -> usize {
        Self::index(self.next).map_or(0, |next| self.word.count_after(next))
    }

    fn next(&mut self) -> Option<Self::Item> {
        let next = Self::index(self.next)?;

        let result = self.word.next_after(next);

        self.next.0 = result.map(|i| i.0 + 1).unwrap_or(BITS_32);

        result
    }
}

impl ExactSizeIterator for BitInWordIter {}

impl FusedIterator for BitInWordIter {}

const BITS_32: u32 = BitWordRaw::BITS as _;

// mod in_word_tests

//
//  Of words iterator.
//

/// Forward iterator over the indexes of the set bits of a sequence of words.
///
/// The indexes are yielded in strictly ascending order.
#[derive(Clone, Debug)]
pub struct BitIndexIter<'a> {
    of_word: IndexOfWordRaw,
    current: BitInWordIter,
    rest: &'a [BitWordRaw],
}

impl<'a> BitIndexIter<'a> {
    /// Creates a new iterator.
    pub fn new(words: &'a [BitWordRaw]) -> Self {
        let (current, rest) = match words.split_first() {
            Some((first, rest)) => (BitInWordIter::new(*first), rest),
            None => (BitInWordIter::new(BitWordRaw::ALL_ZEROS), words),
        };

        let of_word = IndexOfWordRaw(0);

        Self { of_word, current, rest }
    }
}

impl Iterator for BitIndexIter<'_> {
    type Item = usize;

    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = self.current.len() + self.rest.iter().map(BitWordRaw::count).sum::<usize>();

        (count, Some(count))
    }

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(in_word) = self.current.next() {
                //  Cannot overflow, as the index of a bit in a slice of words always fits in `usize`.
                return BitWordRaw::fuse(self.of_word, in_word);
            }

            let (first, rest) = self.rest.split_first()?;

            self.of_word.0 += 1;
            self.current = BitInWordIter::new(*first);
            self.rest = rest;
        }
    }
}

impl ExactSizeIterator for BitIndexIter<'_> {}

impl FusedIterator for BitIndexIter<'_> {}

// mod index_tests
