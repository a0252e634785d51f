//! Utilities for implementers of word-packed collections.

mod error;
mod word;
mod word_iter;
mod word_store;

pub use error::BitStoreError;
pub use word::{BitWordRaw, IndexInWordRaw, IndexOfWordRaw};
pub use word_iter::{BitInWordIter, BitIndexIter};
pub use word_store::{BitWordView, WordBuffer, significant_words, words_eq};
