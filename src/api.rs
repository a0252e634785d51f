//! A set of high-level traits to abstract over the inputs of the collections.

pub mod bit_key;
pub mod vocabulary;

pub use bit_key::BitKey;
pub use vocabulary::{Vocabulary, VocabularyEntry};

pub use crate::utils::{BitStoreError, BitWordView};
