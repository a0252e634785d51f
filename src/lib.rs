//! Growable, word-packed, bit sets of small indices.
//!
//! #   Organization
//!
//! This crate is composed of multiple top modules:
//!
//! -   The `api` top module contains a selection of vocabulary types and traits.
//! -   The `collections` module contains the implementations of the bit sets.
//! -   The `utils` module contains a selection of low-level types upon which the implementations are built.
//!
//!
//! #   Index type
//!
//! The bit sets are keyed by an index, expressed as a `usize`.
//!
//! The sets are meant for small indices, such as the token types of a parser, or the symbols of a grammar, and the
//! memory footprint of a set is proportional to its largest index. There is therefore little point in supporting
//! indices which could not be addressed in memory.
//!
//!
//! #   Word type
//!
//! The bits of a set are packed in 32-bits words, `BitWordRaw`. Word `k`, bit `b`, represents the presence of index
//! `k * 32 + b`. The words are exposed, so that tables of words generated ahead of time may be used directly, through a
//! `BitSetView`, or copied in a `DynamicBitSet`.
//!
//!
//! #   Examples
//!
//! ```
//! use bit_packed::collections::DynamicBitSet;
//!
//! let expected = DynamicBitSet::from_values([2, 7, 40]);
//! let follow = DynamicBitSet::from_range(5..=10);
//!
//! let both = expected.and(&follow);
//!
//! assert_eq!("{7}", both.to_string());
//! assert_eq!("{2,5,6,7,8,9,10,40}", (&expected | &follow).to_string());
//! ```

#![cfg_attr(not(test), no_std)]
//  Lints
#![deny(missing_docs)]
//  This author prefers to keep its test modules close to what they are testing.
#![allow(clippy::items_after_test_module)]

extern crate alloc;

pub mod api;
pub mod collections;
pub mod utils;
