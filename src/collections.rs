//! Implementations of word-packed bit sets.

//  Design considerations
//
//  #   Why not an alias?
//
//  Type aliases are cool... but they have the unfortunate tendency to _leak_. They leak when the IDE or debugger
//  displays the type, and before you know it the user is submerged with unscruitable types, and despairing.
//
//  #   Why a view?
//
//  Generated parsers embed their sets as literal tables of words. A view lets them query, and combine, those tables
//  without first copying them in a freshly allocated set.

pub mod bit_set_core;
pub mod bit_set_display;
pub mod bit_set_dynamic;
pub mod bit_set_ops;
pub mod bit_set_view;

pub use bit_set_core::BitSetCore;
pub use bit_set_display::{JoinDisplay, VocabularyDisplay};
pub use bit_set_dynamic::DynamicBitSet;
pub use bit_set_view::BitSetView;
