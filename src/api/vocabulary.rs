//! A mapping from indexes to display names, used to render sets.

use alloc::{borrow::Cow, boxed::Box, string::String, vec::Vec};

/// A vocabulary maps the index of a bit to a human-readable name.
///
/// Typically, the vocabulary of a generated parser maps each token type to its name in the grammar.
///
/// The trait is pre-implemented for sequences of entries, where the `i`-th entry names index `i`. See
/// `VocabularyEntry` for the supported entries.
pub trait Vocabulary {
    /// Returns the display name of `index`, if defined.
    fn display_name(&self, index: usize) -> Option<&str>;
}

/// An entry of a sequence-based vocabulary.
///
/// An entry may be undefined, such as `None`, in which case it has no display name.
pub trait VocabularyEntry {
    /// Returns the display name, if defined.
    fn name(&self) -> Option<&str>;
}

//
//  Vocabulary
//

impl<V> Vocabulary for &V
where
    V: ?Sized + Vocabulary,
{
    fn display_name(&self, index: usize) -> Option<&str> {
        (**self).display_name(index)
    }
}

impl<E> Vocabulary for [E]
where
    E: VocabularyEntry,
{
    #[inline]
    fn display_name(&self, index: usize) -> Option<&str> {
        self.get(index)?.name()
    }
}

impl<E, const N: usize> Vocabulary for [E; N]
where
    E: VocabularyEntry,
{
    #[inline]
    fn display_name(&self, index: usize) -> Option<&str> {
        self.as_slice().display_name(index)
    }
}

impl<E> Vocabulary for Vec<E>
where
    E: VocabularyEntry,
{
    #[inline]
    fn display_name(&self, index: usize) -> Option<&str> {
        self.as_slice().display_name(index)
    }
}

//
//  VocabularyEntry
//

impl<E> VocabularyEntry for &E
where
    E: ?Sized + VocabularyEntry,
{
    fn name(&self) -> Option<&str> {
        (**self).name()
    }
}

impl VocabularyEntry for str {
    #[inline]
    fn name(&self) -> Option<&str> {
        Some(self)
    }
}

impl VocabularyEntry for String {
    #[inline]
    fn name(&self) -> Option<&str> {
        Some(self)
    }
}

impl VocabularyEntry for Box<str> {
    #[inline]
    fn name(&self) -> Option<&str> {
        Some(self)
    }
}

impl VocabularyEntry for Cow<'_, str> {
    #[inline]
    fn name(&self) -> Option<&str> {
        Some(self)
    }
}

impl<E> VocabularyEntry for Option<E>
where
    E: VocabularyEntry,
{
    #[inline]
    fn name(&self) -> Option<&str> {
        self.as_ref()?.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice() {
        let names: &[&str] = &["A", "B"];

        assert_eq!(Some("A"), names.display_name(0));
        assert_eq!(Some("B"), names.display_name(1));
        assert_eq!(None, names.display_name(2));
    }

    #[test]
    fn array() {
        let names = ["A", "B", "C"];

        assert_eq!(Some("C"), names.display_name(2));
        assert_eq!(None, names.display_name(3));
    }

    #[test]
    fn strings() {
        let names = vec![String::from("ID"), String::from("INT")];

        assert_eq!(Some("INT"), names.display_name(1));
    }

    #[test]
    fn undefined() {
        let names = vec![Some("A"), None, Some("C")];

        assert_eq!(Some("A"), names.display_name(0));
        assert_eq!(None, names.display_name(1));
        assert_eq!(Some("C"), names.display_name(2));
        assert_eq!(None, names.display_name(3));
    }
} // mod tests
