//! Human-readable rendering of word-packed bit sets.

use core::fmt;

use crate::{
    api::Vocabulary,
    collections::{BitSetView, DynamicBitSet},
    utils::BitIndexIter,
};

/// Renders a set with the display names of a vocabulary, see `DynamicBitSet::display_with`.
///
/// Renders as `{A,B,'5'}`: the names are separated by `,`, and surrounded by braces. Any index for which the vocabulary
/// defines no name is rendered as the quoted index.
pub struct VocabularyDisplay<'a, V: ?Sized> {
    set: BitSetView<'a>,
    vocabulary: &'a V,
}

/// Renders a set with the display names of a vocabulary, see `DynamicBitSet::join_with`.
///
/// Renders as `A<sep>B<sep>'5'`, without braces. Any index for which the vocabulary defines no name is rendered as the
/// quoted index.
pub struct JoinDisplay<'a, V: ?Sized> {
    set: BitSetView<'a>,
    separator: &'a str,
    vocabulary: &'a V,
}

//
//  Rendering methods
//

impl DynamicBitSet {
    /// Returns a renderer of `self` with the names of `vocabulary`, surrounded by braces.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use bit_packed::collections::DynamicBitSet;
    /// let set = DynamicBitSet::from_values([0, 2, 5]);
    ///
    /// assert_eq!("{A,C,'5'}", set.display_with(&["A", "B", "C"]).to_string());
    /// ```
    pub fn display_with<'a, V>(&'a self, vocabulary: &'a V) -> VocabularyDisplay<'a, V>
    where
        V: ?Sized + Vocabulary,
    {
        self.as_view().display_with(vocabulary)
    }

    /// Returns a renderer of `self` with the names of `vocabulary`, separated by `separator`.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use bit_packed::collections::DynamicBitSet;
    /// let set = DynamicBitSet::from_values([0, 2]);
    ///
    /// assert_eq!("A, C", set.join_with(", ", &["A", "B", "C"]).to_string());
    /// ```
    pub fn join_with<'a, V>(&'a self, separator: &'a str, vocabulary: &'a V) -> JoinDisplay<'a, V>
    where
        V: ?Sized + Vocabulary,
    {
        self.as_view().join_with(separator, vocabulary)
    }
}

impl<'a> BitSetView<'a> {
    /// Returns a renderer of `self` with the names of `vocabulary`, surrounded by braces.
    pub fn display_with<V>(self, vocabulary: &'a V) -> VocabularyDisplay<'a, V>
    where
        V: ?Sized + Vocabulary,
    {
        VocabularyDisplay { set: self, vocabulary }
    }

    /// Returns a renderer of `self` with the names of `vocabulary`, separated by `separator`.
    pub fn join_with<V>(self, separator: &'a str, vocabulary: &'a V) -> JoinDisplay<'a, V>
    where
        V: ?Sized + Vocabulary,
    {
        JoinDisplay {
            set: self,
            separator,
            vocabulary,
        }
    }
}

//
//  Display & Debug
//

impl fmt::Debug for DynamicBitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        fmt::Debug::fmt(&self.as_view(), f)
    }
}

impl fmt::Display for DynamicBitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        fmt::Display::fmt(&self.as_view(), f)
    }
}

impl fmt::Debug for BitSetView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl fmt::Display for BitSetView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        f.write_str("{")?;
        write_joined(f, self.iter(), ",", |f, index| write!(f, "{index}"))?;
        f.write_str("}")
    }
}

impl<V> fmt::Display for VocabularyDisplay<'_, V>
where
    V: ?Sized + Vocabulary,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        f.write_str("{")?;
        write_joined(f, self.set.iter(), ",", |f, index| write_name(f, self.vocabulary, index))?;
        f.write_str("}")
    }
}

impl<V> fmt::Display for JoinDisplay<'_, V>
where
    V: ?Sized + Vocabulary,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write_joined(f, self.set.iter(), self.separator, |f, index| write_name(f, self.vocabulary, index))
    }
}

//
//  Implementation details
//

fn write_joined<F>(
    f: &mut fmt::Formatter<'_>,
    indexes: BitIndexIter<'_>,
    separator: &str,
    mut write: F,
) -> Result<(), fmt::Error>
where
    F: FnMut(&mut fmt::Formatter<'_>, usize) -> Result<(), fmt::Error>,
{
    for (i, index) in indexes.enumerate() {
        if i > 0 {
            f.write_str(separator)?;
        }

        write(f, index)?;
    }

    Ok(())
}

fn write_name<V>(f: &mut fmt::Formatter<'_>, vocabulary: &V, index: usize) -> Result<(), fmt::Error>
where
    V: ?Sized + Vocabulary,
{
    match vocabulary.display_name(index) {
        Some(name) => f.write_str(name),
        None => write!(f, "'{index}'"),
    }
}

// mod tests
