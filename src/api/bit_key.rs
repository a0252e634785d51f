//! A generic key, convertible to the index of a bit.

use alloc::string::String;

/// A bit key is a value which may designate the index of a bit in a set.
///
/// Unlike a plain conversion, the designation is partial: negative integers, or strings which are not the decimal
/// representation of an index, designate no bit at all. This lets `DynamicBitSet::from_keys` build a set out of the
/// keys of an arbitrary container, skipping the keys which are not indexes.
pub trait BitKey {
    /// Returns the index designated by the key, if any.
    fn bit_index(&self) -> Option<usize>;
}

impl<K> BitKey for &K
where
    K: ?Sized + BitKey,
{
    fn bit_index(&self) -> Option<usize> {
        (**self).bit_index()
    }
}

macro_rules! impl_bit_key_for_integer {
    ($($t:ty),*) => {
        $(
            impl BitKey for $t {
                #[inline]
                fn bit_index(&self) -> Option<usize> {
                    usize::try_from(*self).ok()
                }
            }
        )*
    };
}

impl_bit_key_for_integer!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl BitKey for str {
    fn bit_index(&self) -> Option<usize> {
        //  `usize::from_str` accepts a leading `+`, which no index is ever rendered with.
        if self.starts_with('+') {
            return None;
        }

        self.parse().ok()
    }
}

impl BitKey for String {
    fn bit_index(&self) -> Option<usize> {
        self.as_str().bit_index()
    }
}

// mod tests
