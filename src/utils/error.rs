//  Errors.

use core::{error, fmt};

use alloc::collections::TryReserveError;

/// An error in growing the storage of a set.
///
/// Either the number of words required overflows, or the allocation of the words failed.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct BitStoreError;

impl fmt::Display for BitStoreError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        f.write_str("BitStoreError")
    }
}

impl error::Error for BitStoreError {}

impl From<TryReserveError> for BitStoreError {
    #[inline]
    fn from(_: TryReserveError) -> Self {
        Self
    }
}
