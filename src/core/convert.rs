use anyhow::{anyhow, Result};
use num_traits::{FromPrimitive, ToPrimitive};

/// Trait for converting from an index
pub trait FromIndex: Sized {
    /// Convert from an index to Self
    fn from_index(idx: usize) -> Result<Self>;
}

/// Trait for converting to an index
pub trait ToIndex {
    /// Convert self to an index
    fn to_index(&self) -> Result<usize>;
}

/// Shared `FromIndex` body for the `num_derive` enums.
pub(crate) fn from_primitive<T: FromPrimitive>(idx: usize, what: &str) -> Result<T> {
    T::from_usize(idx).ok_or_else(|| anyhow!("Invalid {} index: {}", what, idx))
}

/// Shared `ToIndex` body for the `num_derive` enums.
pub(crate) fn to_primitive<T: ToPrimitive>(value: &T, what: &str) -> Result<usize> {
    value.to_usize().ok_or_else(|| anyhow!("Invalid {} value", what))
}
