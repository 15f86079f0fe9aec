pub mod geo;
pub mod type_info;
pub mod type_set;
pub mod varint;

pub use geo::{cell_dimension, CellDimension, GeoBox, GeoCoord};
pub use type_info::{Description, TypeInfo};
pub use type_set::TypeInfoSet;
pub use varint::{read_varuint, varuint_len, write_varuint};

use std::fmt;
use std::num::NonZeroU16;

/// A byte position into an external feature-data file.
///
/// Offsets are produced by the spatial index and consumed by the (external)
/// feature-data reader; this workspace treats them as opaque 64-bit values.
pub type FileOffset = u64;

/// Dense, zero-based index of a registered type.
///
/// Assigned by the registry in registration order; index values are
/// contiguous `0..N-1` for a registry of `N` types.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[repr(transparent)]
pub struct TypeId(u32);

impl TypeId {
    /// Create a type id from a raw index.
    #[inline]
    #[must_use]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Get the raw index value.
    #[inline]
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Get the index as a `usize` for slot addressing.
    #[inline]
    #[must_use]
    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Compact on-disk identifier of a way-capable type.
///
/// Way type ids are 1-based (id 0 is the on-disk "no type" sentinel and is
/// never assigned). With ids occupying `1..=count`, more than 255 distinct
/// way types force the 2-byte on-disk encoding.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[repr(transparent)]
pub struct WayTypeId(NonZeroU16);

impl WayTypeId {
    /// Create a way type id from a raw u16.
    ///
    /// Returns `None` for 0, the reserved sentinel.
    #[inline]
    #[must_use]
    pub const fn new(id: u16) -> Option<Self> {
        match NonZeroU16::new(id) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Get the raw u16 value.
    #[inline]
    #[must_use]
    pub const fn get(self) -> u16 {
        self.0.get()
    }
}

impl fmt::Display for WayTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u16> for WayTypeId {
    type Error = InvalidWayTypeId;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(InvalidWayTypeId)
    }
}

/// Error returned when attempting to create a `WayTypeId` from 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidWayTypeId;

impl fmt::Display for InvalidWayTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("way type id cannot be zero")
    }
}

impl std::error::Error for InvalidWayTypeId {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_id_roundtrip() {
        let id = TypeId::new(7);
        assert_eq!(id.get(), 7);
        assert_eq!(id.as_usize(), 7);
        assert_eq!(id.to_string(), "7");
    }

    #[test]
    fn way_type_id_rejects_zero() {
        assert!(WayTypeId::new(0).is_none());
        assert_eq!(WayTypeId::try_from(0), Err(InvalidWayTypeId));
    }

    #[test]
    fn way_type_id_roundtrip() {
        let id = WayTypeId::new(1).unwrap();
        assert_eq!(id.get(), 1);
        assert_eq!(WayTypeId::try_from(255).unwrap().get(), 255);
    }
}
