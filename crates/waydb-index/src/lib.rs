//! On-disk readers for WayDB map databases.
//!
//! Three layers, leaf-first:
//!
//! - [`decoder::BinaryDecoder`]: sequential, forward-only primitive reader
//!   over any byte stream. Knows nothing about map semantics.
//! - [`registry::TypeRegistry`]: deserializes the type catalog file into an
//!   ordered set of type descriptors with geometry-kind partitions.
//! - [`spatial::SpatialTypeIndex`]: per-type grid headers plus the
//!   bounding-box query path over the presence bitmap.
//!
//! All readers are synchronous and blocking; each open instance owns its
//! file handle exclusively. The files are immutable while open, so parallel
//! querying is done by opening independent instances.

pub mod decoder;
pub mod registry;
pub mod spatial;

pub use decoder::BinaryDecoder;
pub use registry::{FeatureDescriptor, TypeRegistry, FORMAT_VERSION};
pub use spatial::{
    CellDataFormat, GridIndexEntry, PointerTableFormat, SpatialTypeIndex, WayOffsetSearchResult,
};
