//! WayDB: a read-only spatial index engine for compact vector map
//! databases.
//!
//! A map database directory pairs a type catalog (`types.dat`) with a
//! per-type grid index over way features (`areaway.idx`). Given a
//! geographic bounding box and a set of wanted feature types, the index
//! returns the file offsets of candidate ways whose grid cells intersect
//! the query region — without scanning the feature data itself. Turning
//! those offsets into geometry is the job of a separate feature-data
//! reader.
//!
//! Most callers go through [`Database`]; the per-file readers
//! ([`TypeRegistry`], [`SpatialTypeIndex`]) are available for callers
//! managing files themselves.

pub mod database;

pub use database::{Database, DatabaseParameter};
pub use waydb_error::{Result, WaydbError};
pub use waydb_index::{
    CellDataFormat, FeatureDescriptor, GridIndexEntry, PointerTableFormat, SpatialTypeIndex,
    TypeRegistry, WayOffsetSearchResult, FORMAT_VERSION,
};
pub use waydb_types::{
    cell_dimension, CellDimension, Description, FileOffset, GeoBox, GeoCoord, TypeId, TypeInfo,
    TypeInfoSet, WayTypeId,
};
