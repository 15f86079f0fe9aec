//! Directory-level database access.
//!
//! A map database is a directory of files produced together by the import
//! tooling. This layer opens the type catalog and the way index as one
//! unit, so their format versions and type ids are guaranteed to match.

use std::fs::File;
use std::path::PathBuf;

use waydb_error::Result;
use waydb_index::{SpatialTypeIndex, TypeRegistry, WayOffsetSearchResult};
use waydb_types::{GeoBox, TypeInfoSet};

/// Locations of the files making up one map database directory.
///
/// File names default to the conventional `types.dat` / `areaway.idx` pair
/// and rarely need overriding.
#[derive(Debug, Clone)]
pub struct DatabaseParameter {
    directory: PathBuf,
    type_catalog_file: String,
    way_index_file: String,
}

impl DatabaseParameter {
    /// Parameters for the database stored in `directory`.
    #[must_use]
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            type_catalog_file: "types.dat".to_owned(),
            way_index_file: "areaway.idx".to_owned(),
        }
    }

    /// Override the type catalog file name.
    #[must_use]
    pub fn with_type_catalog_file(mut self, name: impl Into<String>) -> Self {
        self.type_catalog_file = name.into();
        self
    }

    /// Override the way index file name.
    #[must_use]
    pub fn with_way_index_file(mut self, name: impl Into<String>) -> Self {
        self.way_index_file = name.into();
        self
    }

    /// Full path of the type catalog file.
    #[must_use]
    pub fn type_catalog_path(&self) -> PathBuf {
        self.directory.join(&self.type_catalog_file)
    }

    /// Full path of the way index file.
    #[must_use]
    pub fn way_index_path(&self) -> PathBuf {
        self.directory.join(&self.way_index_file)
    }
}

/// An opened map database: the type catalog plus the way index built
/// against it.
///
/// One instance owns one handle per file and performs blocking reads with
/// no internal locking; open independent instances for parallel querying.
#[derive(Debug)]
pub struct Database {
    registry: TypeRegistry,
    way_index: SpatialTypeIndex<File>,
}

impl Database {
    /// Open both files. The catalog must load first — the index file's
    /// compact type ids are meaningless without it.
    pub fn open(parameter: &DatabaseParameter) -> Result<Self> {
        let registry = TypeRegistry::load_from_file(parameter.type_catalog_path())?;
        let way_index = SpatialTypeIndex::open(&registry, parameter.way_index_path())?;
        Ok(Self {
            registry,
            way_index,
        })
    }

    /// The loaded type catalog.
    #[must_use]
    pub fn type_registry(&self) -> &TypeRegistry {
        &self.registry
    }

    /// The way index, for direct [`SpatialTypeIndex`] access.
    #[must_use]
    pub fn way_index_mut(&mut self) -> &mut SpatialTypeIndex<File> {
        &mut self.way_index
    }

    /// A filter set holding every way-capable type.
    #[must_use]
    pub fn all_way_types(&self) -> TypeInfoSet {
        self.registry.way_types().iter().copied().collect()
    }

    /// Find way offsets within `bounding_box`, restricted to `candidates`.
    pub fn ways_in_box(
        &mut self,
        bounding_box: &GeoBox,
        candidates: &TypeInfoSet,
    ) -> Result<WayOffsetSearchResult> {
        self.way_index.get_offsets(bounding_box, candidates)
    }

    /// Release both file handles.
    pub fn close(self) {
        drop(self);
    }
}
