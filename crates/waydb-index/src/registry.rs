//! Type catalog deserialization.
//!
//! Catalog file layout (all multi-byte integers little-endian, strings
//! zero-terminated UTF-8, counts as LEB128 varints):
//!
//! ```text
//! u32      format version (must be 19)
//! varuint  feature count
//!   per feature: name, varuint description count, per description:
//!                language, text
//! varuint  type count
//!   per type: name, 18 boolean flag bytes in fixed order, lanes u8,
//!             oneway-lanes u8, varuint feature-name count + names,
//!             varuint group-name count + names, varuint description
//!             count + (language, text) pairs
//! ```
//!
//! The format has no internal offsets — parse order is load-bearing. Loads
//! are all-or-nothing: any decode error aborts with no partial registry.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tracing::debug;

use waydb_error::{Result, WaydbError};
use waydb_types::{Description, TypeId, TypeInfo, WayTypeId};

use crate::decoder::BinaryDecoder;

/// The catalog format version this build understands.
pub const FORMAT_VERSION: u32 = 19;

/// One entry of the feature catalog: a feature name plus its localized
/// descriptions, looked up by presentation layers by feature name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureDescriptor {
    pub name: String,
    pub descriptions: Vec<Description>,
}

impl FeatureDescriptor {
    /// Description text in the given language, if present.
    #[must_use]
    pub fn description(&self, language: &str) -> Option<&str> {
        self.descriptions
            .iter()
            .find(|d| d.language == language)
            .map(|d| d.text.as_str())
    }
}

/// The deserialized type catalog.
///
/// Types keep their registration order; `TypeId` values are dense and
/// contiguous `0..N-1`. Immutable after load. The catalog stream is fully
/// consumed and released before the registry is returned.
#[derive(Debug)]
pub struct TypeRegistry {
    features: Vec<FeatureDescriptor>,
    types: Vec<TypeInfo>,
    node_types: Vec<TypeId>,
    way_types: Vec<TypeId>,
    area_types: Vec<TypeId>,
    way_type_id_bytes: u8,
}

impl TypeRegistry {
    /// Load the catalog from a file on disk.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        Self::load_from_reader(BufReader::new(file))
    }

    /// Load the catalog from any byte stream.
    pub fn load_from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut decoder = BinaryDecoder::new(reader);

        let version = decoder.read_u32_le()?;
        if version != FORMAT_VERSION {
            return Err(WaydbError::FormatVersionMismatch {
                actual: version,
                expected: FORMAT_VERSION,
            });
        }

        let feature_count = decoder.read_varuint32()?;
        let mut features = Vec::with_capacity(feature_count as usize);
        for _ in 0..feature_count {
            let name = decoder.read_cstring()?;
            let descriptions = read_descriptions(&mut decoder)?;
            features.push(FeatureDescriptor { name, descriptions });
        }

        let type_count = decoder.read_varuint32()?;
        let mut types = Vec::with_capacity(type_count as usize);
        let mut node_types = Vec::new();
        let mut way_types = Vec::new();
        let mut area_types = Vec::new();

        for ordinal in 0..type_count {
            let name = decoder.read_cstring()?;
            if name.is_empty() {
                return Err(WaydbError::InvalidTypeName { ordinal });
            }

            let index = TypeId::new(ordinal);
            let mut info = TypeInfo::new(index, name);
            info.can_be_node = decoder.read_bool()?;
            info.can_be_way = decoder.read_bool()?;
            info.can_be_area = decoder.read_bool()?;
            info.can_be_relation = decoder.read_bool()?;
            info.is_path = decoder.read_bool()?;
            info.can_route_foot = decoder.read_bool()?;
            info.can_route_bicycle = decoder.read_bool()?;
            info.can_route_car = decoder.read_bool()?;
            info.index_as_address = decoder.read_bool()?;
            info.index_as_location = decoder.read_bool()?;
            info.index_as_region = decoder.read_bool()?;
            info.index_as_poi = decoder.read_bool()?;
            info.optimize_low_zoom = decoder.read_bool()?;
            info.multipolygon = decoder.read_bool()?;
            info.pin_way = decoder.read_bool()?;
            info.merge_areas = decoder.read_bool()?;
            info.ignore_sea_land = decoder.read_bool()?;
            info.ignore = decoder.read_bool()?;
            info.lanes = decoder.read_u8()?;
            info.oneway_lanes = decoder.read_u8()?;

            info.feature_names = read_string_list(&mut decoder)?;
            info.group_names = read_string_list(&mut decoder)?;
            info.descriptions = read_descriptions(&mut decoder)?;

            if info.can_be_node {
                node_types.push(index);
            }
            if info.can_be_way {
                // Way ids are 1-based; 0 stays reserved as the on-disk
                // "no type" sentinel.
                let next = u16::try_from(way_types.len() + 1).map_err(|_| {
                    WaydbError::corrupt(format!(
                        "way type count exceeds the compact id space at type {ordinal}"
                    ))
                })?;
                info.way_id = WayTypeId::new(next);
                way_types.push(index);
            }
            if info.can_be_area {
                area_types.push(index);
            }

            types.push(info);
        }

        let way_type_id_bytes = if way_types.len() > 255 { 2 } else { 1 };

        debug!(
            types = types.len(),
            features = features.len(),
            way_types = way_types.len(),
            way_type_id_bytes,
            "loaded type catalog"
        );

        Ok(Self {
            features,
            types,
            node_types,
            way_types,
            area_types,
            way_type_id_bytes,
        })
    }

    /// All registered types in registration order.
    #[must_use]
    pub fn types(&self) -> &[TypeInfo] {
        &self.types
    }

    /// Number of registered types.
    #[must_use]
    pub fn type_count(&self) -> usize {
        self.types.len()
    }

    /// Look up a type by its dense registry index.
    #[must_use]
    pub fn type_info(&self, id: TypeId) -> Option<&TypeInfo> {
        self.types.get(id.as_usize())
    }

    /// Look up a way-capable type by its compact id.
    ///
    /// Ids outside the registered range are an error, never a placeholder.
    pub fn way_type_info(&self, id: WayTypeId) -> Result<&TypeInfo> {
        self.way_types
            .get(usize::from(id.get()) - 1)
            .map(|type_id| &self.types[type_id.as_usize()])
            .ok_or(WaydbError::UnresolvedTypeId { id: id.get() })
    }

    /// Resolve a raw on-disk compact id, rejecting the 0 sentinel.
    pub fn resolve_way_type(&self, raw: u16) -> Result<&TypeInfo> {
        let id = WayTypeId::new(raw).ok_or(WaydbError::UnresolvedTypeId { id: raw })?;
        self.way_type_info(id)
    }

    /// Byte width of compact way-type ids in companion index files.
    #[must_use]
    pub const fn way_type_id_bytes(&self) -> u8 {
        self.way_type_id_bytes
    }

    /// Types that can occur as nodes.
    #[must_use]
    pub fn node_types(&self) -> &[TypeId] {
        &self.node_types
    }

    /// Types that can occur as ways, in compact-id order.
    #[must_use]
    pub fn way_types(&self) -> &[TypeId] {
        &self.way_types
    }

    /// Types that can occur as areas.
    #[must_use]
    pub fn area_types(&self) -> &[TypeId] {
        &self.area_types
    }

    /// Number of way-capable types.
    #[must_use]
    pub fn way_type_count(&self) -> usize {
        self.way_types.len()
    }

    /// The feature catalog in file order.
    #[must_use]
    pub fn features(&self) -> &[FeatureDescriptor] {
        &self.features
    }

    /// Feature catalog lookup by feature name.
    #[must_use]
    pub fn feature(&self, name: &str) -> Option<&FeatureDescriptor> {
        self.features.iter().find(|f| f.name == name)
    }

    /// Localized feature description lookup by feature name and language.
    #[must_use]
    pub fn feature_description(&self, name: &str, language: &str) -> Option<&str> {
        self.feature(name).and_then(|f| f.description(language))
    }
}

fn read_string_list<R: Read>(decoder: &mut BinaryDecoder<R>) -> Result<Vec<String>> {
    let count = decoder.read_varuint32()?;
    let mut out = Vec::with_capacity(count as usize);
    for _ in 0..count {
        out.push(decoder.read_cstring()?);
    }
    Ok(out)
}

fn read_descriptions<R: Read>(decoder: &mut BinaryDecoder<R>) -> Result<Vec<Description>> {
    let count = decoder.read_varuint32()?;
    let mut out = Vec::with_capacity(count as usize);
    for _ in 0..count {
        let language = decoder.read_cstring()?;
        let text = decoder.read_cstring()?;
        out.push(Description { language, text });
    }
    Ok(out)
}
