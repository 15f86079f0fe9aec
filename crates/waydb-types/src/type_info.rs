//! Type descriptors loaded from the catalog file.
//!
//! A [`TypeInfo`] is a plain attribute record: behavior never varies by
//! subtype, only by flag value, so there is no trait hierarchy here — just
//! the record plus query methods over it.

use crate::{TypeId, WayTypeId};

/// A localized description attached to a feature or a type.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Description {
    /// BCP-47-ish language code as stored in the catalog (e.g. "en", "de").
    pub language: String,
    /// Human-readable text in that language.
    pub text: String,
}

/// Semantics of one registered feature type.
///
/// Immutable once constructed from the catalog. The flag set and the two
/// lane counts are decoded in a fixed on-disk order; see the registry for
/// the exact sequence.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TypeInfo {
    /// Dense registry-assigned index.
    pub index: TypeId,
    /// Compact on-disk id, present iff the type is way-capable.
    pub way_id: Option<WayTypeId>,
    /// Non-empty type name (e.g. "highway_motorway").
    pub name: String,

    pub can_be_node: bool,
    pub can_be_way: bool,
    pub can_be_area: bool,
    pub can_be_relation: bool,
    pub is_path: bool,
    pub can_route_foot: bool,
    pub can_route_bicycle: bool,
    pub can_route_car: bool,
    pub index_as_address: bool,
    pub index_as_location: bool,
    pub index_as_region: bool,
    pub index_as_poi: bool,
    pub optimize_low_zoom: bool,
    pub multipolygon: bool,
    pub pin_way: bool,
    pub merge_areas: bool,
    pub ignore_sea_land: bool,
    pub ignore: bool,

    /// Total lane count for ways of this type.
    pub lanes: u8,
    /// Lane count for oneway stretches.
    pub oneway_lanes: u8,

    /// Names of the features attached to this type.
    pub feature_names: Vec<String>,
    /// Names of the groups this type belongs to.
    pub group_names: Vec<String>,
    /// Localized descriptions of this type.
    pub descriptions: Vec<Description>,
}

impl TypeInfo {
    /// Create a type record with all flags cleared and default lane counts.
    ///
    /// The decoding layer fills in the flags afterwards; both lane counts
    /// default to 1 per the catalog contract.
    #[must_use]
    pub fn new(index: TypeId, name: impl Into<String>) -> Self {
        Self {
            index,
            way_id: None,
            name: name.into(),
            can_be_node: false,
            can_be_way: false,
            can_be_area: false,
            can_be_relation: false,
            is_path: false,
            can_route_foot: false,
            can_route_bicycle: false,
            can_route_car: false,
            index_as_address: false,
            index_as_location: false,
            index_as_region: false,
            index_as_poi: false,
            optimize_low_zoom: false,
            multipolygon: false,
            pin_way: false,
            merge_areas: false,
            ignore_sea_land: false,
            ignore: false,
            lanes: 1,
            oneway_lanes: 1,
            feature_names: Vec::new(),
            group_names: Vec::new(),
            descriptions: Vec::new(),
        }
    }

    /// Whether any routing profile can use ways of this type.
    #[must_use]
    pub const fn is_routable(&self) -> bool {
        self.can_route_foot || self.can_route_bicycle || self.can_route_car
    }

    /// Whether this type participates in any location-index role.
    #[must_use]
    pub const fn is_location_indexed(&self) -> bool {
        self.index_as_address || self.index_as_location || self.index_as_region || self.index_as_poi
    }

    /// Localized description lookup for this type.
    #[must_use]
    pub fn description(&self, language: &str) -> Option<&str> {
        self.descriptions
            .iter()
            .find(|d| d.language == language)
            .map(|d| d.text.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let info = TypeInfo::new(TypeId::new(0), "highway_residential");
        assert_eq!(info.lanes, 1);
        assert_eq!(info.oneway_lanes, 1);
        assert!(info.way_id.is_none());
        assert!(!info.is_routable());
        assert!(!info.is_location_indexed());
    }

    #[test]
    fn routable_by_any_profile() {
        let mut info = TypeInfo::new(TypeId::new(1), "highway_cycleway");
        info.can_route_bicycle = true;
        assert!(info.is_routable());
    }

    #[test]
    fn description_lookup() {
        let mut info = TypeInfo::new(TypeId::new(2), "waterway_river");
        info.descriptions.push(Description {
            language: "en".to_owned(),
            text: "River".to_owned(),
        });
        assert_eq!(info.description("en"), Some("River"));
        assert_eq!(info.description("fr"), None);
    }
}
