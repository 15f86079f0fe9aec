//! Geographic primitives and grid cell dimensions.

/// A WGS84 coordinate in degrees.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GeoCoord {
    pub lat: f64,
    pub lon: f64,
}

impl GeoCoord {
    #[must_use]
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// An axis-aligned geographic bounding box in degrees.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GeoBox {
    pub min_lon: f64,
    pub min_lat: f64,
    pub max_lon: f64,
    pub max_lat: f64,
}

impl GeoBox {
    #[must_use]
    pub const fn new(min_lon: f64, min_lat: f64, max_lon: f64, max_lat: f64) -> Self {
        Self {
            min_lon,
            min_lat,
            max_lon,
            max_lat,
        }
    }

    /// Whether the two boxes share at least a boundary point.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        self.min_lon <= other.max_lon
            && self.max_lon >= other.min_lon
            && self.min_lat <= other.max_lat
            && self.max_lat >= other.min_lat
    }

    /// The overlapping region of two boxes, if any.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        if !self.intersects(other) {
            return None;
        }
        Some(Self {
            min_lon: self.min_lon.max(other.min_lon),
            min_lat: self.min_lat.max(other.min_lat),
            max_lon: self.max_lon.min(other.max_lon),
            max_lat: self.max_lat.min(other.max_lat),
        })
    }

    /// Whether the coordinate lies inside the box (boundary included).
    #[must_use]
    pub fn contains_coord(&self, coord: GeoCoord) -> bool {
        coord.lon >= self.min_lon
            && coord.lon <= self.max_lon
            && coord.lat >= self.min_lat
            && coord.lat <= self.max_lat
    }
}

/// Grid cell size in degrees at a given index level.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CellDimension {
    /// Longitude span of one cell.
    pub width: f64,
    /// Latitude span of one cell.
    pub height: f64,
}

/// Cell dimensions at `level`; both axes halve per level.
///
/// The latitude base constant is 18 degrees, not 180 — this asymmetry is
/// part of the on-disk format definition and must be preserved.
#[must_use]
pub fn cell_dimension(level: u32) -> CellDimension {
    let divisor = 2_f64.powi(level as i32);
    CellDimension {
        width: 360.0 / divisor,
        height: 18.0 / divisor,
    }
}
