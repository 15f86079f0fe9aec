//! Per-type grid index over way features.
//!
//! Index file layout:
//!
//! ```text
//! ┌───────────────────────────┐
//! │ u32LE entry count         │
//! ├───────────────────────────┤
//! │ per entry:                │
//! │   compact type id         │  (1 or 2 bytes, per registry id width)
//! │   u64LE bitmap offset     │  (0 = type has no spatial data)
//! │   if bitmap offset != 0:  │
//! │     u8 data offset bytes  │
//! │     varuint index level   │
//! │     varuint cell x start  │
//! │     varuint cell x end    │
//! │     varuint cell y start  │
//! │     varuint cell y end    │
//! ├───────────────────────────┤
//! │ per type, at its bitmap   │
//! │ offset:                   │
//! │   presence bitmap         │  (1 bit per cell, row-major, LSB first)
//! │   cell pointer table      │  (data-offset-bytes wide, row-major)
//! │   cell data area          │  (per-cell way offset lists)
//! └───────────────────────────┘
//! ```
//!
//! A query intersects the caller's bounding box with each candidate type's
//! extent, maps the overlap to cell coordinates, and consults the presence
//! bitmap; only cells with their bit set cost any further I/O.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};
use std::path::Path;

use tracing::{debug, warn};

use waydb_error::{Result, WaydbError};
use waydb_types::{cell_dimension, FileOffset, GeoBox, TypeId, TypeInfoSet};

use crate::decoder::BinaryDecoder;
use crate::registry::TypeRegistry;

/// Grid placement of one way type.
///
/// `bitmap_offset == 0` means the type has no spatial data in this file;
/// all other fields are zero in that case.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridIndexEntry {
    pub type_id: TypeId,
    pub bitmap_offset: FileOffset,
    pub data_offset_bytes: u8,
    pub index_level: u32,
    pub cell_x_start: u32,
    pub cell_x_end: u32,
    pub cell_y_start: u32,
    pub cell_y_end: u32,
    /// Cell size in degrees at `index_level`.
    pub cell_width: f64,
    pub cell_height: f64,
    /// Geographic extent covered by the cell range.
    pub bounds: GeoBox,
}

impl GridIndexEntry {
    fn empty(type_id: TypeId) -> Self {
        Self {
            type_id,
            bitmap_offset: 0,
            data_offset_bytes: 0,
            index_level: 0,
            cell_x_start: 0,
            cell_x_end: 0,
            cell_y_start: 0,
            cell_y_end: 0,
            cell_width: 0.0,
            cell_height: 0.0,
            bounds: GeoBox::new(0.0, 0.0, 0.0, 0.0),
        }
    }

    /// Whether the type has any queryable spatial data.
    #[inline]
    #[must_use]
    pub const fn has_data(&self) -> bool {
        self.bitmap_offset != 0
    }

    /// Cells per grid row.
    #[inline]
    #[must_use]
    pub const fn cell_x_count(&self) -> u64 {
        (self.cell_x_end - self.cell_x_start) as u64 + 1
    }

    /// Grid rows.
    #[inline]
    #[must_use]
    pub const fn cell_y_count(&self) -> u64 {
        (self.cell_y_end - self.cell_y_start) as u64 + 1
    }

    /// Total cell count of the grid.
    #[inline]
    #[must_use]
    pub const fn cell_count(&self) -> u64 {
        self.cell_x_count() * self.cell_y_count()
    }
}

/// Result of a bounding-box query: deduplicated way offsets plus the types
/// that contributed at least one of them.
#[derive(Debug, Clone, Default)]
pub struct WayOffsetSearchResult {
    pub offsets: BTreeSet<FileOffset>,
    pub loaded_types: TypeInfoSet,
}

impl WayOffsetSearchResult {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}

/// Decoder for the per-cell way offset lists behind the presence bitmap.
///
/// The list layout is a property of the producing import tooling, not of
/// the query walk, so it hangs off this seam. [`PointerTableFormat`] is the
/// layout the bundled tooling writes.
pub trait CellDataFormat<S: Read + Seek> {
    /// Read the way offsets stored for `cell_index` (row-major within the
    /// entry's grid).
    fn read_cell(
        &self,
        stream: &mut S,
        entry: &GridIndexEntry,
        cell_index: u64,
    ) -> Result<Vec<FileOffset>>;
}

/// Default cell data layout: a row-major pointer table directly after the
/// bitmap, one `data_offset_bytes`-wide little-endian entry per cell, each
/// pointing (relative to the data area that follows the table) at a list of
/// `varuint count`, one absolute `u64LE` first offset, then ascending
/// varuint deltas.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerTableFormat;

impl<S: Read + Seek> CellDataFormat<S> for PointerTableFormat {
    fn read_cell(
        &self,
        stream: &mut S,
        entry: &GridIndexEntry,
        cell_index: u64,
    ) -> Result<Vec<FileOffset>> {
        let cells = entry.cell_count();
        let table_offset = entry.bitmap_offset + cells.div_ceil(8);
        let width = u64::from(entry.data_offset_bytes);
        let data_area = table_offset + cells * width;

        let mut raw = [0_u8; 8];
        let pointer_offset = table_offset + cell_index * width;
        read_exact_at(
            stream,
            pointer_offset,
            &mut raw[..entry.data_offset_bytes as usize],
        )?;
        let pointer = u64::from_le_bytes(raw);

        let list_offset = data_area + pointer;
        stream.seek(SeekFrom::Start(list_offset))?;
        let mut decoder = BinaryDecoder::at(&mut *stream, list_offset);
        let count = decoder.read_varuint32()?;
        let mut offsets = Vec::with_capacity(count as usize);
        if count > 0 {
            let mut current = decoder.read_file_offset()?;
            offsets.push(current);
            for _ in 1..count {
                current += u64::from(decoder.read_varuint32()?);
                offsets.push(current);
            }
        }
        Ok(offsets)
    }
}

/// The spatial way index: one grid entry per way-capable type, plus the
/// retained file handle the bitmap and cell lists are read through at query
/// time.
///
/// Open instances own their stream exclusively; drop (or [`Self::close`])
/// releases it on every path.
#[derive(Debug)]
pub struct SpatialTypeIndex<S: Read + Seek, F: CellDataFormat<S> = PointerTableFormat> {
    stream: S,
    format: F,
    /// Entry slots indexed by dense registry `TypeId`.
    entries: Vec<Option<GridIndexEntry>>,
    type_count: usize,
}

impl SpatialTypeIndex<File> {
    /// Open the index file belonging to `registry`.
    pub fn open(registry: &TypeRegistry, path: impl AsRef<Path>) -> Result<Self> {
        Self::open_from(registry, File::open(path)?)
    }
}

impl<S: Read + Seek> SpatialTypeIndex<S> {
    /// Open the index from any seekable stream with the default cell data
    /// layout.
    pub fn open_from(registry: &TypeRegistry, stream: S) -> Result<Self> {
        Self::open_with_format(registry, stream, PointerTableFormat)
    }
}

impl<S: Read + Seek, F: CellDataFormat<S>> SpatialTypeIndex<S, F> {
    /// Open the index with a caller-supplied cell data layout.
    pub fn open_with_format(registry: &TypeRegistry, stream: S, format: F) -> Result<Self> {
        let mut decoder = BinaryDecoder::new(stream);
        let entry_count = decoder.read_u32_le()?;

        let mut entries: Vec<Option<GridIndexEntry>> = vec![None; registry.type_count()];
        for _ in 0..entry_count {
            let raw = decoder.read_compact_type_id(registry.way_type_id_bytes())?;
            let info = registry.resolve_way_type(raw)?;
            let bitmap_offset = decoder.read_file_offset()?;

            let entry = if bitmap_offset != 0 {
                let data_offset_bytes = decoder.read_u8()?;
                if data_offset_bytes == 0 || data_offset_bytes > 8 {
                    return Err(WaydbError::corrupt(format!(
                        "cell pointer width {data_offset_bytes} for type '{}' (must be 1..=8)",
                        info.name
                    )));
                }
                let index_level = decoder.read_varuint32()?;
                let cell_x_start = decoder.read_varuint32()?;
                let cell_x_end = decoder.read_varuint32()?;
                let cell_y_start = decoder.read_varuint32()?;
                let cell_y_end = decoder.read_varuint32()?;
                if cell_x_end < cell_x_start || cell_y_end < cell_y_start {
                    return Err(WaydbError::corrupt(format!(
                        "inverted cell bounds for type '{}'",
                        info.name
                    )));
                }

                let dim = cell_dimension(index_level);
                let bounds = GeoBox::new(
                    f64::from(cell_x_start) * dim.width - 180.0,
                    f64::from(cell_y_start) * dim.height - 90.0,
                    (f64::from(cell_x_end) + 1.0) * dim.width - 180.0,
                    (f64::from(cell_y_end) + 1.0) * dim.height - 90.0,
                );
                GridIndexEntry {
                    type_id: info.index,
                    bitmap_offset,
                    data_offset_bytes,
                    index_level,
                    cell_x_start,
                    cell_x_end,
                    cell_y_start,
                    cell_y_end,
                    cell_width: dim.width,
                    cell_height: dim.height,
                    bounds,
                }
            } else {
                GridIndexEntry::empty(info.index)
            };

            let slot = &mut entries[info.index.as_usize()];
            if slot.is_some() {
                warn!(type_name = %info.name, "duplicate index entry, keeping the last");
            }
            *slot = Some(entry);
        }

        debug!(entries = entry_count, "opened way index");

        Ok(Self {
            stream: decoder.into_inner(),
            format,
            entries,
            type_count: registry.type_count(),
        })
    }

    /// The grid entry for a type, if the index file mentions it.
    #[must_use]
    pub fn entry(&self, id: TypeId) -> Option<&GridIndexEntry> {
        self.entries.get(id.as_usize()).and_then(Option::as_ref)
    }

    /// Find the file offsets of candidate ways whose grid cells intersect
    /// `bounding_box`, restricted to `candidates`.
    ///
    /// Offsets are deduplicated — a way spanning several cells is reported
    /// once. `loaded_types` in the result holds the types that contributed
    /// at least one offset. A bounding box disjoint from every candidate's
    /// extent is a successful empty result, not an error. The call is
    /// idempotent and has no effect beyond its return value.
    pub fn get_offsets(
        &mut self,
        bounding_box: &GeoBox,
        candidates: &TypeInfoSet,
    ) -> Result<WayOffsetSearchResult> {
        let mut result = WayOffsetSearchResult {
            offsets: BTreeSet::new(),
            loaded_types: TypeInfoSet::new(self.type_count),
        };

        for type_id in candidates.iter() {
            let Some(entry) = self.entries.get(type_id.as_usize()).and_then(Option::as_ref)
            else {
                continue;
            };
            if !entry.has_data() {
                continue;
            }
            // Half-open on the max side: a box starting exactly at the
            // eastern/northern edge of the extent is outside it.
            if bounding_box.max_lon < entry.bounds.min_lon
                || bounding_box.min_lon >= entry.bounds.max_lon
                || bounding_box.max_lat < entry.bounds.min_lat
                || bounding_box.min_lat >= entry.bounds.max_lat
            {
                continue;
            }

            let min_xc = clamp_cell(
                (bounding_box.min_lon + 180.0) / entry.cell_width,
                entry.cell_x_start,
                entry.cell_x_end,
            );
            let max_xc = clamp_cell(
                (bounding_box.max_lon + 180.0) / entry.cell_width,
                entry.cell_x_start,
                entry.cell_x_end,
            );
            let min_yc = clamp_cell(
                (bounding_box.min_lat + 90.0) / entry.cell_height,
                entry.cell_y_start,
                entry.cell_y_end,
            );
            let max_yc = clamp_cell(
                (bounding_box.max_lat + 90.0) / entry.cell_height,
                entry.cell_y_start,
                entry.cell_y_end,
            );

            let row_cells = entry.cell_x_count();
            let mut contributed = false;

            for y in min_yc..=max_yc {
                let row_bit = u64::from(y - entry.cell_y_start) * row_cells;
                let first_bit = row_bit + u64::from(min_xc - entry.cell_x_start);
                let last_bit = row_bit + u64::from(max_xc - entry.cell_x_start);
                let first_byte = first_bit / 8;
                let byte_count = (last_bit / 8 - first_byte + 1) as usize;

                let mut bits = vec![0_u8; byte_count];
                read_exact_at(&mut self.stream, entry.bitmap_offset + first_byte, &mut bits)?;

                for x in min_xc..=max_xc {
                    let bit = row_bit + u64::from(x - entry.cell_x_start);
                    let byte = bits[(bit / 8 - first_byte) as usize];
                    if byte >> (bit % 8) & 1 == 0 {
                        continue;
                    }
                    for offset in self.format.read_cell(&mut self.stream, entry, bit)? {
                        contributed = true;
                        result.offsets.insert(offset);
                    }
                }
            }

            if contributed {
                result.loaded_types.insert(type_id);
            }
        }

        Ok(result)
    }

    /// Release the underlying stream.
    pub fn close(self) {
        drop(self);
    }
}

/// Seek to `offset` and fill `buf` completely, reporting shortfalls as
/// truncation at that offset.
fn read_exact_at<S: Read + Seek>(stream: &mut S, offset: u64, buf: &mut [u8]) -> Result<()> {
    stream.seek(SeekFrom::Start(offset))?;
    stream.read_exact(buf).map_err(|err| {
        if err.kind() == io::ErrorKind::UnexpectedEof {
            WaydbError::TruncatedStream { offset }
        } else {
            WaydbError::Io(err)
        }
    })
}

/// Floor a degree coordinate to a cell index, clamped into the grid range.
fn clamp_cell(scaled: f64, start: u32, end: u32) -> u32 {
    let cell = scaled.floor();
    if cell < f64::from(start) {
        start
    } else if cell > f64::from(end) {
        end
    } else {
        cell as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::FORMAT_VERSION;
    use std::io::Cursor;
    use waydb_types::write_varuint;

    // ── Fixture builders ─────────────────────────────────────────────────

    /// Catalog with `way_count` way types named way_0.. and no features.
    fn registry_with_ways(way_count: u32) -> TypeRegistry {
        let mut buf = Vec::new();
        buf.extend_from_slice(&FORMAT_VERSION.to_le_bytes());
        write_varuint(&mut buf, 0);
        write_varuint(&mut buf, way_count);
        for i in 0..way_count {
            buf.extend_from_slice(format!("way_{i}").as_bytes());
            buf.push(0);
            for flag_index in 0..18 {
                buf.push(u8::from(flag_index == 1)); // can_be_way only
            }
            buf.push(1);
            buf.push(1);
            write_varuint(&mut buf, 0);
            write_varuint(&mut buf, 0);
            write_varuint(&mut buf, 0);
        }
        TypeRegistry::load_from_reader(buf.as_slice()).unwrap()
    }

    struct Grid {
        level: u32,
        x_start: u32,
        x_end: u32,
        y_start: u32,
        y_end: u32,
        /// (x, y, offsets) per populated cell.
        cells: Vec<(u32, u32, Vec<u64>)>,
    }

    const DATA_OFFSET_BYTES: u8 = 2;

    /// Serialize an index file: header entries first, then one bitmap +
    /// pointer table + data area region per gridded type.
    fn index_bytes(id_width: u8, entries: &[(u16, Option<Grid>)]) -> Vec<u8> {
        // Header length is independent of the bitmap offsets (fixed u64LE),
        // so lay out the header with placeholders and patch afterwards.
        let mut header = Vec::new();
        header.extend_from_slice(&(entries.len() as u32).to_le_bytes());
        let mut patches = Vec::new();
        let mut regions: Vec<Vec<u8>> = Vec::new();

        for (raw_id, grid) in entries {
            match id_width {
                1 => header.push(*raw_id as u8),
                2 => header.extend_from_slice(&raw_id.to_be_bytes()),
                _ => panic!("unsupported id width"),
            }
            match grid {
                None => header.extend_from_slice(&0_u64.to_le_bytes()),
                Some(grid) => {
                    patches.push((header.len(), regions.len()));
                    header.extend_from_slice(&u64::MAX.to_le_bytes());
                    header.push(DATA_OFFSET_BYTES);
                    write_varuint(&mut header, grid.level);
                    write_varuint(&mut header, grid.x_start);
                    write_varuint(&mut header, grid.x_end);
                    write_varuint(&mut header, grid.y_start);
                    write_varuint(&mut header, grid.y_end);
                    regions.push(region_bytes(grid));
                }
            }
        }

        let mut region_offsets = Vec::new();
        let mut next = header.len() as u64;
        for region in &regions {
            region_offsets.push(next);
            next += region.len() as u64;
        }
        for (pos, region_index) in patches {
            header[pos..pos + 8].copy_from_slice(&region_offsets[region_index].to_le_bytes());
        }

        let mut out = header;
        for region in regions {
            out.extend_from_slice(&region);
        }
        out
    }

    fn region_bytes(grid: &Grid) -> Vec<u8> {
        let row_cells = u64::from(grid.x_end.saturating_sub(grid.x_start)) + 1;
        let rows = u64::from(grid.y_end.saturating_sub(grid.y_start)) + 1;
        let cells = row_cells * rows;

        let mut bitmap = vec![0_u8; cells.div_ceil(8) as usize];
        let mut pointers = vec![0_u64; cells as usize];
        let mut data = Vec::new();

        for (x, y, offsets) in &grid.cells {
            let bit = u64::from(y - grid.y_start) * row_cells + u64::from(x - grid.x_start);
            bitmap[(bit / 8) as usize] |= 1 << (bit % 8);
            pointers[bit as usize] = data.len() as u64;

            let mut sorted = offsets.clone();
            sorted.sort_unstable();
            write_varuint(&mut data, sorted.len() as u32);
            if let Some((&first, rest)) = sorted.split_first() {
                data.extend_from_slice(&first.to_le_bytes());
                let mut previous = first;
                for &offset in rest {
                    write_varuint(&mut data, (offset - previous) as u32);
                    previous = offset;
                }
            }
        }

        let mut out = bitmap;
        for pointer in pointers {
            out.extend_from_slice(&pointer.to_le_bytes()[..DATA_OFFSET_BYTES as usize]);
        }
        out.extend_from_slice(&data);
        out
    }

    fn all_way_types(registry: &TypeRegistry) -> TypeInfoSet {
        registry.way_types().iter().copied().collect()
    }

    // ── Header decoding ──────────────────────────────────────────────────

    #[test]
    fn grid_geometry_derivation() {
        let registry = registry_with_ways(1);
        let bytes = index_bytes(
            1,
            &[(
                1,
                Some(Grid {
                    level: 4,
                    x_start: 3,
                    x_end: 4,
                    y_start: 80,
                    y_end: 81,
                    cells: vec![],
                }),
            )],
        );
        let index = SpatialTypeIndex::open_from(&registry, Cursor::new(bytes)).unwrap();
        let entry = index.entry(TypeId::new(0)).unwrap();
        assert!((entry.cell_width - 22.5).abs() < 1e-9);
        assert!((entry.bounds.min_lon + 112.5).abs() < 1e-9);
        assert!((entry.bounds.max_lon + 67.5).abs() < 1e-9);
        assert_eq!(entry.cell_count(), 4);
    }

    #[test]
    fn zero_bitmap_offset_means_no_data() {
        let registry = registry_with_ways(1);
        let bytes = index_bytes(1, &[(1, None)]);
        let index = SpatialTypeIndex::open_from(&registry, Cursor::new(bytes)).unwrap();
        let entry = index.entry(TypeId::new(0)).unwrap();
        assert!(!entry.has_data());
        assert_eq!(entry.index_level, 0);
    }

    #[test]
    fn unresolvable_id_fails_open() {
        let registry = registry_with_ways(1);
        let bytes = index_bytes(1, &[(9, None)]);
        assert!(matches!(
            SpatialTypeIndex::open_from(&registry, Cursor::new(bytes)).unwrap_err(),
            WaydbError::UnresolvedTypeId { id: 9 }
        ));
    }

    #[test]
    fn inverted_cell_bounds_fail_open() {
        let registry = registry_with_ways(1);
        let bytes = index_bytes(
            1,
            &[(
                1,
                Some(Grid {
                    level: 4,
                    x_start: 5,
                    x_end: 3,
                    y_start: 0,
                    y_end: 0,
                    cells: vec![],
                }),
            )],
        );
        assert!(SpatialTypeIndex::open_from(&registry, Cursor::new(bytes))
            .unwrap_err()
            .is_corrupt());
    }

    // ── Queries ──────────────────────────────────────────────────────────

    /// One type, level 4 (22.5° x 1.125° cells), four cells in a 2x2 block
    /// around cell x=8, y=80 (lon 0.., lat 0..).
    fn populated_index() -> (TypeRegistry, SpatialTypeIndex<Cursor<Vec<u8>>>) {
        let registry = registry_with_ways(2);
        let bytes = index_bytes(
            1,
            &[
                (
                    1,
                    Some(Grid {
                        level: 4,
                        x_start: 8,
                        x_end: 9,
                        y_start: 80,
                        y_end: 81,
                        // The way at offset 5000 spans two adjacent cells.
                        cells: vec![
                            (8, 80, vec![1000, 5000]),
                            (9, 80, vec![5000, 7000]),
                            (8, 81, vec![2000]),
                        ],
                    }),
                ),
                (2, None),
            ],
        );
        let index = SpatialTypeIndex::open_from(&registry, Cursor::new(bytes)).unwrap();
        (registry, index)
    }

    fn query_box() -> GeoBox {
        // Covers the whole 2x2 block: lon 0..45, lat 0..2.25.
        GeoBox::new(0.1, 0.1, 44.9, 2.2)
    }

    #[test]
    fn collects_offsets_and_loaded_types() {
        let (registry, mut index) = populated_index();
        let result = index
            .get_offsets(&query_box(), &all_way_types(&registry))
            .unwrap();
        let offsets: Vec<u64> = result.offsets.iter().copied().collect();
        assert_eq!(offsets, vec![1000, 2000, 5000, 7000]);
        assert_eq!(result.loaded_types.count(), 1);
        assert!(result.loaded_types.contains_id(TypeId::new(0)));
    }

    #[test]
    fn deduplicates_ways_spanning_cells() {
        let (registry, mut index) = populated_index();
        let result = index
            .get_offsets(&query_box(), &all_way_types(&registry))
            .unwrap();
        assert_eq!(result.offsets.iter().filter(|&&o| o == 5000).count(), 1);
    }

    #[test]
    fn is_idempotent() {
        let (registry, mut index) = populated_index();
        let candidates = all_way_types(&registry);
        let first = index.get_offsets(&query_box(), &candidates).unwrap();
        let second = index.get_offsets(&query_box(), &candidates).unwrap();
        assert_eq!(first.offsets, second.offsets);
        assert_eq!(first.loaded_types, second.loaded_types);
    }

    #[test]
    fn disjoint_box_is_empty_success() {
        let (registry, mut index) = populated_index();
        let far_away = GeoBox::new(-170.0, -80.0, -160.0, -75.0);
        let result = index
            .get_offsets(&far_away, &all_way_types(&registry))
            .unwrap();
        assert!(result.is_empty());
        assert!(result.loaded_types.is_empty());
    }

    #[test]
    fn restricts_to_requested_cells() {
        let (registry, mut index) = populated_index();
        // Only the north-western cell (x=8, y=81): lat 1.125..2.25.
        let north_west = GeoBox::new(0.1, 1.2, 22.0, 2.2);
        let result = index
            .get_offsets(&north_west, &all_way_types(&registry))
            .unwrap();
        let offsets: Vec<u64> = result.offsets.iter().copied().collect();
        assert_eq!(offsets, vec![2000]);
    }

    #[test]
    fn empty_candidate_set_yields_nothing() {
        let (_registry, mut index) = populated_index();
        let result = index
            .get_offsets(&query_box(), &TypeInfoSet::new(2))
            .unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn skips_types_without_spatial_data() {
        let (registry, mut index) = populated_index();
        let mut candidates = TypeInfoSet::new(2);
        candidates.insert(registry.way_types()[1]); // the bitmap-less type
        let result = index.get_offsets(&query_box(), &candidates).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn two_byte_compact_ids() {
        let registry = registry_with_ways(300);
        assert_eq!(registry.way_type_id_bytes(), 2);
        let bytes = index_bytes(2, &[(299, None), (300, None)]);
        let index = SpatialTypeIndex::open_from(&registry, Cursor::new(bytes)).unwrap();
        assert!(index.entry(TypeId::new(299)).is_some());
        assert!(index.entry(TypeId::new(0)).is_none());
    }
}
