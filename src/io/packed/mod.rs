//! The fixed-header packed serialization format.
//!
//! Layout, in host byte order:
//!
//! ```text
//! [u32 size word][3-byte SRID field][1 byte flags]
//! [optional float bbox, width = flags.gbox_size()]
//! payload (8-byte aligned):
//!   Point:      u32 kind, u32 count (0 or 1), tuple
//!   LineString: u32 kind, u32 count, tuples
//!   Polygon:    u32 kind, u32 ring count, u32 per-ring counts,
//!               4 pad bytes iff the ring count is odd, ring tuples
//!   Collection: u32 kind, u32 child count, child payloads
//! ```
//!
//! The preamble gives O(1) SRID and flag access without touching the
//! payload. The SRID field is 24 bits wide; 0 is the "unknown" sentinel and
//! out-of-range values clamp to the field capacity rather than corrupting
//! the flags byte next to them.

mod reader;
mod size;
mod writer;

pub use size::packed_size;

use crate::error::{GeoPackError, Result};
use crate::flags::PackedFlags;
use crate::geometry::Geometry;

const SRID_OFFSET: usize = 4;
const FLAGS_OFFSET: usize = 7;

/// An owned buffer in the packed format.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PackedGeometry {
    buf: Vec<u8>,
}

impl PackedGeometry {
    pub(super) fn from_raw(buf: Vec<u8>) -> Self {
        PackedGeometry { buf }
    }

    /// Serialize a geometry, optionally with a freshly computed bounding box
    /// and/or the geodetic interpretation flag.
    pub fn from_geometry(geom: &Geometry, with_bbox: bool, geodetic: bool) -> Result<Self> {
        writer::write(geom, with_bbox, geodetic)
    }

    /// Adopt an existing buffer. The size word must match the buffer length;
    /// the payload is validated lazily by [`PackedGeometry::to_geometry`].
    pub fn from_bytes(buf: Vec<u8>) -> Result<Self> {
        if buf.len() < size::HEADER_SIZE {
            return Err(GeoPackError::TruncatedBuffer {
                offset: 0,
                needed: size::HEADER_SIZE,
                len: buf.len(),
            });
        }
        let word = u32::from_ne_bytes([buf[0], buf[1], buf[2], buf[3]]) as usize;
        if word > buf.len() {
            return Err(GeoPackError::TruncatedBuffer {
                offset: 0,
                needed: word,
                len: buf.len(),
            });
        }
        if word < buf.len() {
            return Err(GeoPackError::TrailingBytes {
                remaining: buf.len() - word,
            });
        }
        Ok(PackedGeometry { buf })
    }

    /// Rebuild the value tree from the payload.
    pub fn to_geometry(&self) -> Result<Geometry> {
        reader::read(self)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    /// Total byte length, equal to the stored size word.
    pub fn size(&self) -> usize {
        self.buf.len()
    }

    /// O(1) read of the flags byte.
    pub fn flags(&self) -> PackedFlags {
        PackedFlags::from(self.buf[FLAGS_OFFSET])
    }

    /// O(1) overwrite of the flags byte.
    ///
    /// The Z/M/bbox/geodetic bits determine where the payload starts; flip
    /// them only on buffers whose layout already agrees.
    pub fn set_flags(&mut self, flags: PackedFlags) {
        self.buf[FLAGS_OFFSET] = flags.byte();
    }

    /// O(1) read of the SRID field. The stored 0 means "unknown".
    pub fn srid(&self) -> Option<i32> {
        let b = &self.buf[SRID_OFFSET..SRID_OFFSET + 3];
        let srid = ((b[0] as u32) << 16) | ((b[1] as u32) << 8) | (b[2] as u32);
        if srid == 0 {
            None
        } else {
            Some(srid as i32)
        }
    }

    /// O(1) overwrite of the SRID field, clamping into the 24-bit range.
    pub fn set_srid(&mut self, srid: Option<i32>) {
        let srid = writer::clamp_srid(srid);
        self.buf[SRID_OFFSET] = ((srid >> 16) & 0xFF) as u8;
        self.buf[SRID_OFFSET + 1] = ((srid >> 8) & 0xFF) as u8;
        self.buf[SRID_OFFSET + 2] = (srid & 0xFF) as u8;
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::coord::PointArray;
    use crate::error::GeoPackError;
    use crate::geometry::{Collection, LineString, Point, Polygon};
    use crate::test::*;
    use crate::types::{Dimension, GeometryType};

    fn line_2d(coords: Vec<f64>) -> Geometry {
        Geometry::LineString(LineString::new(
            PointArray::from_coords(Dimension::XY, coords).unwrap(),
        ))
    }

    fn unit_square_polygon(nholes: usize) -> Geometry {
        let shell = PointArray::from_coords(
            Dimension::XY,
            vec![0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0, 0.0, 0.0, 0.0],
        )
        .unwrap();
        let hole = PointArray::from_coords(
            Dimension::XY,
            vec![0.2, 0.2, 0.2, 0.4, 0.4, 0.4, 0.4, 0.2, 0.2, 0.2],
        )
        .unwrap();
        let mut rings = vec![shell];
        rings.extend(std::iter::repeat(hole).take(nholes));
        Geometry::Polygon(Polygon::new(Dimension::XY, rings).unwrap())
    }

    #[test]
    fn conformance_sizes() {
        // POINT(0 0)
        let geom = Geometry::Point(Point::from_xy(0.0, 0.0));
        assert_eq!(packed_size(&geom, false, false), 32);

        // POINT(0 0 0)
        let geom = Geometry::Point(Point::from_xyz(0.0, 0.0, 0.0));
        assert_eq!(packed_size(&geom, false, false), 40);

        // MULTIPOINT(0 0 0, 1 1 1)
        let geoms = vec![
            Geometry::Point(Point::from_xyz(0.0, 0.0, 0.0)),
            Geometry::Point(Point::from_xyz(1.0, 1.0, 1.0)),
        ];
        let geom = Geometry::Collection(
            Collection::new(GeometryType::MultiPoint, Dimension::XYZ, geoms).unwrap(),
        );
        assert_eq!(packed_size(&geom, false, false), 80);

        // LINESTRING(0 0, 1 1)
        let geom = line_2d(vec![0.0, 0.0, 1.0, 1.0]);
        assert_eq!(packed_size(&geom, false, false), 48);

        // MULTILINESTRING((0 0, 1 1),(0 0, 1 1))
        let geoms = vec![
            line_2d(vec![0.0, 0.0, 1.0, 1.0]),
            line_2d(vec![0.0, 0.0, 1.0, 1.0]),
        ];
        let geom = Geometry::Collection(
            Collection::new(GeometryType::MultiLineString, Dimension::XY, geoms).unwrap(),
        );
        assert_eq!(packed_size(&geom, false, false), 96);

        // POLYGON((0 0, 0 1, 1 1, 1 0, 0 0))
        let geom = unit_square_polygon(0);
        assert_eq!(packed_size(&geom, false, false), 104);

        // two-ring POLYGON
        let geom = unit_square_polygon(1);
        assert_eq!(packed_size(&geom, false, false), 184);
    }

    #[test]
    fn size_law() {
        let fixtures = vec![
            point_fixture(),
            linestring_fixture(),
            multipoint_6_fixture(),
            multilinestring_fixture(),
            polygon_fixture(),
            polygon_three_ring_fixture(),
            polygon_z_fixture(),
            multipolygon_fixture(),
            collection_fixture(),
            unit_square_polygon(2),
        ];
        for geom in fixtures {
            for with_bbox in [false, true] {
                let packed = PackedGeometry::from_geometry(&geom, with_bbox, false).unwrap();
                assert_eq!(
                    packed.size(),
                    packed_size(&geom, with_bbox, false),
                    "size law broke for {:?} bbox={}",
                    geom.kind(),
                    with_bbox
                );
            }
        }
    }

    #[test]
    fn round_trip_conformance_set() {
        let fixtures = vec![
            point_fixture(),
            linestring_fixture(),
            multipoint_6_fixture(),
            multilinestring_fixture(),
            polygon_fixture(),
            polygon_three_ring_fixture(),
            polygon_z_fixture(),
            multipolygon_fixture(),
            collection_fixture(),
        ];
        for geom in fixtures {
            let packed = PackedGeometry::from_geometry(&geom, false, false).unwrap();
            let back = packed.to_geometry().unwrap();
            assert_eq!(back, geom, "round trip changed {:?}", geom.kind());
        }
    }

    #[test]
    fn round_trip_with_bbox() {
        let mut geom = multipoint_4_fixture();
        let packed = PackedGeometry::from_geometry(&geom, true, false).unwrap();
        assert!(packed.flags().has_bbox());
        let back = packed.to_geometry().unwrap();
        let bbox = back.bbox().unwrap();
        assert_eq!(bbox.xmin, -1.0);
        assert_eq!(bbox.ymax, 2.5);

        geom.add_bbox();
        assert_eq!(back, geom);
    }

    #[test]
    fn empty_geometries_keep_their_kind() {
        let empties = vec![
            Geometry::Point(Point::empty(Dimension::XY)),
            Geometry::Point(Point::empty(Dimension::XYZ)),
            Geometry::LineString(LineString::empty(Dimension::XY)),
            Geometry::Polygon(Polygon::empty(Dimension::XYZM)),
            Geometry::Collection(
                Collection::empty(GeometryType::GeometryCollection, Dimension::XY).unwrap(),
            ),
        ];
        for geom in empties {
            let packed = PackedGeometry::from_geometry(&geom, true, false).unwrap();
            // no extent, so no bbox even when requested
            assert!(!packed.flags().has_bbox());
            let back = packed.to_geometry().unwrap();
            assert_eq!(back.kind(), geom.kind());
            assert_eq!(back.dim(), geom.dim());
            assert!(back.is_empty());
        }
    }

    #[test]
    fn srid_round_trip() {
        let geom = Geometry::Point(Point::from_xy(0.0, 0.0));
        let mut packed = PackedGeometry::from_geometry(&geom, false, false).unwrap();

        for srid in [None, Some(4326), Some(1_000_000)] {
            packed.set_srid(srid);
            assert_eq!(packed.srid(), srid);
            // adjacent header fields stay intact
            assert_eq!(packed.flags(), PackedFlags::new(false, false, false));
            assert_eq!(packed.to_geometry().unwrap().srid(), srid);
        }
    }

    #[test]
    fn srid_clamps_deterministically() {
        let geom = Geometry::Point(Point::from_xy(0.0, 0.0));
        let mut packed = PackedGeometry::from_geometry(&geom, false, false).unwrap();

        packed.set_srid(Some(0x0200_0000));
        assert_eq!(packed.srid(), Some(0x00FF_FFFF));
        assert_eq!(packed.flags(), PackedFlags::new(false, false, false));

        packed.set_srid(Some(-12));
        assert_eq!(packed.srid(), None);
    }

    #[test]
    fn srid_from_the_model() {
        let mut geom = Geometry::Point(Point::from_xy(0.0, 0.0));
        geom.set_srid(Some(4326));
        let packed = PackedGeometry::from_geometry(&geom, false, false).unwrap();
        assert_eq!(packed.srid(), Some(4326));
        assert_eq!(packed.to_geometry().unwrap().srid(), Some(4326));
    }

    #[test]
    fn flags_are_constant_time_accessible() {
        let geom = multipoint_7_fixture();
        let mut packed = PackedGeometry::from_geometry(&geom, false, false).unwrap();
        assert_eq!(packed.to_geometry().unwrap().count_vertices(), 7);

        let mut flags = packed.flags();
        flags.set_geodetic(true);
        packed.set_flags(flags);
        assert!(packed.flags().is_geodetic());

        // decoding still sees the same payload, twice over
        assert_eq!(packed.to_geometry().unwrap().count_vertices(), 7);
        assert_eq!(packed.to_geometry().unwrap().count_vertices(), 7);
    }

    #[test]
    fn geodetic_bbox_is_xyz() {
        let geom = multipoint_4_fixture();
        let flat = PackedGeometry::from_geometry(&geom, true, false).unwrap();
        let geodetic = PackedGeometry::from_geometry(&geom, true, true).unwrap();
        assert_eq!(geodetic.size(), flat.size() + 8);
        assert!(geodetic.flags().is_geodetic());
        let back = geodetic.to_geometry().unwrap();
        assert_eq!(back.count_vertices(), 4);
    }

    #[test]
    fn from_bytes_validates_the_size_word() {
        let geom = Geometry::Point(Point::from_xy(0.0, 0.0));
        let buf = PackedGeometry::from_geometry(&geom, false, false)
            .unwrap()
            .into_bytes();

        assert!(PackedGeometry::from_bytes(buf.clone()).is_ok());

        let mut short = buf.clone();
        short.truncate(16);
        assert!(matches!(
            PackedGeometry::from_bytes(short).unwrap_err(),
            GeoPackError::TruncatedBuffer { .. }
        ));

        let mut long = buf;
        long.push(0);
        assert!(matches!(
            PackedGeometry::from_bytes(long).unwrap_err(),
            GeoPackError::TrailingBytes { remaining: 1 }
        ));
    }

    #[test]
    fn corrupt_counts_are_rejected() {
        let geom = line_2d(vec![0.0, 0.0, 1.0, 1.0]);
        let packed = PackedGeometry::from_geometry(&geom, false, false).unwrap();
        let mut buf = packed.into_bytes();
        // inflate the vertex count past the buffer
        buf[12..16].copy_from_slice(&1000u32.to_ne_bytes());
        let packed = PackedGeometry::from_bytes(buf).unwrap();
        assert!(matches!(
            packed.to_geometry().unwrap_err(),
            GeoPackError::TruncatedBuffer { .. }
        ));
    }

    #[test]
    fn unknown_kind_words_are_rejected() {
        let geom = Geometry::Point(Point::from_xy(0.0, 0.0));
        let packed = PackedGeometry::from_geometry(&geom, false, false).unwrap();
        let mut buf = packed.into_bytes();
        buf[8..12].copy_from_slice(&99u32.to_ne_bytes());
        let packed = PackedGeometry::from_bytes(buf).unwrap();
        assert!(matches!(
            packed.to_geometry().unwrap_err(),
            GeoPackError::InvalidType(_)
        ));
    }

    #[test]
    fn multi_children_kind_words_are_checked() {
        let geom = multipoint_6_fixture();
        let packed = PackedGeometry::from_geometry(&geom, false, false).unwrap();
        let mut buf = packed.into_bytes();
        // first child kind word sits after header + wrapper kind + count
        buf[16..20].copy_from_slice(&(GeometryType::LineString as u8 as u32).to_ne_bytes());
        let packed = PackedGeometry::from_bytes(buf).unwrap();
        assert!(matches!(
            packed.to_geometry().unwrap_err(),
            GeoPackError::InvalidType(_)
        ));
    }
}
