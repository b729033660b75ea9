//! Geometry kinds and coordinate dimensionality.

use num_enum::{IntoPrimitive, TryFromPrimitive};
use phf::phf_map;

use crate::error::{GeoPackError, Result};

/// The geometry kinds understood by both serialization formats.
///
/// Values ≥ 4 denote multi/collection kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum GeometryType {
    Point = 1,
    LineString = 2,
    Polygon = 3,
    MultiPoint = 4,
    MultiLineString = 5,
    MultiPolygon = 6,
    GeometryCollection = 7,
}

impl GeometryType {
    /// Whether this kind holds an ordered list of child geometries.
    pub fn is_collection(self) -> bool {
        self as u8 >= 4
    }

    /// The kind every child of a homogeneous collection must have.
    /// `None` for single kinds and for heterogeneous collections.
    pub fn member_type(self) -> Option<GeometryType> {
        match self {
            GeometryType::MultiPoint => Some(GeometryType::Point),
            GeometryType::MultiLineString => Some(GeometryType::LineString),
            GeometryType::MultiPolygon => Some(GeometryType::Polygon),
            _ => None,
        }
    }

    /// The homogeneous collection kind wrapping this single kind.
    pub fn multi_type(self) -> Option<GeometryType> {
        match self {
            GeometryType::Point => Some(GeometryType::MultiPoint),
            GeometryType::LineString => Some(GeometryType::MultiLineString),
            GeometryType::Polygon => Some(GeometryType::MultiPolygon),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            GeometryType::Point => "POINT",
            GeometryType::LineString => "LINESTRING",
            GeometryType::Polygon => "POLYGON",
            GeometryType::MultiPoint => "MULTIPOINT",
            GeometryType::MultiLineString => "MULTILINESTRING",
            GeometryType::MultiPolygon => "MULTIPOLYGON",
            GeometryType::GeometryCollection => "GEOMETRYCOLLECTION",
        }
    }
}

/// The dimension of a coordinate tuple: the Z/M flags fully determine the
/// tuple width, which is never stored per point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dimension {
    XY,
    XYZ,
    XYM,
    XYZM,
}

impl Dimension {
    pub fn from_flags(has_z: bool, has_m: bool) -> Self {
        match (has_z, has_m) {
            (false, false) => Dimension::XY,
            (true, false) => Dimension::XYZ,
            (false, true) => Dimension::XYM,
            (true, true) => Dimension::XYZM,
        }
    }

    /// Number of doubles per coordinate tuple.
    pub fn size(self) -> usize {
        match self {
            Dimension::XY => 2,
            Dimension::XYZ | Dimension::XYM => 3,
            Dimension::XYZM => 4,
        }
    }

    pub fn has_z(self) -> bool {
        matches!(self, Dimension::XYZ | Dimension::XYZM)
    }

    pub fn has_m(self) -> bool {
        matches!(self, Dimension::XYM | Dimension::XYZM)
    }
}

static KIND_BY_NAME: phf::Map<&'static str, GeometryType> = phf_map! {
    "POINT" => GeometryType::Point,
    "LINESTRING" => GeometryType::LineString,
    "POLYGON" => GeometryType::Polygon,
    "MULTIPOINT" => GeometryType::MultiPoint,
    "MULTILINESTRING" => GeometryType::MultiLineString,
    "MULTIPOLYGON" => GeometryType::MultiPolygon,
    "GEOMETRYCOLLECTION" => GeometryType::GeometryCollection,
};

/// Parse a geometry kind name like `"POINT"`, `"LINESTRINGM"` or
/// `"MULTIPOLYGONZM"` into its kind and Z/M flags.
///
/// Matching is case-insensitive and ignores leading/trailing whitespace.
///
/// # Examples
///
/// ```
/// use geopack::{type_from_name, GeometryType};
///
/// let (kind, has_z, has_m) = type_from_name("  pointz ").unwrap();
/// assert_eq!(kind, GeometryType::Point);
/// assert!(has_z);
/// assert!(!has_m);
/// ```
pub fn type_from_name(name: &str) -> Result<(GeometryType, bool, bool)> {
    let upper = name.trim().to_ascii_uppercase();

    let (base, has_z, has_m) = if let Some(stripped) = upper.strip_suffix("ZM") {
        (stripped, true, true)
    } else if let Some(stripped) = upper.strip_suffix('Z') {
        (stripped, true, false)
    } else if let Some(stripped) = upper.strip_suffix('M') {
        (stripped, false, true)
    } else {
        (upper.as_str(), false, false)
    };

    match KIND_BY_NAME.get(base) {
        Some(kind) => Ok((*kind, has_z, has_m)),
        None => Err(GeoPackError::InvalidType(format!(
            "unknown geometry type name {name:?}"
        ))),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn kind_round_trip() {
        for byte in 1u8..=7 {
            let kind = GeometryType::try_from(byte).unwrap();
            assert_eq!(u8::from(kind), byte);
        }
        assert!(GeometryType::try_from(0u8).is_err());
        assert!(GeometryType::try_from(8u8).is_err());
    }

    #[test]
    fn collection_kinds() {
        assert!(!GeometryType::Point.is_collection());
        assert!(!GeometryType::Polygon.is_collection());
        assert!(GeometryType::MultiPoint.is_collection());
        assert!(GeometryType::GeometryCollection.is_collection());
        assert_eq!(
            GeometryType::MultiLineString.member_type(),
            Some(GeometryType::LineString)
        );
        assert_eq!(GeometryType::GeometryCollection.member_type(), None);
        assert_eq!(
            GeometryType::Polygon.multi_type(),
            Some(GeometryType::MultiPolygon)
        );
    }

    #[test]
    fn dimension_sizes() {
        assert_eq!(Dimension::XY.size(), 2);
        assert_eq!(Dimension::XYZ.size(), 3);
        assert_eq!(Dimension::XYM.size(), 3);
        assert_eq!(Dimension::XYZM.size(), 4);
        assert_eq!(Dimension::from_flags(true, true), Dimension::XYZM);
        assert!(Dimension::XYM.has_m());
        assert!(!Dimension::XYM.has_z());
    }

    #[test]
    fn name_parsing() {
        let (kind, z, m) = type_from_name("  POINTZ").unwrap();
        assert_eq!(kind, GeometryType::Point);
        assert!(z);
        assert!(!m);

        let (kind, z, m) = type_from_name("LINESTRINGM ").unwrap();
        assert_eq!(kind, GeometryType::LineString);
        assert!(!z);
        assert!(m);

        let (kind, z, m) = type_from_name("MULTIPOLYGONZM").unwrap();
        assert_eq!(kind, GeometryType::MultiPolygon);
        assert!(z);
        assert!(m);

        let (kind, z, m) = type_from_name("  GEOMETRYCOLLECTIONZM ").unwrap();
        assert_eq!(kind, GeometryType::GeometryCollection);
        assert!(z);
        assert!(m);

        let (kind, z, m) = type_from_name("polygon").unwrap();
        assert_eq!(kind, GeometryType::Polygon);
        assert!(!z);
        assert!(!m);
    }

    #[test]
    fn name_parsing_rejects_misspellings() {
        assert!(type_from_name("  GEOMERYCOLLECTIONZM ").is_err());
        assert!(type_from_name("POIN").is_err());
        assert!(type_from_name("").is_err());
        assert!(type_from_name("POINTMZ").is_err());
    }
}
