use geo::line_string;

use crate::geometry::{Collection, Geometry};
use crate::io::geo::line_string_from_geo;
use crate::types::{Dimension, GeometryType};

fn ls0() -> geo::LineString {
    line_string![
        (x: -1.0, y: -1.0),
        (x: -1.0, y: 2.5),
        (x: 2.0, y: 2.0),
        (x: 2.0, y: -1.0)
    ]
}

/// `LINESTRING(-1 -1,-1 2.5,2 2,2 -1)`
pub(crate) fn linestring_fixture() -> Geometry {
    Geometry::LineString(line_string_from_geo(&ls0()))
}

/// `SRID=1;MULTILINESTRING((-1 -1,-1 2.5,2 2,2 -1),(...),(...),(...))`: four
/// copies of the same line, 16 vertices total.
pub(crate) fn multilinestring_fixture() -> Geometry {
    let geoms = (0..4)
        .map(|_| Geometry::LineString(line_string_from_geo(&ls0())))
        .collect();
    let col = Collection::new(GeometryType::MultiLineString, Dimension::XY, geoms).unwrap();
    let mut geom = Geometry::Collection(col);
    geom.set_srid(Some(1));
    geom
}
