use crate::geometry::{Collection, Geometry, Point};
use crate::types::{Dimension, GeometryType};

use super::polygon::{multipolygon_fixture, polygon_fixture};

/// `SRID=4326;GEOMETRYCOLLECTION(POINT(0 1), POLYGON(...), MULTIPOLYGON(...))`
pub(crate) fn collection_fixture() -> Geometry {
    let point = Geometry::Point(Point::from_xy(0.0, 1.0));
    let geoms = vec![point, polygon_fixture(), multipolygon_fixture()];
    let col = Collection::new(GeometryType::GeometryCollection, Dimension::XY, geoms).unwrap();
    let mut geom = Geometry::Collection(col);
    geom.set_srid(Some(4326));
    geom
}
