use geo::point;

use crate::geometry::{Collection, Geometry, Point};
use crate::io::geo::point_from_geo;
use crate::types::{Dimension, GeometryType};

/// `POINT(0 0.2)`
pub(crate) fn point_fixture() -> Geometry {
    Geometry::Point(point_from_geo(&point!(x: 0.0, y: 0.2)))
}

fn multipoint(points: &[(f64, f64)]) -> Geometry {
    let geoms = points
        .iter()
        .map(|&(x, y)| Geometry::Point(Point::from_xy(x, y)))
        .collect();
    Geometry::Collection(
        Collection::new(GeometryType::MultiPoint, Dimension::XY, geoms).unwrap(),
    )
}

/// `MULTIPOINT(0.9 0.9, ...)`, six identical points
pub(crate) fn multipoint_6_fixture() -> Geometry {
    multipoint(&[(0.9, 0.9); 6])
}

/// `MULTIPOINT(-1 -1,-1 2.5,2 2,2 -1)`
pub(crate) fn multipoint_4_fixture() -> Geometry {
    multipoint(&[(-1.0, -1.0), (-1.0, 2.5), (2.0, 2.0), (2.0, -1.0)])
}

/// `MULTIPOINT(-1 -1,-1 2.5,2 2,2 -1,1 1,2 2,4 5)`
pub(crate) fn multipoint_7_fixture() -> Geometry {
    multipoint(&[
        (-1.0, -1.0),
        (-1.0, 2.5),
        (2.0, 2.0),
        (2.0, -1.0),
        (1.0, 1.0),
        (2.0, 2.0),
        (4.0, 5.0),
    ])
}
