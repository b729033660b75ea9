//! Shoelace area and ring perimeter.

use crate::algorithm::length::{ptarray_length, ptarray_length_2d};
use crate::coord::PointArray;
use crate::geometry::{Geometry, Polygon};

/// Signed shoelace sum over a closed ring: positive for counter-clockwise
/// winding.
pub(crate) fn signed_ring_area(ring: &PointArray) -> f64 {
    let mut sum = 0.0;
    for i in 1..ring.len() {
        let (x1, y1) = ring.xy(i - 1).unwrap();
        let (x2, y2) = ring.xy(i).unwrap();
        sum += x1 * y2 - y1 * x2;
    }
    sum / 2.0
}

/// Planar area: shell area minus hole areas, summed over polygons.
pub trait Area {
    fn area(&self) -> f64;
}

impl Area for Polygon {
    fn area(&self) -> f64 {
        let mut total = 0.0;
        for (i, ring) in self.rings().iter().enumerate() {
            let ring_area = signed_ring_area(ring).abs();
            if i == 0 {
                total += ring_area;
            } else {
                total -= ring_area;
            }
        }
        total
    }
}

impl Area for Geometry {
    fn area(&self) -> f64 {
        match self {
            Geometry::Polygon(g) => g.area(),
            Geometry::Collection(g) => g.geoms().iter().map(|c| c.area()).sum(),
            _ => 0.0,
        }
    }
}

/// Total ring length, summed over polygons. `perimeter` is dimension-aware
/// (3D distances for Z arrays); `perimeter_2d` always projects to the plane.
pub trait Perimeter {
    fn perimeter(&self) -> f64;
    fn perimeter_2d(&self) -> f64;
}

impl Perimeter for Polygon {
    fn perimeter(&self) -> f64 {
        self.rings().iter().map(ptarray_length).sum()
    }

    fn perimeter_2d(&self) -> f64 {
        self.rings().iter().map(ptarray_length_2d).sum()
    }
}

impl Perimeter for Geometry {
    fn perimeter(&self) -> f64 {
        match self {
            Geometry::Polygon(g) => g.perimeter(),
            Geometry::Collection(g) => g.geoms().iter().map(|c| c.perimeter()).sum(),
            _ => 0.0,
        }
    }

    fn perimeter_2d(&self) -> f64 {
        match self {
            Geometry::Polygon(g) => g.perimeter_2d(),
            Geometry::Collection(g) => g.geoms().iter().map(|c| c.perimeter_2d()).sum(),
            _ => 0.0,
        }
    }
}
