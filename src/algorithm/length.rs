//! Line length, planar and dimension-aware.

use crate::coord::PointArray;
use crate::geometry::Geometry;

/// 2D length of a coordinate run, whatever its dimensionality.
pub fn ptarray_length_2d(points: &PointArray) -> f64 {
    let mut dist = 0.0;
    for i in 1..points.len() {
        let from = points.xy(i - 1).unwrap();
        let to = points.xy(i).unwrap();
        dist += crate::algorithm::distance_pt_pt(from, to);
    }
    dist
}

/// Length of a coordinate run, using z when the array carries it.
pub fn ptarray_length(points: &PointArray) -> f64 {
    if !points.has_z() {
        return ptarray_length_2d(points);
    }
    let mut dist = 0.0;
    for i in 1..points.len() {
        let [x1, y1, z1, _] = points.coord4d(i - 1).unwrap();
        let [x2, y2, z2, _] = points.coord4d(i).unwrap();
        let (dx, dy, dz) = (x2 - x1, y2 - y1, z2 - z1);
        dist += (dx * dx + dy * dy + dz * dz).sqrt();
    }
    dist
}

/// Summed length of every line in the tree. Points and polygons contribute
/// nothing; ring length is the business of
/// [`Perimeter`](crate::algorithm::Perimeter).
pub trait Length {
    fn length(&self) -> f64;
    fn length_2d(&self) -> f64;
}

impl Length for Geometry {
    fn length(&self) -> f64 {
        match self {
            Geometry::LineString(g) => ptarray_length(g.points()),
            Geometry::Collection(g) => g.geoms().iter().map(|c| c.length()).sum(),
            _ => 0.0,
        }
    }

    fn length_2d(&self) -> f64 {
        match self {
            Geometry::LineString(g) => ptarray_length_2d(g.points()),
            Geometry::Collection(g) => g.geoms().iter().map(|c| c.length_2d()).sum(),
            _ => 0.0,
        }
    }
}
