//! Densification: bound the 2D length of every segment.

use crate::coord::PointArray;
use crate::geometry::{Collection, Geometry, LineString, Polygon};

/// Walk a coordinate run emitting intermediate points so that no segment is
/// 2D-longer than `max_len`. Every input point is kept; added points carry
/// zero-filled higher ordinates.
pub fn segmentize_ptarray(points: &PointArray, max_len: f64) -> PointArray {
    let mut out = PointArray::with_capacity(points.dim(), points.len());
    if points.is_empty() {
        return out;
    }

    let mut current = points.coord4d(0).unwrap();
    push4d(&mut out, current);

    let mut next_idx = 1;
    while next_idx < points.len() {
        let target = points.coord4d(next_idx).unwrap();
        let seg = crate::algorithm::distance_pt_pt(
            (current[0], current[1]),
            (target[0], target[1]),
        );

        if seg > max_len {
            // step toward the target, leaving z/m at zero
            current = [
                current[0] + (target[0] - current[0]) / seg * max_len,
                current[1] + (target[1] - current[1]) / seg * max_len,
                0.0,
                0.0,
            ];
        } else {
            current = target;
            next_idx += 1;
        }
        push4d(&mut out, current);
    }

    out
}

fn push4d(points: &mut PointArray, coord: [f64; 4]) {
    let [x, y, z, m] = coord;
    match points.dim() {
        crate::types::Dimension::XY => points.push(&[x, y]).unwrap(),
        crate::types::Dimension::XYZ => points.push(&[x, y, z]).unwrap(),
        crate::types::Dimension::XYM => points.push(&[x, y, m]).unwrap(),
        crate::types::Dimension::XYZM => points.push(&[x, y, z, m]).unwrap(),
    }
}

/// Rebuild with every line and ring segment at most `max_len` long (2D
/// distance). A non-positive threshold returns the input unchanged.
pub trait Segmentize: Sized {
    fn segmentize(&self, max_len: f64) -> Self;
}

impl Segmentize for Geometry {
    fn segmentize(&self, max_len: f64) -> Self {
        if max_len <= 0.0 {
            return self.clone();
        }
        match self {
            Geometry::Point(_) => self.clone(),
            Geometry::LineString(g) => Geometry::LineString(LineString {
                srid: g.srid,
                bbox: g.bbox,
                points: segmentize_ptarray(&g.points, max_len),
            }),
            Geometry::Polygon(g) => Geometry::Polygon(Polygon {
                srid: g.srid,
                bbox: g.bbox,
                dim: g.dim,
                rings: g
                    .rings
                    .iter()
                    .map(|ring| segmentize_ptarray(ring, max_len))
                    .collect(),
            }),
            Geometry::Collection(g) => Geometry::Collection(Collection {
                kind: g.kind,
                srid: g.srid,
                bbox: g.bbox,
                dim: g.dim,
                geoms: g
                    .geoms
                    .iter()
                    .map(|child| child.segmentize(max_len))
                    .collect(),
            }),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::algorithm::length::ptarray_length_2d;
    use crate::test::polygon_fixture;
    use crate::types::Dimension;
    use approx::assert_relative_eq;

    fn max_segment(points: &PointArray) -> f64 {
        (1..points.len())
            .map(|i| {
                crate::algorithm::distance_pt_pt(
                    points.xy(i - 1).unwrap(),
                    points.xy(i).unwrap(),
                )
            })
            .fold(0.0, f64::max)
    }

    #[test]
    fn bounds_every_segment() {
        let pa = PointArray::from_coords(Dimension::XY, vec![0.0, 0.0, 10.0, 0.0]).unwrap();
        let dense = segmentize_ptarray(&pa, 3.0);
        assert!(max_segment(&dense) <= 3.0 + 1e-9);
        assert_relative_eq!(ptarray_length_2d(&dense), 10.0);
        // 3, 3, 3, 1
        assert_eq!(dense.len(), 5);
        assert_eq!(dense.xy(1).unwrap(), (3.0, 0.0));
        assert_eq!(dense.xy(4).unwrap(), (10.0, 0.0));
    }

    #[test]
    fn original_vertices_survive() {
        let pa =
            PointArray::from_coords(Dimension::XY, vec![0.0, 0.0, 2.5, 0.0, 2.5, 1.0]).unwrap();
        let dense = segmentize_ptarray(&pa, 1.0);
        let tuples: Vec<(f64, f64)> = (0..dense.len()).map(|i| dense.xy(i).unwrap()).collect();
        assert!(tuples.contains(&(0.0, 0.0)));
        assert!(tuples.contains(&(2.5, 0.0)));
        assert!(tuples.contains(&(2.5, 1.0)));
    }

    #[test]
    fn added_points_zero_fill_higher_ordinates() {
        let pa =
            PointArray::from_coords(Dimension::XYZ, vec![0.0, 0.0, 7.0, 4.0, 0.0, 7.0]).unwrap();
        let dense = segmentize_ptarray(&pa, 2.0);
        assert_eq!(dense.dim(), Dimension::XYZ);
        assert_eq!(dense.get(0).unwrap(), &[0.0, 0.0, 7.0]);
        assert_eq!(dense.get(1).unwrap(), &[2.0, 0.0, 0.0]);
        assert_eq!(dense.get(2).unwrap(), &[4.0, 0.0, 7.0]);
    }

    #[test]
    fn rings_stay_closed() {
        let geom = polygon_fixture();
        let dense = geom.segmentize(0.5);
        let poly = dense.as_polygon().unwrap();
        for ring in poly.rings() {
            assert!(ring.is_closed());
            assert!(max_segment(ring) <= 0.5 + 1e-9);
        }
        assert!(dense.count_vertices() > geom.count_vertices());

        // a non-positive threshold is a no-op
        assert_eq!(geom.segmentize(0.0), geom);
    }
}
