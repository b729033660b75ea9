//! Ramer–Douglas–Peucker point reduction.

use crate::algorithm::distance::distance_pt_seg;
use crate::coord::PointArray;
use crate::geometry::{Collection, Geometry, LineString, Polygon, MIN_RING_POINTS};

/// Reduce a run with Douglas–Peucker, never dropping the first or last
/// point. If the reduction would leave fewer than `min_points` tuples the
/// input is returned unchanged.
fn simplify_ptarray(points: &PointArray, tolerance: f64, min_points: usize) -> PointArray {
    let n = points.len();
    if n <= min_points.max(2) {
        return points.clone();
    }

    let mut keep = vec![false; n];
    keep[0] = true;
    keep[n - 1] = true;

    let mut stack = vec![(0usize, n - 1)];
    while let Some((start, end)) = stack.pop() {
        if end <= start + 1 {
            continue;
        }
        let a = points.xy(start).unwrap();
        let b = points.xy(end).unwrap();

        let mut max_dist = -1.0;
        let mut split = start;
        for i in start + 1..end {
            let dist = distance_pt_seg(points.xy(i).unwrap(), a, b);
            if dist > max_dist {
                max_dist = dist;
                split = i;
            }
        }

        if max_dist > tolerance {
            keep[split] = true;
            stack.push((start, split));
            stack.push((split, end));
        }
    }

    if keep.iter().filter(|kept| **kept).count() < min_points {
        return points.clone();
    }

    let mut out = PointArray::with_capacity(points.dim(), n);
    for (i, kept) in keep.iter().enumerate() {
        if *kept {
            out.push(points.get(i).unwrap()).unwrap();
        }
    }
    out
}

/// Douglas–Peucker simplification of every line and ring.
///
/// Endpoints always survive; a ring is never reduced below a valid closed
/// ring's point count. A non-positive tolerance returns the input
/// unchanged.
pub trait Simplify: Sized {
    fn simplify(&self, tolerance: f64) -> Self;
}

impl Simplify for Geometry {
    fn simplify(&self, tolerance: f64) -> Self {
        if tolerance <= 0.0 {
            return self.clone();
        }
        match self {
            Geometry::Point(_) => self.clone(),
            Geometry::LineString(g) => Geometry::LineString(LineString {
                srid: g.srid,
                bbox: g.bbox,
                points: simplify_ptarray(&g.points, tolerance, 2),
            }),
            Geometry::Polygon(g) => Geometry::Polygon(Polygon {
                srid: g.srid,
                bbox: g.bbox,
                dim: g.dim,
                rings: g
                    .rings
                    .iter()
                    .map(|ring| simplify_ptarray(ring, tolerance, MIN_RING_POINTS))
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
                    .map(|child| child.simplify(tolerance))
                    .collect(),
            }),
        }
    }
}
