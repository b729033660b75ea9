//! Planar minimum-distance primitives and the recursive geometry/geometry
//! dispatch.

use crate::algorithm::contains::{point_in_polygon, point_in_ring};
use crate::coord::PointArray;
use crate::error::{GeoPackError, Result};
use crate::geometry::{Geometry, LineString, Point, Polygon};

pub fn distance_pt_pt(a: (f64, f64), b: (f64, f64)) -> f64 {
    let dx = b.0 - a.0;
    let dy = b.1 - a.1;
    (dx * dx + dy * dy).sqrt()
}

/// Distance from `p` to the segment `a`→`b`. A zero-length segment falls
/// back to point/point distance.
pub fn distance_pt_seg(p: (f64, f64), a: (f64, f64), b: (f64, f64)) -> f64 {
    if a == b {
        return distance_pt_pt(p, a);
    }

    let len2 = (b.0 - a.0) * (b.0 - a.0) + (b.1 - a.1) * (b.1 - a.1);
    let r = ((p.0 - a.0) * (b.0 - a.0) + (p.1 - a.1) * (b.1 - a.1)) / len2;

    if r < 0.0 {
        return distance_pt_pt(p, a);
    }
    if r > 1.0 {
        return distance_pt_pt(p, b);
    }

    let s = ((a.1 - p.1) * (b.0 - a.0) - (a.0 - p.0) * (b.1 - a.1)) / len2;
    s.abs() * len2.sqrt()
}

/// Minimum distance between segments `a`→`b` and `c`→`d`, using the
/// parametric intersection test. Returns exactly `0.0` on a detected
/// intersection; callers rely on that sentinel to mean touching or crossing.
pub fn distance_seg_seg(a: (f64, f64), b: (f64, f64), c: (f64, f64), d: (f64, f64)) -> f64 {
    if a == b {
        return distance_pt_seg(a, c, d);
    }
    if c == d {
        return distance_pt_seg(d, a, b);
    }

    let r_top = (a.1 - c.1) * (d.0 - c.0) - (a.0 - c.0) * (d.1 - c.1);
    let r_bot = (b.0 - a.0) * (d.1 - c.1) - (b.1 - a.1) * (d.0 - c.0);
    let s_top = (a.1 - c.1) * (b.0 - a.0) - (a.0 - c.0) * (b.1 - a.1);
    let s_bot = r_bot;

    let endpoint_min = || {
        distance_pt_seg(a, c, d)
            .min(distance_pt_seg(b, c, d))
            .min(distance_pt_seg(c, a, b))
            .min(distance_pt_seg(d, a, b))
    };

    if r_bot == 0.0 || s_bot == 0.0 {
        return endpoint_min();
    }

    let r = r_top / r_bot;
    let s = s_top / s_bot;
    if !(0.0..=1.0).contains(&r) || !(0.0..=1.0).contains(&s) {
        return endpoint_min();
    }

    0.0
}

fn distance_pt_ptarray(p: (f64, f64), pa: &PointArray) -> f64 {
    let mut min: Option<f64> = None;
    for i in 1..pa.len() {
        let start = pa.xy(i - 1).unwrap();
        let end = pa.xy(i).unwrap();
        let dist = distance_pt_seg(p, start, end);
        min = Some(min.map_or(dist, |m: f64| m.min(dist)));
        if min == Some(0.0) {
            return 0.0;
        }
    }
    // a one-point array degenerates to point/point distance
    if min.is_none() && pa.len() == 1 {
        return distance_pt_pt(p, pa.xy(0).unwrap());
    }
    min.unwrap_or(0.0)
}

fn distance_ptarray_ptarray(l1: &PointArray, l2: &PointArray) -> f64 {
    let mut min: Option<f64> = None;
    for i in 1..l1.len() {
        let a = l1.xy(i - 1).unwrap();
        let b = l1.xy(i).unwrap();
        for j in 1..l2.len() {
            let c = l2.xy(j - 1).unwrap();
            let d = l2.xy(j).unwrap();
            let dist = distance_seg_seg(a, b, c, d);
            min = Some(min.map_or(dist, |m: f64| m.min(dist)));
            if min == Some(0.0) {
                return 0.0;
            }
        }
    }
    min.unwrap_or(0.0)
}

/// Line-run to polygon: 0 when any segment crosses a ring or the run lies
/// inside the polygon, otherwise the closest ring approach.
fn distance_ptarray_polygon(pa: &PointArray, poly: &Polygon) -> f64 {
    if pa.is_empty() || poly.is_empty() {
        return 0.0;
    }

    let mut min: Option<f64> = None;
    for ring in poly.rings() {
        let dist = distance_ptarray_ptarray(pa, ring);
        min = Some(min.map_or(dist, |m: f64| m.min(dist)));
        if min == Some(0.0) {
            return 0.0;
        }
    }
    let min = min.unwrap_or(0.0);

    let first = pa.xy(0).unwrap();
    if !point_in_ring(poly.exterior().unwrap(), first) {
        return min;
    }
    for hole in poly.interiors() {
        if point_in_ring(hole, first) {
            return min;
        }
    }
    0.0
}

fn distance_point_point(p1: &Point, p2: &Point) -> f64 {
    match (p1.coords().xy(0), p2.coords().xy(0)) {
        (Ok(a), Ok(b)) => distance_pt_pt(a, b),
        _ => 0.0,
    }
}

fn distance_point_line(point: &Point, line: &LineString) -> f64 {
    match point.coords().xy(0) {
        Ok(p) => distance_pt_ptarray(p, line.points()),
        Err(_) => 0.0,
    }
}

/// Point to polygon: distance to the shell when outside, to a hole ring when
/// inside that hole, 0 when properly inside.
fn distance_point_polygon(point: &Point, poly: &Polygon) -> f64 {
    let Ok(p) = point.coords().xy(0) else {
        return 0.0;
    };
    let Some(shell) = poly.exterior() else {
        return 0.0;
    };
    if !point_in_ring(shell, p) {
        return distance_pt_ptarray(p, shell);
    }
    for hole in poly.interiors() {
        if point_in_ring(hole, p) {
            return distance_pt_ptarray(p, hole);
        }
    }
    0.0
}

fn distance_line_polygon(line: &LineString, poly: &Polygon) -> f64 {
    distance_ptarray_polygon(line.points(), poly)
}

/// Polygon to polygon: 0 when one contains the other or any rings cross,
/// otherwise the closest ring approach.
fn distance_polygon_polygon(p1: &Polygon, p2: &Polygon) -> f64 {
    if p1.is_empty() || p2.is_empty() {
        return 0.0;
    }

    let start1 = p1.exterior().unwrap().xy(0).unwrap();
    let start2 = p2.exterior().unwrap().xy(0).unwrap();
    if point_in_polygon(p2, start1) || point_in_polygon(p1, start2) {
        return 0.0;
    }

    let mut min: Option<f64> = None;
    for ring in p1.rings() {
        let dist = distance_ptarray_polygon(ring, p2);
        min = Some(min.map_or(dist, |m: f64| m.min(dist)));
        if min == Some(0.0) {
            return 0.0;
        }
    }
    min.unwrap_or(0.0)
}

fn leaf_distance(a: &Geometry, b: &Geometry) -> f64 {
    match (a, b) {
        (Geometry::Point(g1), Geometry::Point(g2)) => distance_point_point(g1, g2),
        (Geometry::Point(g1), Geometry::LineString(g2)) => distance_point_line(g1, g2),
        (Geometry::LineString(g1), Geometry::Point(g2)) => distance_point_line(g2, g1),
        (Geometry::Point(g1), Geometry::Polygon(g2)) => distance_point_polygon(g1, g2),
        (Geometry::Polygon(g1), Geometry::Point(g2)) => distance_point_polygon(g2, g1),
        (Geometry::LineString(g1), Geometry::LineString(g2)) => {
            distance_ptarray_ptarray(g1.points(), g2.points())
        }
        (Geometry::LineString(g1), Geometry::Polygon(g2)) => distance_line_polygon(g1, g2),
        (Geometry::Polygon(g1), Geometry::LineString(g2)) => distance_line_polygon(g2, g1),
        (Geometry::Polygon(g1), Geometry::Polygon(g2)) => distance_polygon_polygon(g1, g2),
        _ => unreachable!("collections are recursed into before dispatch"),
    }
}

/// Recursive minimum distance: collections are flattened first, and any
/// sub-pair at distance 0 short-circuits the whole computation.
fn min_distance(a: &Geometry, b: &Geometry) -> f64 {
    let mut min: Option<f64> = None;

    let mut fold = |dist: f64| {
        let m = min.map_or(dist, |m: f64| m.min(dist));
        min = Some(m);
        m == 0.0
    };

    match (a, b) {
        (Geometry::Collection(c), _) => {
            for child in c.geoms() {
                if fold(min_distance(child, b)) {
                    return 0.0;
                }
            }
        }
        (_, Geometry::Collection(c)) => {
            for child in c.geoms() {
                if fold(min_distance(a, child)) {
                    return 0.0;
                }
            }
        }
        _ => {
            if fold(leaf_distance(a, b)) {
                return 0.0;
            }
        }
    }

    min.unwrap_or(0.0)
}

/// Planar minimum distance between two geometries.
///
/// Fails with [`GeoPackError::SridMismatch`] when the operands carry
/// different SRIDs; nothing is ever reprojected implicitly.
pub trait EuclideanDistance {
    fn euclidean_distance(&self, other: &Geometry) -> Result<f64>;
}

impl EuclideanDistance for Geometry {
    fn euclidean_distance(&self, other: &Geometry) -> Result<f64> {
        if let (Some(left), Some(right)) = (self.srid(), other.srid()) {
            if left != right {
                return Err(GeoPackError::SridMismatch { left, right });
            }
        }
        Ok(min_distance(self, other))
    }
}
