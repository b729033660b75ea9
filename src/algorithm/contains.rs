//! Point-in-ring and point-in-polygon predicates.

use crate::coord::PointArray;
use crate::geometry::Polygon;

/// Crossing-number test against a closed ring.
///
/// Counts edges crossing the horizontal ray to the right of the point; odd
/// parity means inside. Winding direction is irrelevant. The ring's last
/// point must equal its first.
pub fn point_in_ring(ring: &PointArray, pt: (f64, f64)) -> bool {
    let (px, py) = pt;
    let mut crossings = 0u32;

    for i in 1..ring.len() {
        let (x1, y1) = ring.xy(i - 1).unwrap();
        let (x2, y2) = ring.xy(i).unwrap();

        let upward = y1 <= py && y2 > py;
        let downward = y1 > py && y2 <= py;
        if upward || downward {
            let t = (py - y1) / (y2 - y1);
            if px < x1 + t * (x2 - x1) {
                crossings += 1;
            }
        }
    }

    crossings & 1 == 1
}

/// Inside the shell and inside no hole.
pub fn point_in_polygon(polygon: &Polygon, pt: (f64, f64)) -> bool {
    let Some(shell) = polygon.exterior() else {
        return false;
    };
    if !point_in_ring(shell, pt) {
        return false;
    }
    for hole in polygon.interiors() {
        if point_in_ring(hole, pt) {
            return false;
        }
    }
    true
}

/// Strictly inside the circle around `(cx, cy)`.
pub fn point_in_circle(pt: (f64, f64), cx: f64, cy: f64, radius: f64) -> bool {
    let dx = pt.0 - cx;
    let dy = pt.1 - cy;
    (dx * dx + dy * dy).sqrt() < radius
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::{polygon_fixture, polygon_three_ring_fixture};

    #[test]
    fn ring_parity() {
        let geom = polygon_fixture();
        let shell = geom.as_polygon().unwrap().exterior().unwrap();
        assert!(point_in_ring(shell, (0.5, 2.0)));
        assert!(point_in_ring(shell, (-0.9, -0.9)));
        assert!(!point_in_ring(shell, (3.0, 0.0)));
        assert!(!point_in_ring(shell, (-1.5, 2.0)));

        // parity, not winding: a reversed ring gives the same answer
        let mut reversed = shell.clone();
        reversed.reverse();
        assert!(point_in_ring(&reversed, (0.5, 2.0)));
        assert!(!point_in_ring(&reversed, (3.0, 0.0)));
    }

    #[test]
    fn holes_are_outside() {
        let geom = polygon_fixture();
        let poly = geom.as_polygon().unwrap();
        assert!(point_in_polygon(poly, (-0.5, 2.0)));
        // inside the (0 0,0 1,1 1,1 0) hole
        assert!(!point_in_polygon(poly, (0.5, 0.5)));
        assert!(!point_in_polygon(poly, (5.0, 5.0)));

        let geom = polygon_three_ring_fixture();
        let poly = geom.as_polygon().unwrap();
        assert!(!point_in_polygon(poly, (-0.45, -0.45)));
        assert!(point_in_polygon(poly, (1.5, 1.5)));
    }

    #[test]
    fn empty_polygon_contains_nothing() {
        let poly = crate::geometry::Polygon::empty(crate::Dimension::XY);
        assert!(!point_in_polygon(&poly, (0.0, 0.0)));
    }

    #[test]
    fn circle_membership() {
        assert!(point_in_circle((1.0, 1.0), 0.0, 0.0, 2.0));
        assert!(!point_in_circle((2.0, 0.0), 0.0, 0.0, 2.0));
        assert!(!point_in_circle((3.0, 3.0), 0.0, 0.0, 2.0));
    }
}
