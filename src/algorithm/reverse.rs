//! Vertex-order reversal.

use crate::geometry::Geometry;

/// Reverse point order within every reachable point array. Ring roles
/// (shell vs hole) are untouched.
pub trait Reverse {
    fn reverse(&mut self);
}

impl Reverse for Geometry {
    fn reverse(&mut self) {
        match self {
            Geometry::Point(_) => {}
            Geometry::LineString(g) => g.points.reverse(),
            Geometry::Polygon(g) => {
                for ring in &mut g.rings {
                    ring.reverse();
                }
            }
            Geometry::Collection(g) => {
                for child in &mut g.geoms {
                    child.reverse();
                }
            }
        }
    }
}
