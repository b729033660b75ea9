//! Right-hand-rule ring orientation.

use crate::algorithm::area::signed_ring_area;
use crate::coord::PointArray;
use crate::geometry::Geometry;

fn ring_is_ccw(ring: &PointArray) -> bool {
    signed_ring_area(ring) > 0.0
}

/// Orient every polygon so its shell winds clockwise and its holes
/// counter-clockwise, reversing rings as needed. Winding is judged by the
/// sign of the shoelace area.
pub trait ForceRhr {
    fn force_rhr(&mut self);
}

impl ForceRhr for Geometry {
    fn force_rhr(&mut self) {
        match self {
            Geometry::Polygon(g) => {
                for (i, ring) in g.rings.iter_mut().enumerate() {
                    let ccw = ring_is_ccw(ring);
                    let want_ccw = i > 0;
                    if ccw != want_ccw {
                        ring.reverse();
                    }
                }
            }
            Geometry::Collection(g) => {
                for child in &mut g.geoms {
                    child.force_rhr();
                }
            }
            _ => {}
        }
    }
}
