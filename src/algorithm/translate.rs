//! In-place coordinate translation.

use crate::coord::PointArray;
use crate::geometry::Geometry;

/// Additive shift of every coordinate tuple. `dz` is ignored for arrays
/// without a Z ordinate; a cached bbox is shifted along.
pub trait Translate {
    fn translate(&mut self, dx: f64, dy: f64, dz: f64);
}

impl Translate for PointArray {
    fn translate(&mut self, dx: f64, dy: f64, dz: f64) {
        let has_z = self.has_z();
        for i in 0..self.len() {
            let mut tuple = self.get(i).unwrap().to_vec();
            tuple[0] += dx;
            tuple[1] += dy;
            if has_z {
                tuple[2] += dz;
            }
            self.set(i, &tuple).unwrap();
        }
    }
}

impl Translate for Geometry {
    fn translate(&mut self, dx: f64, dy: f64, dz: f64) {
        match self {
            Geometry::Point(g) => g.coords.translate(dx, dy, dz),
            Geometry::LineString(g) => g.points.translate(dx, dy, dz),
            Geometry::Polygon(g) => {
                for ring in &mut g.rings {
                    ring.translate(dx, dy, dz);
                }
            }
            Geometry::Collection(g) => {
                for child in &mut g.geoms {
                    child.translate(dx, dy, dz);
                }
            }
        }
        if let Some(mut bbox) = self.bbox() {
            bbox.translate(dx, dy);
            self.set_bbox(Some(bbox));
        }
    }
}
