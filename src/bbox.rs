//! Axis-aligned bounding boxes.
//!
//! The value model caches a reduced-precision 2D box; an absent box always
//! means "recompute from the points", never "empty extent".

use crate::coord::PointArray;

/// Cached 2D envelope in reduced (`f32`) precision.
///
/// Legacy serialization order is xmin, ymin, xmax, ymax.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub xmin: f32,
    pub ymin: f32,
    pub xmax: f32,
    pub ymax: f32,
}

impl BoundingBox {
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.xmin = (self.xmin as f64 + dx) as f32;
        self.ymin = (self.ymin as f64 + dy) as f32;
        self.xmax = (self.xmax as f64 + dx) as f32;
        self.ymax = (self.ymax as f64 + dy) as f32;
    }
}

/// Running min/max accumulator over full-precision coordinates, shared by
/// bbox recomputation and the fixed-header box writer.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Extent {
    pub xmin: f64,
    pub ymin: f64,
    pub zmin: f64,
    pub mmin: f64,
    pub xmax: f64,
    pub ymax: f64,
    pub zmax: f64,
    pub mmax: f64,
    seen: bool,
}

impl Extent {
    pub fn new() -> Self {
        Extent {
            xmin: f64::INFINITY,
            ymin: f64::INFINITY,
            zmin: f64::INFINITY,
            mmin: f64::INFINITY,
            xmax: f64::NEG_INFINITY,
            ymax: f64::NEG_INFINITY,
            zmax: f64::NEG_INFINITY,
            mmax: f64::NEG_INFINITY,
            seen: false,
        }
    }

    pub fn update(&mut self, coord: [f64; 4]) {
        let [x, y, z, m] = coord;
        self.xmin = self.xmin.min(x);
        self.ymin = self.ymin.min(y);
        self.zmin = self.zmin.min(z);
        self.mmin = self.mmin.min(m);
        self.xmax = self.xmax.max(x);
        self.ymax = self.ymax.max(y);
        self.zmax = self.zmax.max(z);
        self.mmax = self.mmax.max(m);
        self.seen = true;
    }

    pub fn update_from(&mut self, points: &PointArray) {
        for i in 0..points.len() {
            // in-bounds by construction
            if let Ok(coord) = points.coord4d(i) {
                self.update(coord);
            }
        }
    }

    /// True once at least one coordinate has been folded in.
    pub fn is_set(&self) -> bool {
        self.seen
    }
}

impl From<Extent> for BoundingBox {
    fn from(extent: Extent) -> Self {
        BoundingBox {
            xmin: extent.xmin as f32,
            ymin: extent.ymin as f32,
            xmax: extent.xmax as f32,
            ymax: extent.ymax as f32,
        }
    }
}
