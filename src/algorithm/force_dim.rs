//! Dimensionality-forcing rebuilds.

use crate::geometry::{Collection, Geometry, LineString, Point, Polygon};

/// Rebuild a tree with every point array re-tupled to the target
/// dimensionality: added ordinates are zero-filled, removed ones truncated.
/// Kind, SRID and bbox presence are preserved exactly.
pub trait ForceDims: Sized {
    fn force_dims(&self, has_z: bool, has_m: bool) -> Self;

    fn force_2d(&self) -> Self {
        self.force_dims(false, false)
    }

    fn force_3dz(&self) -> Self {
        self.force_dims(true, false)
    }

    fn force_3dm(&self) -> Self {
        self.force_dims(false, true)
    }

    fn force_4d(&self) -> Self {
        self.force_dims(true, true)
    }
}

impl ForceDims for Geometry {
    fn force_dims(&self, has_z: bool, has_m: bool) -> Self {
        match self {
            Geometry::Point(g) => Geometry::Point(Point {
                srid: g.srid,
                bbox: g.bbox,
                coords: g.coords.force_dims(has_z, has_m),
            }),
            Geometry::LineString(g) => Geometry::LineString(LineString {
                srid: g.srid,
                bbox: g.bbox,
                points: g.points.force_dims(has_z, has_m),
            }),
            Geometry::Polygon(g) => Geometry::Polygon(Polygon {
                srid: g.srid,
                bbox: g.bbox,
                dim: crate::types::Dimension::from_flags(has_z, has_m),
                rings: g
                    .rings
                    .iter()
                    .map(|ring| ring.force_dims(has_z, has_m))
                    .collect(),
            }),
            Geometry::Collection(g) => Geometry::Collection(Collection {
                kind: g.kind,
                srid: g.srid,
                bbox: g.bbox,
                dim: crate::types::Dimension::from_flags(has_z, has_m),
                geoms: g
                    .geoms
                    .iter()
                    .map(|child| child.force_dims(has_z, has_m))
                    .collect(),
            }),
        }
    }
}
