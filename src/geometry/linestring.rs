use crate::bbox::BoundingBox;
use crate::coord::PointArray;
use crate::types::Dimension;

/// An ordered run of positions.
#[derive(Clone, Debug, PartialEq)]
pub struct LineString {
    pub(crate) srid: Option<i32>,
    pub(crate) bbox: Option<BoundingBox>,
    pub(crate) points: PointArray,
}

impl LineString {
    /// Take ownership of the vertex array.
    pub fn new(points: PointArray) -> Self {
        LineString {
            srid: None,
            bbox: None,
            points,
        }
    }

    pub fn empty(dim: Dimension) -> Self {
        LineString::new(PointArray::new(dim))
    }

    pub fn points(&self) -> &PointArray {
        &self.points
    }

    pub fn dim(&self) -> Dimension {
        self.points.dim()
    }

    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn is_closed(&self) -> bool {
        self.points.is_closed()
    }
}
