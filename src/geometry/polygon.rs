use crate::bbox::BoundingBox;
use crate::coord::PointArray;
use crate::error::{GeoPackError, Result};
use crate::types::Dimension;

/// Minimum tuple count of a non-empty closed ring (triangle plus closing
/// point).
pub const MIN_RING_POINTS: usize = 4;

/// An ordered array of closed rings: the first is the shell, the rest are
/// holes.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    pub(crate) srid: Option<i32>,
    pub(crate) bbox: Option<BoundingBox>,
    pub(crate) dim: Dimension,
    pub(crate) rings: Vec<PointArray>,
}

impl Polygon {
    /// Take ownership of the ring arrays.
    ///
    /// Every ring must match `dim`, hold at least [`MIN_RING_POINTS`] tuples,
    /// and be closed (first tuple coordinate-equal to the last).
    pub fn new(dim: Dimension, rings: Vec<PointArray>) -> Result<Self> {
        for (i, ring) in rings.iter().enumerate() {
            if ring.dim() != dim {
                return Err(GeoPackError::DimensionMismatch(format!(
                    "ring {} is {:?} in a {:?} polygon",
                    i,
                    ring.dim(),
                    dim
                )));
            }
            if ring.len() < MIN_RING_POINTS || !ring.is_closed() {
                return Err(GeoPackError::UnclosedRing { ring: i });
            }
        }
        Ok(Polygon {
            srid: None,
            bbox: None,
            dim,
            rings,
        })
    }

    pub fn empty(dim: Dimension) -> Self {
        Polygon {
            srid: None,
            bbox: None,
            dim,
            rings: Vec::new(),
        }
    }

    pub fn dim(&self) -> Dimension {
        self.dim
    }

    pub fn rings(&self) -> &[PointArray] {
        &self.rings
    }

    pub fn num_rings(&self) -> usize {
        self.rings.len()
    }

    /// The shell ring, absent for an empty polygon.
    pub fn exterior(&self) -> Option<&PointArray> {
        self.rings.first()
    }

    /// The hole rings.
    pub fn interiors(&self) -> &[PointArray] {
        if self.rings.is_empty() {
            &[]
        } else {
            &self.rings[1..]
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rings.iter().all(|r| r.is_empty())
    }

    pub fn num_points(&self) -> usize {
        self.rings.iter().map(|r| r.len()).sum()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn ring(coords: Vec<f64>) -> PointArray {
        PointArray::from_coords(Dimension::XY, coords).unwrap()
    }

    #[test]
    fn construction_validates_rings() {
        let shell = ring(vec![0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0, 0.0, 0.0, 0.0]);
        let poly = Polygon::new(Dimension::XY, vec![shell.clone()]).unwrap();
        assert_eq!(poly.num_rings(), 1);
        assert_eq!(poly.exterior(), Some(&shell));
        assert!(!poly.is_empty());

        let open = ring(vec![0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0, 0.0]);
        assert!(matches!(
            Polygon::new(Dimension::XY, vec![open]),
            Err(GeoPackError::UnclosedRing { ring: 0 })
        ));

        let degenerate = ring(vec![0.0, 0.0, 1.0, 1.0, 0.0, 0.0]);
        assert!(Polygon::new(Dimension::XY, vec![degenerate]).is_err());

        let shell_z = PointArray::from_coords(
            Dimension::XYZ,
            vec![0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 0.0, 0.0, 0.0],
        )
        .unwrap();
        assert!(matches!(
            Polygon::new(Dimension::XY, vec![shell_z]),
            Err(GeoPackError::DimensionMismatch(_))
        ));
    }

    #[test]
    fn empty_polygon() {
        let poly = Polygon::empty(Dimension::XYZ);
        assert!(poly.is_empty());
        assert_eq!(poly.num_rings(), 0);
        assert_eq!(poly.exterior(), None);
        assert!(poly.interiors().is_empty());
    }
}
