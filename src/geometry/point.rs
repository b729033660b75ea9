use crate::bbox::BoundingBox;
use crate::coord::PointArray;
use crate::error::{GeoPackError, Result};
use crate::types::Dimension;

/// A single position, or the empty point (a zero-length array).
#[derive(Clone, Debug, PartialEq)]
pub struct Point {
    pub(crate) srid: Option<i32>,
    pub(crate) bbox: Option<BoundingBox>,
    pub(crate) coords: PointArray,
}

impl Point {
    /// Take ownership of a point array holding at most one tuple.
    pub fn new(coords: PointArray) -> Result<Self> {
        if coords.len() > 1 {
            return Err(GeoPackError::IndexOutOfRange {
                index: coords.len(),
                len: 1,
            });
        }
        Ok(Point {
            srid: None,
            bbox: None,
            coords,
        })
    }

    pub fn empty(dim: Dimension) -> Self {
        Point {
            srid: None,
            bbox: None,
            coords: PointArray::new(dim),
        }
    }

    pub fn from_xy(x: f64, y: f64) -> Self {
        let mut coords = PointArray::new(Dimension::XY);
        coords.push(&[x, y]).unwrap();
        Point {
            srid: None,
            bbox: None,
            coords,
        }
    }

    pub fn from_xyz(x: f64, y: f64, z: f64) -> Self {
        let mut coords = PointArray::new(Dimension::XYZ);
        coords.push(&[x, y, z]).unwrap();
        Point {
            srid: None,
            bbox: None,
            coords,
        }
    }

    pub fn coords(&self) -> &PointArray {
        &self.coords
    }

    pub fn dim(&self) -> Dimension {
        self.coords.dim()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    pub fn x(&self) -> Option<f64> {
        self.coords.xy(0).ok().map(|(x, _)| x)
    }

    pub fn y(&self) -> Option<f64> {
        self.coords.xy(0).ok().map(|(_, y)| y)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn single_tuple_invariant() {
        let mut pa = PointArray::new(Dimension::XY);
        pa.push(&[1.0, 2.0]).unwrap();
        pa.push(&[3.0, 4.0]).unwrap();
        assert!(Point::new(pa).is_err());

        let p = Point::from_xy(1.0, 2.0);
        assert_eq!(p.x(), Some(1.0));
        assert_eq!(p.y(), Some(2.0));
        assert!(!p.is_empty());
    }

    #[test]
    fn empty_point() {
        let p = Point::empty(Dimension::XYZM);
        assert!(p.is_empty());
        assert_eq!(p.x(), None);
        assert_eq!(p.dim(), Dimension::XYZM);
    }
}
