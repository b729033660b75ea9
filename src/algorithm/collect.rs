//! Combining independent geometries into one.

use crate::error::{GeoPackError, Result};
use crate::geometry::{Collection, Geometry};
use crate::types::GeometryType;

/// Collect geometries into the tightest wrapper that holds them: a Multi
/// kind when every input is the same single kind, a `GeometryCollection`
/// otherwise.
///
/// All inputs must agree on SRID (unknown pairs with anything) and on
/// dimensionality. The agreed SRID moves to the wrapper.
pub fn collect(geoms: Vec<Geometry>) -> Result<Geometry> {
    if geoms.is_empty() {
        return Err(GeoPackError::Collect("no geometries supplied".to_string()));
    }

    let mut srid = None;
    for geom in &geoms {
        match (srid, geom.srid()) {
            (None, s) => srid = s,
            (Some(left), Some(right)) if left != right => {
                return Err(GeoPackError::SridMismatch { left, right });
            }
            _ => {}
        }
    }

    let dim = geoms[0].dim();
    let first_kind = geoms[0].kind();
    let homogeneous = geoms.iter().all(|g| g.kind() == first_kind);

    let kind = match first_kind.multi_type() {
        Some(multi) if homogeneous => multi,
        _ => GeometryType::GeometryCollection,
    };

    let mut out = Collection::new(kind, dim, geoms)?;
    out.srid = srid;
    Ok(Geometry::Collection(out))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geometry::{LineString, Point};
    use crate::types::Dimension;
    use crate::PointArray;

    fn point(x: f64, y: f64) -> Geometry {
        Geometry::Point(Point::from_xy(x, y))
    }

    fn line() -> Geometry {
        Geometry::LineString(LineString::new(
            PointArray::from_coords(Dimension::XY, vec![0.0, 0.0, 1.0, 1.0]).unwrap(),
        ))
    }

    #[test]
    fn same_kind_makes_a_multi() {
        let out = collect(vec![point(0.0, 0.0), point(1.0, 1.0)]).unwrap();
        assert_eq!(out.kind(), GeometryType::MultiPoint);
        assert_eq!(out.count_vertices(), 2);
    }

    #[test]
    fn mixed_kinds_make_a_collection() {
        let out = collect(vec![point(0.0, 0.0), line()]).unwrap();
        assert_eq!(out.kind(), GeometryType::GeometryCollection);

        // multi inputs also force a heterogeneous wrapper
        let multi = collect(vec![point(0.0, 0.0)]).unwrap();
        let out = collect(vec![multi, point(1.0, 1.0)]).unwrap();
        assert_eq!(out.kind(), GeometryType::GeometryCollection);
    }

    #[test]
    fn srid_is_lifted_to_the_wrapper() {
        let mut a = point(0.0, 0.0);
        a.set_srid(Some(4326));
        let b = point(1.0, 1.0);
        let out = collect(vec![a, b]).unwrap();
        assert_eq!(out.srid(), Some(4326));
        for child in out.as_collection().unwrap().geoms() {
            assert_eq!(child.srid(), None);
        }
    }

    #[test]
    fn srid_conflicts_are_rejected() {
        let mut a = point(0.0, 0.0);
        let mut b = point(1.0, 1.0);
        a.set_srid(Some(4326));
        b.set_srid(Some(3857));
        assert!(matches!(
            collect(vec![a, b]).unwrap_err(),
            GeoPackError::SridMismatch { .. }
        ));
    }

    #[test]
    fn nothing_to_collect_is_an_error() {
        assert!(matches!(
            collect(Vec::new()).unwrap_err(),
            GeoPackError::Collect(_)
        ));
    }
}
