use crate::geometry::Geometry;
use crate::types::GeometryType;

const BBOX_SIZE: usize = 4 * 4;
const SRID_SIZE: usize = 4;
const COUNT_SIZE: usize = 4;

/// Exact serialized length of a geometry in the legacy format.
///
/// A pure function of the tree shape and flags; the writer must produce
/// exactly this many bytes.
pub fn serialized_size(geom: &Geometry) -> usize {
    let mut size = 1;
    if geom.bbox().is_some() {
        size += BBOX_SIZE;
    }
    if geom.srid().is_some() {
        size += SRID_SIZE;
    }
    size + payload_size(geom)
}

pub(super) fn payload_size(geom: &Geometry) -> usize {
    let tuple = geom.dim().size() * 8;
    match geom {
        // an empty point serializes as an empty collection
        Geometry::Point(g) if g.is_empty() => COUNT_SIZE,
        Geometry::Point(_) => tuple,
        Geometry::LineString(g) => COUNT_SIZE + g.num_points() * tuple,
        Geometry::Polygon(g) => {
            COUNT_SIZE
                + g.rings()
                    .iter()
                    .map(|ring| COUNT_SIZE + ring.len() * tuple)
                    .sum::<usize>()
        }
        Geometry::Collection(g) => {
            COUNT_SIZE
                + g.geoms()
                    .iter()
                    .map(|child| 1 + payload_size(child))
                    .sum::<usize>()
        }
    }
}

pub(super) fn is_empty_point(geom: &Geometry) -> bool {
    geom.kind() == GeometryType::Point && geom.is_empty()
}
