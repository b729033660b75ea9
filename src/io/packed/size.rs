use crate::flags::PackedFlags;
use crate::geometry::Geometry;

pub(super) const HEADER_SIZE: usize = 8;
const KIND_SIZE: usize = 4;
const COUNT_SIZE: usize = 4;

/// Exact serialized length of a geometry in the packed format, for the given
/// bbox/geodetic choices.
///
/// The writer must produce exactly this many bytes; a disagreement is an
/// internal fault, not an input error.
pub fn packed_size(geom: &Geometry, with_bbox: bool, geodetic: bool) -> usize {
    let dim = geom.dim();
    let mut flags = PackedFlags::new(dim.has_z(), dim.has_m(), geodetic);
    flags.set_bbox(with_bbox && !geom.is_empty());
    HEADER_SIZE + flags.gbox_size() + payload_size(geom)
}

pub(super) fn payload_size(geom: &Geometry) -> usize {
    let tuple = geom.dim().size() * 8;
    match geom {
        Geometry::Point(g) => KIND_SIZE + COUNT_SIZE + g.coords().len() * tuple,
        Geometry::LineString(g) => KIND_SIZE + COUNT_SIZE + g.num_points() * tuple,
        Geometry::Polygon(g) => {
            let nrings = g.num_rings();
            let mut size = KIND_SIZE + COUNT_SIZE + nrings * COUNT_SIZE;
            if nrings % 2 == 1 {
                size += 4;
            }
            size + g.num_points() * tuple
        }
        Geometry::Collection(g) => {
            KIND_SIZE
                + COUNT_SIZE
                + g.geoms().iter().map(payload_size).sum::<usize>()
        }
    }
}
