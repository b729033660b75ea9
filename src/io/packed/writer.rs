use crate::bbox::Extent;
use crate::error::{GeoPackError, Result};
use crate::flags::PackedFlags;
use crate::geometry::Geometry;
use crate::io::bytes::ByteWriter;
use crate::io::packed::size::packed_size;
use crate::io::packed::PackedGeometry;
use crate::log::debug;

pub(super) fn write(geom: &Geometry, with_bbox: bool, geodetic: bool) -> Result<PackedGeometry> {
    let dim = geom.dim();

    let mut extent = Extent::new();
    if with_bbox {
        geom.extend_extent(&mut extent);
    }

    let mut flags = PackedFlags::new(dim.has_z(), dim.has_m(), geodetic);
    flags.set_bbox(with_bbox && extent.is_set());

    let computed = packed_size(geom, with_bbox, geodetic);
    let mut writer = ByteWriter::with_capacity(computed);

    writer.write_u32(computed as u32);
    let srid = clamp_srid(geom.srid());
    writer.write_u8(((srid >> 16) & 0xFF) as u8);
    writer.write_u8(((srid >> 8) & 0xFF) as u8);
    writer.write_u8((srid & 0xFF) as u8);
    writer.write_u8(flags.byte());

    if flags.has_bbox() {
        writer.write_f32(extent.xmin as f32);
        writer.write_f32(extent.xmax as f32);
        writer.write_f32(extent.ymin as f32);
        writer.write_f32(extent.ymax as f32);
        if flags.is_geodetic() {
            writer.write_f32(extent.zmin as f32);
            writer.write_f32(extent.zmax as f32);
        } else {
            if flags.has_z() {
                writer.write_f32(extent.zmin as f32);
                writer.write_f32(extent.zmax as f32);
            }
            if flags.has_m() {
                writer.write_f32(extent.mmin as f32);
                writer.write_f32(extent.mmax as f32);
            }
        }
    }

    write_payload(&mut writer, geom);

    let written = writer.len();
    if written != computed {
        return Err(GeoPackError::SizeMismatch { computed, written });
    }
    debug!("packed: serialized {:?} into {} bytes", geom.kind(), written);
    Ok(PackedGeometry::from_raw(writer.into_inner()))
}

/// Clamp a model SRID into the 24-bit header field. `None` maps to the
/// packed format's 0 sentinel.
pub(super) fn clamp_srid(srid: Option<i32>) -> u32 {
    srid.unwrap_or(0).clamp(0, 0x00FF_FFFF) as u32
}

fn write_payload(writer: &mut ByteWriter, geom: &Geometry) {
    debug_assert!(writer.len() % 8 == 0);
    writer.write_u32(geom.kind() as u8 as u32);
    match geom {
        Geometry::Point(g) => {
            writer.write_u32(g.coords().len() as u32);
            for value in g.coords().coords() {
                writer.write_f64(*value);
            }
        }
        Geometry::LineString(g) => {
            writer.write_u32(g.num_points() as u32);
            for value in g.points().coords() {
                writer.write_f64(*value);
            }
        }
        Geometry::Polygon(g) => {
            let nrings = g.num_rings();
            writer.write_u32(nrings as u32);
            for ring in g.rings() {
                writer.write_u32(ring.len() as u32);
            }
            if nrings % 2 == 1 {
                writer.write_u32(0);
            }
            for ring in g.rings() {
                for value in ring.coords() {
                    writer.write_f64(*value);
                }
            }
        }
        Geometry::Collection(g) => {
            writer.write_u32(g.num_geoms() as u32);
            for child in g.geoms() {
                write_payload(writer, child);
            }
        }
    }
}
