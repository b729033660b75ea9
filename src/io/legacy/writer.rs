use crate::coord::PointArray;
use crate::error::{GeoPackError, Result};
use crate::flags::TypeDescriptor;
use crate::geometry::Geometry;
use crate::io::bytes::ByteWriter;
use crate::io::legacy::size::{is_empty_point, serialized_size};
use crate::log::debug;
use crate::types::GeometryType;

/// Serialize a geometry into the legacy format.
///
/// Two-pass: the exact output size is computed first and the buffer reserved
/// once; the writer never re-enters allocation mid-write. A final length
/// disagreement with [`serialized_size`] is a fatal
/// [`GeoPackError::SizeMismatch`].
pub fn serialize(geom: &Geometry) -> Result<Vec<u8>> {
    let computed = serialized_size(geom);
    let mut writer = ByteWriter::with_capacity(computed);
    write_geometry(&mut writer, geom, true)?;

    let written = writer.len();
    if written != computed {
        return Err(GeoPackError::SizeMismatch { computed, written });
    }
    debug!("legacy: serialized {:?} into {} bytes", geom.kind(), written);
    Ok(writer.into_inner())
}

fn write_geometry(writer: &mut ByteWriter, geom: &Geometry, top: bool) -> Result<()> {
    let dim = geom.dim();

    if is_empty_point(geom) {
        if !top {
            return Err(GeoPackError::InvalidType(
                "an empty point has no legacy representation inside a collection".to_string(),
            ));
        }
        // historical behavior: POINT EMPTY serializes as an empty collection
        let td = TypeDescriptor::new(
            GeometryType::GeometryCollection,
            dim.has_z(),
            dim.has_m(),
            geom.srid().is_some(),
            false,
        );
        writer.write_u8(td.byte());
        if let Some(srid) = geom.srid() {
            writer.write_i32(srid);
        }
        writer.write_u32(0);
        return Ok(());
    }

    let (srid, bbox) = if top {
        (geom.srid(), geom.bbox())
    } else {
        (None, None)
    };

    let td = TypeDescriptor::new(
        geom.kind(),
        dim.has_z(),
        dim.has_m(),
        srid.is_some(),
        bbox.is_some(),
    );
    writer.write_u8(td.byte());

    if let Some(bbox) = bbox {
        writer.write_f32(bbox.xmin);
        writer.write_f32(bbox.ymin);
        writer.write_f32(bbox.xmax);
        writer.write_f32(bbox.ymax);
    }
    if let Some(srid) = srid {
        writer.write_i32(srid);
    }

    match geom {
        Geometry::Point(g) => write_coords(writer, g.coords()),
        Geometry::LineString(g) => {
            writer.write_u32(g.num_points() as u32);
            write_coords(writer, g.points());
        }
        Geometry::Polygon(g) => {
            writer.write_u32(g.num_rings() as u32);
            for ring in g.rings() {
                writer.write_u32(ring.len() as u32);
                write_coords(writer, ring);
            }
        }
        Geometry::Collection(g) => {
            writer.write_u32(g.num_geoms() as u32);
            for child in g.geoms() {
                write_geometry(writer, child, false)?;
            }
        }
    }
    Ok(())
}

fn write_coords(writer: &mut ByteWriter, points: &PointArray) {
    for value in points.coords() {
        writer.write_f64(*value);
    }
}
