use crate::bbox::BoundingBox;
use crate::coord::PointArray;
use crate::error::{GeoPackError, Result};
use crate::flags::TypeDescriptor;
use crate::geometry::{Collection, Geometry, LineString, Point, Polygon};
use crate::io::bytes::ByteReader;
use crate::log::debug;
use crate::types::{Dimension, GeometryType};

/// Deserialize one geometry from a legacy-format buffer.
///
/// The buffer must contain exactly one geometry; unconsumed bytes fail with
/// [`GeoPackError::TrailingBytes`].
pub fn deserialize(buf: &[u8]) -> Result<Geometry> {
    let mut reader = ByteReader::new(buf);
    let geom = read_geometry(&mut reader, None)?;
    let remaining = reader.remaining();
    if remaining > 0 {
        return Err(GeoPackError::TrailingBytes { remaining });
    }
    debug!("legacy: deserialized {:?} from {} bytes", geom.kind(), buf.len());
    Ok(geom)
}

fn read_geometry(
    reader: &mut ByteReader,
    parent: Option<(GeometryType, Dimension)>,
) -> Result<Geometry> {
    let td = TypeDescriptor::from(reader.read_u8()?);
    let kind = td.kind()?;

    if let Some((wrapper, wrapper_dim)) = parent {
        if td.has_srid() || td.has_bbox() {
            return Err(GeoPackError::InvalidType(format!(
                "child of a {} carries SRID or bbox flags",
                wrapper.name()
            )));
        }
        if td.dimension() != wrapper_dim {
            return Err(GeoPackError::DimensionMismatch(format!(
                "{:?} child inside a {:?} {}",
                td.dimension(),
                wrapper_dim,
                wrapper.name()
            )));
        }
        if let Some(member) = wrapper.member_type() {
            if kind != member {
                return Err(GeoPackError::InvalidType(format!(
                    "{} child inside a {}",
                    kind.name(),
                    wrapper.name()
                )));
            }
        }
    }

    let dim = td.dimension();

    let bbox = if td.has_bbox() {
        Some(BoundingBox {
            xmin: reader.read_f32()?,
            ymin: reader.read_f32()?,
            xmax: reader.read_f32()?,
            ymax: reader.read_f32()?,
        })
    } else {
        None
    };

    let srid = if td.has_srid() {
        Some(reader.read_i32()?)
    } else {
        None
    };

    let mut geom = read_payload(reader, kind, dim)?;
    geom.set_srid(srid);
    geom.set_bbox(bbox);
    Ok(geom)
}

fn read_payload(reader: &mut ByteReader, kind: GeometryType, dim: Dimension) -> Result<Geometry> {
    match kind {
        GeometryType::Point => {
            let coords = read_coords(reader, 1, dim)?;
            Ok(Geometry::Point(Point::new(coords)?))
        }
        GeometryType::LineString => {
            let npoints = reader.read_u32()?;
            let coords = read_coords(reader, npoints as usize, dim)?;
            Ok(Geometry::LineString(LineString::new(coords)))
        }
        GeometryType::Polygon => {
            let nrings = reader.read_u32()?;
            let mut rings = Vec::new();
            for _ in 0..nrings {
                let npoints = reader.read_u32()?;
                rings.push(read_coords(reader, npoints as usize, dim)?);
            }
            Ok(Geometry::Polygon(Polygon::new(dim, rings)?))
        }
        _ => {
            let ngeoms = reader.read_u32()?;
            let mut geoms = Vec::new();
            for _ in 0..ngeoms {
                geoms.push(read_geometry(reader, Some((kind, dim)))?);
            }
            Ok(Geometry::Collection(Collection::new(kind, dim, geoms)?))
        }
    }
}

fn read_coords(reader: &mut ByteReader, npoints: usize, dim: Dimension) -> Result<PointArray> {
    let doubles = npoints.saturating_mul(dim.size());
    reader.expect(doubles.saturating_mul(8))?;
    let mut coords = Vec::with_capacity(doubles);
    for _ in 0..doubles {
        coords.push(reader.read_f64()?);
    }
    PointArray::from_coords(dim, coords)
}
