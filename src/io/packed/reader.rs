use crate::bbox::BoundingBox;
use crate::coord::PointArray;
use crate::error::{GeoPackError, Result};
use crate::geometry::{Collection, Geometry, LineString, Point, Polygon};
use crate::io::bytes::ByteReader;
use crate::io::packed::size::HEADER_SIZE;
use crate::io::packed::PackedGeometry;
use crate::log::debug;
use crate::types::{Dimension, GeometryType};

pub(super) fn read(packed: &PackedGeometry) -> Result<Geometry> {
    let buf = packed.as_bytes();
    let flags = packed.flags();
    let dim = flags.dimension();

    let mut reader = ByteReader::new(buf);
    reader.skip(HEADER_SIZE)?;

    let bbox = if flags.has_bbox() {
        let xmin = reader.read_f32()?;
        let xmax = reader.read_f32()?;
        let ymin = reader.read_f32()?;
        let ymax = reader.read_f32()?;
        reader.skip(flags.gbox_size() - 16)?;
        Some(BoundingBox {
            xmin,
            ymin,
            xmax,
            ymax,
        })
    } else {
        None
    };

    let mut geom = read_payload(&mut reader, dim, None)?;
    let remaining = reader.remaining();
    if remaining > 0 {
        return Err(GeoPackError::TrailingBytes { remaining });
    }

    geom.set_srid(packed.srid());
    geom.set_bbox(bbox);
    debug!("packed: deserialized {:?} from {} bytes", geom.kind(), buf.len());
    Ok(geom)
}

fn read_kind(reader: &mut ByteReader) -> Result<GeometryType> {
    let word = reader.read_u32()?;
    u8::try_from(word)
        .ok()
        .and_then(|byte| GeometryType::try_from(byte).ok())
        .ok_or_else(|| GeoPackError::InvalidType(format!("unknown kind word {word}")))
}

fn read_payload(
    reader: &mut ByteReader,
    dim: Dimension,
    expected: Option<GeometryType>,
) -> Result<Geometry> {
    let kind = read_kind(reader)?;
    if let Some(member) = expected {
        if kind != member {
            return Err(GeoPackError::InvalidType(format!(
                "{} child where a {} was required",
                kind.name(),
                member.name()
            )));
        }
    }

    match kind {
        GeometryType::Point => {
            let npoints = reader.read_u32()?;
            if npoints > 1 {
                return Err(GeoPackError::InvalidType(format!(
                    "point payload with {npoints} tuples"
                )));
            }
            let coords = read_coords(reader, npoints as usize, dim)?;
            Ok(Geometry::Point(Point::new(coords)?))
        }
        GeometryType::LineString => {
            let npoints = reader.read_u32()?;
            let coords = read_coords(reader, npoints as usize, dim)?;
            Ok(Geometry::LineString(LineString::new(coords)))
        }
        GeometryType::Polygon => {
            let nrings = reader.read_u32()? as usize;
            reader.expect(nrings.saturating_mul(4))?;
            let mut counts = Vec::with_capacity(nrings);
            for _ in 0..nrings {
                counts.push(reader.read_u32()? as usize);
            }
            if nrings % 2 == 1 {
                reader.skip(4)?;
            }
            let mut rings = Vec::with_capacity(nrings);
            for npoints in counts {
                rings.push(read_coords(reader, npoints, dim)?);
            }
            Ok(Geometry::Polygon(Polygon::new(dim, rings)?))
        }
        _ => {
            let ngeoms = reader.read_u32()?;
            let member = kind.member_type();
            let mut geoms = Vec::new();
            for _ in 0..ngeoms {
                geoms.push(read_payload(reader, dim, member)?);
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
