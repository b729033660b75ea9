use crate::error::{GeoPackError, Result};
use crate::flags::TypeDescriptor;
use crate::io::bytes::ByteReader;
use crate::types::{Dimension, GeometryType};

/// Read-only cursor over a serialized geometry.
///
/// Yields each child geometry's byte extent without materializing the value
/// tree: a collection yields one slice per child, a simple geometry yields
/// its own buffer. Every slice starts at a type byte and is independently
/// decodable.
pub struct Inspector<'a> {
    descriptor: TypeDescriptor,
    srid: Option<i32>,
    children: Vec<&'a [u8]>,
}

impl<'a> Inspector<'a> {
    pub fn new(buf: &'a [u8]) -> Result<Self> {
        let mut reader = ByteReader::new(buf);
        let td = TypeDescriptor::from(reader.read_u8()?);
        let kind = td.kind()?;
        let dim = td.dimension();

        if td.has_bbox() {
            reader.skip(4 * 4)?;
        }
        let srid = if td.has_srid() {
            Some(reader.read_i32()?)
        } else {
            None
        };

        let children = if kind.is_collection() {
            let ngeoms = reader.read_u32()?;
            let mut children = Vec::new();
            for _ in 0..ngeoms {
                let start = reader.pos();
                scan_geometry(&mut reader, Some((kind, dim)), &mut 0)?;
                children.push(&buf[start..reader.pos()]);
            }
            children
        } else {
            let mut scratch = ByteReader::new(buf);
            scan_geometry(&mut scratch, None, &mut 0)?;
            vec![&buf[..scratch.pos()]]
        };

        Ok(Inspector {
            descriptor: td,
            srid,
            children,
        })
    }

    pub fn kind(&self) -> GeometryType {
        // validated during construction
        self.descriptor.kind().unwrap()
    }

    pub fn dimension(&self) -> Dimension {
        self.descriptor.dimension()
    }

    pub fn srid(&self) -> Option<i32> {
        self.srid
    }

    pub fn num_children(&self) -> usize {
        self.children.len()
    }

    pub fn child(&self, index: usize) -> Result<&'a [u8]> {
        self.children
            .get(index)
            .copied()
            .ok_or(GeoPackError::IndexOutOfRange {
                index,
                len: self.children.len(),
            })
    }

    pub fn children(&self) -> impl Iterator<Item = &'a [u8]> + '_ {
        self.children.iter().copied()
    }
}

/// Total vertex count of a serialized geometry, without decoding it.
pub fn count_vertices(buf: &[u8]) -> Result<usize> {
    let mut reader = ByteReader::new(buf);
    let mut vertices = 0;
    scan_geometry(&mut reader, None, &mut vertices)?;
    Ok(vertices)
}

/// Byte length of the geometry starting at the beginning of `buf`. Trailing
/// bytes are not an error here; the caller learns where the geometry ends.
pub fn serialized_length(buf: &[u8]) -> Result<usize> {
    let mut reader = ByteReader::new(buf);
    scan_geometry(&mut reader, None, &mut 0)?;
    Ok(reader.pos())
}

/// Advance the cursor over one serialized geometry, validating structure and
/// bounds but never allocating coordinate storage.
fn scan_geometry(
    reader: &mut ByteReader,
    parent: Option<(GeometryType, Dimension)>,
    vertices: &mut usize,
) -> Result<()> {
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
    let tuple = dim.size() * 8;

    if td.has_bbox() {
        reader.skip(4 * 4)?;
    }
    if td.has_srid() {
        reader.skip(4)?;
    }

    match kind {
        GeometryType::Point => {
            reader.skip(tuple)?;
            *vertices += 1;
        }
        GeometryType::LineString => {
            let npoints = reader.read_u32()? as usize;
            reader.skip(npoints.saturating_mul(tuple))?;
            *vertices += npoints;
        }
        GeometryType::Polygon => {
            let nrings = reader.read_u32()?;
            for _ in 0..nrings {
                let npoints = reader.read_u32()? as usize;
                reader.skip(npoints.saturating_mul(tuple))?;
                *vertices += npoints;
            }
        }
        _ => {
            let ngeoms = reader.read_u32()?;
            for _ in 0..ngeoms {
                scan_geometry(reader, Some((kind, dim)), vertices)?;
            }
        }
    }
    Ok(())
}
