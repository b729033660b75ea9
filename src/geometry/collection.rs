use crate::bbox::BoundingBox;
use crate::error::{GeoPackError, Result};
use crate::geometry::Geometry;
use crate::types::{Dimension, GeometryType};

/// An ordered list of child geometries: homogeneous for the Multi* kinds,
/// heterogeneous for `GeometryCollection`.
///
/// Children never carry their own SRID or bbox; the wrapper's are
/// authoritative, and any present on the inputs are discarded.
#[derive(Clone, Debug, PartialEq)]
pub struct Collection {
    pub(crate) kind: GeometryType,
    pub(crate) srid: Option<i32>,
    pub(crate) bbox: Option<BoundingBox>,
    pub(crate) dim: Dimension,
    pub(crate) geoms: Vec<Geometry>,
}

impl Collection {
    /// Take ownership of the children.
    ///
    /// `kind` must be a collection kind. For the Multi* kinds every child's
    /// kind must be the matching member kind; for any collection kind every
    /// child's dimensionality must equal `dim`.
    pub fn new(kind: GeometryType, dim: Dimension, geoms: Vec<Geometry>) -> Result<Self> {
        if !kind.is_collection() {
            return Err(GeoPackError::InvalidType(format!(
                "{} is not a collection kind",
                kind.name()
            )));
        }
        for (i, geom) in geoms.iter().enumerate() {
            if let Some(member) = kind.member_type() {
                if geom.kind() != member {
                    return Err(GeoPackError::InvalidType(format!(
                        "child {} of a {} is a {}",
                        i,
                        kind.name(),
                        geom.kind().name()
                    )));
                }
            }
            if geom.dim() != dim {
                return Err(GeoPackError::DimensionMismatch(format!(
                    "child {} is {:?} in a {:?} collection",
                    i,
                    geom.dim(),
                    dim
                )));
            }
        }
        let mut geoms = geoms;
        for geom in &mut geoms {
            geom.set_srid(None);
            geom.drop_bbox();
        }
        Ok(Collection {
            kind,
            srid: None,
            bbox: None,
            dim,
            geoms,
        })
    }

    pub fn empty(kind: GeometryType, dim: Dimension) -> Result<Self> {
        Collection::new(kind, dim, Vec::new())
    }

    pub fn kind(&self) -> GeometryType {
        self.kind
    }

    pub fn dim(&self) -> Dimension {
        self.dim
    }

    pub fn geoms(&self) -> &[Geometry] {
        &self.geoms
    }

    pub fn num_geoms(&self) -> usize {
        self.geoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.geoms.iter().all(|g| g.is_empty())
    }

    /// Pull every sub-geometry of the given single kind out of this
    /// collection (descending into nested collections) into a new
    /// homogeneous Multi geometry. Everything else is dropped.
    pub fn extract(&self, target: GeometryType) -> Result<Geometry> {
        let multi = target.multi_type().ok_or_else(|| {
            GeoPackError::InvalidType(format!("cannot extract {} kind", target.name()))
        })?;

        let mut found = Vec::new();
        collect_matching(&self.geoms, target, &mut found);

        let mut out = Collection::new(multi, self.dim, found)?;
        out.srid = self.srid;
        Ok(Geometry::Collection(out))
    }
}

fn collect_matching(geoms: &[Geometry], target: GeometryType, out: &mut Vec<Geometry>) {
    for geom in geoms {
        match geom {
            Geometry::Collection(c) => collect_matching(&c.geoms, target, out),
            leaf if leaf.kind() == target => out.push(leaf.clone()),
            _ => {}
        }
    }
}
