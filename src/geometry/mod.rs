//! The in-memory geometry value model.
//!
//! A tagged tree of owned values: [`Point`], [`LineString`], [`Polygon`] and
//! [`Collection`] (the latter covering the homogeneous Multi* kinds and the
//! heterogeneous `GeometryCollection`). Every node owns its child data;
//! ownership is strictly tree-shaped, so dropping a value releases exactly
//! the storage it owns.

mod collection;
mod linestring;
mod point;
mod polygon;

pub use collection::Collection;
pub use linestring::LineString;
pub use point::Point;
pub use polygon::Polygon;
pub use polygon::MIN_RING_POINTS;

use crate::bbox::{BoundingBox, Extent};
use crate::error::Result;
use crate::types::{Dimension, GeometryType};

/// Any geometry value.
#[derive(Clone, Debug, PartialEq)]
pub enum Geometry {
    Point(Point),
    LineString(LineString),
    Polygon(Polygon),
    Collection(Collection),
}

impl Geometry {
    pub fn kind(&self) -> GeometryType {
        match self {
            Geometry::Point(_) => GeometryType::Point,
            Geometry::LineString(_) => GeometryType::LineString,
            Geometry::Polygon(_) => GeometryType::Polygon,
            Geometry::Collection(c) => c.kind,
        }
    }

    pub fn dim(&self) -> Dimension {
        match self {
            Geometry::Point(g) => g.dim(),
            Geometry::LineString(g) => g.dim(),
            Geometry::Polygon(g) => g.dim(),
            Geometry::Collection(g) => g.dim,
        }
    }

    pub fn has_z(&self) -> bool {
        self.dim().has_z()
    }

    pub fn has_m(&self) -> bool {
        self.dim().has_m()
    }

    pub fn srid(&self) -> Option<i32> {
        match self {
            Geometry::Point(g) => g.srid,
            Geometry::LineString(g) => g.srid,
            Geometry::Polygon(g) => g.srid,
            Geometry::Collection(g) => g.srid,
        }
    }

    pub fn set_srid(&mut self, srid: Option<i32>) {
        match self {
            Geometry::Point(g) => g.srid = srid,
            Geometry::LineString(g) => g.srid = srid,
            Geometry::Polygon(g) => g.srid = srid,
            Geometry::Collection(g) => g.srid = srid,
        }
    }

    /// The cached bounding box, if one is attached. An absent box means the
    /// extent must be recomputed, never that the geometry is empty.
    pub fn bbox(&self) -> Option<BoundingBox> {
        match self {
            Geometry::Point(g) => g.bbox,
            Geometry::LineString(g) => g.bbox,
            Geometry::Polygon(g) => g.bbox,
            Geometry::Collection(g) => g.bbox,
        }
    }

    pub(crate) fn set_bbox(&mut self, bbox: Option<BoundingBox>) {
        match self {
            Geometry::Point(g) => g.bbox = bbox,
            Geometry::LineString(g) => g.bbox = bbox,
            Geometry::Polygon(g) => g.bbox = bbox,
            Geometry::Collection(g) => g.bbox = bbox,
        }
    }

    /// Recompute the 2D bounding box from the points. Never trusts a cached
    /// box. `None` for an empty geometry.
    pub fn compute_bbox(&self) -> Option<BoundingBox> {
        let mut extent = Extent::new();
        self.extend_extent(&mut extent);
        extent.is_set().then(|| extent.into())
    }

    /// Attach a freshly computed bounding box.
    pub fn add_bbox(&mut self) {
        let bbox = self.compute_bbox();
        self.set_bbox(bbox);
    }

    pub fn drop_bbox(&mut self) {
        self.set_bbox(None);
    }

    pub(crate) fn extend_extent(&self, extent: &mut Extent) {
        match self {
            Geometry::Point(g) => extent.update_from(&g.coords),
            Geometry::LineString(g) => extent.update_from(&g.points),
            Geometry::Polygon(g) => {
                for ring in &g.rings {
                    extent.update_from(ring);
                }
            }
            Geometry::Collection(g) => {
                for child in &g.geoms {
                    child.extend_extent(extent);
                }
            }
        }
    }

    /// True iff no reachable point array holds a tuple.
    pub fn is_empty(&self) -> bool {
        match self {
            Geometry::Point(g) => g.is_empty(),
            Geometry::LineString(g) => g.is_empty(),
            Geometry::Polygon(g) => g.is_empty(),
            Geometry::Collection(g) => g.is_empty(),
        }
    }

    /// Total tuple count over every reachable point array. Additive over
    /// collections.
    pub fn count_vertices(&self) -> usize {
        match self {
            Geometry::Point(g) => g.coords.len(),
            Geometry::LineString(g) => g.points.len(),
            Geometry::Polygon(g) => g.num_points(),
            Geometry::Collection(g) => g.geoms.iter().map(|c| c.count_vertices()).sum(),
        }
    }

    /// Total ring count over every reachable polygon.
    pub fn num_rings(&self) -> usize {
        match self {
            Geometry::Polygon(g) => g.num_rings(),
            Geometry::Collection(g) => g.geoms.iter().map(|c| c.num_rings()).sum(),
            _ => 0,
        }
    }

    /// The 2D envelope as a 5-point polygon, `None` for an empty geometry.
    pub fn envelope(&self) -> Option<Geometry> {
        let bbox = self.compute_bbox()?;
        let (xmin, ymin) = (bbox.xmin as f64, bbox.ymin as f64);
        let (xmax, ymax) = (bbox.xmax as f64, bbox.ymax as f64);
        let ring = crate::coord::PointArray::from_coords(
            Dimension::XY,
            vec![
                xmin, ymin, xmin, ymax, xmax, ymax, xmax, ymin, xmin, ymin,
            ],
        )
        .unwrap();
        let mut poly = Polygon::new(Dimension::XY, vec![ring]).unwrap();
        poly.srid = self.srid();
        Some(Geometry::Polygon(poly))
    }

    /// Wrap a single geometry in its Multi kind; collections pass through
    /// unchanged.
    pub fn force_multi(self) -> Geometry {
        match self {
            Geometry::Collection(c) => Geometry::Collection(c),
            leaf => {
                // every single kind has a multi counterpart
                let kind = leaf.kind().multi_type().unwrap();
                wrap(kind, leaf)
            }
        }
    }

    /// Re-tag a Multi as a heterogeneous collection, or wrap a single
    /// geometry in one.
    pub fn force_collection(self) -> Geometry {
        match self {
            Geometry::Collection(mut c) => {
                c.kind = GeometryType::GeometryCollection;
                Geometry::Collection(c)
            }
            leaf => wrap(GeometryType::GeometryCollection, leaf),
        }
    }

    /// Pull every sub-geometry of the given single kind into a homogeneous
    /// Multi geometry, dropping everything else.
    pub fn extract(&self, target: GeometryType) -> Result<Geometry> {
        match self {
            Geometry::Collection(c) => c.extract(target),
            leaf => {
                let geoms = if leaf.kind() == target {
                    vec![leaf.clone()]
                } else {
                    Vec::new()
                };
                let mut col = Collection::new(
                    target.multi_type().ok_or_else(|| {
                        crate::error::GeoPackError::InvalidType(format!(
                            "cannot extract {} kind",
                            target.name()
                        ))
                    })?,
                    leaf.dim(),
                    geoms,
                )?;
                col.srid = leaf.srid();
                Ok(Geometry::Collection(col))
            }
        }
    }

    pub fn as_point(&self) -> Option<&Point> {
        match self {
            Geometry::Point(g) => Some(g),
            _ => None,
        }
    }

    pub fn as_line_string(&self) -> Option<&LineString> {
        match self {
            Geometry::LineString(g) => Some(g),
            _ => None,
        }
    }

    pub fn as_polygon(&self) -> Option<&Polygon> {
        match self {
            Geometry::Polygon(g) => Some(g),
            _ => None,
        }
    }

    pub fn as_collection(&self) -> Option<&Collection> {
        match self {
            Geometry::Collection(g) => Some(g),
            _ => None,
        }
    }
}

fn wrap(kind: GeometryType, leaf: Geometry) -> Geometry {
    let srid = leaf.srid();
    let dim = leaf.dim();
    let mut child = leaf;
    child.set_srid(None);
    child.drop_bbox();
    Geometry::Collection(Collection {
        kind,
        srid,
        bbox: None,
        dim,
        geoms: vec![child],
    })
}

impl From<Point> for Geometry {
    fn from(value: Point) -> Self {
        Geometry::Point(value)
    }
}

impl From<LineString> for Geometry {
    fn from(value: LineString) -> Self {
        Geometry::LineString(value)
    }
}

impl From<Polygon> for Geometry {
    fn from(value: Polygon) -> Self {
        Geometry::Polygon(value)
    }
}

impl From<Collection> for Geometry {
    fn from(value: Collection) -> Self {
        Geometry::Collection(value)
    }
}
