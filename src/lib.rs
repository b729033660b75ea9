//! An in-memory model of vector geometries (points, lines, polygons and
//! their collections) plus two compact binary serialization formats, with
//! predicates and transforms that operate directly on the packed
//! representation by recursive descent.
//!
//! - [`io::legacy`]: the variable-length format: one packed type byte,
//!   optional bbox and SRID, raw coordinate payload, recursive collections.
//! - [`io::packed`]: the fixed-header format: an 8-byte preamble giving
//!   O(1) SRID/flag access, an optional float bbox, and an aligned payload.
//!
//! ```
//! use geopack::io::legacy;
//! use geopack::{Geometry, Point};
//!
//! let mut geom = Geometry::Point(Point::from_xy(0.0, 0.2));
//! geom.set_srid(Some(4326));
//!
//! let buf = legacy::serialize(&geom).unwrap();
//! assert_eq!(buf.len(), legacy::serialized_size(&geom));
//! assert_eq!(legacy::deserialize(&buf).unwrap(), geom);
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(not(test), deny(unused_crate_dependencies))]

pub mod algorithm;
pub mod bbox;
pub mod coord;
pub mod error;
pub mod flags;
pub mod geometry;
pub mod io;
pub mod log;
#[cfg(test)]
pub(crate) mod test;
pub mod types;

pub use bbox::BoundingBox;
pub use coord::PointArray;
pub use error::{GeoPackError, Result};
pub use flags::{PackedFlags, TypeDescriptor};
pub use geometry::{Collection, Geometry, LineString, Point, Polygon};
pub use types::{type_from_name, Dimension, GeometryType};
