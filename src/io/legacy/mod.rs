//! The legacy variable-length serialization format.
//!
//! Layout per geometry, in host byte order:
//!
//! ```text
//! [1 byte type descriptor]
//! [optional bbox: xmin,ymin,xmax,ymax as f32, iff the bbox flag is set]
//! [optional SRID: i32, iff the SRID flag is set]
//! payload:
//!   Point:      one tuple (2–4 f64, per the Z/M flags)
//!   LineString: u32 count, count tuples
//!   Polygon:    u32 ring count, then per ring: u32 count, count tuples
//!   Collection: u32 child count, then per child: type byte + payload
//! ```
//!
//! Collection children never carry SRID or bbox flags and share the wrapper's
//! Z/M flags; the decoder rejects buffers that violate either rule. An empty
//! point has no representation in this layout and serializes as an empty
//! `GEOMETRYCOLLECTION` carrying the point's Z/M flags and SRID.

mod inspect;
mod reader;
mod size;
mod writer;

pub use inspect::{count_vertices, serialized_length, Inspector};
pub use reader::deserialize;
pub use size::serialized_size;
pub use writer::serialize;
