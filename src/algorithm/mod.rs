//! Geometric predicates and representation-preserving transforms.
//!
//! Every operation here works directly over [`PointArray`](crate::PointArray)
//! buffers and the value model by recursive descent; nothing reads or writes
//! the serialized forms.

mod area;
mod collect;
mod contains;
mod distance;
mod force_dim;
mod length;
mod reverse;
mod segmentize;
mod simplify;
mod translate;
mod winding;

pub use area::{Area, Perimeter};
pub use collect::collect;
pub use contains::{point_in_circle, point_in_polygon, point_in_ring};
pub use distance::{distance_pt_pt, distance_pt_seg, distance_seg_seg, EuclideanDistance};
pub use force_dim::ForceDims;
pub use length::{Length, ptarray_length, ptarray_length_2d};
pub use reverse::Reverse;
pub use segmentize::{segmentize_ptarray, Segmentize};
pub use simplify::Simplify;
pub use translate::Translate;
pub use winding::ForceRhr;
