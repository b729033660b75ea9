//! Error taxonomy shared by the codecs, the value model, and the algorithms.
//!
//! Every failure here is unrecoverable at the point of detection: a malformed
//! buffer or an inconsistent tree fails the whole call, with no partial
//! results.

use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug)]
pub enum GeoPackError {
    /// A decode cursor would have advanced past the end of the supplied
    /// buffer.
    #[error("buffer truncated: need {needed} bytes at offset {offset}, buffer holds {len}")]
    TruncatedBuffer {
        offset: usize,
        needed: usize,
        len: usize,
    },

    /// Unknown geometry kind, or a kind/flag combination forbidden at the
    /// position it was found (e.g. a collection child carrying SRID or bbox
    /// flags).
    #[error("invalid geometry type: {0}")]
    InvalidType(String),

    /// Coordinate tuple width disagrees with the declared dimensionality, or
    /// a parent's Z/M flags disagree with its children's.
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(String),

    /// The writer produced a different number of bytes than the size
    /// calculator promised. Signals an internal bug, never malformed input.
    #[error("serialized size mismatch: computed {computed}, wrote {written}")]
    SizeMismatch { computed: usize, written: usize },

    /// Point or ring access beyond bounds.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// Binary operation over two geometries with different SRIDs. Surfaced to
    /// the caller; no implicit reprojection.
    #[error("operation on mixed SRID geometries ({left} != {right})")]
    SridMismatch { left: i32, right: i32 },

    /// A polygon ring whose first and last points are not coordinate-equal.
    #[error("ring {ring} is not closed")]
    UnclosedRing { ring: usize },

    /// The buffer held more bytes than the geometry it encodes.
    #[error("{remaining} trailing bytes after geometry")]
    TrailingBytes { remaining: usize },

    /// Invalid combination of inputs to a collection-building operation.
    #[error("cannot collect: {0}")]
    Collect(String),
}

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, GeoPackError>;
