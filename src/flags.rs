//! Packed single-byte descriptors used by the two serialization formats.
//!
//! The legacy format leads every geometry with a [`TypeDescriptor`]: kind in
//! the low nibble, then Z, M, SRID-present and bbox-present bits. The
//! fixed-header format carries kind separately and uses [`PackedFlags`]: Z, M,
//! bbox-present and geodetic bits, with the upper nibble reserved.

use crate::error::{GeoPackError, Result};
use crate::types::{Dimension, GeometryType};

const KIND_MASK: u8 = 0x0F;
const TYPE_Z: u8 = 0x10;
const TYPE_M: u8 = 0x20;
const TYPE_SRID: u8 = 0x40;
const TYPE_BBOX: u8 = 0x80;

/// The legacy format's packed type byte.
///
/// All accessors are constant-time mask operations. Round-trip law:
/// decoding the fields of `TypeDescriptor::new(k, z, m, s, b)` yields exactly
/// `(k, z, m, s, b)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypeDescriptor(u8);

impl TypeDescriptor {
    pub fn new(
        kind: GeometryType,
        has_z: bool,
        has_m: bool,
        has_srid: bool,
        has_bbox: bool,
    ) -> Self {
        let mut byte = kind as u8;
        if has_z {
            byte |= TYPE_Z;
        }
        if has_m {
            byte |= TYPE_M;
        }
        if has_srid {
            byte |= TYPE_SRID;
        }
        if has_bbox {
            byte |= TYPE_BBOX;
        }
        TypeDescriptor(byte)
    }

    /// The geometry kind in the low nibble. Fails on a nibble outside the
    /// known enumeration.
    pub fn kind(self) -> Result<GeometryType> {
        GeometryType::try_from(self.0 & KIND_MASK).map_err(|_| {
            GeoPackError::InvalidType(format!(
                "unknown kind {} in type byte {:#04x}",
                self.0 & KIND_MASK,
                self.0
            ))
        })
    }

    pub fn has_z(self) -> bool {
        self.0 & TYPE_Z != 0
    }

    pub fn has_m(self) -> bool {
        self.0 & TYPE_M != 0
    }

    pub fn has_srid(self) -> bool {
        self.0 & TYPE_SRID != 0
    }

    pub fn has_bbox(self) -> bool {
        self.0 & TYPE_BBOX != 0
    }

    /// Tuple dimensionality implied by the Z/M bits alone.
    pub fn dimension(self) -> Dimension {
        Dimension::from_flags(self.has_z(), self.has_m())
    }

    pub fn byte(self) -> u8 {
        self.0
    }
}

impl From<u8> for TypeDescriptor {
    fn from(byte: u8) -> Self {
        TypeDescriptor(byte)
    }
}

const FLAG_Z: u8 = 0x01;
const FLAG_M: u8 = 0x02;
const FLAG_BBOX: u8 = 0x04;
const FLAG_GEODETIC: u8 = 0x08;

/// The fixed-header format's flags byte.
///
/// Four independent bits; setting one never disturbs the others or the
/// reserved upper nibble.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PackedFlags(u8);

impl PackedFlags {
    pub fn new(has_z: bool, has_m: bool, geodetic: bool) -> Self {
        let mut flags = PackedFlags(0);
        flags.set_z(has_z);
        flags.set_m(has_m);
        flags.set_geodetic(geodetic);
        flags
    }

    pub fn has_z(self) -> bool {
        self.0 & FLAG_Z != 0
    }

    pub fn has_m(self) -> bool {
        self.0 & FLAG_M != 0
    }

    pub fn has_bbox(self) -> bool {
        self.0 & FLAG_BBOX != 0
    }

    pub fn is_geodetic(self) -> bool {
        self.0 & FLAG_GEODETIC != 0
    }

    pub fn set_z(&mut self, value: bool) {
        self.set(FLAG_Z, value);
    }

    pub fn set_m(&mut self, value: bool) {
        self.set(FLAG_M, value);
    }

    pub fn set_bbox(&mut self, value: bool) {
        self.set(FLAG_BBOX, value);
    }

    pub fn set_geodetic(&mut self, value: bool) {
        self.set(FLAG_GEODETIC, value);
    }

    fn set(&mut self, mask: u8, value: bool) {
        if value {
            self.0 |= mask;
        } else {
            self.0 &= !mask;
        }
    }

    pub fn dimension(self) -> Dimension {
        Dimension::from_flags(self.has_z(), self.has_m())
    }

    /// Serialized width of the bounding box these flags call for.
    ///
    /// Zero without the bbox bit. With it: min/max `f32` pairs for x and y,
    /// plus one pair per Z/M bit; a geodetic box is always xyz.
    pub fn gbox_size(self) -> usize {
        if !self.has_bbox() {
            return 0;
        }
        if self.is_geodetic() {
            return 6 * 4;
        }
        let mut ndims = 2;
        if self.has_z() {
            ndims += 1;
        }
        if self.has_m() {
            ndims += 1;
        }
        ndims * 2 * 4
    }

    pub fn byte(self) -> u8 {
        self.0
    }
}

impl From<u8> for PackedFlags {
    fn from(byte: u8) -> Self {
        PackedFlags(byte)
    }
}
