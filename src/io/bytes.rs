//! Bounds-checked byte cursors.
//!
//! The only module that touches byte order. Both serialization formats use
//! the host's native order; buffers are not portable across architectures
//! with a different one.

use byteorder::{ByteOrder, NativeEndian};

use crate::error::{GeoPackError, Result};

/// Read cursor over a borrowed buffer. Every advance is bounds-checked and
/// fails with [`GeoPackError::TruncatedBuffer`] instead of reading past the
/// end.
pub(crate) struct ByteReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        ByteReader { buf, pos: 0 }
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    fn advance(&mut self, needed: usize) -> Result<&'a [u8]> {
        if needed > self.remaining() {
            return Err(GeoPackError::TruncatedBuffer {
                offset: self.pos,
                needed,
                len: self.buf.len(),
            });
        }
        let slice = &self.buf[self.pos..self.pos + needed];
        self.pos += needed;
        Ok(slice)
    }

    pub fn skip(&mut self, n: usize) -> Result<()> {
        self.advance(n).map(|_| ())
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.advance(1)?[0])
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        Ok(NativeEndian::read_u32(self.advance(4)?))
    }

    pub fn read_i32(&mut self) -> Result<i32> {
        Ok(NativeEndian::read_i32(self.advance(4)?))
    }

    pub fn read_f32(&mut self) -> Result<f32> {
        Ok(NativeEndian::read_f32(self.advance(4)?))
    }

    pub fn read_f64(&mut self) -> Result<f64> {
        Ok(NativeEndian::read_f64(self.advance(8)?))
    }

    /// Check that `needed` more bytes exist without consuming them. Used
    /// before trusting a decoded element count.
    pub fn expect(&self, needed: usize) -> Result<()> {
        if needed > self.remaining() {
            return Err(GeoPackError::TruncatedBuffer {
                offset: self.pos,
                needed,
                len: self.buf.len(),
            });
        }
        Ok(())
    }
}

/// Append-only write cursor. Writes into pre-reserved storage and never
/// fails; the caller compares the final length against the precomputed size.
pub(crate) struct ByteWriter {
    buf: Vec<u8>,
}

impl ByteWriter {
    pub fn with_capacity(capacity: usize) -> Self {
        ByteWriter {
            buf: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn write_u8(&mut self, value: u8) {
        self.buf.push(value);
    }

    pub fn write_u32(&mut self, value: u32) {
        let mut scratch = [0u8; 4];
        NativeEndian::write_u32(&mut scratch, value);
        self.buf.extend_from_slice(&scratch);
    }

    pub fn write_i32(&mut self, value: i32) {
        let mut scratch = [0u8; 4];
        NativeEndian::write_i32(&mut scratch, value);
        self.buf.extend_from_slice(&scratch);
    }

    pub fn write_f32(&mut self, value: f32) {
        let mut scratch = [0u8; 4];
        NativeEndian::write_f32(&mut scratch, value);
        self.buf.extend_from_slice(&scratch);
    }

    pub fn write_f64(&mut self, value: f64) {
        let mut scratch = [0u8; 8];
        NativeEndian::write_f64(&mut scratch, value);
        self.buf.extend_from_slice(&scratch);
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.buf
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn round_trip_scalars() {
        let mut w = ByteWriter::with_capacity(21);
        w.write_u8(0x7F);
        w.write_u32(123_456);
        w.write_i32(-42);
        w.write_f32(1.5);
        w.write_f64(-0.25);
        let buf = w.into_inner();
        assert_eq!(buf.len(), 21);

        let mut r = ByteReader::new(&buf);
        assert_eq!(r.read_u8().unwrap(), 0x7F);
        assert_eq!(r.read_u32().unwrap(), 123_456);
        assert_eq!(r.read_i32().unwrap(), -42);
        assert_eq!(r.read_f32().unwrap(), 1.5);
        assert_eq!(r.read_f64().unwrap(), -0.25);
        assert_eq!(r.remaining(), 0);
    }

    #[test]
    fn truncation_is_detected() {
        let buf = [0u8; 3];
        let mut r = ByteReader::new(&buf);
        assert!(matches!(
            r.read_u32(),
            Err(GeoPackError::TruncatedBuffer {
                offset: 0,
                needed: 4,
                len: 3
            })
        ));
        r.read_u8().unwrap();
        assert!(r.expect(2).is_ok());
        assert!(r.expect(3).is_err());
        assert!(r.skip(5).is_err());
        assert_eq!(r.pos(), 1);
    }
}
