//! Bounds-checked cursor over encoded bytes

use crate::error::{WireError, WireResult};
use crate::wire_string::WireString;

/// Cursor over an immutable byte slice
///
/// The cursor only moves forward and every read checks the remaining input
/// first, returning [`WireError::Truncated`] instead of reading out of bounds.
/// Nested decoders share one reader so each consumes exactly its own bytes.
#[derive(Debug, Clone)]
pub struct WireReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> WireReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Current cursor offset from the start of the input
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes left after the cursor
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Preallocation size for an array of `count` elements
    ///
    /// Capped at the remaining input so a corrupt count cannot force a huge
    /// allocation before the element reads fail.
    pub fn capacity_hint(&self, count: usize) -> usize {
        count.min(self.remaining())
    }

    /// Consume `len` raw bytes
    pub fn read_bytes(&mut self, len: usize) -> WireResult<&'a [u8]> {
        let remaining = self.remaining();
        if len > remaining {
            return Err(WireError::Truncated {
                offset: self.pos,
                needed: len,
                remaining,
            });
        }
        let start = self.pos;
        self.pos += len;
        Ok(&self.data[start..self.pos])
    }

    fn read_array<const N: usize>(&mut self) -> WireResult<[u8; N]> {
        let bytes = self.read_bytes(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        Ok(out)
    }

    pub fn read_u8(&mut self) -> WireResult<u8> {
        Ok(u8::from_le_bytes(self.read_array()?))
    }

    pub fn read_i8(&mut self) -> WireResult<i8> {
        Ok(i8::from_le_bytes(self.read_array()?))
    }

    pub fn read_u16(&mut self) -> WireResult<u16> {
        Ok(u16::from_le_bytes(self.read_array()?))
    }

    pub fn read_i16(&mut self) -> WireResult<i16> {
        Ok(i16::from_le_bytes(self.read_array()?))
    }

    pub fn read_u32(&mut self) -> WireResult<u32> {
        Ok(u32::from_le_bytes(self.read_array()?))
    }

    pub fn read_i32(&mut self) -> WireResult<i32> {
        Ok(i32::from_le_bytes(self.read_array()?))
    }

    pub fn read_u64(&mut self) -> WireResult<u64> {
        Ok(u64::from_le_bytes(self.read_array()?))
    }

    pub fn read_i64(&mut self) -> WireResult<i64> {
        Ok(i64::from_le_bytes(self.read_array()?))
    }

    pub fn read_f32(&mut self) -> WireResult<f32> {
        Ok(f32::from_le_bytes(self.read_array()?))
    }

    pub fn read_f64(&mut self) -> WireResult<f64> {
        Ok(f64::from_le_bytes(self.read_array()?))
    }

    /// Read a single byte as a bool (any non-zero byte is true)
    pub fn read_bool(&mut self) -> WireResult<bool> {
        Ok(self.read_u8()? != 0)
    }

    /// Read a 4-byte length or element-count prefix
    pub fn read_len(&mut self) -> WireResult<usize> {
        let len = self.read_u32()?;
        usize::try_from(len).map_err(|_| WireError::LengthOverflow { len: usize::MAX })
    }

    /// Read a length-prefixed string, keeping its bytes verbatim
    pub fn read_string(&mut self) -> WireResult<WireString> {
        let len = self.read_len()?;
        Ok(WireString::from(self.read_bytes(len)?))
    }

    /// Fail if any input is left after the cursor
    pub fn finish(&self) -> WireResult<()> {
        match self.remaining() {
            0 => Ok(()),
            count => Err(WireError::TrailingBytes { count }),
        }
    }
}
