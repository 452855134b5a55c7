//! Byte-level cursor over a borrowed buffer.
//!
//! This module provides the little-endian primitive reads used throughout the
//! container parser, wrapped in an explicit cursor so that error paths can
//! always report how far into the buffer a failure occurred.

use zerocopy::{LE, U16, U32};

/// Binary parsing error type
///
/// Every multi-byte decode is bounds-checked before the bytes are touched,
/// so running out of data is the only way a cursor read can fail.
#[derive(Debug, Clone)]
pub enum BinaryError {
    /// Not enough data to read the requested field
    InsufficientData { expected: usize, available: usize },
}

impl std::fmt::Display for BinaryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BinaryError::InsufficientData {
                expected,
                available,
            } => {
                write!(
                    f,
                    "Insufficient data: expected {}, got {}",
                    expected, available
                )
            },
        }
    }
}

impl std::error::Error for BinaryError {}

/// Result type for binary operations
pub type BinaryResult<T> = Result<T, BinaryError>;

/// A forward-only cursor over a byte slice.
///
/// All multi-byte reads are little-endian, matching the SWF container
/// encoding. The cursor tracks its absolute position so callers can attach
/// "bytes consumed so far" to any error they surface.
#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    /// Create a cursor positioned at the start of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Create a cursor positioned at `pos`, clamped to the end of `data`.
    pub fn with_position(data: &'a [u8], pos: usize) -> Self {
        Self {
            data,
            pos: pos.min(data.len()),
        }
    }

    /// Absolute offset of the next unread byte.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Number of unread bytes.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Whether the cursor has consumed the entire buffer.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pos == self.data.len()
    }

    #[inline]
    fn need(&self, count: usize) -> BinaryResult<()> {
        if self.remaining() < count {
            return Err(BinaryError::InsufficientData {
                expected: count,
                available: self.remaining(),
            });
        }
        Ok(())
    }

    /// Read a single byte.
    #[inline]
    pub fn read_u8(&mut self) -> BinaryResult<u8> {
        self.need(1)?;
        let value = self.data[self.pos];
        self.pos += 1;
        Ok(value)
    }

    /// Read a little-endian u16.
    #[inline]
    pub fn read_u16_le(&mut self) -> BinaryResult<u16> {
        self.need(2)?;
        let value = U16::<LE>::from_bytes([self.data[self.pos], self.data[self.pos + 1]]).get();
        self.pos += 2;
        Ok(value)
    }

    /// Read a little-endian u32.
    #[inline]
    pub fn read_u32_le(&mut self) -> BinaryResult<u32> {
        self.need(4)?;
        let value = U32::<LE>::from_bytes([
            self.data[self.pos],
            self.data[self.pos + 1],
            self.data[self.pos + 2],
            self.data[self.pos + 3],
        ])
        .get();
        self.pos += 4;
        Ok(value)
    }

    /// Borrow the next `count` bytes and advance past them.
    pub fn take(&mut self, count: usize) -> BinaryResult<&'a [u8]> {
        self.need(count)?;
        let slice = &self.data[self.pos..self.pos + count];
        self.pos += count;
        Ok(slice)
    }

    /// Advance past `count` bytes without inspecting them.
    pub fn skip(&mut self, count: usize) -> BinaryResult<()> {
        self.need(count)?;
        self.pos += count;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_u16_le() {
        let data = [0x34, 0x12, 0x78, 0x56];
        let mut cursor = ByteCursor::new(&data);
        assert!(cursor.read_u16_le().is_ok_and(|v| v == 0x1234));
        assert!(cursor.read_u16_le().is_ok_and(|v| v == 0x5678));
        assert!(cursor.read_u16_le().is_err());
    }

    #[test]
    fn test_read_u32_le() {
        let data = [0x78, 0x56, 0x34, 0x12, 0xFF];
        let mut cursor = ByteCursor::new(&data);
        assert!(cursor.read_u32_le().is_ok_and(|v| v == 0x12345678));
        assert_eq!(cursor.position(), 4);
        assert!(cursor.read_u32_le().is_err());
        // A failed read must not move the cursor
        assert_eq!(cursor.position(), 4);
    }

    #[test]
    fn test_take_and_skip() {
        let data = [1, 2, 3, 4, 5];
        let mut cursor = ByteCursor::new(&data);
        assert_eq!(cursor.take(2).unwrap(), &[1, 2]);
        cursor.skip(2).unwrap();
        assert_eq!(cursor.remaining(), 1);
        assert!(cursor.skip(2).is_err());
        assert!(!cursor.is_empty());
        cursor.skip(1).unwrap();
        assert!(cursor.is_empty());
    }

    #[test]
    fn test_underflow_reports_counts() {
        let data = [0xAA];
        let mut cursor = ByteCursor::new(&data);
        match cursor.read_u32_le() {
            Err(BinaryError::InsufficientData {
                expected,
                available,
            }) => {
                assert_eq!(expected, 4);
                assert_eq!(available, 1);
            },
            other => panic!("expected underflow, got {:?}", other),
        }
    }

    #[test]
    fn test_with_position() {
        let data = [1, 2, 3, 4];
        let mut cursor = ByteCursor::with_position(&data, 2);
        assert_eq!(cursor.position(), 2);
        assert_eq!(cursor.read_u16_le().unwrap(), 0x0403);
        // A position past the end clamps to an exhausted cursor
        let cursor = ByteCursor::with_position(&data, 10);
        assert_eq!(cursor.position(), 4);
        assert!(cursor.is_empty());
    }
}
