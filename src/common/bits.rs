//! Sub-byte bit-field reads over a [`ByteCursor`].
//!
//! SWF packs some header fields MSB-first at widths that are not known until
//! parse time and that do not fall on byte boundaries. The reader pulls whole
//! bytes from the underlying cursor on demand and hands out `count`-bit
//! unsigned or sign-extended values; consecutive fields share partial bytes
//! until the caller explicitly realigns.

use super::binary::{BinaryResult, ByteCursor};

/// MSB-first bit reader borrowing a byte cursor.
///
/// Dropping the reader without calling [`BitReader::byte_align`] leaves the
/// cursor past any partially consumed byte, since bytes are only pulled from
/// the cursor whole.
pub struct BitReader<'a, 'c> {
    cursor: &'c mut ByteCursor<'a>,
    /// Byte currently being drained, valid in its low `bits_left` positions.
    current: u8,
    bits_left: u32,
}

impl<'a, 'c> BitReader<'a, 'c> {
    /// Start reading bit fields at the cursor's current byte.
    pub fn new(cursor: &'c mut ByteCursor<'a>) -> Self {
        Self {
            cursor,
            current: 0,
            bits_left: 0,
        }
    }

    /// Read `count` bits (0..=32) as an unsigned value.
    ///
    /// Consumes exactly `count` bits, crossing byte boundaries as needed.
    /// Fails if the underlying cursor runs out of bytes mid-field.
    pub fn read_ub(&mut self, count: u32) -> BinaryResult<u32> {
        debug_assert!(count <= 32, "bit field wider than 32 bits");
        let mut value = 0u32;
        for _ in 0..count {
            if self.bits_left == 0 {
                self.current = self.cursor.read_u8()?;
                self.bits_left = 8;
            }
            self.bits_left -= 1;
            value = (value << 1) | u32::from((self.current >> self.bits_left) & 1);
        }
        Ok(value)
    }

    /// Read `count` bits (0..=32) as a signed value.
    ///
    /// The field is two's complement: bit `count - 1` is the sign and is
    /// extended through the full i32 width. A zero-width field reads as 0.
    pub fn read_sb(&mut self, count: u32) -> BinaryResult<i32> {
        let raw = self.read_ub(count)?;
        if count == 0 || count == 32 {
            return Ok(raw as i32);
        }
        if raw & (1 << (count - 1)) != 0 {
            Ok((raw | (u32::MAX << count)) as i32)
        } else {
            Ok(raw as i32)
        }
    }

    /// Discard any partially consumed byte so the next cursor read is
    /// byte-aligned. A no-op when already aligned.
    pub fn byte_align(&mut self) {
        self.bits_left = 0;
    }
}
