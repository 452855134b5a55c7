//! The post-decompression header: stage rectangle, frame rate, frame count.

use crate::common::{BinaryResult, BitReader, ByteCursor};

/// A bit-packed rectangle: four signed twip coordinates sharing one
/// dynamically declared bit width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x_min: i32,
    pub x_max: i32,
    pub y_min: i32,
    pub y_max: i32,
}

impl std::fmt::Display for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Rect({}, {}, {}, {})",
            self.x_min, self.x_max, self.y_min, self.y_max
        )
    }
}

/// Stage dimensions and timeline counters from the movie header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageInfo {
    /// Stage bounds in twips
    pub frame_size: Rect,
    /// Frame rate as stored: 8.8 fixed point, undecoded
    pub frame_rate: u16,
    /// Total number of frames on the main timeline
    pub frame_count: u16,
}

impl StageInfo {
    /// The frame rate decoded from its 8.8 fixed-point representation.
    pub fn frames_per_second(&self) -> f32 {
        f32::from(self.frame_rate) / 256.0
    }
}

/// Read a bit-packed rectangle: a 5-bit unsigned field width, then four
/// signed fields at that width, then realign to the next byte boundary.
///
/// Total consumption is `5 + 4 * width` bits rounded up to a whole byte.
pub fn read_rect(cursor: &mut ByteCursor<'_>) -> BinaryResult<Rect> {
    let mut bits = BitReader::new(cursor);
    let width = bits.read_ub(5)?;
    let x_min = bits.read_sb(width)?;
    let x_max = bits.read_sb(width)?;
    let y_min = bits.read_sb(width)?;
    let y_max = bits.read_sb(width)?;
    bits.byte_align();
    Ok(Rect {
        x_min,
        x_max,
        y_min,
        y_max,
    })
}

/// Read the stage rectangle followed by the byte-aligned frame rate and
/// frame count fields.
pub fn read_stage_info(cursor: &mut ByteCursor<'_>) -> BinaryResult<StageInfo> {
    let frame_size = read_rect(cursor)?;
    let frame_rate = cursor.read_u16_le()?;
    let frame_count = cursor.read_u16_le()?;
    Ok(StageInfo {
        frame_size,
        frame_rate,
        frame_count,
    })
}
