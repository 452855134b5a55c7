//! The flat tag-record stream that follows the movie header.
//!
//! Each record is self-delimited: a little-endian u16 packs a 10-bit code
//! over a 6-bit inline length, and the inline value 0x3F escapes to a
//! separate u32 length for records longer than 62 bytes. Payloads are sliced,
//! never interpreted.

use bytes::Bytes;

use super::registry::{self, TAG_END};
use crate::common::{BinaryResult, ByteCursor};

/// Inline length value signaling that the real length follows as a u32.
const EXTENDED_LENGTH: u16 = 0x3F;

/// One record from the tag stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    /// Numeric tag code (0–1023)
    pub code: u16,
    /// Declared payload length in bytes
    pub length: u32,
    /// Offset of the record header within the decompressed body
    pub offset: usize,
    /// The payload, exactly `length` bytes, uninterpreted
    pub payload: Bytes,
}

impl Tag {
    /// Symbolic name for the tag code, or `None` for codes the registry does
    /// not know.
    pub fn name(&self) -> Option<&'static str> {
        registry::tag_name(self.code)
    }

    /// Whether this is the `End` record that logically terminates the stream.
    pub fn is_end(&self) -> bool {
        self.code == TAG_END
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (code {}, {} bytes)",
            self.name().unwrap_or("Unknown"),
            self.code,
            self.length
        )
    }
}

/// A non-fatal condition observed while parsing, reported on the result
/// instead of aborting it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Anomaly {
    /// A tag code absent from the registry; the tag itself is kept
    UnknownTagCode { index: usize, code: u16 },
    /// Records continue past the `End` tag at `end_index`
    TagsAfterEnd { end_index: usize },
    /// The envelope's declared file length disagrees with the actual
    /// decompressed size
    DeclaredLengthMismatch { declared: u32, actual: u64 },
}

impl std::fmt::Display for Anomaly {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Anomaly::UnknownTagCode { index, code } => {
                write!(f, "tag {} has unknown code {}", index, code)
            },
            Anomaly::TagsAfterEnd { end_index } => {
                write!(f, "tags continue after the End tag at index {}", end_index)
            },
            Anomaly::DeclaredLengthMismatch { declared, actual } => {
                write!(
                    f,
                    "declared file length {} does not match actual {}",
                    declared, actual
                )
            },
        }
    }
}

enum State {
    Scanning,
    Done,
}

/// Step-by-step reader over the tag stream.
///
/// The stream ends physically at end-of-buffer; the logical `End` tag does
/// not stop the reader, so trailing records can still be observed by the
/// caller.
pub struct TagReader<'a> {
    body: &'a Bytes,
    cursor: ByteCursor<'a>,
    state: State,
}

impl<'a> TagReader<'a> {
    /// Start reading tag records at `offset` within the decompressed body.
    ///
    /// An offset at or past the end of the body yields an already-exhausted
    /// reader, not an error.
    pub fn new(body: &'a Bytes, offset: usize) -> Self {
        Self {
            body,
            cursor: ByteCursor::with_position(body, offset),
            state: State::Scanning,
        }
    }

    /// Decode the next record, or `Ok(None)` once the buffer is exhausted.
    ///
    /// A record header or payload extending past the buffer is an error; the
    /// cursor is left at the failing record's header for diagnostics.
    pub fn read_tag(&mut self) -> BinaryResult<Option<Tag>> {
        if matches!(self.state, State::Done) {
            return Ok(None);
        }
        if self.cursor.is_empty() {
            self.state = State::Done;
            return Ok(None);
        }

        let offset = self.cursor.position();
        let result = self.decode_record(offset);
        if result.is_err() {
            // Rewind so callers see where the failing record started.
            self.cursor = ByteCursor::with_position(self.body, offset);
            self.state = State::Done;
        }
        result
    }

    fn decode_record(&mut self, offset: usize) -> BinaryResult<Option<Tag>> {
        let packed = self.cursor.read_u16_le()?;
        let code = packed >> 6;
        let mut length = u32::from(packed & EXTENDED_LENGTH);
        if length == u32::from(EXTENDED_LENGTH) {
            length = self.cursor.read_u32_le()?;
        }

        let start = self.cursor.position();
        self.cursor.skip(length as usize)?;
        let payload = self.body.slice(start..start + length as usize);

        Ok(Some(Tag {
            code,
            length,
            offset,
            payload,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_all(body: &Bytes) -> Vec<Tag> {
        let mut reader = TagReader::new(body, 0);
        let mut tags = Vec::new();
        while let Some(tag) = reader.read_tag().unwrap() {
            tags.push(tag);
        }
        tags
    }

    #[test]
    fn test_short_form_header() {
        // SetBackgroundColor: (9 << 6) | 3 = 0x0243, LE bytes 0x43 0x02,
        // then 3 payload bytes.
        let body = Bytes::from_static(&[0x43, 0x02, 0xDE, 0xAD, 0xBF]);
        let mut reader = TagReader::new(&body, 0);
        let tag = reader.read_tag().unwrap().unwrap();
        assert_eq!(tag.code, 9);
        assert_eq!(tag.name(), Some("SetBackgroundColor"));
        assert_eq!(tag.length, 3);
        assert_eq!(&tag.payload[..], &[0xDE, 0xAD, 0xBF]);
        assert_eq!(tag.offset, 0);
        assert!(reader.read_tag().unwrap().is_none());
    }

    #[test]
    fn test_long_form_header() {
        // Inline length 0x3F escapes to a u32 length of 1000.
        let mut data = Vec::new();
        data.extend_from_slice(&((9u16 << 6) | 0x3F).to_le_bytes());
        data.extend_from_slice(&1000u32.to_le_bytes());
        data.extend_from_slice(&vec![0x55; 1000]);
        let body = Bytes::from(data);

        let mut reader = TagReader::new(&body, 0);
        let tag = reader.read_tag().unwrap().unwrap();
        assert_eq!(tag.code, 9);
        assert_eq!(tag.length, 1000);
        assert_eq!(tag.payload.len(), 1000);
        // 2 header bytes + 4 length bytes + payload, nothing left over
        assert!(reader.read_tag().unwrap().is_none());
    }

    #[test]
    fn test_long_form_of_short_length() {
        // The escape may legally encode lengths below 63 as well.
        let mut data = Vec::new();
        data.extend_from_slice(&((1u16 << 6) | 0x3F).to_le_bytes());
        data.extend_from_slice(&2u32.to_le_bytes());
        data.extend_from_slice(&[0xAA, 0xBB]);
        let body = Bytes::from(data);

        let tags = read_all(&body);
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].length, 2);
    }

    #[test]
    fn test_declared_length_past_buffer() {
        // Declares 10 payload bytes, provides 2.
        let body = Bytes::from_static(&[0x4A, 0x02, 0x01, 0x02]);
        let mut reader = TagReader::new(&body, 0);
        assert!(reader.read_tag().is_err());
        // The reader stays done after a failure
        assert!(reader.read_tag().unwrap().is_none());
    }

    #[test]
    fn test_truncated_header() {
        // A single stray byte cannot hold a record header.
        let body = Bytes::from_static(&[0x43]);
        let mut reader = TagReader::new(&body, 0);
        assert!(reader.read_tag().is_err());
    }

    #[test]
    fn test_zero_length_tags() {
        // ShowFrame (code 1) then End (code 0), both with empty payloads.
        let body = Bytes::from_static(&[0x40, 0x00, 0x00, 0x00]);
        let tags = read_all(&body);
        assert_eq!(tags.len(), 2);
        assert_eq!(tags[0].name(), Some("ShowFrame"));
        assert!(tags[1].is_end());
        assert!(tags[1].payload.is_empty());
    }

    #[test]
    fn test_unknown_code_is_not_fatal() {
        // Code 99 is absent from the registry; the record still decodes and
        // the following record is reached.
        let mut data = Vec::new();
        data.extend_from_slice(&((99u16 << 6) | 1).to_le_bytes());
        data.push(0x00);
        data.extend_from_slice(&0u16.to_le_bytes());
        let body = Bytes::from(data);

        let tags = read_all(&body);
        assert_eq!(tags.len(), 2);
        assert_eq!(tags[0].code, 99);
        assert_eq!(tags[0].name(), None);
        assert!(tags[1].is_end());
    }

    #[test]
    fn test_offset_past_body_is_exhausted() {
        let body = Bytes::from_static(&[0x40, 0x00]);
        let mut reader = TagReader::new(&body, 100);
        assert!(reader.read_tag().unwrap().is_none());
    }

    #[test]
    fn test_offsets_track_stream_position() {
        let body = Bytes::from_static(&[0x43, 0x02, 0x01, 0x02, 0x03, 0x40, 0x00]);
        let tags = read_all(&body);
        assert_eq!(tags[0].offset, 0);
        assert_eq!(tags[1].offset, 5);
    }
}
