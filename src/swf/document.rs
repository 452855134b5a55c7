//! Whole-file parse orchestration.
//!
//! A parse is a single top-down pass: envelope, decompression, stage info,
//! then the tag stream. The result is immutable once built. Nothing is
//! printed along the way; every diagnostic surfaces as an [`Anomaly`] record
//! on the result.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use bytes::Bytes;

use super::compression::decompress_body;
use super::envelope::Envelope;
use super::error::{Error, ParseFailure, ParsePhase, PartialSwf};
use super::header::{StageInfo, read_stage_info};
use super::tags::{Anomaly, Tag, TagReader};
use crate::common::ByteCursor;

/// A fully parsed SWF container: envelope, stage info, and the ordered tag
/// list, with any non-fatal anomalies observed along the way.
#[derive(Debug)]
pub struct SwfFile {
    envelope: Envelope,
    stage: StageInfo,
    tags: Vec<Tag>,
    anomalies: Vec<Anomaly>,
}

impl SwfFile {
    /// Open and parse the SWF file at `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, ParseFailure> {
        let file = File::open(path).map_err(|e| ParseFailure::from(Error::Io(e)))?;
        Self::read_from(BufReader::new(file))
    }

    /// Parse an SWF container from any byte source.
    pub fn read_from<R: Read>(mut reader: R) -> Result<Self, ParseFailure> {
        let mut header = [0u8; Envelope::SIZE];
        let got = read_up_to(&mut reader, &mut header).map_err(|e| ParseFailure::from(Error::Io(e)))?;
        if got < Envelope::SIZE {
            return Err(ParseFailure::from(Error::TruncatedInput {
                phase: ParsePhase::Envelope,
                expected: Envelope::SIZE,
                available: got,
            }));
        }
        let envelope = Envelope::parse(&header)?;

        let body = decompress_body(&envelope, reader).map_err(|error| {
            ParseFailure::new(
                error,
                PartialSwf {
                    envelope: Some(envelope.clone()),
                    ..PartialSwf::default()
                },
            )
        })?;

        Self::assemble(envelope, body)
    }

    /// Parse an SWF container held entirely in memory.
    pub fn parse(data: &[u8]) -> Result<Self, ParseFailure> {
        Self::read_from(data)
    }

    /// Build the document from the envelope and the decompressed body.
    fn assemble(envelope: Envelope, body: Bytes) -> Result<Self, ParseFailure> {
        let mut anomalies = Vec::new();

        let actual_length = Envelope::SIZE as u64 + body.len() as u64;
        if u64::from(envelope.file_length) != actual_length {
            anomalies.push(Anomaly::DeclaredLengthMismatch {
                declared: envelope.file_length,
                actual: actual_length,
            });
        }

        let mut cursor = ByteCursor::new(&body);
        let stage = read_stage_info(&mut cursor).map_err(|e| {
            ParseFailure::new(
                Error::from_binary(ParsePhase::StageInfo, e),
                PartialSwf {
                    envelope: Some(envelope.clone()),
                    anomalies: anomalies.clone(),
                    ..PartialSwf::default()
                },
            )
        })?;

        let mut reader = TagReader::new(&body, cursor.position());
        let mut tags: Vec<Tag> = Vec::new();
        let mut end_index: Option<usize> = None;
        let mut trailing_flagged = false;
        loop {
            match reader.read_tag() {
                Ok(Some(tag)) => {
                    let index = tags.len();
                    if let Some(end) = end_index
                        && !trailing_flagged
                    {
                        anomalies.push(Anomaly::TagsAfterEnd { end_index: end });
                        trailing_flagged = true;
                    }
                    if tag.name().is_none() {
                        anomalies.push(Anomaly::UnknownTagCode {
                            index,
                            code: tag.code,
                        });
                    }
                    if tag.is_end() && end_index.is_none() {
                        end_index = Some(index);
                    }
                    tags.push(tag);
                },
                Ok(None) => break,
                Err(e) => {
                    return Err(ParseFailure::new(
                        Error::from_binary(ParsePhase::Tag(tags.len()), e),
                        PartialSwf {
                            envelope: Some(envelope),
                            stage: Some(stage),
                            tags,
                            anomalies,
                        },
                    ));
                },
            }
        }

        Ok(Self {
            envelope,
            stage,
            tags,
            anomalies,
        })
    }

    /// The pre-compression envelope.
    pub fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    /// Stage dimensions and timeline counters.
    pub fn stage(&self) -> &StageInfo {
        &self.stage
    }

    /// All tag records in stream order.
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Non-fatal conditions observed during the parse, in discovery order.
    pub fn anomalies(&self) -> &[Anomaly] {
        &self.anomalies
    }
}

/// Fill `buf` as far as the reader allows, returning the byte count; EOF
/// before the buffer is full is not an error here.
fn read_up_to<R: Read>(reader: &mut R, buf: &mut [u8]) -> std::io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        let n = reader.read(&mut buf[filled..])?;
        if n == 0 {
            break;
        }
        filled += n;
    }
    Ok(filled)
}
