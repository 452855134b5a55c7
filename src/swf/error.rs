//! Error types for SWF container parsing.
//!
//! Fatal conditions are enumerated in [`Error`]; each carries the parse phase
//! it occurred in. Truncation does not discard what was already decoded: the
//! document-level API wraps every fatal error in a [`ParseFailure`] whose
//! [`PartialSwf`] holds all structure parsed before the failing point.

use thiserror::Error;

use super::envelope::{Compression, Envelope};
use super::header::StageInfo;
use super::tags::{Anomaly, Tag};
use crate::common::BinaryError;

/// The parse phase an error occurred in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsePhase {
    /// Reading the uncompressed 8-byte file prefix
    Envelope,
    /// Inflating the compressed file body
    Decompression,
    /// Reading the stage rectangle, frame rate, and frame count
    StageInfo,
    /// Reading tag record `N` (zero-based, in stream order)
    Tag(usize),
}

impl std::fmt::Display for ParsePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParsePhase::Envelope => f.write_str("envelope"),
            ParsePhase::Decompression => f.write_str("decompression"),
            ParsePhase::StageInfo => f.write_str("stage info"),
            ParsePhase::Tag(index) => write!(f, "tag {}", index),
        }
    }
}

/// Fatal parse error.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error reading the source
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The 3-byte file signature is not `FWS`, `CWS`, or `ZWS`
    #[error("unknown file signature: {:?}", String::from_utf8_lossy(.found))]
    UnknownSignature { found: [u8; 3] },

    /// The signature implies a compression scheme this build cannot decode
    #[error("unsupported compression scheme: {0}")]
    UnsupportedCompression(Compression),

    /// The compressed body is malformed; no partial output is trusted
    #[error("decompression failed ({phase}): {message}")]
    Decompression { phase: ParsePhase, message: String },

    /// A field declared more bytes than the input has left
    #[error("truncated input ({phase}): needed {expected} more bytes, {available} available")]
    TruncatedInput {
        phase: ParsePhase,
        expected: usize,
        available: usize,
    },
}

impl Error {
    /// Attach a parse phase to a low-level cursor error.
    ///
    /// Cursor reads can only fail by running out of bytes, so every binary
    /// error surfaces as [`Error::TruncatedInput`] at the given phase.
    pub(crate) fn from_binary(phase: ParsePhase, err: BinaryError) -> Self {
        let BinaryError::InsufficientData {
            expected,
            available,
        } = err;
        Error::TruncatedInput {
            phase,
            expected,
            available,
        }
    }
}

/// Result type for SWF parsing operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that had been successfully parsed when a fatal error struck.
///
/// Fields are populated strictly top-down: a truncated tag stream still
/// carries the envelope, stage info, and every tag decoded before the failing
/// record, in stream order.
#[derive(Debug, Default)]
pub struct PartialSwf {
    /// Envelope, if the 8-byte prefix was read and recognized
    pub envelope: Option<Envelope>,
    /// Stage info, if the post-decompression header was decoded
    pub stage: Option<StageInfo>,
    /// Tags decoded before the failure, in stream order
    pub tags: Vec<Tag>,
    /// Anomalies observed before the failure
    pub anomalies: Vec<Anomaly>,
}

/// A fatal error together with the partial structure parsed before it.
#[derive(Debug)]
pub struct ParseFailure {
    /// The error that aborted the parse
    pub error: Error,
    /// Structure recovered before the abort
    pub partial: PartialSwf,
}

impl ParseFailure {
    pub(crate) fn new(error: Error, partial: PartialSwf) -> Self {
        Self { error, partial }
    }
}

impl From<Error> for ParseFailure {
    fn from(error: Error) -> Self {
        Self {
            error,
            partial: PartialSwf::default(),
        }
    }
}

impl std::fmt::Display for ParseFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.error.fmt(f)
    }
}

impl std::error::Error for ParseFailure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}
