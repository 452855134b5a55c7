//! SWF container parsing: envelope, header, and tag stream.
//!
//! The parse is a single pass over the file. The 8-byte envelope decides the
//! compression scheme, the body is inflated, the bit-packed stage header is
//! decoded, and the flat tag stream is walked record by record until the
//! buffer runs out. Tag payloads are delimited but never interpreted.

/// Body decompression (none / zlib / LZMA)
pub mod compression;

/// Whole-file parse orchestration and the [`SwfFile`] result
pub mod document;

/// The uncompressed 8-byte file prefix
pub mod envelope;

/// Error and partial-result types
pub mod error;

/// Stage rectangle, frame rate, and frame count
pub mod header;

/// Static tag-code classification table
pub mod registry;

/// Tag records and the tag-stream reader
pub mod tags;

// Re-export public types for convenient access
pub use document::SwfFile;
pub use envelope::{Compression, Envelope};
pub use error::{Error, ParseFailure, ParsePhase, PartialSwf, Result};
pub use header::{Rect, StageInfo};
pub use registry::{TAG_NAMES, tag_name};
pub use tags::{Anomaly, Tag, TagReader};
