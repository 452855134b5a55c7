//! Swiff - A Rust library for parsing the SWF (Flash) binary container
//!
//! This library parses the SWF container format: it identifies the
//! compression envelope, decompresses the file body if needed, decodes the
//! bit-packed movie header, and walks the flat stream of variable-length tag
//! records that follows, classifying each by its numeric code.
//!
//! # Features
//!
//! - **Compression envelope**: uncompressed (`FWS`), zlib (`CWS`), and LZMA
//!   (`ZWS`) bodies, selected solely by the file signature
//! - **Bit-packed header**: the stage rectangle's dynamically sized signed
//!   fields are decoded exactly, without byte-alignment shortcuts
//! - **Tag stream**: short and long (escaped) record headers, with payloads
//!   sliced zero-copy from the decompressed body
//! - **Diagnostics as values**: unknown tag codes and records trailing the
//!   `End` tag are collected as anomaly records on the result, never printed
//!   and never fatal
//! - **Partial results**: a truncated file fails with everything parsed
//!   before the failing point still attached
//!
//! # Example - Reading an SWF file
//!
//! ```no_run
//! use swiff::SwfFile;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let doc = SwfFile::open("movie.swf")?;
//!
//! println!("SWF version {}", doc.envelope().version);
//! println!("{} frames at {} fps", doc.stage().frame_count, doc.stage().frames_per_second());
//!
//! for tag in doc.tags() {
//!     println!("{}", tag);
//! }
//! for anomaly in doc.anomalies() {
//!     println!("warning: {}", anomaly);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Parsing from memory
//!
//! ```
//! use swiff::SwfFile;
//!
//! // Signature, version, length, zero-width stage rect, 16 fps, one frame,
//! // and an End tag.
//! let data = [
//!     0x46, 0x57, 0x53, 0x06, 0x0F, 0x00, 0x00, 0x00, // "FWS", v6, 15 bytes
//!     0x00, 0x00, 0x10, 0x01, 0x00, 0x00, 0x00,
//! ];
//!
//! let doc = SwfFile::parse(&data).expect("valid container");
//! assert_eq!(doc.envelope().version, 6);
//! assert_eq!(doc.tags().len(), 1);
//! assert!(doc.tags()[0].is_end());
//! ```
//!
//! # Example - Inspecting a truncated file
//!
//! ```no_run
//! use swiff::SwfFile;
//!
//! let failure = SwfFile::open("damaged.swf").unwrap_err();
//! eprintln!("parse failed: {}", failure);
//! // Structure parsed before the failure is still available
//! eprintln!("recovered {} tags", failure.partial.tags.len());
//! ```

/// Low-level byte and bit readers shared by the parser
pub mod common;

/// The SWF container parser
pub mod swf;

// Re-export commonly used types for convenience
pub use swf::{
    Anomaly, Compression, Envelope, Error, ParseFailure, ParsePhase, PartialSwf, Rect, StageInfo,
    SwfFile, Tag,
};
