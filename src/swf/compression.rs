//! Decompression of the SWF file body.
//!
//! Everything after the 8-byte envelope may be stored raw, as a zlib stream,
//! or as an LZMA stream; the scheme is fixed by the envelope signature and is
//! never sniffed from the body itself. Input is pulled through the decoder in
//! fixed-size chunks rather than one-shot, and the fully inflated body is
//! returned as a single buffer for the header and tag parsers to walk.

use std::io::Read;

use bytes::Bytes;
use flate2::read::ZlibDecoder;
use lzma_rust2::LzmaReader;

use super::envelope::{Compression, Envelope};
use super::error::{Error, ParsePhase, Result};

/// Window size for chunked reads out of the decoder.
const DECODE_CHUNK: usize = 64 * 1024;

/// Byte length of the LZMA property block: 1 props byte + u32 dictionary size.
const LZMA_PROPS_LEN: usize = 5;

/// Decompress the file body that follows the envelope.
///
/// `reader` must be positioned immediately after the 8-byte envelope. Any
/// decoder failure aborts the whole operation — a partially inflated body is
/// never returned, since the header and tag stream inside it could not be
/// trusted.
pub fn decompress_body<R: Read>(envelope: &Envelope, mut reader: R) -> Result<Bytes> {
    let mut body = Vec::new();
    match envelope.compression {
        Compression::None => {
            reader.read_to_end(&mut body)?;
        },
        Compression::Zlib => {
            read_chunked(ZlibDecoder::new(reader), &mut body)?;
        },
        Compression::Lzma => {
            // ZWS layout: u32 compressed-body length, then a 5-byte LZMA
            // property block, then the raw LZMA stream. The uncompressed size
            // is not in the stream; it comes from the declared file length.
            let mut preamble = [0u8; 4 + LZMA_PROPS_LEN];
            reader
                .read_exact(&mut preamble)
                .map_err(|e| decompression_error(&e))?;
            let props = preamble[4];
            let dict_size = u32::from_le_bytes([preamble[5], preamble[6], preamble[7], preamble[8]]);
            let uncompressed_size = u64::from(envelope.declared_body_length());
            let decoder = LzmaReader::new_with_props(reader, uncompressed_size, props, dict_size, None)
                .map_err(|e| decompression_error(&e))?;
            read_chunked(decoder, &mut body)?;
        },
    }
    Ok(Bytes::from(body))
}

/// Drain a decoder into `out`, one fixed-size chunk at a time.
fn read_chunked<R: Read>(mut decoder: R, out: &mut Vec<u8>) -> Result<()> {
    let mut chunk = vec![0u8; DECODE_CHUNK];
    loop {
        let n = decoder.read(&mut chunk).map_err(|e| decompression_error(&e))?;
        if n == 0 {
            return Ok(());
        }
        out.extend_from_slice(&chunk[..n]);
    }
}

fn decompression_error(err: &dyn std::fmt::Display) -> Error {
    Error::Decompression {
        phase: ParsePhase::Decompression,
        message: err.to_string(),
    }
}
