//! The uncompressed 8-byte file prefix and the compression scheme it implies.

use super::error::{Error, Result};

/// Compression applied to everything after the first 8 bytes of the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
    /// `FWS` signature, body stored as-is
    None,
    /// `CWS` signature, body is a zlib stream (SWF 6+)
    Zlib,
    /// `ZWS` signature, body is an LZMA stream (SWF 13+)
    Lzma,
}

impl Compression {
    /// Short lowercase label, e.g. for diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            Compression::None => "none",
            Compression::Zlib => "zlib",
            Compression::Lzma => "lzma",
        }
    }
}

impl std::fmt::Display for Compression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The fixed pre-compression header: signature, format version, and the
/// declared length of the whole file once decompressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    /// The 3-byte ASCII signature exactly as stored
    pub signature: [u8; 3],
    /// Compression scheme implied by the signature
    pub compression: Compression,
    /// SWF format version
    pub version: u8,
    /// Declared total file length in bytes, counting this header, after
    /// decompression
    pub file_length: u32,
}

impl Envelope {
    /// Size of the on-disk envelope in bytes.
    pub const SIZE: usize = 8;

    /// Parse the 8-byte envelope.
    ///
    /// The compression scheme is a pure function of the signature; any
    /// signature outside `FWS` / `CWS` / `ZWS` fails with
    /// [`Error::UnknownSignature`] rather than assuming a default.
    pub fn parse(header: &[u8; Self::SIZE]) -> Result<Self> {
        let signature = [header[0], header[1], header[2]];
        let compression = match &signature {
            b"FWS" => Compression::None,
            b"CWS" => Compression::Zlib,
            b"ZWS" => Compression::Lzma,
            _ => return Err(Error::UnknownSignature { found: signature }),
        };

        let version = header[3];
        let file_length = u32::from_le_bytes([header[4], header[5], header[6], header[7]]);

        Ok(Self {
            signature,
            compression,
            version,
            file_length,
        })
    }

    /// Number of bytes of file body the envelope claims follow it,
    /// post-decompression.
    pub fn declared_body_length(&self) -> u32 {
        self.file_length.saturating_sub(Self::SIZE as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(sig: &[u8; 3], version: u8, length: u32) -> [u8; 8] {
        let mut h = [0u8; 8];
        h[..3].copy_from_slice(sig);
        h[3] = version;
        h[4..].copy_from_slice(&length.to_le_bytes());
        h
    }

    #[test]
    fn test_signature_maps_to_compression() {
        let cases: [(&[u8; 3], Compression); 3] = [
            (b"FWS", Compression::None),
            (b"CWS", Compression::Zlib),
            (b"ZWS", Compression::Lzma),
        ];
        for (sig, expected) in cases {
            let envelope = Envelope::parse(&header(sig, 10, 4096)).unwrap();
            assert_eq!(envelope.compression, expected);
            assert_eq!(envelope.signature, *sig);
            assert_eq!(envelope.version, 10);
            assert_eq!(envelope.file_length, 4096);
        }
    }

    #[test]
    fn test_unknown_signature_is_fatal() {
        let result = Envelope::parse(&header(b"ABC", 10, 4096));
        match result {
            Err(Error::UnknownSignature { found }) => assert_eq!(&found, b"ABC"),
            other => panic!("expected UnknownSignature, got {:?}", other),
        }
    }

    #[test]
    fn test_declared_body_length() {
        let envelope = Envelope::parse(&header(b"FWS", 6, 15)).unwrap();
        assert_eq!(envelope.declared_body_length(), 7);
        // A length smaller than the envelope itself saturates to zero
        let envelope = Envelope::parse(&header(b"FWS", 6, 3)).unwrap();
        assert_eq!(envelope.declared_body_length(), 0);
    }
}
