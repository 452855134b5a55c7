//! Shared low-level decoding primitives.
//!
//! These are the byte- and bit-granular readers the container parser is built
//! on; they know nothing about SWF itself.

// Submodule declarations
pub mod binary;
pub mod bits;

// Re-exports for convenience
pub use binary::{BinaryError, BinaryResult, ByteCursor};
pub use bits::BitReader;
