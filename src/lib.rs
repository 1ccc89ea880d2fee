//! # binstream
//!
//! A byte/bit stream cursor over an in-memory buffer: the runtime substrate
//! consumed by code generated from declarative binary-format descriptions.
//!
//! The crate provides:
//! - [`BinaryStream`] — a positional cursor with bounds-checked typed reads
//!   (integers and floats in both byte orders), byte-run reads, and a bit
//!   accumulator for unaligned sub-byte reads in MSB-first or LSB-first
//!   convention.
//! - [`bytes`] — stateless utilities over already-extracted byte runs
//!   (strip trailing pad, truncate at terminator, compare, decode text).
//! - [`codec`] — post-processing hooks applied to extracted bytes: XOR
//!   (single-byte and repeating-key), per-byte left rotation, and a
//!   pluggable resolve-once decompression backend.
//! - [`StreamError`] — the closed error taxonomy every operation reports
//!   through, each variant carrying structured diagnostic data.
//!
//! All operations are synchronous and single-threaded; a failed read never
//! advances the stream position.

pub mod bytes;
pub mod codec;
pub mod stream;

// Re-export the main types for convenience
pub use stream::{
    buffer::ByteBuffer,
    error::{Result, StreamError},
    BinaryStream,
};
