//! Post-processing hooks applied to already-extracted byte runs.
//!
//! These never touch a stream cursor: callers read bytes first, then feed
//! them through a transform (XOR, rotate) or hand them to the pluggable
//! decompression backend.

mod inflate;
mod transform;

pub use inflate::{decompress, process_inflater, InflateBackend, Inflater};
pub use transform::{rotate_left, xor_many, xor_one};
