//! Error taxonomy for stream reads, byte-run utilities, and codec hooks.

use thiserror::Error;

/// The primary error type for all operations in this crate.
///
/// Every variant carries the structured data a caller needs to build a
/// diagnostic without parsing message strings. The `Validation*` variants
/// are never raised by this crate itself: they are defined for generated
/// parsing code built on top of the stream, which owns the concrete field
/// types and renders the offending values before raising.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StreamError {
    /// A read needed more bytes than remain before the end of the stream.
    /// The stream position is left unchanged.
    #[error("end of stream: requested {requested} bytes, {available} available")]
    EndOfStream { requested: usize, available: usize },

    /// A fixed-content check found bytes other than the expected magic.
    #[error("unexpected contents: expected {expected:02x?}, got {actual:02x?}")]
    UnexpectedContents { expected: Vec<u8>, actual: Vec<u8> },

    /// A terminator-delimited read reached the end of the stream without
    /// seeing its terminator byte. The stream position is left unchanged.
    #[error("end of stream reached, terminator {terminator:#04x} not found")]
    TerminatorNotFound { terminator: u8 },

    /// A format's byte order is data-dependent and has not been resolved yet.
    /// Resolving endianness is the caller's concern; the stream only defines
    /// the failure shape.
    #[error("byte order is data-dependent and still undecided")]
    UndecidedEndianness,

    /// A field did not equal its required value.
    #[error("validation failed: expected {expected}, got {actual}")]
    ValidationNotEqual { expected: String, actual: String },

    /// A field was below its required minimum.
    #[error("validation failed: {actual} is less than minimum {min}")]
    ValidationLessThan { min: String, actual: String },

    /// A field was above its required maximum.
    #[error("validation failed: {actual} is greater than maximum {max}")]
    ValidationGreaterThan { max: String, actual: String },

    /// A field matched none of its permitted values.
    #[error("validation failed: {actual} is not any of the permitted values")]
    ValidationNotAnyOf { actual: String },

    /// A field failed an arbitrary validation expression.
    #[error("validation failed: {actual} did not satisfy the field expression")]
    ValidationExpr { actual: String },

    /// A bit read wider than one 32-bit word was requested.
    #[error("unsupported bit width: {requested} bits requested, at most 32 supported")]
    UnsupportedBitWidth { requested: usize },

    /// A rotation group size other than single bytes was requested.
    #[error("unsupported rotate group size: {group_size} (only 1 is supported)")]
    UnsupportedGroupSize { group_size: usize },

    /// A text encoding label was not recognized.
    #[error("unknown text encoding: {label:?}")]
    UnknownEncoding { label: String },

    /// A repeating-key XOR was invoked with an empty key.
    #[error("XOR key must not be empty")]
    EmptyXorKey,

    /// No decompression backend could be resolved.
    #[error("no decompression backend available")]
    NoBackend,

    /// The decompression backend rejected its input; the backend's own
    /// message is passed through unmodified.
    #[error("decompression failed: {0}")]
    Inflate(String),
}

/// A convenience `Result` type alias using the crate's `StreamError` type.
pub type Result<T> = std::result::Result<T, StreamError>;
