//! Stateless utilities over already-extracted byte runs.
//!
//! These operate on plain slices, independent of any stream cursor: trimming
//! trailing pad bytes, truncating at a terminator, lexicographic comparison,
//! and encoding-aware decoding to text.

use encoding_rs::Encoding;

use crate::stream::error::{Result, StreamError};

/// Trims trailing copies of `pad` from the end of `data`.
///
/// Returns the longest prefix whose last byte is not `pad`; an all-pad run
/// trims to empty. Zero-copy.
pub fn strip_right(data: &[u8], pad: u8) -> &[u8] {
    let mut end = data.len();
    while end > 0 && data[end - 1] == pad {
        end -= 1;
    }
    &data[..end]
}

/// Truncates `data` at the first occurrence of `term`, keeping the
/// terminator itself when `include` is set. A run with no terminator comes
/// back unchanged. Zero-copy.
pub fn terminate(data: &[u8], term: u8, include: bool) -> &[u8] {
    match data.iter().position(|&b| b == term) {
        Some(i) => &data[..i + usize::from(include)],
        None => data,
    }
}

/// Lexicographic byte comparison.
///
/// Returns the difference of the first unequal byte pair; when one run is a
/// strict prefix of the other, the length difference (so the shorter run
/// compares less). Zero iff the runs are elementwise equal and of equal
/// length. The magnitude carries no meaning beyond its sign.
pub fn compare(a: &[u8], b: &[u8]) -> i32 {
    for (&x, &y) in a.iter().zip(b.iter()) {
        if x != y {
            return i32::from(x) - i32::from(y);
        }
    }
    a.len() as i32 - b.len() as i32
}

/// Decodes a byte run to text under the encoding named by the WHATWG
/// `label` (e.g. `"UTF-8"`, `"UTF-16LE"`, `"GBK"`).
///
/// Malformed sequences decode to U+FFFD replacement characters; an
/// unrecognized label is a [`StreamError::UnknownEncoding`] error, never a
/// silent fallback to some other encoding.
pub fn decode_text(data: &[u8], label: &str) -> Result<String> {
    let encoding =
        Encoding::for_label(label.as_bytes()).ok_or_else(|| StreamError::UnknownEncoding {
            label: label.to_string(),
        })?;
    let (text, _, _) = encoding.decode(data);
    Ok(text.into_owned())
}
