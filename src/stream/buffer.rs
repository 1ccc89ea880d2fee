//! Backing storage for a stream: bytes plus an offset and a virtual length.

use std::borrow::Cow;

/// The byte region a [`crate::BinaryStream`] reads from.
///
/// Three construction paths converge on the same internal state:
/// - [`ByteBuffer::zeroed`] allocates a fresh zero-filled buffer,
/// - [`ByteBuffer::from_slice`] / [`ByteBuffer::with_offset`] borrow an
///   existing region (zero-copy), optionally starting at a byte offset,
/// - [`ByteBuffer::view`] borrows a sized sub-view with its own offset and
///   live length.
///
/// `virtual_len` is the number of bytes considered live; all bounds checks
/// go against it, never against the raw capacity. [`ByteBuffer::trim`]
/// lowers it to expose a shorter effective region.
#[derive(Debug, Clone)]
pub struct ByteBuffer<'a> {
    data: Cow<'a, [u8]>,
    offset: usize,
    virtual_len: usize,
}

impl<'a> ByteBuffer<'a> {
    /// A fresh zero-filled buffer of `size` bytes, owned by the buffer.
    pub fn zeroed(size: usize) -> Self {
        Self {
            data: Cow::Owned(vec![0; size]),
            offset: 0,
            virtual_len: size,
        }
    }

    /// Borrows an existing byte region in full.
    pub fn from_slice(data: &'a [u8]) -> Self {
        Self::with_offset(data, 0)
    }

    /// Borrows an existing byte region, with the live range starting at
    /// `offset` bytes from its beginning. Offsets past the end clamp to the
    /// end, yielding an empty live range.
    pub fn with_offset(data: &'a [u8], offset: usize) -> Self {
        let offset = offset.min(data.len());
        Self {
            virtual_len: data.len(),
            data: Cow::Borrowed(data),
            offset,
        }
    }

    /// Borrows a sized sub-view: live range `[offset, offset + len)`,
    /// clamped to the underlying region.
    pub fn view(data: &'a [u8], offset: usize, len: usize) -> Self {
        let offset = offset.min(data.len());
        let virtual_len = (offset + len).min(data.len());
        Self {
            data: Cow::Borrowed(data),
            offset,
            virtual_len,
        }
    }

    /// Lowers the virtual length so only the first `len` bytes past the
    /// offset stay live. Growing back is not supported; requests beyond the
    /// current live length are clamped.
    pub fn trim(&mut self, len: usize) {
        self.virtual_len = (self.offset + len).min(self.virtual_len);
    }

    /// Number of live bytes (virtual length minus offset).
    pub fn len(&self) -> usize {
        self.virtual_len - self.offset
    }

    /// True when no live bytes remain.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The live byte region.
    pub fn live(&self) -> &[u8] {
        &self.data[self.offset..self.virtual_len]
    }
}
