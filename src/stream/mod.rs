//! The stream cursor: positioning, typed reads, byte-run reads.

pub mod buffer;
pub mod error;

mod bits;

use byteorder::{BigEndian, ByteOrder, LittleEndian};
use log::debug;

use bits::BitAccumulator;
use buffer::ByteBuffer;
use error::{Result, StreamError};

/// A positional read cursor over a [`ByteBuffer`].
///
/// The stream tracks one byte position plus a bit accumulator for unaligned
/// sub-byte reads. Every read is bounds-checked against the buffer's virtual
/// length; a failed read returns an error and leaves the position exactly
/// where it was. Byte runs handed back by reads alias the buffer (zero-copy)
/// and stay valid for the borrow of the stream.
#[derive(Debug)]
pub struct BinaryStream<'a> {
    buf: ByteBuffer<'a>,
    pos: usize,
    bits: BitAccumulator,
}

impl<'a> BinaryStream<'a> {
    /// A stream over an explicitly constructed buffer.
    pub fn from_buffer(buf: ByteBuffer<'a>) -> Self {
        debug!("Opening stream over {} live bytes", buf.len());
        Self {
            buf,
            pos: 0,
            bits: BitAccumulator::default(),
        }
    }

    /// A stream over a fresh zero-filled buffer of `size` bytes.
    pub fn zeroed(size: usize) -> Self {
        Self::from_buffer(ByteBuffer::zeroed(size))
    }

    /// A stream over an existing byte region.
    pub fn new(data: &'a [u8]) -> Self {
        Self::from_buffer(ByteBuffer::from_slice(data))
    }

    /// A stream over an existing byte region, starting `offset` bytes in.
    pub fn with_offset(data: &'a [u8], offset: usize) -> Self {
        Self::from_buffer(ByteBuffer::with_offset(data, offset))
    }

    /// A stream over a sized sub-view of an existing byte region.
    pub fn view(data: &'a [u8], offset: usize, len: usize) -> Self {
        Self::from_buffer(ByteBuffer::view(data, offset, len))
    }

    /// Total number of readable bytes (the buffer's live length).
    pub fn size(&self) -> usize {
        self.buf.len()
    }

    /// Current byte position, `0..=size()`.
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// True when the position has reached the end AND no bits remain
    /// buffered in the accumulator.
    pub fn is_eof(&self) -> bool {
        self.pos >= self.size() && self.bits_buffered() == 0
    }

    /// Moves the position to `target`, clamped into `[0, size()]`. Negative
    /// targets land on 0. Never fails.
    pub fn seek(&mut self, target: i64) {
        self.pos = target.clamp(0, self.size() as i64) as usize;
    }

    /// Number of bits currently buffered by the bit accumulator.
    pub(crate) fn bits_buffered(&self) -> u32 {
        self.bits.count
    }

    /// Bounds-checks `k` bytes at the current position without advancing.
    fn peek(&self, k: usize) -> Result<&[u8]> {
        let available = self.size() - self.pos;
        if k > available {
            return Err(StreamError::EndOfStream {
                requested: k,
                available,
            });
        }
        Ok(&self.buf.live()[self.pos..self.pos + k])
    }

    /// Consumes exactly `k` bytes, advancing the position. On shortfall the
    /// position is untouched.
    fn take(&mut self, k: usize) -> Result<&[u8]> {
        let available = self.size() - self.pos;
        if k > available {
            return Err(StreamError::EndOfStream {
                requested: k,
                available,
            });
        }
        let start = self.pos;
        self.pos += k;
        Ok(&self.buf.live()[start..start + k])
    }

    // ---- Typed reads -------------------------------------------------
    //
    // One accessor per width/signedness/byte-order combination, all
    // following the same contract: bounds-check, interpret, advance by the
    // exact byte count. 64-bit reads are native and exact over the full
    // range.

    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.take(1)?[0])
    }

    pub fn read_i8(&mut self) -> Result<i8> {
        Ok(self.take(1)?[0] as i8)
    }

    pub fn read_u16_be(&mut self) -> Result<u16> {
        Ok(BigEndian::read_u16(self.take(2)?))
    }

    pub fn read_u16_le(&mut self) -> Result<u16> {
        Ok(LittleEndian::read_u16(self.take(2)?))
    }

    pub fn read_u32_be(&mut self) -> Result<u32> {
        Ok(BigEndian::read_u32(self.take(4)?))
    }

    pub fn read_u32_le(&mut self) -> Result<u32> {
        Ok(LittleEndian::read_u32(self.take(4)?))
    }

    pub fn read_u64_be(&mut self) -> Result<u64> {
        Ok(BigEndian::read_u64(self.take(8)?))
    }

    pub fn read_u64_le(&mut self) -> Result<u64> {
        Ok(LittleEndian::read_u64(self.take(8)?))
    }

    pub fn read_i16_be(&mut self) -> Result<i16> {
        Ok(BigEndian::read_i16(self.take(2)?))
    }

    pub fn read_i16_le(&mut self) -> Result<i16> {
        Ok(LittleEndian::read_i16(self.take(2)?))
    }

    pub fn read_i32_be(&mut self) -> Result<i32> {
        Ok(BigEndian::read_i32(self.take(4)?))
    }

    pub fn read_i32_le(&mut self) -> Result<i32> {
        Ok(LittleEndian::read_i32(self.take(4)?))
    }

    pub fn read_i64_be(&mut self) -> Result<i64> {
        Ok(BigEndian::read_i64(self.take(8)?))
    }

    pub fn read_i64_le(&mut self) -> Result<i64> {
        Ok(LittleEndian::read_i64(self.take(8)?))
    }

    pub fn read_f32_be(&mut self) -> Result<f32> {
        Ok(BigEndian::read_f32(self.take(4)?))
    }

    pub fn read_f32_le(&mut self) -> Result<f32> {
        Ok(LittleEndian::read_f32(self.take(4)?))
    }

    pub fn read_f64_be(&mut self) -> Result<f64> {
        Ok(BigEndian::read_f64(self.take(8)?))
    }

    pub fn read_f64_le(&mut self) -> Result<f64> {
        Ok(LittleEndian::read_f64(self.take(8)?))
    }

    // ---- Byte-run reads ----------------------------------------------

    /// Exactly `len` bytes starting at the current position, as a zero-copy
    /// view.
    pub fn read_bytes(&mut self, len: usize) -> Result<&[u8]> {
        self.take(len)
    }

    /// Everything from the current position to the end of the stream.
    pub fn read_bytes_full(&mut self) -> Result<&[u8]> {
        let remaining = self.size() - self.pos;
        self.take(remaining)
    }

    /// Scans forward for the first byte equal to `term`.
    ///
    /// On a hit, the returned span covers the bytes before the terminator,
    /// plus the terminator itself when `include` is set; `consume`
    /// independently decides whether the position moves past the terminator
    /// (exactly one byte, never two) or stops on it.
    ///
    /// If the terminator never occurs: with `eos_error` set this fails with
    /// [`StreamError::TerminatorNotFound`] and the position stays put;
    /// otherwise all remaining bytes are returned and the position lands at
    /// the end of the stream.
    pub fn read_bytes_term(
        &mut self,
        term: u8,
        include: bool,
        consume: bool,
        eos_error: bool,
    ) -> Result<&[u8]> {
        let start = self.pos;
        match self.buf.live()[start..].iter().position(|&b| b == term) {
            Some(i) => {
                let span_end = start + i + usize::from(include);
                self.pos = start + i + usize::from(consume);
                Ok(&self.buf.live()[start..span_end])
            }
            None if eos_error => Err(StreamError::TerminatorNotFound { terminator: term }),
            None => {
                self.pos = self.size();
                Ok(&self.buf.live()[start..])
            }
        }
    }

    /// Legacy fixed-content check: reads `expected.len()` bytes and fails
    /// with [`StreamError::UnexpectedContents`] unless they match, restoring
    /// the position on mismatch.
    pub fn ensure_fixed_contents(&mut self, expected: &[u8]) -> Result<&[u8]> {
        let actual = self.peek(expected.len())?;
        if actual != expected {
            return Err(StreamError::UnexpectedContents {
                expected: expected.to_vec(),
                actual: actual.to_vec(),
            });
        }
        self.pos += expected.len();
        Ok(&self.buf.live()[self.pos - expected.len()..self.pos])
    }
}
