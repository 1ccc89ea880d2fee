//! Sub-byte bit reads: a small accumulator over the byte cursor.
//!
//! The accumulator caches not-yet-consumed bits between calls so arbitrary
//! widths up to 32 bits can be served across byte boundaries, in either
//! MSB-first or LSB-first convention. The convention is fixed per call, not
//! persisted: callers must not interleave the two without realigning.

use super::error::{Result, StreamError};
use super::BinaryStream;

/// Bit-level read state owned by a [`BinaryStream`].
///
/// `acc` holds raw fetched bits; `count` is how many of its low-order
/// positions are valid. `count` stays in `0..=7` between calls and reaches
/// at most 39 transiently while a refill folds bytes in.
#[derive(Debug, Clone, Copy, Default)]
pub(super) struct BitAccumulator {
    pub(super) acc: u64,
    pub(super) count: u32,
}

/// Low `n` bits set. `n` never exceeds 39 here, so the 64-bit shift is
/// always in range (including the full 32-bit mask the 32-wide read needs).
fn mask(n: u32) -> u64 {
    (1u64 << n) - 1
}

impl<'a> BinaryStream<'a> {
    /// Reads `n` bits (`n <= 32`) in MSB-first convention.
    ///
    /// Fetched bytes are shifted into the low end of the accumulator and the
    /// requested bits are extracted from the high end of the valid window,
    /// so the first bit of the first byte is the most significant bit of the
    /// result. Runs of bit reads pack tightly across byte boundaries.
    ///
    /// Errors with [`StreamError::UnsupportedBitWidth`] above 32 bits and
    /// [`StreamError::EndOfStream`] if the refill needs more bytes than
    /// remain; on either, position and accumulator are left untouched.
    pub fn read_bits_be(&mut self, n: u32) -> Result<u32> {
        self.refill_bits(n, |acc, _count, byte| (acc << 8) | u64::from(byte))?;
        let shift = self.bits.count - n;
        let result = (self.bits.acc >> shift) & mask(n);
        self.bits.count = shift;
        self.bits.acc &= mask(shift);
        Ok(result as u32)
    }

    /// Reads `n` bits (`n <= 32`) in LSB-first convention.
    ///
    /// Fetched bytes stack low-to-high (each new byte lands `count` bits up
    /// from the bottom) and the requested bits come from the low end, so the
    /// first bit of the first byte is the least significant bit of the
    /// result.
    ///
    /// Same error behavior as [`BinaryStream::read_bits_be`].
    pub fn read_bits_le(&mut self, n: u32) -> Result<u32> {
        self.refill_bits(n, |acc, count, byte| acc | (u64::from(byte) << count))?;
        let result = self.bits.acc & mask(n);
        self.bits.acc >>= n;
        self.bits.count -= n;
        Ok(result as u32)
    }

    /// Discards any partially consumed bits and resets the accumulator.
    ///
    /// Byte-aligned reads do NOT call this implicitly: switching from bit
    /// reads back to byte reads without aligning leaves stale bits buffered,
    /// which the next bit read will consume first. That sharp edge is
    /// deliberate; generated callers align at the points their format
    /// requires.
    pub fn align_to_byte(&mut self) {
        self.bits = BitAccumulator::default();
    }

    /// Ensures at least `n` valid bits are buffered, pulling exactly
    /// `ceil((n - count) / 8)` bytes from the cursor and folding each into
    /// the accumulator with `fold(acc, count_before_fold, byte)`.
    fn refill_bits(&mut self, n: u32, fold: impl Fn(u64, u32, u8) -> u64) -> Result<()> {
        if n > 32 {
            return Err(StreamError::UnsupportedBitWidth {
                requested: n as usize,
            });
        }
        if n <= self.bits.count {
            return Ok(());
        }
        let bytes_needed = ((n - self.bits.count) as usize).div_ceil(8);
        // At most 4 bytes: n <= 32 and the accumulator never goes negative.
        let mut fetched = [0u8; 4];
        fetched[..bytes_needed].copy_from_slice(self.take(bytes_needed)?);
        for &byte in &fetched[..bytes_needed] {
            self.bits.acc = fold(self.bits.acc, self.bits.count, byte);
            self.bits.count += 8;
        }
        Ok(())
    }
}
