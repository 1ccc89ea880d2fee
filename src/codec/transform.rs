//! Byte-wise XOR and rotate transforms.

use log::trace;

use crate::stream::error::{Result, StreamError};

/// XORs every byte with a single key byte.
pub fn xor_one(data: &[u8], key: u8) -> Vec<u8> {
    trace!("XOR-ing {} bytes with single-byte key", data.len());
    data.iter().map(|&b| b ^ key).collect()
}

/// XORs the run against a repeating key, cycling `key[i % key.len()]`.
///
/// Self-inverse: applying the same key twice restores the input. An empty
/// key is a [`StreamError::EmptyXorKey`] error.
pub fn xor_many(data: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    if key.is_empty() {
        return Err(StreamError::EmptyXorKey);
    }
    trace!("XOR-ing {} bytes with {}-byte key", data.len(), key.len());
    Ok(data
        .iter()
        .enumerate()
        .map(|(i, &b)| b ^ key[i % key.len()])
        .collect())
}

/// Circularly rotates each `group_size`-byte group left by `amount` bits.
///
/// Only `group_size == 1` is supported (per-byte rotation, `amount` taken
/// mod 8); any other group size is a [`StreamError::UnsupportedGroupSize`]
/// error. Multi-byte group rotation is an explicit non-feature.
pub fn rotate_left(data: &[u8], amount: u32, group_size: usize) -> Result<Vec<u8>> {
    if group_size != 1 {
        return Err(StreamError::UnsupportedGroupSize { group_size });
    }
    trace!("Rotating {} bytes left by {} bits", data.len(), amount);
    Ok(data.iter().map(|&b| b.rotate_left(amount % 8)).collect())
}
