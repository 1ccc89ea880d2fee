//! Pluggable decompression with resolve-once backend discovery.
//!
//! Generated parsers call [`decompress`] on compressed byte runs without
//! caring which zlib implementation serves them. The backend is resolved on
//! first use and cached for the registry's lifetime: an embedder-registered
//! backend wins, otherwise discovery falls back to the built-in `flate2`
//! zlib decoder (behind the default-on `zlib` cargo feature). With neither
//! available, every call reports [`StreamError::NoBackend`].

use std::sync::OnceLock;

use log::{debug, trace};

use crate::stream::error::{Result, StreamError};

/// A decompression implementation.
///
/// Implementations take the complete compressed run and either return the
/// decompressed bytes or fail with [`StreamError::Inflate`] carrying their
/// own message for malformed input.
pub trait InflateBackend: Send + Sync {
    fn inflate(&self, data: &[u8]) -> Result<Vec<u8>>;
}

/// A resolve-once registry holding one decompression backend.
///
/// The slot is filled exactly once, either by [`Inflater::register`] ahead
/// of first use or by built-in discovery on the first [`Inflater::inflate`]
/// call; whichever happens first wins and later registration attempts
/// report back that they lost. The `OnceLock` serializes racing first uses,
/// so no external initialization barrier is needed.
///
/// [`decompress`] goes through a process-wide registry; independent
/// `Inflater` values exist so embedders and tests can scope a backend
/// without touching process state.
#[derive(Default)]
pub struct Inflater {
    slot: OnceLock<Option<Box<dyn InflateBackend>>>,
}

impl Inflater {
    /// An empty registry whose backend is not yet resolved.
    pub const fn new() -> Self {
        Self {
            slot: OnceLock::new(),
        }
    }

    /// Installs `backend`, pre-empting discovery.
    ///
    /// Returns `false` when the slot was already resolved (by an earlier
    /// registration or a first use that triggered discovery); the existing
    /// backend stays in place.
    pub fn register(&self, backend: Box<dyn InflateBackend>) -> bool {
        let installed = self.slot.set(Some(backend)).is_ok();
        if installed {
            debug!("Decompression backend registered by embedder");
        }
        installed
    }

    /// Decompresses `data` through the resolved backend.
    ///
    /// First use resolves the backend and caches the outcome, including the
    /// nothing-found outcome: a registry that once resolved to no backend
    /// keeps failing with [`StreamError::NoBackend`].
    pub fn inflate(&self, data: &[u8]) -> Result<Vec<u8>> {
        let backend = self
            .slot
            .get_or_init(discover)
            .as_deref()
            .ok_or(StreamError::NoBackend)?;
        trace!("Inflating {} compressed bytes", data.len());
        backend.inflate(data)
    }
}

/// Backend discovery, run at most once per registry: the built-in zlib
/// decoder when compiled in, otherwise nothing.
#[cfg(feature = "zlib")]
fn discover() -> Option<Box<dyn InflateBackend>> {
    debug!("Resolved built-in zlib decompression backend");
    Some(Box::new(zlib::Zlib))
}

#[cfg(not(feature = "zlib"))]
fn discover() -> Option<Box<dyn InflateBackend>> {
    debug!("No decompression backend available");
    None
}

/// Decompresses through the process-wide registry.
///
/// The process-wide slot can be pre-filled via [`process_inflater`] before
/// any parsing starts.
pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    process_inflater().inflate(data)
}

/// The process-wide registry used by [`decompress`].
pub fn process_inflater() -> &'static Inflater {
    static PROCESS: Inflater = Inflater::new();
    &PROCESS
}

#[cfg(feature = "zlib")]
mod zlib {
    use std::io::Read;

    use flate2::read::ZlibDecoder;

    use super::InflateBackend;
    use crate::stream::error::{Result, StreamError};

    /// The built-in backend: zlib/deflate via `flate2`.
    pub(super) struct Zlib;

    impl InflateBackend for Zlib {
        fn inflate(&self, data: &[u8]) -> Result<Vec<u8>> {
            let mut out = Vec::new();
            ZlibDecoder::new(data)
                .read_to_end(&mut out)
                .map_err(|e| StreamError::Inflate(e.to_string()))?;
            Ok(out)
        }
    }
}
