//! buffer/interop.rs
//!
//! Conversions between `Buffer` and owned byte containers.
//! Everything here copies: a `Buffer` never shares storage with another owner.

use std::fmt;

use bytes::Bytes;

use crate::buffer::Buffer;
use crate::config::BufferConfig;
use crate::telemetry::BufferCounters;
use crate::utils::fmt_bytes_truncated;

/// Unread bytes shown by `Debug` before truncation.
const DEBUG_PREVIEW_LEN: usize = 32;

impl Buffer {
    /// Owned copy of the unread region, for handing to a transport.
    pub fn to_bytes(&self) -> Bytes {
        Bytes::copy_from_slice(self.unread())
    }
}

/// The vector becomes the storage; all of it is unread.
impl From<Vec<u8>> for Buffer {
    fn from(storage: Vec<u8>) -> Self {
        let write_index = storage.len();
        Self {
            storage,
            read_index: 0,
            write_index,
            config: BufferConfig::default(),
            counters: BufferCounters::default(),
        }
    }
}

impl From<&[u8]> for Buffer {
    fn from(bytes: &[u8]) -> Self {
        Self::from(bytes.to_vec())
    }
}

impl From<Bytes> for Buffer {
    fn from(bytes: Bytes) -> Self {
        Self::from(bytes.to_vec())
    }
}

/// Unread region only; consumed bytes are not returned.
impl From<Buffer> for Vec<u8> {
    fn from(buf: Buffer) -> Self {
        let mut storage = buf.storage;
        storage.truncate(buf.write_index);
        storage.drain(..buf.read_index);
        storage
    }
}

impl fmt::Debug for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Buffer")
            .field("capacity", &self.capacity())
            .field("read", &self.read_index)
            .field("write", &self.write_index)
            .field("unread", &fmt_bytes_truncated(self.unread(), DEBUG_PREVIEW_LEN))
            .finish()
    }
}
