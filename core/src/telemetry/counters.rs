//! telemetry/counters.rs
//! Mutable counters updated by buffer operations.
//!
//! Summary: counts growth steps, bytes moved through the cursors and frames
//! packed/unpacked. Converted into an immutable `BufferSnapshot` on demand.
use serde::{Deserialize, Serialize};
use std::ops::AddAssign;

/// Deterministic counters collected over the life of one buffer.
#[derive(Default, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BufferCounters {
    pub grows: u64,
    pub bytes_written: u64,
    pub bytes_read: u64,
    pub bytes_shifted: u64,
    pub frames_packed: u64,
    pub frames_unpacked: u64,
    pub unpack_not_ready: u64,
}

impl BufferCounters {
    pub fn add_grow(&mut self) {
        self.grows += 1;
    }

    pub fn add_written(&mut self, len: usize) {
        self.bytes_written += len as u64;
    }

    pub fn add_read(&mut self, len: usize) {
        self.bytes_read += len as u64;
    }

    pub fn add_shifted(&mut self, len: usize) {
        self.bytes_shifted += len as u64;
    }

    pub fn add_packed(&mut self) {
        self.frames_packed += 1;
    }

    /// Record one frame extracted by `unpack`.
    pub fn add_unpacked(&mut self) {
        self.frames_unpacked += 1;
    }

    pub fn add_not_ready(&mut self) {
        self.unpack_not_ready += 1;
    }

    // Aggregating across connections is the caller's job:
    // each connection owns its buffers, merge at report time.
    pub fn merge(&mut self, other: &BufferCounters) {
        self.grows += other.grows;
        self.bytes_written += other.bytes_written;
        self.bytes_read += other.bytes_read;
        self.bytes_shifted += other.bytes_shifted;
        self.frames_packed += other.frames_packed;
        self.frames_unpacked += other.frames_unpacked;
        self.unpack_not_ready += other.unpack_not_ready;
    }
}

impl AddAssign for BufferCounters {
    fn add_assign(&mut self, rhs: Self) {
        self.merge(&rhs);
    }
}
