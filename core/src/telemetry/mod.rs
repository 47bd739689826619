//! telemetry/mod.rs
//! Per-buffer counters and immutable snapshots.
//!
//! Notes:
//! - Counters are plain fields on the owning buffer: no atomics, no locks.
//! - Snapshots are detached copies, safe to serialize or ship to another thread.

pub mod counters;
pub mod snapshot;

pub use counters::*;
pub use snapshot::*;
