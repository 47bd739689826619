//! telemetry/snapshot.rs
//!
//! Point-in-time view of a buffer: geometry plus counters.

use serde::{Deserialize, Serialize};

use crate::telemetry::counters::BufferCounters;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BufferSnapshot {
    pub capacity: usize,
    pub read_position: usize,
    pub write_position: usize,
    pub available: usize,
    pub counters: BufferCounters,
}

impl BufferSnapshot {
    /// Fraction of storage currently holding written bytes.
    pub fn fill_ratio(&self) -> f64 {
        if self.capacity == 0 {
            return 0.0;
        }
        self.write_position as f64 / self.capacity as f64
    }

    /// Invariant check: `read ≤ write ≤ capacity` and `available` agrees with the cursors.
    pub fn sanity_check(&self) -> bool {
        self.read_position <= self.write_position
            && self.write_position <= self.capacity
            && self.available == self.write_position - self.read_position
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
