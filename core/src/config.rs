//! config.rs
//! Buffer sizing and framing limits.
//!
//! Design notes:
//! - Defaults reproduce the classic 2 KiB start / 2 KiB step growth policy.
//! - Serde defaults let transports embed `BufferConfig` in their own config files
//!   and omit any field.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_SIZE;
use crate::types::BufferError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BufferConfig {
    /// Storage allocated when the buffer is created.
    pub initial_capacity: usize,

    /// Minimum forward progress of every growth step.
    /// Must be non-zero.
    pub grow_increment: usize,

    /// Upper bound on a frame body length accepted by `unpack`.
    /// - `None` → unlimited (default).
    pub max_frame_len: Option<u32>,
}

impl Default for BufferConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_SIZE,
            grow_increment: DEFAULT_SIZE,
            max_frame_len: None,
        }
    }
}

impl BufferConfig {
    pub fn new(
        initial_capacity: Option<usize>,
        grow_increment: Option<usize>,
        max_frame_len: Option<u32>,
    ) -> Self {
        Self {
            initial_capacity: initial_capacity.unwrap_or(DEFAULT_SIZE),
            grow_increment: grow_increment.unwrap_or(DEFAULT_SIZE),
            max_frame_len,
        }
    }

    /// Default sizing with a frame length limit, for buffers fed from untrusted peers.
    pub fn with_max_frame_len(max_frame_len: u32) -> Self {
        Self { max_frame_len: Some(max_frame_len), ..Self::default() }
    }

    pub fn validate(&self) -> Result<(), BufferError> {
        if self.grow_increment == 0 {
            return Err(BufferError::InvalidArgument {
                reason: "grow_increment must be non-zero",
                value: 0,
            });
        }
        Ok(())
    }
}
