//! framebuf-core
//!
//! Growable byte buffer with independent read/write cursors, big-endian
//! fixed-width codecs and 4-byte length-prefixed framing.
//! No I/O, no threads, no locks.

#![forbid(unsafe_code)]

// Shared and top level
pub mod config;
pub mod constants;
pub mod types;
pub mod utils;

pub mod buffer;
pub mod telemetry;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::buffer::{Buffer, FixedWidth, Frames};
    pub use crate::config::BufferConfig;
    pub use crate::types::BufferError;
}
