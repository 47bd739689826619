//! buffer/mod.rs
//! The cursor buffer and everything built on it.
//!
//! Layering:
//! - `core`: storage, growth, cursors, raw peek/take/append/patch
//! - `codec`: big-endian fixed-width accessors over the raw primitives
//! - `framing`: 4-byte length-prefixed pack/unpack
//! - `interop`: conversions to and from `bytes` / `Vec<u8>`, `Debug`
//!
//! Views returned by `peek`, `take`, `slice`, `pack` and `as_bytes` borrow the
//! buffer, so no mutation (and no reallocation) can happen while one is alive.
//! Use `to_bytes()` for an owned copy.

pub mod core;
pub mod codec;
pub mod framing;
pub mod interop;

pub use self::core::Buffer;
pub use codec::FixedWidth;
pub use framing::Frames;
