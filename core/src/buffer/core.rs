//! buffer/core.rs
//!
//! Storage, growth policy and cursor bookkeeping.
//!
//! Layout:
//!
//! ```text
//! 0            read_index         write_index            capacity
//! | consumed   | unread           | free (zero-filled)   |
//! ```
//!
//! Invariant after every call, successful or not: `read ≤ write ≤ capacity`.

use tracing::debug;

use crate::config::BufferConfig;
use crate::telemetry::{BufferCounters, BufferSnapshot};
use crate::types::BufferError;

#[derive(Clone)]
pub struct Buffer {
    /// `storage.len()` is the capacity; it only ever grows.
    pub(crate) storage: Vec<u8>,
    pub(crate) read_index: usize,
    pub(crate) write_index: usize,
    pub(crate) config: BufferConfig,
    pub(crate) counters: BufferCounters,
}

impl Default for Buffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Buffer {
    /// Empty buffer with the default 2 KiB capacity.
    pub fn new() -> Self {
        Self::from_config(BufferConfig::default())
    }

    /// Empty buffer sized by `config`.
    ///
    /// # Errors
    /// - `InvalidArgument` if the config fails validation.
    pub fn with_config(config: BufferConfig) -> Result<Self, BufferError> {
        config.validate()?;
        Ok(Self::from_config(config))
    }

    pub(crate) fn from_config(config: BufferConfig) -> Self {
        Self {
            storage: vec![0u8; config.initial_capacity],
            read_index: 0,
            write_index: 0,
            config,
            counters: BufferCounters::default(),
        }
    }

    pub fn config(&self) -> &BufferConfig {
        &self.config
    }

    // ---------------------------------------------------------------------
    // Capacity
    // ---------------------------------------------------------------------

    /// Allocated length of storage, not the content length.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Unread bytes: `write_position() - read_position()`.
    #[inline]
    pub fn available(&self) -> usize {
        self.write_index - self.read_index
    }

    /// The whole storage, including consumed and never-written bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.storage
    }

    /// Reallocate storage to exactly `new_size` bytes, keeping every existing byte.
    ///
    /// # Errors
    /// - `InvalidArgument` if `new_size < capacity() + grow_increment`: a growth
    ///   step must make real forward progress.
    pub fn grow(&mut self, new_size: usize) -> Result<(), BufferError> {
        let old = self.capacity();
        let min = old.saturating_add(self.config.grow_increment);
        if new_size < min {
            return Err(BufferError::InvalidArgument {
                reason: "grow size below capacity + increment",
                value: i64::try_from(new_size).unwrap_or(i64::MAX),
            });
        }

        self.storage.resize(new_size, 0);
        self.counters.add_grow();
        debug!(old_capacity = old, new_capacity = new_size, "buffer grown");
        Ok(())
    }

    /// Best-effort view into storage.
    ///
    /// - `start >= capacity()` or an empty/inverted range → the full storage
    /// - `end > capacity()` → clamped to `capacity()`
    /// - otherwise `storage[start..end]`
    pub fn slice(&self, start: usize, end: usize) -> &[u8] {
        let cap = self.capacity();
        if start >= cap || start >= end {
            return &self.storage;
        }
        &self.storage[start..end.min(cap)]
    }

    // ---------------------------------------------------------------------
    // Positioning
    // ---------------------------------------------------------------------

    #[inline]
    pub fn read_position(&self) -> usize {
        self.read_index
    }

    #[inline]
    pub fn write_position(&self) -> usize {
        self.write_index
    }

    /// Read cursor has reached the physical end of storage.
    /// Not the same as `available() == 0`.
    #[inline]
    pub fn end_of_data(&self) -> bool {
        self.read_index >= self.capacity()
    }

    /// Consume `n` bytes without reading them.
    ///
    /// # Errors
    /// - `OutOfRange` if `n > write_position()`, or if the read cursor would pass
    ///   the write cursor.
    pub fn skip(&mut self, n: usize) -> Result<(), BufferError> {
        if n > self.write_index {
            return Err(BufferError::OutOfRange { requested: n, limit: self.write_index });
        }
        if n > self.available() {
            return Err(BufferError::OutOfRange {
                requested: self.read_index + n,
                limit: self.write_index,
            });
        }

        self.read_index += n;
        self.counters.add_read(n);
        Ok(())
    }

    /// Move the read cursor to absolute position `pos`.
    ///
    /// # Errors
    /// - `InvalidArgument` if `pos < 0`
    /// - `OutOfRange` if `pos > write_position()`
    pub fn seek(&mut self, pos: i64) -> Result<(), BufferError> {
        if pos < 0 {
            return Err(BufferError::InvalidArgument { reason: "negative seek position", value: pos });
        }
        let pos = usize::try_from(pos).unwrap_or(usize::MAX);
        if pos > self.write_index {
            return Err(BufferError::OutOfRange { requested: pos, limit: self.write_index });
        }

        self.read_index = pos;
        Ok(())
    }

    /// Drop the first `n` bytes of storage and pull both cursors back by `n`.
    ///
    /// # Errors
    /// - `OutOfRange` if `n > write_position()`
    /// - `OutOfRange` if `n > read_position()`: unread bytes are never discarded
    pub fn shift(&mut self, n: usize) -> Result<(), BufferError> {
        if n > self.write_index {
            return Err(BufferError::OutOfRange { requested: n, limit: self.write_index });
        }
        if n > self.read_index {
            return Err(BufferError::OutOfRange { requested: n, limit: self.read_index });
        }
        if n == 0 {
            return Ok(());
        }

        self.storage.copy_within(n..self.write_index, 0);
        self.read_index -= n;
        self.write_index -= n;
        self.counters.add_shifted(n);
        debug!(shifted = n, remaining = self.write_index, "buffer compacted");
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Raw access
    // ---------------------------------------------------------------------

    /// Next `n` unread bytes, cursor unchanged. Empty if fewer than `n` are available.
    pub fn peek(&self, n: usize) -> &[u8] {
        if n > self.available() {
            return &[];
        }
        &self.storage[self.read_index..self.read_index + n]
    }

    /// Next `n` unread bytes, advancing the cursor only when data is returned.
    /// Empty means "not enough data yet".
    pub fn take(&mut self, n: usize) -> &[u8] {
        if n == 0 || n > self.available() {
            return &[];
        }

        let start = self.read_index;
        self.read_index += n;
        self.counters.add_read(n);
        &self.storage[start..start + n]
    }

    /// All unread bytes, cursor unchanged.
    pub fn unread(&self) -> &[u8] {
        &self.storage[self.read_index..self.write_index]
    }

    /// Copy `bytes` at the write cursor, growing storage first if needed.
    ///
    /// Growth goes to `write_position() + bytes.len() + grow_increment`.
    /// Returns the number of bytes written.
    pub fn append(&mut self, bytes: &[u8]) -> Result<usize, BufferError> {
        let end = self.write_index + bytes.len();
        if end > self.capacity() {
            self.grow(end.saturating_add(self.config.grow_increment))?;
        }

        self.storage[self.write_index..end].copy_from_slice(bytes);
        self.write_index = end;
        self.counters.add_written(bytes.len());
        Ok(bytes.len())
    }

    /// Overwrite `storage[pos..pos + bytes.len()]` in place; cursors untouched.
    ///
    /// Silently does nothing when the range ends past `capacity()`.
    pub fn patch(&mut self, pos: usize, bytes: &[u8]) {
        let Some(end) = pos.checked_add(bytes.len()) else {
            return;
        };
        if end > self.capacity() {
            return;
        }
        self.storage[pos..end].copy_from_slice(bytes);
    }

    // ---------------------------------------------------------------------
    // Telemetry
    // ---------------------------------------------------------------------

    pub fn counters(&self) -> &BufferCounters {
        &self.counters
    }

    pub fn snapshot(&self) -> BufferSnapshot {
        BufferSnapshot {
            capacity: self.capacity(),
            read_position: self.read_index,
            write_position: self.write_index,
            available: self.available(),
            counters: self.counters.clone(),
        }
    }
}
