//! buffer/framing.rs
//!
//! 4-byte length-prefixed framing.
//!
//! ```text
//! ┌──────────────────────┬─────────────────────────┐
//! │ body_len (u32, BE)   │ body (body_len bytes)   │
//! └──────────────────────┴─────────────────────────┘
//! ```
//!
//! Stream consumers `append` whatever the transport delivered and call
//! `unpack(true)` (or iterate `frames()`) until it reports `NotReady`.

use tracing::{trace, warn};

use crate::buffer::Buffer;
use crate::config::BufferConfig;
use crate::constants::{wire, FRAME_HEADER_LEN};
use crate::types::BufferError;

impl Buffer {
    /// New buffer holding `u32be(body.len()) || body`, read cursor at 0.
    ///
    /// # Errors
    /// - `InvalidArgument` if `body` is longer than `u32::MAX`.
    pub fn build_framed(body: &[u8]) -> Result<Buffer, BufferError> {
        let len = u32::try_from(body.len()).map_err(|_| BufferError::InvalidArgument {
            reason: "frame body longer than u32::MAX",
            value: i64::try_from(body.len()).unwrap_or(i64::MAX),
        })?;

        let mut buf = Buffer::new();
        buf.write_u32(len)?;
        buf.append(body)?;
        Ok(buf)
    }

    /// New buffer with the 4-byte header slot reserved, ready for body fields.
    pub fn packer() -> Buffer {
        Self::reserve_header(Buffer::new())
    }

    /// Like `packer`, with explicit sizing.
    pub fn packer_with_config(config: BufferConfig) -> Result<Buffer, BufferError> {
        Ok(Self::reserve_header(Buffer::with_config(config)?))
    }

    fn reserve_header(mut buf: Buffer) -> Buffer {
        let end = FRAME_HEADER_LEN;
        if buf.capacity() < end {
            buf.storage.resize(end, 0);
        }
        buf.write_index = end;
        buf
    }

    /// Finalize the buffer as one frame: patch the header with the body length
    /// (`write_position() - 4`) and return `storage[0..write_position()]`.
    ///
    /// # Errors
    /// - `NoData` if fewer than 4 bytes were ever written.
    pub fn pack(&mut self) -> Result<&[u8], BufferError> {
        if self.write_index < FRAME_HEADER_LEN {
            return Err(BufferError::NoData { written: self.write_index });
        }

        let body_len = self.write_index - FRAME_HEADER_LEN;
        let body_len = u32::try_from(body_len).map_err(|_| BufferError::InvalidArgument {
            reason: "frame body longer than u32::MAX",
            value: i64::try_from(body_len).unwrap_or(i64::MAX),
        })?;

        self.change_u32(wire::LEN_OFFSET, body_len);
        self.counters.add_packed();
        Ok(self.slice(0, self.write_index))
    }

    /// Extract the frame at the front of the unread region.
    ///
    /// Returns the frame re-wrapped by `build_framed`. With `advance`, every
    /// consumed byte is shifted out of storage so the next frame starts at 0;
    /// without it, the read cursor sits past the frame and the bytes stay put.
    ///
    /// # Errors
    /// - `NotReady` while the header or body is not fully buffered
    /// - `FrameTooLarge` if the length prefix exceeds `max_frame_len`
    pub fn unpack(&mut self, advance: bool) -> Result<Buffer, BufferError> {
        let have = self.available();
        let Some(body_len) = self.peek_u32() else {
            return Err(self.not_ready(have, FRAME_HEADER_LEN));
        };
        let body_len = body_len as usize;

        if let Some(max) = self.config.max_frame_len {
            if body_len > max as usize {
                warn!(body_len, max, "frame length exceeds limit");
                return Err(BufferError::FrameTooLarge { len: body_len, max: max as usize });
            }
        }

        let need = FRAME_HEADER_LEN.saturating_add(body_len);
        if have < need {
            return Err(self.not_ready(have, need));
        }

        let body_start = self.read_index + FRAME_HEADER_LEN;
        let frame = Buffer::build_framed(&self.storage[body_start..body_start + body_len])?;
        self.skip(need)?;

        if advance {
            let consumed = self.read_index;
            self.shift(consumed)?;
        }

        self.counters.add_unpacked();
        trace!(body_len, advance, "frame unpacked");
        Ok(frame)
    }

    fn not_ready(&mut self, have: usize, need: usize) -> BufferError {
        self.counters.add_not_ready();
        trace!(have, need, "frame not ready");
        BufferError::NotReady { have, need }
    }

    /// Body of a framed buffer: bytes after the header up to the write cursor.
    /// Empty if the header slot is incomplete.
    pub fn frame_body(&self) -> &[u8] {
        if self.write_index < FRAME_HEADER_LEN {
            return &[];
        }
        &self.storage[wire::BODY_OFFSET..self.write_index]
    }

    /// Drain every complete frame, compacting as it goes.
    pub fn frames(&mut self) -> Frames<'_> {
        Frames { buf: self, done: false }
    }
}

/// Iterator over `unpack(true)`.
///
/// Ends at the first `NotReady`. Any other error is yielded once, then the
/// iterator ends.
pub struct Frames<'a> {
    buf: &'a mut Buffer,
    done: bool,
}

impl Iterator for Frames<'_> {
    type Item = Result<Buffer, BufferError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.buf.unpack(true) {
            Ok(frame) => Some(Ok(frame)),
            Err(e) if e.is_recoverable() => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

impl std::iter::FusedIterator for Frames<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packer_reserves_zeroed_header() {
        let buf = Buffer::packer();
        assert_eq!(buf.write_position(), FRAME_HEADER_LEN);
        assert_eq!(&buf.as_bytes()[..FRAME_HEADER_LEN], &[0, 0, 0, 0]);
    }

    #[test]
    fn packer_with_tiny_capacity_still_has_header_slot() {
        let cfg = BufferConfig::new(Some(1), Some(8), None);
        let mut buf = Buffer::packer_with_config(cfg).unwrap();
        buf.write_u8(0xAA).unwrap();
        assert_eq!(buf.pack().unwrap(), &[0, 0, 0, 1, 0xAA]);
    }

    #[test]
    fn frame_body_of_short_buffer_is_empty() {
        let mut buf = Buffer::new();
        buf.write_u16(1).unwrap();
        assert!(buf.frame_body().is_empty());
    }
}
