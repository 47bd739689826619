/// Default initial capacity and growth increment of a buffer, in bytes.
pub const DEFAULT_SIZE: usize = 2048; // 2 KiB

/// Length prefix of every frame on the wire: big-endian `u32` body length.
pub const FRAME_HEADER_LEN: usize = 4;

/// Wire layout of one frame.
///
/// ```text
/// [ body_len (4, big-endian) ]
/// [ body (body_len) ]
/// ```
///
/// No magic, version or checksum: frames are back-to-back on the stream.
pub mod wire {
    pub const LEN_OFFSET: usize = 0;
    pub const BODY_OFFSET: usize = super::FRAME_HEADER_LEN;
}
