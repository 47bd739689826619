use std::fmt;

/// Errors returned by buffer and framing operations.
/// - Every failing operation leaves the buffer unchanged and reusable.
/// - `NotReady` is the only expected, recoverable condition on a live stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// Bad size, position or configuration request.
    InvalidArgument { reason: &'static str, value: i64 },

    /// Position, skip or shift beyond the permitted extent.
    OutOfRange { requested: usize, limit: usize },

    /// Not enough buffered bytes for a full frame yet.
    NotReady { have: usize, need: usize },

    /// Pack attempted before the 4-byte header slot was written.
    NoData { written: usize },

    /// Frame length prefix exceeds the configured maximum.
    FrameTooLarge { len: usize, max: usize },
}

impl BufferError {
    /// True when the caller should read more from the transport and retry.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, BufferError::NotReady { .. })
    }
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use BufferError::*;
        match self {
            InvalidArgument { reason, value } =>
                write!(f, "invalid argument: {} ({})", reason, value),
            OutOfRange { requested, limit } =>
                write!(f, "out of range: {} > {}", requested, limit),
            NotReady { have, need } =>
                write!(f, "frame not ready: have {} bytes, need {}", have, need),
            NoData { written } =>
                write!(f, "no data to pack: {} bytes written", written),
            FrameTooLarge { len, max } =>
                write!(f, "frame too large: {} > {}", len, max),
        }
    }
}

impl std::error::Error for BufferError {}
