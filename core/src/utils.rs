/// Render bytes for logs and `Debug`: printable ASCII as `b"..."`, anything else as hex.
pub fn fmt_bytes(b: &[u8]) -> String {
    if b.iter().all(|&c| c.is_ascii_graphic() || c == b' ') {
        format!("b\"{}\"", String::from_utf8_lossy(b))
    } else {
        format!("0x{}", hex::encode(b))
    }
}

/// Like `fmt_bytes`, but cut to `max` bytes with a trailing length note.
pub fn fmt_bytes_truncated(b: &[u8], max: usize) -> String {
    if b.len() <= max {
        return fmt_bytes(b);
    }
    format!("{}.. ({} bytes)", fmt_bytes(&b[..max]), b.len())
}
