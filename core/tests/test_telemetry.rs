#[cfg(test)]
mod telemetry_snapshot_tests {
    use framebuf_core::{buffer::Buffer, config::BufferConfig, telemetry::{BufferCounters, BufferSnapshot}};

    fn make_counters() -> BufferCounters {
        BufferCounters {
            grows: 1,
            bytes_written: 100,
            bytes_read: 80,
            bytes_shifted: 64,
            frames_packed: 2,
            frames_unpacked: 3,
            unpack_not_ready: 4,
        }
    }

    #[test]
    fn counters_follow_buffer_operations() {
        let cfg = BufferConfig::new(Some(4), Some(4), None);
        let mut buf = Buffer::with_config(cfg).unwrap();
        buf.append(&[0, 0, 0, 2, b'o', b'k']).unwrap();
        buf.unpack(true).unwrap();
        let _ = buf.unpack(true);

        let c = buf.counters();
        assert_eq!(c.grows, 1);
        assert_eq!(c.bytes_written, 6);
        assert_eq!(c.bytes_read, 6);
        assert_eq!(c.bytes_shifted, 6);
        assert_eq!(c.frames_unpacked, 1);
        assert_eq!(c.unpack_not_ready, 1);
    }

    #[test]
    fn merge_and_add_assign_agree() {
        let mut a = make_counters();
        a.merge(&make_counters());

        let mut b = make_counters();
        b += make_counters();

        assert_eq!(a, b);
        assert_eq!(a.bytes_written, 200);
        assert_eq!(a.unpack_not_ready, 8);
    }

    #[test]
    fn snapshot_reflects_geometry() {
        let mut buf = Buffer::new();
        buf.write_u64(9).unwrap();
        buf.skip(3).unwrap();

        let snap = buf.snapshot();
        assert_eq!(snap.capacity, buf.capacity());
        assert_eq!(snap.read_position, 3);
        assert_eq!(snap.write_position, 8);
        assert_eq!(snap.available, 5);
        assert!(snap.sanity_check());
        assert!(snap.fill_ratio() > 0.0 && snap.fill_ratio() < 1.0);
    }

    #[test]
    fn snapshot_serializes_to_json() {
        let snap = BufferSnapshot {
            capacity: 16,
            read_position: 0,
            write_position: 4,
            available: 4,
            counters: make_counters(),
        };

        let json = snap.to_json().unwrap();
        assert!(json.contains("\"write_position\":4"));
        assert!(json.contains("\"frames_unpacked\":3"));

        let back: BufferSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snap);
    }

    #[test]
    fn inconsistent_snapshot_fails_sanity_check() {
        let snap = BufferSnapshot {
            capacity: 4,
            read_position: 2,
            write_position: 8,
            available: 6,
            counters: BufferCounters::default(),
        };
        assert!(!snap.sanity_check());
        assert_eq!(BufferSnapshot { capacity: 0, ..snap }.fill_ratio(), 0.0);
    }
}
