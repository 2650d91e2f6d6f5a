mod tests {
    use frame_flow::FrameTracker;

    #[test]
    fn test_exact_timestamp_fps10() {
        let tracker = FrameTracker::new(10.0);
        assert_eq!(tracker.get_exact_timestamp_ms(0), 0);
        assert_eq!(tracker.get_exact_timestamp_ms(1), 100);
        assert_eq!(tracker.get_exact_timestamp_ms(5), 500);
    }

    #[test]
    fn test_exact_timestamp_fps24() {
        // 1000 / 24 = 41.67ms per frame
        let tracker = FrameTracker::new(24.0);
        assert_eq!(tracker.micros_per_frame(), 41_667);
        assert_eq!(tracker.get_exact_timestamp_ms(1), 42);
        assert_eq!(tracker.get_exact_timestamp_ms(24), 1000);
    }

    #[test]
    fn test_interval_frames_fps10() {
        let tracker = FrameTracker::new(10.0);
        assert_eq!(tracker.get_interval_frames(0), (0, 1));
        assert_eq!(tracker.get_interval_frames(99), (0, 1));
        assert_eq!(tracker.get_interval_frames(100), (1, 2));
        assert_eq!(tracker.get_interval_frames(250), (2, 3));
    }

    #[test]
    fn test_interval_brackets_the_timestamp() {
        let tracker = FrameTracker::new(24.0);
        for now in [0u32, 41, 42, 43, 500, 999, 1000, 123_456] {
            let (low, high) = tracker.get_interval_frames(now);
            assert!(tracker.get_exact_timestamp_ms(low) <= now);
            assert!(tracker.get_exact_timestamp_ms(high) >= now);
            assert_eq!(high, low + 1);
        }
    }

    #[test]
    fn test_epoch() {
        let tracker = FrameTracker::with_epoch(10.0, 1000);
        // Before frame 0 clamps to frame 0.
        assert_eq!(tracker.get_interval_frames(500), (0, 0));
        assert_eq!(tracker.get_interval_frames(1000), (0, 1));
        assert_eq!(tracker.get_interval_frames(1150), (1, 2));
        assert_eq!(tracker.get_exact_timestamp_ms(0), 1000);
        assert_eq!(tracker.get_exact_timestamp_ms(2), 1200);
    }

    #[test]
    fn test_micros_per_frame() {
        assert_eq!(FrameTracker::new(10.0).micros_per_frame(), 100_000);
        assert_eq!(FrameTracker::new(90.0).micros_per_frame(), 11_111);
    }
}
