mod tests {
    use embassy_time::Duration;
    use frame_flow::math8::{blend8, progress8};

    #[test]
    fn test_blend8() {
        assert_eq!(blend8(255, 128, 128), 191);
        assert_eq!(blend8(0, 128, 255), 128);
        assert_eq!(blend8(255, 0, 128), 127);
        assert_eq!(blend8(255, 128, 0), 255);
    }

    #[test]
    fn test_blend8_endpoints_are_exact() {
        for (a, b) in [(0u8, 255u8), (255, 0), (17, 213), (128, 127)] {
            assert_eq!(blend8(a, b, 0), a);
            assert_eq!(blend8(a, b, 255), b);
        }
    }

    #[test]
    fn test_progress8() {
        assert_eq!(
            progress8(Duration::from_millis(0), Duration::from_millis(100)),
            0
        );
        assert_eq!(
            progress8(Duration::from_millis(50), Duration::from_millis(100)),
            127
        );
        assert_eq!(
            progress8(Duration::from_millis(100), Duration::from_millis(100)),
            255
        );
    }

    #[test]
    fn test_progress8_zero_duration() {
        assert_eq!(
            progress8(Duration::from_millis(10), Duration::from_millis(0)),
            0
        );
    }
}
