mod tests {
    use myrtio_board_composer::math8::{lerp8, qadd8, scale8, unit_to_u8};

    #[test]
    fn test_scale8() {
        assert_eq!(scale8(255, 128), 128);
        assert_eq!(scale8(0, 128), 0);
        assert_eq!(scale8(128, 128), 64);
        assert_eq!(scale8(128, 255), 128);
        assert_eq!(scale8(128, 0), 0);
    }

    #[test]
    fn test_qadd8() {
        assert_eq!(qadd8(100, 100), 200);
        assert_eq!(qadd8(200, 100), 255);
        assert_eq!(qadd8(255, 255), 255);
    }

    #[test]
    fn test_lerp8_endpoints() {
        assert_eq!(lerp8(10, 200, 0, 5), 10);
        assert_eq!(lerp8(10, 200, 4, 5), 200);
        // Past the last step sticks to the end color
        assert_eq!(lerp8(10, 200, 9, 5), 200);
        // A single step is the start color
        assert_eq!(lerp8(10, 200, 0, 1), 10);
        assert_eq!(lerp8(10, 200, 0, 0), 10);
    }

    #[test]
    fn test_lerp8_midpoints() {
        assert_eq!(lerp8(0, 255, 1, 3), 128);
        assert_eq!(lerp8(255, 0, 1, 3), 128);
        assert_eq!(lerp8(0, 100, 1, 5), 25);
        assert_eq!(lerp8(0, 255, usize::MAX / 2, usize::MAX), 128);
    }

    #[test]
    fn test_unit_to_u8() {
        assert_eq!(unit_to_u8(0.0), 0);
        assert_eq!(unit_to_u8(1.0), 255);
        assert_eq!(unit_to_u8(0.5), 128);
        assert_eq!(unit_to_u8(-3.0), 0);
        assert_eq!(unit_to_u8(7.0), 255);
    }
}
