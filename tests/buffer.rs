mod tests {
    use myrtio_board_composer::{
        InitError, PixelBuffer, RangeError,
        bounds::Segment,
        color::{BLACK, Rgb, WHITE},
    };

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const GREEN: Rgb = Rgb { r: 0, g: 255, b: 0 };
    const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };

    fn buffer() -> PixelBuffer<16> {
        PixelBuffer::new(10).expect("fits")
    }

    #[test]
    fn test_new_is_black() {
        let buffer = buffer();
        assert_eq!(buffer.len(), 10);
        assert!(buffer.as_slice().iter().all(|&led| led == BLACK));
        assert!(buffer.iter_packed().all(|packed| packed == 0));
    }

    #[test]
    fn test_capacity_is_checked() {
        let result = PixelBuffer::<4>::new(5);
        assert_eq!(
            result.err(),
            Some(InitError::Capacity {
                required: 5,
                capacity: 4
            })
        );
    }

    #[test]
    fn test_fill_writes_exactly_the_window() {
        let mut buffer = buffer();
        assert_eq!(buffer.fill(RED, 2, 3), Some(Segment::new(2, 3)));
        for (index, &led) in buffer.as_slice().iter().enumerate() {
            let expected = if (2..5).contains(&index) { RED } else { BLACK };
            assert_eq!(led, expected, "pixel {index}");
        }
    }

    #[test]
    fn test_fill_clips_to_the_frame() {
        let mut buffer = buffer();
        assert_eq!(buffer.fill(RED, -2, 4), Some(Segment::new(0, 2)));
        assert_eq!(buffer.fill(BLUE, 8, 10), Some(Segment::new(8, 2)));
        assert_eq!(buffer.get(1), Some(RED));
        assert_eq!(buffer.get(2), Some(BLACK));
        assert_eq!(buffer.get(9), Some(BLUE));
    }

    #[test]
    fn test_fill_empty_windows_are_no_ops() {
        let mut buffer = buffer();
        assert_eq!(buffer.fill(RED, 3, 0), None);
        assert_eq!(buffer.fill(RED, 3, -4), None);
        assert_eq!(buffer.fill(RED, 20, 5), None);
        assert_eq!(buffer.fill(RED, -20, 5), None);
        assert!(buffer.as_slice().iter().all(|&led| led == BLACK));
    }

    #[test]
    fn test_gradient_of_one_color_is_a_fill() {
        for (start, length) in [(0, 1), (0, 10), (3, 4), (-3, 6), (7, 9)] {
            let mut filled = buffer();
            let mut graded = buffer();
            filled.fill(GREEN, start, length);
            graded.gradient(GREEN, GREEN, start, length);
            assert_eq!(filled.as_slice(), graded.as_slice(), "{start}+{length}");
        }
    }

    #[test]
    fn test_gradient_endpoints() {
        let mut buffer = buffer();
        buffer.gradient(BLACK, WHITE, 0, 3);
        assert_eq!(buffer.get(0), Some(BLACK));
        assert_eq!(buffer.get(1), Some(Rgb::new(128, 128, 128)));
        assert_eq!(buffer.get(2), Some(WHITE));

        buffer.gradient(RED, BLUE, 5, 1);
        assert_eq!(buffer.get(5), Some(RED));
    }

    #[test]
    fn test_gradient_keeps_colors_when_clipped() {
        let mut buffer = buffer();
        buffer.gradient(BLACK, WHITE, -1, 3);
        assert_eq!(buffer.get(0), Some(Rgb::new(128, 128, 128)));
        assert_eq!(buffer.get(1), Some(WHITE));
        assert_eq!(buffer.get(2), Some(BLACK));
    }

    #[test]
    fn test_set_pixel_bounds() {
        let mut buffer = buffer();
        assert_eq!(buffer.set_pixel(9, RED), Ok(()));
        assert_eq!(buffer.get(9), Some(RED));
        assert_eq!(
            buffer.set_pixel(10, RED),
            Err(RangeError::PixelIndex { index: 10, len: 10 })
        );
    }

    #[test]
    fn test_set_many_last_write_wins() {
        let mut buffer = buffer();
        buffer
            .set_many(&[(1, RED), (2, GREEN), (1, BLUE)])
            .expect("valid indices");
        assert_eq!(buffer.get(1), Some(BLUE));
        assert_eq!(buffer.get(2), Some(GREEN));
        let untouched = [0, 3, 4, 5, 6, 7, 8, 9];
        assert!(untouched.iter().all(|&index| buffer.get(index) == Some(BLACK)));
    }

    #[test]
    fn test_set_many_rejects_the_whole_batch() {
        let mut buffer = buffer();
        assert_eq!(
            buffer.set_many(&[(1, RED), (10, BLUE)]),
            Err(RangeError::PixelIndex { index: 10, len: 10 })
        );
        assert_eq!(buffer.get(1), Some(BLACK));
    }

    #[test]
    fn test_clear() {
        let mut buffer = buffer();
        buffer.fill(WHITE, 0, 10);
        buffer.clear();
        assert!(buffer.as_slice().iter().all(|&led| led == BLACK));
    }
}
