mod tests {
    use myrtio_board_composer::{
        BoardWiring, DisplayConfig, EffectTimings, InitError, Layout, RangeError, bounds::Segment,
    };

    fn config(bar_pixels: u16, boards: u8) -> DisplayConfig {
        DisplayConfig {
            bar_pixels,
            boards,
            ..DisplayConfig::default()
        }
    }

    #[test]
    fn test_defaults() {
        let config = DisplayConfig::default();
        assert_eq!(config.bar_pixels, 0);
        assert_eq!(config.boards, 0);
        assert_eq!((config.board_width, config.board_height), (32, 8));
        assert_eq!(config.wiring, BoardWiring::ColumnSerpentine);
        assert_eq!(config.timings.progress_interval_ms, 50);
        assert_eq!(config.timings.rave_interval_ms, 50);
        assert_eq!(config.timings.scroll_step, 1);
    }

    #[test]
    fn test_layout_segments() {
        let layout = Layout::new(&config(10, 2), 600).expect("fits");
        assert_eq!(layout.len(), 522);
        assert_eq!(layout.bar(), Segment::new(0, 10));
        assert_eq!(layout.boards(), Segment::new(10, 512));
        assert_eq!(layout.board(1), Some(Segment::new(266, 256)));
        assert_eq!(layout.board(2), None);
        assert_eq!(layout.visible_width(), 64);
    }

    #[test]
    fn test_layout_errors() {
        assert_eq!(
            Layout::new(&config(10, 2), 100),
            Err(InitError::Capacity {
                required: 522,
                capacity: 100
            })
        );

        let mut short = config(0, 1);
        short.board_height = 7;
        assert_eq!(Layout::new(&short, 1000), Err(InitError::BoardHeight(7)));

        let mut empty = config(0, 1);
        empty.board_width = 0;
        assert_eq!(Layout::new(&empty, 1000), Err(InitError::BoardSize));

        // Board dimensions do not matter without boards
        let mut no_boards = config(5, 0);
        no_boards.board_height = 7;
        assert!(Layout::new(&no_boards, 5).is_ok());
    }

    #[test]
    fn test_column_serpentine_wiring() {
        let layout = Layout::new(&config(10, 2), 600).expect("fits");
        assert_eq!(layout.board_pixel(0, 0, 0), Ok(10));
        assert_eq!(layout.board_pixel(0, 0, 7), Ok(17));
        assert_eq!(layout.board_pixel(0, 1, 0), Ok(25));
        assert_eq!(layout.board_pixel(0, 1, 7), Ok(18));
        assert_eq!(layout.board_pixel(1, 0, 0), Ok(266));
        assert_eq!(layout.window_pixel(32, 0), Some(266));
        assert_eq!(layout.board_pixel(0, 32, 0), Err(RangeError::BoardCoordinate));
        assert_eq!(layout.board_pixel(0, 0, 8), Err(RangeError::BoardCoordinate));
        assert_eq!(layout.board_pixel(2, 0, 0), Err(RangeError::BoardCoordinate));
        assert_eq!(layout.window_pixel(64, 0), None);
    }

    #[test]
    fn test_row_major_wiring() {
        let mut config = config(10, 1);
        config.wiring = BoardWiring::RowMajor;
        let layout = Layout::new(&config, 300).expect("fits");
        assert_eq!(layout.board_pixel(0, 1, 0), Ok(11));
        assert_eq!(layout.board_pixel(0, 0, 1), Ok(42));
    }

    #[test]
    fn test_from_json() {
        let config = DisplayConfig::from_json(
            r#"{"barPixels":120,"boards":2,"wiring":"row_major","timings":{"scrollStep":2}}"#,
        )
        .expect("valid document");
        assert_eq!(config.bar_pixels, 120);
        assert_eq!(config.boards, 2);
        assert_eq!(config.board_width, 32);
        assert_eq!(config.wiring, BoardWiring::RowMajor);
        assert_eq!(
            config.timings,
            EffectTimings {
                scroll_step: 2,
                ..EffectTimings::default()
            }
        );

        assert_eq!(DisplayConfig::from_json("{"), Err(InitError::Document));
    }
}
