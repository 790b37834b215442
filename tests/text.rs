mod tests {
    use myrtio_board_composer::{
        RangeError, TextLayout,
        font::{BLANK_WIDTH, glyph},
        text::{MAX_TEXT_COLUMNS, text_width},
    };

    #[test]
    fn test_glyphs_are_trimmed() {
        assert_eq!(glyph('A').width(), 5);
        assert_eq!(glyph('A').advance(), 6);
        assert_eq!(glyph('I').columns(), &[0x41, 0x7F, 0x41]);
        assert_eq!(glyph('!').width(), 1);
        assert!(!glyph('!').is_blank());
    }

    #[test]
    fn test_unknown_characters_are_blank() {
        for ch in [' ', 'é', '\n', '\u{1F600}'] {
            let glyph = glyph(ch);
            assert!(glyph.is_blank(), "{ch:?}");
            assert_eq!(glyph.width(), BLANK_WIDTH, "{ch:?}");
        }
    }

    #[test]
    fn test_layout_width_counts_spacers() {
        let layout = TextLayout::new("HI").expect("short text");
        // H is 5 columns, I is 3, each followed by a spacer
        assert_eq!(layout.width(), 10);
        assert_eq!(text_width("HI"), 10);
        assert_eq!(text_width("H I"), 14);
        assert_eq!(TextLayout::new("").map(|layout| layout.width()), Ok(0));
    }

    #[test]
    fn test_column_at_is_blank_outside() {
        let layout = TextLayout::new("HI").expect("short text");
        assert_eq!(layout.column_at(-1), 0);
        assert_eq!(layout.column_at(i64::MIN), 0);
        assert_eq!(layout.column_at(0), 0x7F);
        assert_eq!(layout.column_at(5), 0);
        assert_eq!(layout.column_at(6), 0x41);
        assert_eq!(layout.column_at(10), 0);
        assert_eq!(layout.column_at(i64::MAX), 0);
    }

    #[test]
    fn test_text_too_long() {
        let fits = "W".repeat(MAX_TEXT_COLUMNS / 6);
        assert!(TextLayout::new(&fits).is_ok());

        let too_long = "W".repeat(MAX_TEXT_COLUMNS / 6 + 1);
        assert_eq!(TextLayout::new(&too_long), Err(RangeError::TextTooLong));
    }
}
