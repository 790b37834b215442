mod tests {
    use myrtio_board_composer::{
        ColorError,
        color::{
            ChannelObject, ColorValue, KeySet, Rgb, add_colors, hsv_to_rgb, invert, rgb_from_u32,
            rgb_to_u32, text_to_color,
        },
    };

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const GREEN: Rgb = Rgb { r: 0, g: 255, b: 0 };
    const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };
    const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
    const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };
    const MAGENTA: u32 = 0xFF00FF;

    #[test]
    fn test_text_to_color_forms() {
        for input in [
            "#FF00FF",
            "0xFF00FF",
            "0Xff00ff",
            "FF00FF",
            "ff00ff",
            "  #ff00ff ",
            r#"{"r":255,"g":0,"b":255}"#,
            r#"{"red":255,"green":0,"blue":255}"#,
            r#"{ "b": 255, "r": 255, "g": 0 }"#,
        ] {
            let color = text_to_color(input).unwrap_or_else(|err| panic!("{input}: {err}"));
            assert_eq!(rgb_to_u32(color), MAGENTA, "{input}");
        }
    }

    #[test]
    fn test_text_to_color_errors() {
        assert_eq!(text_to_color("#ZZZZZZ"), Err(ColorError::HexDigits));
        assert_eq!(text_to_color("0x12345G"), Err(ColorError::HexDigits));
        assert_eq!(text_to_color("#+12345"), Err(ColorError::HexDigits));
        assert_eq!(text_to_color("#FFF"), Err(ColorError::HexLength));
        assert_eq!(text_to_color("0xFFFFFFF"), Err(ColorError::HexLength));
        assert_eq!(text_to_color("red"), Err(ColorError::Format));
        assert_eq!(text_to_color(""), Err(ColorError::Format));
        assert_eq!(text_to_color("{not json"), Err(ColorError::Json));
    }

    #[test]
    fn test_channel_object_errors() {
        assert_eq!(
            text_to_color(r#"{"r":255,"green":0,"b":255}"#),
            Err(ColorError::Keys)
        );
        assert_eq!(
            text_to_color(r#"{"r":255,"g":0,"b":255,"a":1}"#),
            Err(ColorError::Keys)
        );
        assert_eq!(
            text_to_color(r#"{"r":256,"g":0,"b":0}"#),
            Err(ColorError::Channel)
        );
        assert_eq!(
            text_to_color(r#"{"r":-1,"g":0,"b":0}"#),
            Err(ColorError::Channel)
        );
        assert_eq!(
            text_to_color(r#"{"r":1.5,"g":0,"b":0}"#),
            Err(ColorError::Channel)
        );
        assert_eq!(text_to_color(r#"{"r":1,"g":0}"#), Err(ColorError::Channel));
    }

    #[test]
    fn test_structured_color_values() {
        let short = ChannelObject::short(1.0, 2.0, 3.0);
        assert_eq!(short.keys(), KeySet::Short);
        assert_eq!(short.to_color(), Ok(Rgb { r: 1, g: 2, b: 3 }));

        let long = ColorValue::Channels(ChannelObject::long(255.0, 0.0, 0.0));
        assert_eq!(long.to_color(), Ok(RED));

        let out_of_range = ColorValue::Channels(ChannelObject::short(0.0, 300.0, 0.0));
        assert_eq!(out_of_range.to_color(), Err(ColorError::Channel));

        assert_eq!(ColorValue::Text("#0000FF").to_color(), Ok(BLUE));
    }

    #[test]
    fn test_color_error_messages() {
        assert_eq!(
            ColorError::HexLength.to_string(),
            "Hex color must be 6 characters long"
        );
        assert_eq!(
            ColorError::Channel.to_string(),
            "Color values must be integers between 0 and 255"
        );
    }

    #[test]
    fn test_packing() {
        assert_eq!(rgb_from_u32(0x123456), Rgb::new(0x12, 0x34, 0x56));
        assert_eq!(rgb_to_u32(Rgb::new(0x12, 0x34, 0x56)), 0x123456);
        // Only the low 24 bits carry color
        assert_eq!(rgb_from_u32(0xFF00_0000), BLACK);
    }

    #[test]
    fn test_hsv_to_rgb() {
        assert_eq!(hsv_to_rgb(0.0, 1.0, 1.0), RED);
        assert_eq!(hsv_to_rgb(120.0, 1.0, 1.0), GREEN);
        assert_eq!(hsv_to_rgb(240.0, 1.0, 1.0), BLUE);
        assert_eq!(hsv_to_rgb(60.0, 1.0, 1.0), Rgb::new(255, 255, 0));
        assert_eq!(hsv_to_rgb(42.0, 0.0, 1.0), WHITE);
        assert_eq!(hsv_to_rgb(42.0, 1.0, 0.0), BLACK);
    }

    #[test]
    fn test_hsv_hue_wraps() {
        assert_eq!(hsv_to_rgb(360.0, 1.0, 1.0), RED);
        assert_eq!(hsv_to_rgb(720.0 + 120.0, 1.0, 1.0), GREEN);
        assert_eq!(hsv_to_rgb(-120.0, 1.0, 1.0), BLUE);
        assert_eq!(hsv_to_rgb(f32::NAN, 1.0, 1.0), RED);
    }

    #[test]
    fn test_add_and_invert() {
        assert_eq!(add_colors(Rgb::new(200, 10, 0), Rgb::new(100, 10, 0)), Rgb::new(255, 20, 0));
        assert_eq!(invert(RED), Rgb::new(0, 255, 255));
        assert_eq!(invert(BLACK), WHITE);
    }
}
