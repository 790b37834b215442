mod gradient;
mod hsv;
mod parse;
mod utils;

pub use gradient::fill_gradient;
pub use hsv::hsv_to_rgb;
pub use parse::{ChannelObject, ColorValue, KeySet, text_to_color};
use smart_leds::RGB8;
pub use utils::{add_colors, invert, rgb_from_u32, rgb_to_u32, scale_color};

pub type Rgb = RGB8;

/// All channels off
pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
/// All channels at full level
pub const WHITE: Rgb = Rgb {
    r: 255,
    g: 255,
    b: 255,
};
