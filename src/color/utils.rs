use crate::{
    color::Rgb,
    math8::{qadd8, scale8},
};

/// Create an RGB color from a u32 value (0xRRGGBB format)
///
/// Bits above the low 24 are ignored.
#[allow(clippy::cast_possible_truncation)]
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}

/// Pack an RGB color into a u32 value (0xRRGGBB format)
pub const fn rgb_to_u32(color: Rgb) -> u32 {
    ((color.r as u32) << 16) | ((color.g as u32) << 8) | color.b as u32
}

/// Channel-wise saturating sum of two colors
#[inline]
pub fn add_colors(a: Rgb, b: Rgb) -> Rgb {
    Rgb {
        r: qadd8(a.r, b.r),
        g: qadd8(a.g, b.g),
        b: qadd8(a.b, b.b),
    }
}

/// Complement of every channel
#[inline]
pub fn invert(color: Rgb) -> Rgb {
    Rgb {
        r: 255 - color.r,
        g: 255 - color.g,
        b: 255 - color.b,
    }
}

/// Scale every channel by `scale` (0-255 = 0.0-1.0)
#[inline]
pub fn scale_color(color: Rgb, scale: u8) -> Rgb {
    Rgb {
        r: scale8(color.r, scale),
        g: scale8(color.g, scale),
        b: scale8(color.b, scale),
    }
}
