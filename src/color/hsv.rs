use crate::{color::Rgb, math8::unit_to_u8};

/// Convert HSV to RGB
///
/// * `hue` - degrees, wrapped into `[0, 360)`
/// * `sat` - saturation in `[0, 1]`
/// * `val` - value in `[0, 1]`
pub fn hsv_to_rgb(hue: f32, sat: f32, val: f32) -> Rgb {
    let hue = wrap_hue(hue);
    let sat = sat.clamp(0.0, 1.0);
    let val = val.clamp(0.0, 1.0);

    let chroma = val * sat;
    let x = chroma * (1.0 - libm::fabsf(libm::fmodf(hue / 60.0, 2.0) - 1.0));
    let m = val - chroma;

    let (r, g, b) = match hue {
        h if h < 60.0 => (chroma, x, 0.0),
        h if h < 120.0 => (x, chroma, 0.0),
        h if h < 180.0 => (0.0, chroma, x),
        h if h < 240.0 => (0.0, x, chroma),
        h if h < 300.0 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };

    Rgb {
        r: unit_to_u8(r + m),
        g: unit_to_u8(g + m),
        b: unit_to_u8(b + m),
    }
}

fn wrap_hue(hue: f32) -> f32 {
    if !hue.is_finite() {
        return 0.0;
    }
    let wrapped = libm::fmodf(hue, 360.0);
    let wrapped = if wrapped < 0.0 { wrapped + 360.0 } else { wrapped };
    // fmodf of a tiny negative value can round back up to exactly 360
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}
