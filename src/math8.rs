//! 8-bit channel math

/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * (1 + scale as u16)) >> 8) as u8
}

/// Saturating add of two channels
#[inline]
pub const fn qadd8(a: u8, b: u8) -> u8 {
    a.saturating_add(b)
}

/// Interpolate linearly from `a` to `b`
///
/// `step` goes from `0` (exactly `a`) to `steps - 1` (exactly `b`), rounded
/// to the nearest integer. `steps < 2` yields `a`.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn lerp8(a: u8, b: u8, step: usize, steps: usize) -> u8 {
    if steps < 2 {
        return a;
    }
    let last = (steps - 1) as u128;
    let step = if step as u128 > last { last } else { step as u128 };
    let value = (a as u128 * (last - step) + b as u128 * step + last / 2) / last;
    value as u8
}

/// Convert a unit-range float to a channel value, rounding and clamping
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn unit_to_u8(value: f32) -> u8 {
    let scaled = libm::roundf(value * 255.0);
    if scaled <= 0.0 {
        0
    } else if scaled >= 255.0 {
        255
    } else {
        scaled as u8
    }
}
