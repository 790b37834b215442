use crate::{color::Rgb, math8::lerp8};

/// Fill `leds` with a linear RGB gradient
///
/// The gradient spans `steps` positions starting at `first_step`, so a caller
/// can paint a clipped window of a longer gradient. Both endpoints are
/// inclusive: position `0` is `from`, position `steps - 1` is `to`.
pub fn fill_gradient(leds: &mut [Rgb], from: Rgb, to: Rgb, first_step: usize, steps: usize) {
    for (offset, led) in leds.iter_mut().enumerate() {
        let step = first_step + offset;
        *led = Rgb {
            r: lerp8(from.r, to.r, step, steps),
            g: lerp8(from.g, to.g, step, steps),
            b: lerp8(from.b, to.b, step, steps),
        };
    }
}
