use super::RaveContext;
use crate::color::Rgb;

/// Rainbow wave shifted by one pixel per frame
pub(super) fn paint(ctx: &mut RaveContext, leds: &mut [Rgb]) {
    let len = leds.len();
    let shift = ctx.offset as usize % len;
    for (i, led) in leds.iter_mut().enumerate() {
        let hue = ((i + shift) % len) as f32 / len as f32 * 360.0;
        *led = ctx.color(hue, 1.0, 1.0);
    }
}

/// Two rainbows running away from each other, one per half
pub(super) fn paint_split(ctx: &mut RaveContext, leds: &mut [Rgb]) {
    let mid = leds.len() / 2;
    if mid == 0 {
        paint(ctx, leds);
        return;
    }

    let shift = ctx.offset as usize % mid;
    let (left, right) = leds.split_at_mut(mid);
    for (i, led) in left.iter_mut().enumerate() {
        let hue = ((i + shift) % mid) as f32 / mid as f32 * 360.0;
        *led = ctx.color(hue, 1.0, 1.0);
    }
    for (i, led) in right.iter_mut().enumerate() {
        // Mirror position counts down from `mid`; `i <= mid` always holds
        let hue = ((mid - i + shift) % mid) as f32 / mid as f32 * 360.0;
        *led = ctx.color(hue, 1.0, 1.0);
    }
}
