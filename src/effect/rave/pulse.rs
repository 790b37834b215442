use super::RaveContext;
use crate::color::Rgb;

const PULSE_PERIOD: f64 = 10.0;
const HUE_SPEED: u32 = 5;

/// Breathing rainbow
pub(super) fn paint(ctx: &mut RaveContext, leds: &mut [Rgb]) {
    let level = (ctx.wave(PULSE_PERIOD) + 1.0) / 2.0;
    let phase = ctx.phase(HUE_SPEED);
    let len = leds.len() as f32;
    for (i, led) in leds.iter_mut().enumerate() {
        let hue = i as f32 / len * 360.0 + phase;
        *led = ctx.color(hue, 1.0, level);
    }
}

/// Halves breathing out of step, their rainbows turning opposite ways
pub(super) fn paint_split(ctx: &mut RaveContext, leds: &mut [Rgb]) {
    let mid = leds.len() / 2;
    if mid == 0 {
        paint(ctx, leds);
        return;
    }

    let left_level = (ctx.wave(PULSE_PERIOD) + 1.0) / 2.0;
    let right_level = (ctx.cowave(PULSE_PERIOD) + 1.0) / 2.0;
    let phase = ctx.phase(HUE_SPEED);

    let (left, right) = leds.split_at_mut(mid);
    let left_len = left.len() as f32;
    let right_len = right.len() as f32;
    for (i, led) in left.iter_mut().enumerate() {
        let hue = i as f32 / left_len * 360.0 + phase;
        *led = ctx.color(hue, 1.0, left_level);
    }
    for (i, led) in right.iter_mut().enumerate() {
        let hue = i as f32 / right_len * 360.0 - phase;
        *led = ctx.color(hue, 1.0, right_level);
    }
}
