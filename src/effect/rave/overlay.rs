//! Random layers painted over a rave frame

use super::RaveContext;
use crate::{
    buffer::fill_range,
    color::{Rgb, add_colors, invert, rgb_from_u32, scale_color},
    math8::unit_to_u8,
};

const SEGMENT_SIZE: usize = 8;

const FLASH_WHITE: Rgb = rgb_from_u32(0x00FF_FFFF);
const FLASH_YELLOW: Rgb = rgb_from_u32(0x00FF_FF00);

/// Run of `length` pixels of one random color from a random position,
/// wrapping past the end of the bar
pub(super) fn strobe_burst(ctx: &mut RaveContext, leds: &mut [Rgb], length: usize) {
    let len = leds.len();
    let from = ctx.rng.below(len);
    let color = ctx.random_color();
    for i in 0..length {
        leds[(from + i) % len] = color;
    }
}

/// Up to `attempts` single random pixels, each drawn with `chance`
pub(super) fn sparkles(ctx: &mut RaveContext, leds: &mut [Rgb], attempts: usize, chance: f32) {
    for _ in 0..attempts {
        if ctx.rng.chance(chance) {
            let at = ctx.rng.below(leds.len());
            leds[at] = ctx.random_color();
        }
    }
}

/// Solid block of 5 to 24 pixels somewhere on the bar
pub(super) fn glitch(ctx: &mut RaveContext, leds: &mut [Rgb]) {
    let length = ctx.rng.below(20) + 5;
    // Blocks longer than the bar start before it and get clipped
    let room = leds.len() as f32 - length as f32;
    let start = libm::floorf(ctx.rng.next_f32() * room) as i64;
    let color = ctx.random_color();
    fill_range(leds, color, start, length as i64);
}

/// Invert 10 to 29 pixels starting in the first half
pub(super) fn inversion(ctx: &mut RaveContext, leds: &mut [Rgb]) {
    let len = leds.len();
    let start = ctx.rng.below(len / 2);
    let length = ctx.rng.below(20) + 10;
    let end = (start + length).min(len);
    for led in &mut leds[start..end] {
        *led = invert(*led);
    }
}

/// Repaint about half of the 8-pixel segments with a rippling color
pub(super) fn rotating_segments(ctx: &mut RaveContext, leds: &mut [Rgb]) {
    let phase = ctx.phase(10);
    let offset = f64::from(ctx.offset);
    for (index, segment) in leds.chunks_exact_mut(SEGMENT_SIZE).enumerate() {
        if !ctx.rng.chance(0.5) {
            continue;
        }
        let color = ctx.color(index as f32 * 40.0 + phase, 1.0, 1.0);
        for (i, led) in segment.iter_mut().enumerate() {
            let brightness = libm::sin(offset / 5.0 + i as f64) * 0.5 + 0.5;
            *led = scale_color(color, unit_to_u8(brightness as f32));
        }
    }
}

/// Whole bar flashes white or yellow
pub(super) fn lightning(ctx: &mut RaveContext, leds: &mut [Rgb]) {
    let flash = if ctx.rng.chance(0.5) {
        FLASH_WHITE
    } else {
        FLASH_YELLOW
    };
    leds.fill(flash);
}

/// Add three rainbows of different speed, one per third of the bar
pub(super) fn triple_rainbow(ctx: &mut RaveContext, leds: &mut [Rgb]) {
    let third = (leds.len() / 3).max(1);
    let offset = ctx.offset as usize;
    for (i, led) in leds.iter_mut().enumerate() {
        let speed = i / third + 1;
        let hue = ((i + offset.wrapping_mul(speed)) % 360) as f32;
        *led = add_colors(*led, ctx.color(hue, 1.0, 0.7));
    }
}
