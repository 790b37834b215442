//! Everything at once
//!
//! One of the split modes runs underneath and is swapped for a randomly
//! picked one every [`MODE_ROTATION_FRAMES`] frames. Random overlays go on top.

use super::{RaveContext, RaveMode, chase, overlay, pulse, rainbow, strobe};
use crate::color::Rgb;

const MODE_ROTATION_FRAMES: u32 = 30;
const GLITCH_EVERY: u32 = 7;
const SUB_MODES: [RaveMode; 4] = [
    RaveMode::Rainbow,
    RaveMode::Strobe,
    RaveMode::Pulse,
    RaveMode::Chase,
];

#[derive(Debug, Clone, Copy, Default)]
pub(super) struct CrazyState {
    mode: RaveMode,
    frames: u32,
    glitches: u32,
}

pub(super) fn paint(ctx: &mut RaveContext, leds: &mut [Rgb]) {
    ctx.crazy.frames += 1;
    if ctx.crazy.frames >= MODE_ROTATION_FRAMES {
        ctx.crazy.frames = 0;
        ctx.crazy.mode = SUB_MODES[ctx.rng.below(SUB_MODES.len())];
    }

    match ctx.crazy.mode {
        RaveMode::Rainbow => rainbow::paint_split(ctx, leds),
        RaveMode::Strobe => strobe::paint_split(ctx, leds),
        RaveMode::Pulse => pulse::paint_split(ctx, leds),
        RaveMode::Chase | RaveMode::Crazy => chase::paint_split(ctx, leds),
    }

    ctx.crazy.glitches = ctx.crazy.glitches.wrapping_add(1);
    if ctx.rng.chance(0.1) || ctx.crazy.glitches % GLITCH_EVERY == 0 {
        overlay::glitch(ctx, leds);
    }
    if ctx.rng.chance(0.5) {
        let length = ctx.rng.below(15) + 5;
        overlay::strobe_burst(ctx, leds, length);
    }
    let attempts = ctx.rng.below(5) + 3;
    overlay::sparkles(ctx, leds, attempts, 0.6);
    if ctx.rng.chance(0.2) {
        overlay::inversion(ctx, leds);
    }
    if ctx.rng.chance(0.3) {
        overlay::rotating_segments(ctx, leds);
    }
    if ctx.rng.chance(0.15) {
        overlay::lightning(ctx, leds);
    }
    if ctx.rng.chance(0.25) {
        overlay::triple_rainbow(ctx, leds);
    }
    // Chaos pixels
    overlay::sparkles(ctx, leds, 10, 0.4);
}

#[cfg(test)]
mod tests {
    use super::*;

    const BAR: usize = 120;

    fn paint_frames(ctx: &mut RaveContext, leds: &mut [Rgb], frames: usize) {
        for _ in 0..frames {
            paint(ctx, leds);
            // Hold the current sub-mode
            ctx.crazy.frames = 0;
        }
    }

    fn assert_continued(ctx: &RaveContext, before: &[f32]) {
        let after = ctx.chasers.positions();
        let speeds = ctx.chasers.speeds();
        for ((from, to), speed) in before.iter().zip(after).zip(speeds) {
            assert!((to - from).abs() <= speed + 1e-4, "{from} -> {to}");
        }
    }

    #[test]
    fn test_chasers_pause_while_other_mode_runs() {
        let mut ctx = RaveContext::new(1.0, 7);
        let mut leds = [Rgb::default(); BAR];
        let initial = ctx.chasers.positions();

        ctx.crazy.mode = RaveMode::Chase;
        paint_frames(&mut ctx, &mut leds, 20);
        let chased = ctx.chasers.positions();
        assert_ne!(chased, initial);

        ctx.crazy.mode = RaveMode::Rainbow;
        paint_frames(&mut ctx, &mut leds, 20);
        assert_eq!(ctx.chasers.positions(), chased);

        ctx.crazy.mode = RaveMode::Chase;
        paint_frames(&mut ctx, &mut leds, 1);
        assert_continued(&ctx, &chased);
        assert_ne!(ctx.chasers.positions(), initial);
    }

    #[test]
    fn test_rotation_keeps_chasers() {
        let mut ctx = RaveContext::new(1.0, 42);
        let mut leds = [Rgb::default(); BAR];
        ctx.crazy.mode = RaveMode::Chase;

        for _ in 0..20 {
            paint_frames(&mut ctx, &mut leds, 5);
            let before = ctx.chasers.positions();
            ctx.crazy.frames = MODE_ROTATION_FRAMES - 1;
            paint(&mut ctx, &mut leds);
            assert_eq!(ctx.crazy.frames, 0);
            assert_continued(&ctx, &before);
            ctx.crazy.mode = RaveMode::Chase;
        }
    }
}
