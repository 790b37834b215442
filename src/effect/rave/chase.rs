//! Bouncing chasers
//!
//! Eight chasers of different speed and length run over a flickering
//! background and throw sparks whenever they hit an end of the bar.

use super::{RaveContext, overlay};
use crate::color::{Rgb, add_colors};

const BURST_CHANCE: f32 = 0.4;
const BURST_LENGTH: usize = 8;
const SPARKLE_CHANCE: f32 = 0.4;

#[derive(Debug, Clone, Copy)]
struct Chaser {
    pos: f32,
    speed: f32,
    size: u8,
    hue_offset: f32,
    dir: f32,
}

impl Chaser {
    const fn new(pos: f32, speed: f32, size: u8, hue_offset: f32, dir: f32) -> Self {
        Self {
            pos,
            speed,
            size,
            hue_offset,
            dir,
        }
    }
}

const CHASER_COUNT: usize = 8;

#[rustfmt::skip]
const INITIAL_CHASERS: [Chaser; CHASER_COUNT] = [
    Chaser::new(0.0,   2.5, 10, 0.0,    1.0),
    Chaser::new(15.0,  1.8, 12, 120.0,  1.0),
    Chaser::new(30.0,  3.2, 8,  240.0,  1.0),
    Chaser::new(45.0,  1.2, 15, 60.0,  -1.0),
    Chaser::new(60.0,  2.8, 9,  180.0, -1.0),
    Chaser::new(75.0,  2.0, 11, 300.0,  1.0),
    Chaser::new(90.0,  3.5, 7,  30.0,  -1.0),
    Chaser::new(105.0, 1.5, 14, 200.0,  1.0),
];

/// Chaser positions and directions, kept between frames
#[derive(Debug, Clone)]
pub(super) struct Chasers([Chaser; CHASER_COUNT]);

impl Chasers {
    pub(super) const fn new() -> Self {
        Self(INITIAL_CHASERS)
    }
}

#[cfg(test)]
impl Chasers {
    pub(super) fn positions(&self) -> [f32; CHASER_COUNT] {
        self.0.map(|chaser| chaser.pos)
    }

    pub(super) fn speeds(&self) -> [f32; CHASER_COUNT] {
        self.0.map(|chaser| chaser.speed)
    }
}

/// Hue of the sparks thrown at a bounce
#[derive(Debug, Clone, Copy)]
enum SparkHue {
    /// Close to the chaser's own hue
    Near,
    Random,
}

struct ChaseStyle {
    background_value: f32,
    sparks: usize,
    spark_spread: f32,
    spark_hue: SparkHue,
    /// Hue rotation in degrees per frame
    hue_speed: u32,
    /// Hue change along the trail, in degrees per pixel
    trail_hue_step: f32,
}

const SOLO: ChaseStyle = ChaseStyle {
    background_value: 0.4,
    sparks: 20,
    spark_spread: 15.0,
    spark_hue: SparkHue::Near,
    hue_speed: 15,
    trail_hue_step: 8.0,
};

const SPLIT: ChaseStyle = ChaseStyle {
    background_value: 0.3,
    sparks: 10,
    spark_spread: 10.0,
    spark_hue: SparkHue::Random,
    hue_speed: 20,
    trail_hue_step: 10.0,
};

/// Chase mode on its own, with strobe bursts and sparkles
pub(super) fn paint(ctx: &mut RaveContext, leds: &mut [Rgb]) {
    background(ctx, leds, &SOLO);
    if ctx.rng.chance(BURST_CHANCE) {
        overlay::strobe_burst(ctx, leds, BURST_LENGTH);
    }
    overlay::sparkles(ctx, leds, 1, SPARKLE_CHANCE);
    run(ctx, leds, &SOLO);
}

/// Dimmer, faster chase used inside the crazy mode
pub(super) fn paint_split(ctx: &mut RaveContext, leds: &mut [Rgb]) {
    background(ctx, leds, &SPLIT);
    run(ctx, leds, &SPLIT);
}

fn background(ctx: &mut RaveContext, leds: &mut [Rgb], style: &ChaseStyle) {
    let hue = ctx.rng.hue();
    leds.fill(ctx.color(hue, 0.8, style.background_value));
}

fn run(ctx: &mut RaveContext, leds: &mut [Rgb], style: &ChaseStyle) {
    let len = leds.len() as f32;
    let phase = ctx.phase(style.hue_speed);

    for index in 0..CHASER_COUNT {
        let mut chaser = ctx.chasers.0[index];
        let size = f32::from(chaser.size);
        let limit = len - size;

        chaser.pos += chaser.speed * chaser.dir;
        if chaser.pos <= 0.0 || chaser.pos >= limit {
            chaser.dir = -chaser.dir;
            for _ in 0..style.sparks {
                let at = libm::floorf(chaser.pos + (ctx.rng.next_f32() - 0.5) * style.spark_spread);
                let hue = match style.spark_hue {
                    SparkHue::Near => chaser.hue_offset + ctx.rng.next_f32() * 60.0,
                    SparkHue::Random => ctx.rng.hue(),
                };
                if at >= 0.0 && at < len {
                    leds[at as usize] = ctx.color(hue, 1.0, 1.0);
                }
            }
        }
        // A bar shorter than the chaser pins it to the start
        chaser.pos = chaser.pos.min(limit).max(0.0);

        let base_hue = phase + chaser.hue_offset;
        for i in 0..chaser.size {
            let step = f32::from(i);
            let at = libm::floorf(chaser.pos + step);
            if at < 0.0 || at >= len {
                continue;
            }
            let fade = 1.0 - step / size;
            let trail = ctx.color(base_hue + step * style.trail_hue_step, 1.0, fade);
            let led = &mut leds[at as usize];
            *led = add_colors(*led, trail);
        }

        ctx.chasers.0[index] = chaser;
    }
}
