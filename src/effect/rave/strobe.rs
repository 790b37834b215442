use super::RaveContext;
use crate::color::Rgb;

pub(super) fn paint(ctx: &mut RaveContext, leds: &mut [Rgb]) {
    let color = ctx.random_color();
    leds.fill(color);
}

/// Complementary colors on the two halves
pub(super) fn paint_split(ctx: &mut RaveContext, leds: &mut [Rgb]) {
    let hue = ctx.rng.hue();
    let mid = leds.len() / 2;
    let (left, right) = leds.split_at_mut(mid);
    left.fill(ctx.color(hue, 1.0, 1.0));
    right.fill(ctx.color(hue + 180.0, 1.0, 1.0));
}
