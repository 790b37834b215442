//! Frame buffer shared by the bar and the boards
//!
//! The buffer length is fixed when it is created. Every write is checked
//! against that length: range operations clip, single pixel writes reject.

use heapless::Vec;

use crate::bounds::Segment;
use crate::color::{BLACK, Rgb, fill_gradient, rgb_to_u32};
use crate::error::{InitError, RangeError};

/// Pixel frame with room for up to `MAX_PIXELS` pixels
#[derive(Debug, Clone)]
pub struct PixelBuffer<const MAX_PIXELS: usize> {
    pixels: Vec<Rgb, MAX_PIXELS>,
}

impl<const MAX_PIXELS: usize> PixelBuffer<MAX_PIXELS> {
    /// Create a black frame of `len` pixels
    pub fn new(len: usize) -> Result<Self, InitError> {
        let mut pixels = Vec::new();
        pixels.resize(len, BLACK).map_err(|()| InitError::Capacity {
            required: len,
            capacity: MAX_PIXELS,
        })?;
        Ok(Self { pixels })
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Rgb> {
        self.pixels.get(index).copied()
    }

    /// Read-only view of the current frame
    pub fn as_slice(&self) -> &[Rgb] {
        &self.pixels
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [Rgb] {
        &mut self.pixels
    }

    /// Packed `0xRRGGBB` values of the current frame
    pub fn iter_packed(&self) -> impl Iterator<Item = u32> + '_ {
        self.pixels.iter().map(|&color| rgb_to_u32(color))
    }

    /// Paint `[start, start + length)` with `color`
    ///
    /// The window is clipped to the frame; `length <= 0` does nothing.
    /// Returns the pixels that were actually written.
    pub fn fill(&mut self, color: Rgb, start: i64, length: i64) -> Option<Segment> {
        fill_range(&mut self.pixels, color, start, length)
    }

    /// Paint `[start, start + length)` with a gradient from `from` to `to`
    ///
    /// See [`gradient_range`] for the clipping rules.
    pub fn gradient(&mut self, from: Rgb, to: Rgb, start: i64, length: i64) -> Option<Segment> {
        gradient_range(&mut self.pixels, from, to, start, length)
    }

    /// Set a single pixel
    pub fn set_pixel(&mut self, index: usize, color: Rgb) -> Result<(), RangeError> {
        let len = self.len();
        let pixel = self
            .pixels
            .get_mut(index)
            .ok_or(RangeError::PixelIndex { index, len })?;
        *pixel = color;
        Ok(())
    }

    /// Set many pixels at once
    ///
    /// Every index is checked before anything is written, so a bad entry
    /// leaves the frame untouched. Duplicate indices resolve to the last
    /// entry in input order.
    pub fn set_many(&mut self, updates: &[(usize, Rgb)]) -> Result<(), RangeError> {
        let len = self.len();
        if let Some(&(index, _)) = updates.iter().find(|(index, _)| *index >= len) {
            return Err(RangeError::PixelIndex { index, len });
        }
        for &(index, color) in updates {
            self.pixels[index] = color;
        }
        Ok(())
    }

    /// Black out the whole frame
    pub fn clear(&mut self) {
        self.pixels.fill(BLACK);
    }
}

/// Paint `[start, start + length)` of `leds` with `color`, clipped
pub fn fill_range(leds: &mut [Rgb], color: Rgb, start: i64, length: i64) -> Option<Segment> {
    let segment = Segment::clip(start, length, leds.len())?;
    leds[segment.start..segment.end()].fill(color);
    Some(segment)
}

/// Paint `[start, start + length)` of `leds` with a gradient, clipped
///
/// The gradient is computed over the full requested length, so clipping
/// keeps the colors of the visible part where they would have been.
pub fn gradient_range(
    leds: &mut [Rgb],
    from: Rgb,
    to: Rgb,
    start: i64,
    length: i64,
) -> Option<Segment> {
    let segment = Segment::clip(start, length, leds.len())?;
    let first_step = usize::try_from(i64::try_from(segment.start).ok()? - start).ok()?;
    let steps = usize::try_from(length).unwrap_or(usize::MAX);
    fill_gradient(
        &mut leds[segment.start..segment.end()],
        from,
        to,
        first_step,
        steps,
    );
    Some(segment)
}
