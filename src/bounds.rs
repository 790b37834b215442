use crate::Rgb;

/// Contiguous range of pixels in the frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Segment {
    pub start: usize,
    pub len: usize,
}

impl Segment {
    pub const fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    /// One past the last pixel of the segment
    pub const fn end(self) -> usize {
        self.start + self.len
    }

    pub const fn is_empty(self) -> bool {
        self.len == 0
    }

    /// Intersect a requested `[start, start + length)` window with `0..limit`
    ///
    /// Negative starts and overlong lengths are clipped. Returns `None` when
    /// nothing is left, including for `length <= 0`.
    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    pub fn clip(start: i64, length: i64, limit: usize) -> Option<Self> {
        if length <= 0 {
            return None;
        }
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let from = start.clamp(0, limit);
        let to = start.saturating_add(length).clamp(0, limit);
        if to <= from {
            return None;
        }
        // Both ends are within 0..=limit, which came from a usize
        Some(Self::new(from as usize, (to - from) as usize))
    }
}

/// Get a slice of the LEDs within the segment
///
/// The segment must already be validated against the frame length.
pub(crate) fn bounded(leds: &mut [Rgb], segment: Segment) -> &mut [Rgb] {
    let end = segment.end().min(leds.len());
    let start = segment.start.min(end);
    &mut leds[start..end]
}
