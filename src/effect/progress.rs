//! Progress bar effect
//!
//! Fills a range with a background gradient and grows a foreground gradient
//! over it from a starting percentage up to 100 %. Without a duration the bar
//! is painted full at once; with one it animates and stops by itself.

use embassy_time::{Duration, Instant};

use super::{TickOutcome, integer, timer_millis};
use crate::{
    buffer::gradient_range,
    color::{BLACK, ColorValue, Rgb, WHITE},
    config::{EffectTimings, Layout},
    error::{RangeError, Result},
    timer::duration_from_millis,
};

/// Loosely typed progress request as it comes from a client
///
/// Every field is optional; missing values take the documented defaults.
/// Numbers stay `f64` so that non-integer and non-finite input can be
/// rejected with a precise error.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProgressRequest<'a> {
    /// Background gradient start, black by default
    pub bg1: Option<ColorValue<'a>>,
    /// Background gradient end, `bg1` by default
    pub bg2: Option<ColorValue<'a>>,
    /// Foreground gradient start, white by default
    pub fg1: Option<ColorValue<'a>>,
    /// Foreground gradient end, `fg1` by default
    pub fg2: Option<ColorValue<'a>>,
    /// First bar pixel of the range, `0` by default
    pub start: Option<f64>,
    /// Pixels in the range, the bar length by default; clipped to the bar
    pub length: Option<f64>,
    /// Initial fill in percent
    pub starting_fill: Option<f64>,
    /// Animation length in milliseconds; no duration means instant
    pub duration_ms: Option<f64>,
    /// Tick interval in milliseconds
    pub interval_ms: Option<f64>,
}

/// How a progress bar reaches 100 %
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressTiming {
    /// Painted full in one go
    Instant,
    /// Animated over `duration`, sampled every `interval`
    Animated { duration: Duration, interval: Duration },
}

/// Validated progress parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressParams {
    pub background: (Rgb, Rgb),
    pub foreground: (Rgb, Rgb),
    pub start: i64,
    pub length: i64,
    /// Initial fill in percent, `0..=100`
    pub starting_fill: f32,
    pub timing: ProgressTiming,
}

impl ProgressRequest<'_> {
    /// Check every field and resolve defaults
    ///
    /// Nothing is started here, so a rejected request has no side effects.
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    pub fn validate(&self, layout: &Layout, timings: &EffectTimings) -> Result<ProgressParams> {
        let bg1 = resolve_color(self.bg1, BLACK)?;
        let bg2 = resolve_color(self.bg2, bg1)?;
        let fg1 = resolve_color(self.fg1, WHITE)?;
        let fg2 = resolve_color(self.fg2, fg1)?;

        let start = integer(self.start, 0.0, RangeError::Start)?;
        let length = integer(self.length, layout.bar().len as f64, RangeError::Length)?;

        let starting_fill = self.starting_fill.unwrap_or(0.0);
        if !(0.0..=100.0).contains(&starting_fill) {
            return Err(RangeError::StartingFill.into());
        }

        let timing = match self.duration_ms {
            None => ProgressTiming::Instant,
            Some(duration) => {
                let duration = timer_millis(duration, RangeError::Duration)?;
                let interval = self
                    .interval_ms
                    .unwrap_or(f64::from(timings.progress_interval_ms));
                let interval = timer_millis(interval, RangeError::Interval)?;
                ProgressTiming::Animated {
                    duration: duration_from_millis(duration),
                    interval: duration_from_millis(interval),
                }
            }
        };

        Ok(ProgressParams {
            background: (bg1, bg2),
            foreground: (fg1, fg2),
            start,
            length,
            starting_fill: starting_fill as f32,
            timing,
        })
    }
}

fn resolve_color(value: Option<ColorValue<'_>>, default: Rgb) -> Result<Rgb> {
    match value {
        Some(value) => Ok(value.to_color()?),
        None => Ok(default),
    }
}

impl ProgressParams {
    /// Paint background then foreground over the whole range
    pub fn paint_full(&self, bar: &mut [Rgb]) {
        let (bg1, bg2) = self.background;
        let (fg1, fg2) = self.foreground;
        gradient_range(bar, bg1, bg2, self.start, self.length);
        gradient_range(bar, fg1, fg2, self.start, self.length);
    }
}

/// Running progress animation
#[derive(Debug, Clone)]
pub struct ProgressEffect {
    params: ProgressParams,
    duration: Duration,
    started: Instant,
}

impl ProgressEffect {
    pub fn new(params: ProgressParams, duration: Duration, now: Instant) -> Self {
        Self {
            params,
            duration,
            started: now,
        }
    }

    /// Elapsed share of the duration at `now`, capped at `1`
    #[allow(clippy::cast_precision_loss)]
    pub fn progress_at(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started).as_micros() as f32;
        let total = self.duration.as_micros().max(1) as f32;
        (elapsed / total).min(1.0)
    }

    /// Fill percentage at `now`, from the starting fill up to `100`
    pub fn percent_at(&self, now: Instant) -> f32 {
        let from = self.params.starting_fill;
        from + (100.0 - from) * self.progress_at(now)
    }

    /// Redraw the bar for `now`
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    pub fn tick(&self, now: Instant, bar: &mut [Rgb]) -> TickOutcome {
        let params = &self.params;
        let progress = self.progress_at(now);
        let percent = self.percent_at(now);
        let filled = libm::floorf(percent / 100.0 * params.length as f32) as i64;

        let (bg1, bg2) = params.background;
        gradient_range(bar, bg1, bg2, params.start, params.length);
        if filled > 0 {
            let (fg1, fg2) = params.foreground;
            gradient_range(bar, fg1, fg2, params.start, filled);
        }

        if progress >= 1.0 {
            TickOutcome::Finished
        } else {
            TickOutcome::Running
        }
    }
}
