//! Bar effects with compile-time known variants
//!
//! At most one effect owns the bar at a time. Effects live in an enum so the
//! scheduler can hold one without allocating, and every tick dispatches
//! through a plain `match`.

mod progress;
mod rave;

use embassy_time::Instant;
pub use progress::{ProgressEffect, ProgressParams, ProgressRequest, ProgressTiming};
pub use rave::{RaveEffect, RaveMode, RaveParams, RaveRequest};

use crate::{
    bounds::{Segment, bounded},
    color::Rgb,
    error::RangeError,
    timer::MAX_TIMER_MS,
};

const EFFECT_NAME_PROGRESS: &str = "progress";
const EFFECT_NAME_RAVE: &str = "rave";

/// Kind of the effect currently running on the bar
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EffectKind {
    Progress,
    Rave,
}

impl EffectKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Progress => EFFECT_NAME_PROGRESS,
            Self::Rave => EFFECT_NAME_RAVE,
        }
    }
}

/// Result of one effect tick
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// The effect painted and wants more ticks
    Running,
    /// The effect painted its last frame
    Finished,
}

/// The effect slot
#[derive(Debug, Clone)]
pub enum ActiveEffect {
    Progress(ProgressEffect),
    Rave(RaveEffect),
}

impl ActiveEffect {
    pub const fn kind(&self) -> EffectKind {
        match self {
            Self::Progress(_) => EffectKind::Progress,
            Self::Rave(_) => EffectKind::Rave,
        }
    }

    /// Paint one frame
    ///
    /// Both effects only see the `bar` part of the frame, so they never
    /// write over the boards.
    pub fn tick(&mut self, now: Instant, frame: &mut [Rgb], bar: Segment) -> TickOutcome {
        let leds = bounded(frame, bar);
        match self {
            Self::Progress(effect) => effect.tick(now, leds),
            Self::Rave(effect) => {
                effect.tick(leds);
                TickOutcome::Running
            }
        }
    }
}

/// Read an optional whole number
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn integer(value: Option<f64>, default: f64, error: RangeError) -> Result<i64, RangeError> {
    let value = value.unwrap_or(default);
    if !value.is_finite() || libm::trunc(value) != value {
        return Err(error);
    }
    // Whole and finite; out of range values saturate, which the clipping
    // of range writes handles the same way
    Ok(value as i64)
}

/// Read a timer length in milliseconds, `(0, MAX_TIMER_MS]`
pub(crate) fn timer_millis(value: f64, error: RangeError) -> Result<f64, RangeError> {
    if value > 0.0 && value <= MAX_TIMER_MS {
        Ok(value)
    } else {
        Err(error)
    }
}
