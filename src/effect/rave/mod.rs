//! Rave light show on the bar
//!
//! Every mode paints the whole bar once per tick from a shared
//! [`RaveContext`]: the frame counter, the brightness scale, the random
//! generator and the chaser state. Chasers survive mode switches inside
//! `crazy`, so they keep bouncing where they were.

// Pixel positions and hues move between float and integer on every line here
#![allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]

mod chase;
mod crazy;
mod overlay;
mod pulse;
mod rainbow;
mod strobe;

use embassy_time::Duration;

use self::{chase::Chasers, crazy::CrazyState};
use crate::{
    color::{Rgb, hsv_to_rgb},
    config::EffectTimings,
    effect::timer_millis,
    error::RangeError,
    random::Rng,
    timer::duration_from_millis,
};

const RAVE_MODE_RAINBOW: &str = "rainbow";
const RAVE_MODE_STROBE: &str = "strobe";
const RAVE_MODE_PULSE: &str = "pulse";
const RAVE_MODE_CHASE: &str = "chase";
const RAVE_MODE_CRAZY: &str = "crazy";

const MAX_BPM: f64 = 300.0;
const MAX_INTENSITY: f64 = 100.0;

/// Rave animation style
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RaveMode {
    /// Rainbow wave moving along the bar
    #[default]
    Rainbow,
    /// Whole bar flashing a random color every frame
    Strobe,
    /// Rainbow breathing in and out
    Pulse,
    /// Bouncing chasers over a flickering background
    Chase,
    /// Rotating split modes with random overlays
    Crazy,
}

impl RaveMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rainbow => RAVE_MODE_RAINBOW,
            Self::Strobe => RAVE_MODE_STROBE,
            Self::Pulse => RAVE_MODE_PULSE,
            Self::Chase => RAVE_MODE_CHASE,
            Self::Crazy => RAVE_MODE_CRAZY,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            RAVE_MODE_RAINBOW => Some(Self::Rainbow),
            RAVE_MODE_STROBE => Some(Self::Strobe),
            RAVE_MODE_PULSE => Some(Self::Pulse),
            RAVE_MODE_CHASE => Some(Self::Chase),
            RAVE_MODE_CRAZY => Some(Self::Crazy),
            _ => None,
        }
    }

    /// Paint one frame of this mode over `leds`
    fn paint(self, ctx: &mut RaveContext, leds: &mut [Rgb]) {
        match self {
            Self::Rainbow => rainbow::paint(ctx, leds),
            Self::Strobe => strobe::paint(ctx, leds),
            Self::Pulse => pulse::paint(ctx, leds),
            Self::Chase => chase::paint(ctx, leds),
            Self::Crazy => crazy::paint(ctx, leds),
        }
    }
}

/// Loosely typed rave request as it comes from a client
#[derive(Debug, Clone, Copy, Default)]
pub struct RaveRequest<'a> {
    /// Tick interval in milliseconds
    pub speed_ms: Option<f64>,
    /// Mode name, `rainbow` by default
    pub mode: Option<&'a str>,
    /// Brightness in percent, `100` by default
    pub intensity: Option<f64>,
    /// Tempo for `crazy`: two ticks per beat
    pub bpm: Option<f64>,
}

/// Validated rave parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaveParams {
    pub mode: RaveMode,
    /// Brightness scale in `[0, 1]`
    pub intensity: f32,
    pub interval: Duration,
}

impl RaveRequest<'_> {
    /// Check every field and resolve defaults
    pub fn validate(&self, timings: &EffectTimings) -> Result<RaveParams, RangeError> {
        let speed = timer_millis(
            self.speed_ms
                .unwrap_or(f64::from(timings.rave_interval_ms)),
            RangeError::Speed,
        )?;

        let intensity = self.intensity.unwrap_or(MAX_INTENSITY);
        if !(0.0..=MAX_INTENSITY).contains(&intensity) {
            return Err(RangeError::Intensity);
        }

        let mode = match self.mode {
            Some(name) => RaveMode::parse_from_str(name).ok_or(RangeError::UnknownRaveMode)?,
            None => RaveMode::default(),
        };

        let bpm = match self.bpm {
            Some(bpm) if !(bpm > 0.0 && bpm <= MAX_BPM) => return Err(RangeError::Bpm),
            bpm => bpm,
        };

        let interval_ms = match (mode, bpm) {
            (RaveMode::Crazy, Some(bpm)) => 60_000.0 / bpm / 2.0,
            _ => speed,
        };

        Ok(RaveParams {
            mode,
            intensity: (intensity / MAX_INTENSITY) as f32,
            interval: duration_from_millis(interval_ms),
        })
    }
}

/// State shared by every rave mode
#[derive(Debug, Clone)]
pub(crate) struct RaveContext {
    /// Frames painted so far
    offset: u32,
    intensity: f32,
    rng: Rng,
    chasers: Chasers,
    crazy: CrazyState,
}

impl RaveContext {
    fn new(intensity: f32, seed: u64) -> Self {
        Self {
            offset: 0,
            intensity,
            rng: Rng::new(seed),
            chasers: Chasers::new(),
            crazy: CrazyState::default(),
        }
    }

    /// Hue angle after moving `degrees_per_frame` every frame, in `[0, 360)`
    fn phase(&self, degrees_per_frame: u32) -> f32 {
        ((u64::from(self.offset) * u64::from(degrees_per_frame)) % 360) as f32
    }

    /// Sine wave over frames with a period of `2 * PI * period` frames
    fn wave(&self, period: f64) -> f32 {
        libm::sin(f64::from(self.offset) / period) as f32
    }

    fn cowave(&self, period: f64) -> f32 {
        libm::cos(f64::from(self.offset) / period) as f32
    }

    /// HSV color with the value scaled by the intensity
    fn color(&self, hue: f32, sat: f32, val: f32) -> Rgb {
        hsv_to_rgb(hue, sat, val * self.intensity)
    }

    /// Full brightness color of random hue
    fn random_color(&mut self) -> Rgb {
        let hue = self.rng.hue();
        self.color(hue, 1.0, 1.0)
    }
}

/// Running rave show
#[derive(Debug, Clone)]
pub struct RaveEffect {
    mode: RaveMode,
    ctx: RaveContext,
}

impl RaveEffect {
    /// Create the show; `seed` feeds the random overlays
    pub fn new(params: &RaveParams, seed: u64) -> Self {
        Self {
            mode: params.mode,
            ctx: RaveContext::new(params.intensity, seed),
        }
    }

    pub const fn mode(&self) -> RaveMode {
        self.mode
    }

    /// Frames painted so far
    pub const fn frame(&self) -> u32 {
        self.ctx.offset
    }

    /// Paint the next frame over the bar
    pub fn tick(&mut self, bar: &mut [Rgb]) {
        if !bar.is_empty() {
            self.mode.paint(&mut self.ctx, bar);
        }
        self.ctx.offset = self.ctx.offset.wrapping_add(1);
    }
}
