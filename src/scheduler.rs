//! Bar effect scheduling
//!
//! Owns the single effect slot. Starting an effect always stops the current
//! one first, so two bar effects never tick in the same window. Stopping is
//! synchronous: once a stop returns, the stopped effect never ticks again.

use embassy_time::Instant;

use crate::{
    bounds::Segment,
    color::Rgb,
    effect::{
        ActiveEffect, EffectKind, ProgressEffect, ProgressParams, ProgressTiming, RaveEffect,
        RaveParams, TickOutcome,
    },
    timer::TickTimer,
};

/// What a scheduler poll did to the frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerTick {
    /// Nothing was due
    Idle,
    /// The effect painted a frame
    Painted(EffectKind),
    /// The effect painted its last frame and left the slot
    Finished(EffectKind),
}

#[derive(Debug, Clone)]
struct Scheduled {
    effect: ActiveEffect,
    timer: TickTimer,
}

/// Single effect slot with its recurring tick
#[derive(Debug, Clone, Default)]
pub struct EffectScheduler {
    active: Option<Scheduled>,
}

impl EffectScheduler {
    pub const fn new() -> Self {
        Self { active: None }
    }

    /// Kind of the running effect, if any
    pub fn active(&self) -> Option<EffectKind> {
        self.active.as_ref().map(|scheduled| scheduled.effect.kind())
    }

    /// Deadline of the next effect tick
    pub fn next_deadline(&self) -> Option<Instant> {
        self.active.as_ref().map(|scheduled| scheduled.timer.deadline())
    }

    /// Replace whatever runs with an animated progress bar
    ///
    /// Instant progress bars are painted by the caller and never scheduled.
    /// Returns the kind of the effect that was replaced.
    pub fn start_progress(&mut self, params: ProgressParams, now: Instant) -> Option<EffectKind> {
        let ProgressTiming::Animated { duration, interval } = params.timing else {
            return self.stop();
        };
        let replaced = self.stop();
        self.active = Some(Scheduled {
            effect: ActiveEffect::Progress(ProgressEffect::new(params, duration, now)),
            timer: TickTimer::new(interval, now),
        });
        info!(
            "progress started: {} pixels from {} over {} ms",
            params.length,
            params.start,
            duration.as_millis()
        );
        replaced
    }

    /// Replace whatever runs with a rave show
    ///
    /// Returns the kind of the effect that was replaced.
    pub fn start_rave(&mut self, params: &RaveParams, now: Instant, seed: u64) -> Option<EffectKind> {
        let replaced = self.stop();
        self.active = Some(Scheduled {
            effect: ActiveEffect::Rave(RaveEffect::new(params, seed)),
            timer: TickTimer::new(params.interval, now),
        });
        info!(
            "rave started: mode {}, every {} us",
            params.mode.as_str(),
            params.interval.as_micros()
        );
        replaced
    }

    /// Stop the running effect, whatever it is
    pub fn stop(&mut self) -> Option<EffectKind> {
        let kind = self.active.take()?.effect.kind();
        debug!("{} stopped", kind.as_str());
        Some(kind)
    }

    /// Stop the running effect only if it is of `kind`
    ///
    /// Returns whether an effect was stopped; stopping an idle slot or an
    /// effect of another kind does nothing.
    pub fn stop_kind(&mut self, kind: EffectKind) -> bool {
        if self.active() != Some(kind) {
            return false;
        }
        self.stop().is_some()
    }

    /// Run the effect tick if it is due at `now`
    pub fn poll(&mut self, now: Instant, frame: &mut [Rgb], bar: Segment) -> SchedulerTick {
        let Some(scheduled) = self.active.as_mut() else {
            return SchedulerTick::Idle;
        };
        if !scheduled.timer.is_due(now) {
            return SchedulerTick::Idle;
        }

        let kind = scheduled.effect.kind();
        match scheduled.effect.tick(now, frame, bar) {
            TickOutcome::Running => {
                scheduled.timer.advance(now);
                SchedulerTick::Painted(kind)
            }
            TickOutcome::Finished => {
                self.active = None;
                info!("{} finished", kind.as_str());
                SchedulerTick::Finished(kind)
            }
        }
    }
}
