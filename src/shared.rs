//! Display shared between a request context and the timer loop
//!
//! Built on `critical-section`, so the same type works across interrupts on
//! a microcontroller and across threads on a host. Every access runs to
//! completion inside one critical section: when a stop or reset returns, the
//! timer loop can no longer observe the stopped work.

use core::cell::RefCell;

use critical_section::Mutex;
use embassy_time::Instant;

use crate::{
    RenderSink,
    display::{Display, PollResult},
};

/// A [`Display`] behind a critical-section mutex
pub struct SharedDisplay<S: RenderSink, const MAX_PIXELS: usize> {
    inner: Mutex<RefCell<Display<S, MAX_PIXELS>>>,
}

impl<S: RenderSink, const MAX_PIXELS: usize> SharedDisplay<S, MAX_PIXELS> {
    pub const fn new(display: Display<S, MAX_PIXELS>) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(display)),
        }
    }

    /// Run `f` with exclusive access to the display
    ///
    /// Calling `with` again from inside `f` panics.
    pub fn with<R>(&self, f: impl FnOnce(&mut Display<S, MAX_PIXELS>) -> R) -> R {
        critical_section::with(|cs| {
            let mut display = self.inner.borrow(cs).borrow_mut();
            f(&mut display)
        })
    }

    /// Timer loop entry point, see [`Display::poll`]
    pub fn poll(&self, now: Instant) -> PollResult {
        self.with(|display| display.poll(now))
    }

    pub fn into_inner(self) -> Display<S, MAX_PIXELS> {
        self.inner.into_inner().into_inner()
    }
}
