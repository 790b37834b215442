#![no_std]

#[macro_use]
mod fmt;

pub mod board;
pub mod bounds;
pub mod buffer;
pub mod color;
pub mod config;
pub mod display;
pub mod effect;
pub mod error;
pub mod font;
pub mod math8;
pub mod random;
pub mod scheduler;
pub mod shared;
pub mod text;
pub mod timer;

pub use board::{BoardAnimationId, ScrollMode, SayRequest};
pub use buffer::PixelBuffer;
pub use config::{BoardWiring, DisplayConfig, EffectTimings, Layout};
pub use display::{Display, PollResult};
pub use effect::{EffectKind, ProgressRequest, RaveMode, RaveRequest};
pub use error::{ColorError, Error, InitError, RangeError};
pub use scheduler::EffectScheduler;
pub use shared::SharedDisplay;
pub use text::TextLayout;

pub use color::{Rgb, rgb_from_u32, rgb_to_u32, text_to_color};
pub use embassy_time::{Duration, Instant};

/// Frame flush hook
///
/// Called by the display after every committed mutation with the complete
/// frame. Bind it to a strip driver or to a broadcast to remote viewers.
/// Failures are the sink's own business: the display keeps ticking.
pub trait RenderSink {
    /// Push the frame to its destination
    fn render(&mut self, frame: &[Rgb]);
}

impl<F> RenderSink for F
where
    F: FnMut(&[Rgb]),
{
    fn render(&mut self, frame: &[Rgb]) {
        self(frame);
    }
}
