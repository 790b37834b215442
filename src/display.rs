//! Display facade
//!
//! [`Display`] owns the frame and everything that writes to it. Every
//! operation validates its input first, then mutates the frame, then flushes
//! it to the [`RenderSink`] exactly once. Recurring work is driven by
//! [`Display::poll`], which the host calls from its timer loop.
//!
//! # Usage
//!
//! ```ignore
//! let config = DisplayConfig { bar_pixels: 120, boards: 2, ..Default::default() };
//! let mut display = Display::<_, 640>::new(&config, driver)?;
//!
//! loop {
//!     let result = display.poll(Instant::now());
//!     sleep(result.sleep_duration.unwrap_or(IDLE_SLEEP));
//! }
//! ```

use embassy_time::{Duration, Instant};

use crate::{
    RenderSink,
    board::{BoardAnimationId, BoardAnimations, SayRequest, ScrollMode, paint_static},
    bounds::bounded,
    buffer::{PixelBuffer, fill_range},
    color::{BLACK, Rgb},
    config::{DisplayConfig, EffectTimings, Layout},
    effect::{EffectKind, ProgressRequest, ProgressTiming, RaveRequest, integer},
    error::{InitError, RangeError, Result},
    scheduler::{EffectScheduler, SchedulerTick},
    text::TextLayout,
};

/// Result of a poll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollResult {
    /// When the next tick is due; `None` when nothing is scheduled
    pub next_deadline: Option<Instant>,
    /// How long the host may sleep (zero if already behind schedule)
    pub sleep_duration: Option<Duration>,
}

/// The bar and the boards behind one frame buffer
pub struct Display<S: RenderSink, const MAX_PIXELS: usize> {
    sink: S,
    layout: Layout,
    timings: EffectTimings,
    buffer: PixelBuffer<MAX_PIXELS>,
    scheduler: EffectScheduler,
    boards: BoardAnimations,
    seed: u64,
}

impl<S: RenderSink, const MAX_PIXELS: usize> Display<S, MAX_PIXELS> {
    /// Build a display for `config`
    ///
    /// Fails when the configuration is inconsistent or does not fit into
    /// `MAX_PIXELS`. The frame starts black and is not flushed.
    pub fn new(config: &DisplayConfig, sink: S) -> Result<Self, InitError> {
        let layout = Layout::new(config, MAX_PIXELS)?;
        let buffer = PixelBuffer::new(layout.len())?;
        info!(
            "display ready: {} bar pixels, {} boards of {}x{}",
            layout.bar().len,
            layout.board_count(),
            config.board_width,
            config.board_height
        );
        Ok(Self {
            sink,
            layout,
            timings: config.timings,
            buffer,
            scheduler: EffectScheduler::new(),
            boards: BoardAnimations::new(),
            seed: 0,
        })
    }

    pub const fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Read-only view of the current frame
    pub fn snapshot(&self) -> &[Rgb] {
        self.buffer.as_slice()
    }

    pub const fn buffer(&self) -> &PixelBuffer<MAX_PIXELS> {
        &self.buffer
    }

    pub const fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    fn flush(&mut self) {
        self.sink.render(self.buffer.as_slice());
    }

    /// Direct writes take the bar back from a rave; progress keeps running
    fn interrupt_rave(&mut self) {
        if self.scheduler.stop_kind(EffectKind::Rave) {
            debug!("rave interrupted by a direct write");
        }
    }

    // Direct pixel operations

    /// Paint `[start, start + length)` with `color`, clipped to the frame
    pub fn fill(&mut self, color: Rgb, start: i64, length: i64) {
        self.interrupt_rave();
        self.buffer.fill(color, start, length);
        self.flush();
    }

    /// Paint `[start, start + length)` with a gradient from `from` to `to`
    pub fn gradient(&mut self, from: Rgb, to: Rgb, start: i64, length: i64) {
        self.interrupt_rave();
        self.buffer.gradient(from, to, start, length);
        self.flush();
    }

    pub fn set_pixel(&mut self, index: usize, color: Rgb) -> Result<()> {
        if index >= self.buffer.len() {
            return Err(RangeError::PixelIndex {
                index,
                len: self.buffer.len(),
            }
            .into());
        }
        self.interrupt_rave();
        self.buffer.set_pixel(index, color)?;
        self.flush();
        Ok(())
    }

    /// Set many pixels in one commit; any bad index rejects the whole batch
    pub fn set_many(&mut self, updates: &[(usize, Rgb)]) -> Result<()> {
        let len = self.buffer.len();
        if let Some(&(index, _)) = updates.iter().find(|(index, _)| *index >= len) {
            return Err(RangeError::PixelIndex { index, len }.into());
        }
        self.interrupt_rave();
        self.buffer.set_many(updates)?;
        self.flush();
        Ok(())
    }

    /// Fill `percent` of the whole frame from the first pixel
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    pub fn fill_percentage(&mut self, color: Rgb, percent: f64) -> Result<()> {
        let percent = checked_percent(percent)?;
        let length = libm::floor(percent / 100.0 * self.buffer.len() as f64) as i64;
        self.interrupt_rave();
        self.buffer.fill(color, 0, length);
        self.flush();
        Ok(())
    }

    /// Show `percent` of a `length` pixel meter on the bar
    ///
    /// The bar is cleared, the first `length` pixels (the whole bar by
    /// default, never more) get `background`, then `percent` of them `fill`.
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    pub fn fill_by_percent(
        &mut self,
        fill: Rgb,
        background: Rgb,
        percent: f64,
        length: Option<f64>,
    ) -> Result<()> {
        let percent = checked_percent(percent)?;
        let bar = self.layout.bar();
        let bar_len = i64::try_from(bar.len).unwrap_or(i64::MAX);
        let length = integer(length, bar_len as f64, RangeError::Length)?.min(bar_len);
        let filled = libm::floor(percent / 100.0 * length as f64) as i64;

        self.interrupt_rave();
        let leds = bounded(self.buffer.as_mut_slice(), bar);
        leds.fill(BLACK);
        fill_range(leds, background, 0, length);
        fill_range(leds, fill, 0, filled);
        self.flush();
        Ok(())
    }

    // Bar effects

    /// Run a progress bar, replacing any bar effect
    ///
    /// The range is clipped to the bar. It is blanked and flushed first. Without a duration the
    /// bar is painted full right away and nothing is scheduled.
    pub fn start_progress(&mut self, request: &ProgressRequest<'_>, now: Instant) -> Result<()> {
        let params = request.validate(&self.layout, &self.timings)?;
        if let Some(replaced) = self.scheduler.stop() {
            debug!("{} replaced by progress", replaced.as_str());
        }

        let bar = self.layout.bar();
        fill_range(bounded(self.buffer.as_mut_slice(), bar), BLACK, params.start, params.length);
        self.flush();

        match params.timing {
            ProgressTiming::Instant => {
                params.paint_full(bounded(self.buffer.as_mut_slice(), bar));
                self.flush();
                info!("progress painted full");
            }
            ProgressTiming::Animated { .. } => {
                self.scheduler.start_progress(params, now);
            }
        }
        Ok(())
    }

    /// Run a rave show on the bar, replacing any bar effect
    pub fn start_rave(&mut self, request: &RaveRequest<'_>, now: Instant) -> Result<()> {
        let params = request.validate(&self.timings)?;
        let seed = self.next_seed(now);
        if let Some(replaced) = self.scheduler.start_rave(&params, now, seed) {
            debug!("{} replaced by rave", replaced.as_str());
        }
        Ok(())
    }

    /// Stop the rave; `false` when no rave was running
    pub fn stop_rave(&mut self) -> bool {
        self.scheduler.stop_kind(EffectKind::Rave)
    }

    /// Stop the progress bar; `false` when none was running
    pub fn stop_progress(&mut self) -> bool {
        self.scheduler.stop_kind(EffectKind::Progress)
    }

    /// Stop whatever runs on the bar
    pub fn stop_effect(&mut self) -> Option<EffectKind> {
        self.scheduler.stop()
    }

    pub fn active_effect(&self) -> Option<EffectKind> {
        self.scheduler.active()
    }

    fn next_seed(&mut self, now: Instant) -> u64 {
        // splitmix64 step mixed with the start instant
        self.seed = self.seed.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.seed ^ now.as_ticks();
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    // Boards

    /// Show text on the boards
    ///
    /// Text that fits (or with [`ScrollMode::Never`]) is drawn once and
    /// `None` is returned; otherwise a marquee starts and its handle is
    /// returned. Text at column offset 0 replaces the whole board display,
    /// text further right joins whatever is shown. An offset past the last
    /// board column is rejected.
    pub fn say(&mut self, request: &SayRequest<'_>, now: Instant) -> Result<Option<BoardAnimationId>> {
        if request.text.is_empty() {
            return Err(RangeError::EmptyText.into());
        }
        let text = TextLayout::new(request.text)?;
        if self.layout.board_count() == 0 {
            warn!("no boards to show text on");
            return Ok(None);
        }

        let visible = self.layout.visible_width();
        if request.column_offset >= visible {
            return Err(RangeError::ColumnOffset {
                offset: request.column_offset,
                width: visible,
            }
            .into());
        }

        let fits = request.column_offset.saturating_add(text.width()) <= visible;
        let scroll = match request.scroll {
            ScrollMode::Auto => !fits,
            ScrollMode::Always => true,
            ScrollMode::Never => false,
        };

        if request.column_offset == 0 {
            self.boards.cancel_all();
            let boards = self.layout.boards();
            bounded(self.buffer.as_mut_slice(), boards).fill(request.background);
        }

        if !scroll {
            paint_static(
                self.buffer.as_mut_slice(),
                &self.layout,
                &text,
                request.column_offset,
                request.foreground,
                request.background,
            );
            self.flush();
            return Ok(None);
        }

        if request.column_offset == 0 {
            self.flush();
        }
        let id = self.boards.start(
            text,
            request,
            self.timings.scroll_step,
            self.timings.scroll_interval(),
            now,
        );
        Ok(Some(id))
    }

    /// Stop every board animation and blank the boards
    pub fn clear_boards(&mut self) {
        self.boards.cancel_all();
        let boards = self.layout.boards();
        bounded(self.buffer.as_mut_slice(), boards).fill(BLACK);
        self.flush();
    }

    /// Stop one board animation, leaving its last frame on the boards
    pub fn cancel_board(&mut self, id: BoardAnimationId) -> bool {
        self.boards.cancel(id)
    }

    pub fn board_animations(&self) -> usize {
        self.boards.len()
    }

    /// Stop everything and blank the whole frame
    pub fn reset(&mut self) {
        self.scheduler.stop();
        self.boards.cancel_all();
        self.buffer.clear();
        self.flush();
        info!("display reset");
    }

    // Timer loop

    /// Run every tick due at `now`
    ///
    /// The bar effect goes first, then the board animations in start order.
    /// The frame is flushed after each tick.
    pub fn poll(&mut self, now: Instant) -> PollResult {
        let Self {
            sink,
            layout,
            buffer,
            scheduler,
            boards,
            ..
        } = self;

        match scheduler.poll(now, buffer.as_mut_slice(), layout.bar()) {
            SchedulerTick::Idle => {}
            SchedulerTick::Painted(_) | SchedulerTick::Finished(_) => sink.render(buffer.as_slice()),
        }
        boards.poll(now, buffer.as_mut_slice(), layout, |frame| sink.render(frame));

        let next_deadline = match (scheduler.next_deadline(), boards.next_deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        };
        PollResult {
            next_deadline,
            sleep_duration: next_deadline.map(|deadline| deadline.saturating_duration_since(now)),
        }
    }
}

fn checked_percent(percent: f64) -> Result<f64, RangeError> {
    if (0.0..=100.0).contains(&percent) {
        Ok(percent)
    } else {
        Err(RangeError::Percent)
    }
}
