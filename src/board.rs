//! Text on the board panels
//!
//! The boards form one window of `boards * board_width` columns. Text that
//! fits is drawn once; longer text runs through the window as a marquee that
//! enters from the right edge and stops by itself once it has left on the
//! left. Several texts can share the window at different column offsets.

use core::ops::Range;

use embassy_time::{Duration, Instant};
use heapless::Vec;

use crate::{
    color::{BLACK, Rgb, WHITE},
    config::Layout,
    text::TextLayout,
    timer::TickTimer,
};

/// Board animations that can run at the same time
pub const MAX_BOARD_ANIMATIONS: usize = 8;

/// When text on the boards scrolls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollMode {
    /// Scroll only when the text does not fit behind its column offset
    #[default]
    Auto,
    Always,
    /// Draw once, cutting off what does not fit
    Never,
}

/// Handle of a running board animation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardAnimationId(u32);

/// Text to show on the boards
#[derive(Debug, Clone, Copy)]
pub struct SayRequest<'a> {
    pub text: &'a str,
    pub foreground: Rgb,
    pub background: Rgb,
    /// First window column of the text
    pub column_offset: usize,
    pub scroll: ScrollMode,
}

impl<'a> SayRequest<'a> {
    /// White text on black from the first column
    pub const fn new(text: &'a str) -> Self {
        Self {
            text,
            foreground: WHITE,
            background: BLACK,
            column_offset: 0,
            scroll: ScrollMode::Auto,
        }
    }

    #[must_use]
    pub fn with_colors(mut self, foreground: Rgb, background: Rgb) -> Self {
        self.foreground = foreground;
        self.background = background;
        self
    }

    #[must_use]
    pub fn with_column_offset(mut self, column_offset: usize) -> Self {
        self.column_offset = column_offset;
        self
    }

    #[must_use]
    pub fn with_scroll(mut self, scroll: ScrollMode) -> Self {
        self.scroll = scroll;
        self
    }
}

/// Paint layout positions `[from, to)` of `text` with its first column at
/// window column `left`, touching only the window `columns`
fn paint_text(
    frame: &mut [Rgb],
    layout: &Layout,
    text: &TextLayout,
    left: i64,
    (from, to): (i64, i64),
    columns: Range<usize>,
    (foreground, background): (Rgb, Rgb),
) {
    for column in columns {
        let position = to_i64(column) - left;
        if position < from || position >= to {
            continue;
        }
        let bits = text.column_at(position);
        for row in 0..layout.board_height() {
            let Some(led) = layout
                .window_pixel(column, row)
                .and_then(|index| frame.get_mut(index))
            else {
                continue;
            };
            *led = if (bits >> row) & 1 == 1 {
                foreground
            } else {
                background
            };
        }
    }
}

/// Draw `text` without scrolling, starting at window column `column_offset`
///
/// Whatever does not fit into the window is cut off.
pub fn paint_static(
    frame: &mut [Rgb],
    layout: &Layout,
    text: &TextLayout,
    column_offset: usize,
    foreground: Rgb,
    background: Rgb,
) {
    paint_text(
        frame,
        layout,
        text,
        to_i64(column_offset),
        (0, to_i64(text.width())),
        0..layout.visible_width(),
        (foreground, background),
    );
}

fn to_i64(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

/// One marquee on the boards
#[derive(Debug, Clone)]
pub struct BoardAnimation {
    id: BoardAnimationId,
    text: TextLayout,
    foreground: Rgb,
    background: Rgb,
    column_offset: usize,
    /// Columns scrolled so far
    position: i64,
    step: i64,
    timer: TickTimer,
}

impl BoardAnimation {
    pub const fn id(&self) -> BoardAnimationId {
        self.id
    }

    /// Draw the current position and move on by one step
    ///
    /// The marquee runs in the window columns from its column offset to the
    /// right edge. The text enters at the right edge and moves left until it
    /// has left its region at the offset. Only the text and the `step`
    /// columns behind it are painted, so texts outside of the region stay
    /// intact. Returns `true` after the frame in which the text is gone.
    ///
    /// Position `W + R` is still drawn, since it blanks the last text
    /// column, so a full pass is `floor((W + R) / step) + 1` ticks rather
    /// than `(W + R) / step`. `W` is the text width and `R` the region width.
    pub fn tick(&mut self, frame: &mut [Rgb], layout: &Layout) -> bool {
        let visible = layout.visible_width();
        let region = self.column_offset.min(visible)..visible;
        let travel = to_i64(region.len());
        let width = to_i64(self.text.width());

        let left = to_i64(visible) - self.position;
        paint_text(
            frame,
            layout,
            &self.text,
            left,
            (0, width + self.step),
            region,
            (self.foreground, self.background),
        );

        self.position += self.step;
        self.position > width + travel
    }
}

/// Running board animations, oldest first
#[derive(Debug, Clone, Default)]
pub struct BoardAnimations {
    active: Vec<BoardAnimation, MAX_BOARD_ANIMATIONS>,
    next_id: u32,
}

impl BoardAnimations {
    pub const fn new() -> Self {
        Self {
            active: Vec::new(),
            next_id: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Start a marquee; evicts the oldest one when the set is full
    pub fn start(
        &mut self,
        text: TextLayout,
        request: &SayRequest<'_>,
        step: u8,
        interval: Duration,
        now: Instant,
    ) -> BoardAnimationId {
        if self.active.is_full() {
            let evicted = self.active.remove(0);
            warn!("board animation {} evicted", evicted.id.0);
        }

        let id = BoardAnimationId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);

        let animation = BoardAnimation {
            id,
            text,
            foreground: request.foreground,
            background: request.background,
            column_offset: request.column_offset,
            position: 0,
            step: i64::from(step.max(1)),
            timer: TickTimer::new(interval, now),
        };
        if self.active.push(animation).is_err() {
            // Unreachable: a slot was freed above
            warn!("board animation {} dropped", id.0);
        }
        info!("board animation {} started", id.0);
        id
    }

    /// Stop one animation; `false` if it was not running
    pub fn cancel(&mut self, id: BoardAnimationId) -> bool {
        let Some(index) = self.active.iter().position(|animation| animation.id == id) else {
            return false;
        };
        self.active.remove(index);
        debug!("board animation {} cancelled", id.0);
        true
    }

    /// Stop every animation, returns how many were running
    pub fn cancel_all(&mut self) -> usize {
        let count = self.active.len();
        self.active.clear();
        if count > 0 {
            debug!("{} board animations cancelled", count);
        }
        count
    }

    /// Earliest deadline among the running animations
    pub fn next_deadline(&self) -> Option<Instant> {
        self.active
            .iter()
            .map(|animation| animation.timer.deadline())
            .min()
    }

    /// Run every due animation in start order
    ///
    /// `flush` is called after each tick with the updated frame. Finished
    /// animations are dropped. Returns the number of ticks that ran.
    pub fn poll(
        &mut self,
        now: Instant,
        frame: &mut [Rgb],
        layout: &Layout,
        mut flush: impl FnMut(&[Rgb]),
    ) -> usize {
        let mut ticks = 0;
        let mut index = 0;
        while let Some(animation) = self.active.get_mut(index) {
            if !animation.timer.is_due(now) {
                index += 1;
                continue;
            }

            let finished = animation.tick(frame, layout);
            ticks += 1;
            flush(frame);

            if finished {
                let done = self.active.remove(index);
                info!("board animation {} finished", done.id.0);
            } else {
                animation.timer.advance(now);
                index += 1;
            }
        }
        ticks
    }
}
