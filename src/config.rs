//! Display configuration
//!
//! The configuration is handed over once at startup and never changes
//! afterwards. [`Layout`] is its validated form: the map from segments and
//! board coordinates to frame indices.

use embassy_time::Duration;
use serde::Deserialize;

use crate::bounds::Segment;
use crate::error::{InitError, RangeError};
use crate::font::FONT_HEIGHT;

pub const DEFAULT_BOARD_WIDTH: u8 = 32;
pub const DEFAULT_BOARD_HEIGHT: u8 = 8;
pub const DEFAULT_PROGRESS_INTERVAL_MS: u32 = 50;
pub const DEFAULT_RAVE_INTERVAL_MS: u32 = 50;
pub const DEFAULT_SCROLL_INTERVAL_MS: u32 = 50;
pub const DEFAULT_SCROLL_STEP: u8 = 1;

/// How the pixels of one board panel are chained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoardWiring {
    /// Column by column, even columns top to bottom, odd columns bottom to top
    #[default]
    ColumnSerpentine,
    /// Row by row, every row left to right
    RowMajor,
}

impl BoardWiring {
    /// Index of `(x, y)` inside a `width` x `height` panel
    pub const fn index(self, x: usize, y: usize, width: usize, height: usize) -> usize {
        match self {
            Self::ColumnSerpentine => {
                if x % 2 == 0 {
                    x * height + y
                } else {
                    x * height + (height - 1 - y)
                }
            }
            Self::RowMajor => y * width + x,
        }
    }
}

/// Tick defaults for recurring effects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EffectTimings {
    pub progress_interval_ms: u32,
    pub rave_interval_ms: u32,
    pub scroll_interval_ms: u32,
    /// Columns the text moves per scroll tick
    pub scroll_step: u8,
}

impl Default for EffectTimings {
    fn default() -> Self {
        Self {
            progress_interval_ms: DEFAULT_PROGRESS_INTERVAL_MS,
            rave_interval_ms: DEFAULT_RAVE_INTERVAL_MS,
            scroll_interval_ms: DEFAULT_SCROLL_INTERVAL_MS,
            scroll_step: DEFAULT_SCROLL_STEP,
        }
    }
}

impl EffectTimings {
    pub fn scroll_interval(&self) -> Duration {
        Duration::from_millis(u64::from(self.scroll_interval_ms.max(1)))
    }
}

/// Configuration of the physical display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DisplayConfig {
    /// Pixels in the linear bar, placed first in the chain
    pub bar_pixels: u16,
    /// Number of board panels chained after the bar
    pub boards: u8,
    pub board_width: u8,
    pub board_height: u8,
    pub wiring: BoardWiring,
    pub timings: EffectTimings,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            bar_pixels: 0,
            boards: 0,
            board_width: DEFAULT_BOARD_WIDTH,
            board_height: DEFAULT_BOARD_HEIGHT,
            wiring: BoardWiring::default(),
            timings: EffectTimings::default(),
        }
    }
}

impl DisplayConfig {
    /// Parse a JSON configuration document; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self, InitError> {
        serde_json_core::from_str::<Self>(json)
            .map(|(config, _)| config)
            .map_err(|_| InitError::Document)
    }
}

/// Validated pixel map of the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    bar: Segment,
    boards: Segment,
    board_count: usize,
    board_width: usize,
    board_height: usize,
    wiring: BoardWiring,
}

impl Layout {
    /// Validate `config` against a frame that holds `capacity` pixels
    pub fn new(config: &DisplayConfig, capacity: usize) -> Result<Self, InitError> {
        let board_count = usize::from(config.boards);
        let board_width = usize::from(config.board_width);
        let board_height = usize::from(config.board_height);

        if board_count > 0 {
            if board_width == 0 || board_height == 0 {
                return Err(InitError::BoardSize);
            }
            if board_height != FONT_HEIGHT {
                return Err(InitError::BoardHeight(config.board_height));
            }
        }

        let bar_len = usize::from(config.bar_pixels);
        let boards_len = board_count
            .checked_mul(board_width)
            .and_then(|n| n.checked_mul(board_height))
            .ok_or(InitError::Overflow)?;
        let required = bar_len.checked_add(boards_len).ok_or(InitError::Overflow)?;
        if required > capacity {
            return Err(InitError::Capacity { required, capacity });
        }

        Ok(Self {
            bar: Segment::new(0, bar_len),
            boards: Segment::new(bar_len, boards_len),
            board_count,
            board_width,
            board_height,
            wiring: config.wiring,
        })
    }

    /// Total pixel count
    pub const fn len(&self) -> usize {
        self.bar.len + self.boards.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The bar segment
    pub const fn bar(&self) -> Segment {
        self.bar
    }

    /// All board panels together
    pub const fn boards(&self) -> Segment {
        self.boards
    }

    pub const fn board_count(&self) -> usize {
        self.board_count
    }

    /// Segment of a single board panel
    pub const fn board(&self, board: usize) -> Option<Segment> {
        if board >= self.board_count {
            return None;
        }
        let size = self.board_width * self.board_height;
        Some(Segment::new(self.boards.start + board * size, size))
    }

    /// Columns across all boards placed side by side
    pub const fn visible_width(&self) -> usize {
        self.board_count * self.board_width
    }

    pub const fn board_height(&self) -> usize {
        self.board_height
    }

    /// Frame index of pixel `(x, y)` on `board`
    pub fn board_pixel(&self, board: usize, x: usize, y: usize) -> Result<usize, RangeError> {
        if x >= self.board_width || y >= self.board_height {
            return Err(RangeError::BoardCoordinate);
        }
        let segment = self.board(board).ok_or(RangeError::BoardCoordinate)?;
        Ok(segment.start
            + self
                .wiring
                .index(x, y, self.board_width, self.board_height))
    }

    /// Frame index of `row` in window `column`, counting columns across boards
    pub fn window_pixel(&self, column: usize, row: usize) -> Option<usize> {
        if self.board_width == 0 {
            return None;
        }
        self.board_pixel(column / self.board_width, column % self.board_width, row)
            .ok()
    }
}
