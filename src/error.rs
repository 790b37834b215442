//! Error types
//!
//! Every request is validated before the frame is touched, so each of these
//! errors means "nothing changed". The display strings are meant to be shown
//! to the client as-is.

use thiserror::Error;

/// Rejected color input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("Hex color must be 6 characters long")]
    HexLength,
    #[error("Invalid hexadecimal color value")]
    HexDigits,
    #[error("Input is not a valid JSON string")]
    Json,
    #[error("Invalid color keys. Use 'r','g','b' or 'red','green','blue'")]
    Keys,
    #[error("Color values must be integers between 0 and 255")]
    Channel,
    #[error("Invalid color format. Use #RRGGBB, 0xRRGGBB, RRGGBB, or {{r,g,b}} JSON object")]
    Format,
}

/// Rejected numeric or positional parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("start must be an integer")]
    Start,
    #[error("length must be an integer")]
    Length,
    #[error("percent must be a number between 0 and 100")]
    Percent,
    #[error("startingFill must be a number between 0 and 100")]
    StartingFill,
    #[error("intensity must be a number between 0 and 100")]
    Intensity,
    #[error("speed must be a positive number of milliseconds, at most one day")]
    Speed,
    #[error("duration must be a positive number of milliseconds, at most one day")]
    Duration,
    #[error("interval must be a positive number of milliseconds, at most one day")]
    Interval,
    #[error("bpm must be a positive number between 1 and 300")]
    Bpm,
    #[error("pixel {index} is outside of 0..{len}")]
    PixelIndex { index: usize, len: usize },
    #[error("board coordinate is outside of the board")]
    BoardCoordinate,
    #[error("column offset {offset} is outside of the {width} board columns")]
    ColumnOffset { offset: usize, width: usize },
    #[error("text is too long to display")]
    TextTooLong,
    #[error("You did not provide any text")]
    EmptyText,
    #[error("unknown rave mode")]
    UnknownRaveMode,
}

/// Startup failure. The display cannot be built from this configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InitError {
    #[error("configuration needs {required} pixels but the buffer holds {capacity}")]
    Capacity { required: usize, capacity: usize },
    #[error("board dimensions must be non-zero")]
    BoardSize,
    #[error("board height {0} does not match the font height")]
    BoardHeight(u8),
    #[error("pixel count overflows")]
    Overflow,
    #[error("invalid configuration document")]
    Document,
}

/// Any error reported by the composer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    InvalidColor(#[from] ColorError),
    #[error(transparent)]
    InvalidRange(#[from] RangeError),
    #[error(transparent)]
    Init(#[from] InitError),
}

pub type Result<T, E = Error> = core::result::Result<T, E>;
