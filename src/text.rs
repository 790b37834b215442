//! Text layout for the board panels
//!
//! A layout is the concatenation of glyph columns for a string, each glyph
//! followed by one blank spacer column. Columns are addressed by signed
//! position so a scroller can run through the empty space before and after
//! the text without bounds checks.

use heapless::Vec;

use crate::error::RangeError;
use crate::font::glyph;

/// Maximum number of columns in one layout
pub const MAX_TEXT_COLUMNS: usize = 1024;

/// Column-addressable bitmap of a string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextLayout {
    columns: Vec<u8, MAX_TEXT_COLUMNS>,
}

impl TextLayout {
    /// Lay out `text` with the board font
    pub fn new(text: &str) -> Result<Self, RangeError> {
        let mut columns = Vec::new();
        for ch in text.chars() {
            let glyph = glyph(ch);
            columns
                .extend_from_slice(glyph.columns())
                .map_err(|()| RangeError::TextTooLong)?;
            columns.push(0).map_err(|_| RangeError::TextTooLong)?;
        }
        Ok(Self { columns })
    }

    /// Total width in columns, spacers included
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Column bits at `position`; blank outside of the layout
    pub fn column_at(&self, position: i64) -> u8 {
        usize::try_from(position)
            .ok()
            .and_then(|index| self.columns.get(index))
            .copied()
            .unwrap_or(0)
    }
}

/// Width in columns `text` would take on the boards
///
/// Useful to place a second text right after a first one.
pub fn text_width(text: &str) -> usize {
    text.chars().map(|ch| glyph(ch).advance()).sum()
}
