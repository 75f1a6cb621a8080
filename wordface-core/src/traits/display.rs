//! Display surface trait

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of animated rows on the face
pub const ROW_COUNT: usize = 9;

/// Rows of the face
///
/// The face is laid out as:
///
/// ```text
/// temperature          day
/// condition           date
/// hour
/// first minute
/// second minute
/// steps            battery
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RowId {
    Day,
    Date,
    Hour,
    FirstMinute,
    SecondMinute,
    Temperature,
    Condition,
    Steps,
    Battery,
}

impl RowId {
    /// All rows, in index order
    pub const ALL: [RowId; ROW_COUNT] = [
        RowId::Day,
        RowId::Date,
        RowId::Hour,
        RowId::FirstMinute,
        RowId::SecondMinute,
        RowId::Temperature,
        RowId::Condition,
        RowId::Steps,
        RowId::Battery,
    ];

    /// Index into per-row arrays
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Rows revealed with the short iteration range on first appearance
    ///
    /// The large clock rows take the full reveal; the small info rows
    /// settle quickly so they do not distract from the time.
    pub fn uses_fast_reveal(self) -> bool {
        !matches!(self, RowId::Hour | RowId::FirstMinute | RowId::SecondMinute)
    }
}

/// Errors reported by a display surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Surface not available (window not shown, link down)
    Unavailable,
}

/// Trait for the surface the rows are drawn on
///
/// The surface keeps its own copy of each row's text; the engine reads it
/// back only to compare against new targets.
pub trait DisplaySurface {
    /// Replace the text shown on a row
    fn set_text(&mut self, row: RowId, text: &str) -> Result<(), DisplayError>;

    /// Text currently shown on a row (empty if nothing has been shown)
    fn text(&self, row: RowId) -> &str;

    /// Move a row horizontally to pixel offset `x`
    ///
    /// Only the slide animation repositions rows.
    fn set_offset(&mut self, row: RowId, x: i16) -> Result<(), DisplayError>;
}
