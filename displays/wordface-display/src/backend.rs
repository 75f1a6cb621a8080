//! Display backend trait
//!
//! Defines the interface for whatever turns placed text into pixels.

use wordface_core::traits::TextStyle;

/// Display backend errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BackendError {
    /// Communication error with the panel
    Communication,
    /// Display not initialized
    NotInitialized,
}

/// Display backend trait
///
/// Implementations handle the specifics of the panel and its fonts.
pub trait DisplayBackend {
    /// Clear the entire display
    fn clear(&mut self) -> Result<(), BackendError>;

    /// Draw `text` with its top-left corner at (`x`, `y`) in pixels
    ///
    /// Coordinates may be negative or past the right edge while a row is
    /// sliding; the backend clips.
    fn draw_text(&mut self, x: i16, y: i16, style: TextStyle, text: &str)
        -> Result<(), BackendError>;

    /// Flush buffered content to the display
    fn flush(&mut self) -> Result<(), BackendError>;

    /// Check if the display is ready
    fn is_ready(&self) -> bool;
}
