//! Screen buffer
//!
//! Holds the text and horizontal offset of every face row and renders them
//! to a [`DisplayBackend`].

use wordface_core::config::LayoutConfig;
use wordface_core::text::{clamp_into, RowText, MAX_ROW_CHARS};
use wordface_core::traits::{DisplayError, DisplaySurface, RowId, TextMeasure, ROW_COUNT};

use crate::backend::{BackendError, DisplayBackend};

/// Horizontal alignment of a row inside its frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Align {
    Left,
    Right,
}

/// Where a row sits on the face
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RowPlacement {
    /// Top edge (px)
    pub y: i16,
    pub align: Align,
}

impl RowPlacement {
    /// Placement of `row` on the 144 x 168 face
    ///
    /// Paired rows share a line: the left one is left-aligned, the right
    /// one right-aligned.
    pub const fn of(row: RowId) -> Self {
        let (y, align) = match row {
            RowId::Temperature => (-2, Align::Left),
            RowId::Day => (-2, Align::Right),
            RowId::Condition => (14, Align::Left),
            RowId::Date => (14, Align::Right),
            RowId::Hour => (26, Align::Left),
            RowId::FirstMinute => (62, Align::Left),
            RowId::SecondMinute => (98, Align::Left),
            RowId::Steps => (144, Align::Left),
            RowId::Battery => (144, Align::Right),
        };
        Self { y, align }
    }
}

/// Row buffer for the watch face
///
/// The engine writes into it through [`DisplaySurface`]; the platform
/// paints it with [`Screen::render`] whenever it is dirty.
#[derive(Clone)]
pub struct Screen {
    /// Current row text
    lines: [RowText; ROW_COUNT],
    /// Horizontal offset of each row (px)
    offsets: [i16; ROW_COUNT],
    layout: LayoutConfig,
    /// Whether the surface accepts writes
    available: bool,
    /// Whether the screen needs to be redrawn
    dirty: bool,
}

impl Default for Screen {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}

impl Screen {
    /// Create an empty screen with every row at rest
    pub fn new(layout: LayoutConfig) -> Self {
        Self {
            lines: core::array::from_fn(|_| RowText::new()),
            offsets: core::array::from_fn(|i| layout.row_geometry(RowId::ALL[i]).x),
            layout,
            available: true,
            dirty: true,
        }
    }

    /// Clear every row and put it back at rest
    pub fn clear(&mut self) {
        for (line, row) in self.lines.iter_mut().zip(RowId::ALL) {
            line.clear();
            self.offsets[row.index()] = self.layout.row_geometry(row).x;
        }
        self.dirty = true;
    }

    /// Mark the surface up or down; writes fail while it is down
    pub fn set_available(&mut self, available: bool) {
        self.available = available;
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    /// Current horizontal offset of `row`
    pub fn offset(&self, row: RowId) -> i16 {
        self.offsets[row.index()]
    }

    /// Check if screen needs redrawing
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark screen as clean (after rendering)
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// All rows with their text
    pub fn lines(&self) -> impl Iterator<Item = (RowId, &str)> {
        RowId::ALL
            .into_iter()
            .zip(self.lines.iter().map(|line| line.as_str()))
    }

    /// Left edge of `row`'s text for the current offset
    pub fn text_x<M: TextMeasure>(&self, row: RowId, measure: &M) -> i16 {
        let offset = self.offsets[row.index()];
        match RowPlacement::of(row).align {
            Align::Left => offset,
            Align::Right => {
                let geometry = self.layout.row_geometry(row);
                let width = measure.measure_width(
                    &self.lines[row.index()],
                    self.layout.row_style(row),
                    self.layout.screen_width,
                );
                offset + geometry.width - width.min(i16::MAX as u16) as i16
            }
        }
    }

    /// Draw every non-empty row and flush, if anything changed
    ///
    /// Returns whether a frame was drawn.
    pub fn render<B: DisplayBackend, M: TextMeasure>(
        &mut self,
        backend: &mut B,
        measure: &M,
    ) -> Result<bool, BackendError> {
        if !self.dirty {
            return Ok(false);
        }
        if !backend.is_ready() {
            return Err(BackendError::NotInitialized);
        }

        backend.clear()?;
        for (row, text) in self.lines() {
            if text.is_empty() {
                continue;
            }
            let x = self.text_x(row, measure);
            let y = RowPlacement::of(row).y;
            backend.draw_text(x, y, self.layout.row_style(row), text)?;
        }
        backend.flush()?;
        self.dirty = false;
        Ok(true)
    }
}

impl DisplaySurface for Screen {
    fn set_text(&mut self, row: RowId, text: &str) -> Result<(), DisplayError> {
        if !self.available {
            return Err(DisplayError::Unavailable);
        }
        let line = &mut self.lines[row.index()];
        if line.as_str() != text {
            clamp_into(line, text, MAX_ROW_CHARS);
            self.dirty = true;
        }
        Ok(())
    }

    fn text(&self, row: RowId) -> &str {
        &self.lines[row.index()]
    }

    fn set_offset(&mut self, row: RowId, x: i16) -> Result<(), DisplayError> {
        if !self.available {
            return Err(DisplayError::Unavailable);
        }
        if self.offsets[row.index()] != x {
            self.offsets[row.index()] = x;
            self.dirty = true;
        }
        Ok(())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Screen {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Screen[");
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                defmt::write!(f, ", ");
            }
            defmt::write!(f, "{}@{}", line.as_str(), self.offsets[i]);
        }
        defmt::write!(f, "]");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::FontMetrics;
    use heapless::Vec;
    use wordface_core::traits::TextStyle;

    #[derive(Default)]
    struct Recorder {
        draws: Vec<(i16, i16, TextStyle, RowText), 16>,
        clears: u32,
        flushes: u32,
        not_ready: bool,
    }

    impl DisplayBackend for Recorder {
        fn clear(&mut self) -> Result<(), BackendError> {
            self.clears += 1;
            self.draws.clear();
            Ok(())
        }

        fn draw_text(
            &mut self,
            x: i16,
            y: i16,
            style: TextStyle,
            text: &str,
        ) -> Result<(), BackendError> {
            let mut line = RowText::new();
            let _ = line.push_str(text);
            self.draws
                .push((x, y, style, line))
                .map_err(|_| BackendError::Communication)
        }

        fn flush(&mut self) -> Result<(), BackendError> {
            self.flushes += 1;
            Ok(())
        }

        fn is_ready(&self) -> bool {
            !self.not_ready
        }
    }

    #[test]
    fn test_new_screen_is_empty_and_at_rest() {
        let screen = Screen::default();
        assert!(screen.is_dirty());
        for (row, text) in screen.lines() {
            assert_eq!(text, "");
            assert_eq!(screen.offset(row), 2);
        }
    }

    #[test]
    fn test_set_text_and_offset() {
        let mut screen = Screen::default();
        screen.mark_clean();
        screen.set_text(RowId::Hour, "two").unwrap();
        screen.set_offset(RowId::Hour, 90).unwrap();
        assert_eq!(screen.text(RowId::Hour), "two");
        assert_eq!(screen.offset(RowId::Hour), 90);
        assert!(screen.is_dirty());
    }

    #[test]
    fn test_unchanged_write_stays_clean() {
        let mut screen = Screen::default();
        screen.set_text(RowId::Day, "wed").unwrap();
        screen.mark_clean();
        screen.set_text(RowId::Day, "wed").unwrap();
        screen.set_offset(RowId::Day, 2).unwrap();
        assert!(!screen.is_dirty());
    }

    #[test]
    fn test_long_text_is_clamped() {
        let mut screen = Screen::default();
        let long = "abcdefghijklmnopqrstuvwxyzabcdefghijklmnopqrstuvwxyzabcdefghijklmnopqrstuvwxyz";
        screen.set_text(RowId::Condition, long).unwrap();
        assert_eq!(screen.text(RowId::Condition).chars().count(), MAX_ROW_CHARS);
    }

    #[test]
    fn test_unavailable_surface_rejects_writes() {
        let mut screen = Screen::default();
        screen.set_available(false);
        assert_eq!(
            screen.set_text(RowId::Day, "wed"),
            Err(DisplayError::Unavailable)
        );
        assert_eq!(
            screen.set_offset(RowId::Day, 10),
            Err(DisplayError::Unavailable)
        );
        assert_eq!(screen.text(RowId::Day), "");
    }

    #[test]
    fn test_clear_resets_rows() {
        let mut screen = Screen::default();
        screen.set_text(RowId::Steps, "five cs").unwrap();
        screen.set_offset(RowId::Steps, -30).unwrap();
        screen.clear();
        assert_eq!(screen.text(RowId::Steps), "");
        assert_eq!(screen.offset(RowId::Steps), 2);
    }

    #[test]
    fn test_right_rows_are_flush_with_frame() {
        let mut screen = Screen::default();
        let metrics = FontMetrics::default();
        screen.set_text(RowId::Day, "wed").unwrap();
        screen.set_text(RowId::Temperature, "four c").unwrap();

        // Frame is 2..141, "wed" is 24 px in the bold font
        assert_eq!(screen.text_x(RowId::Day, &metrics), 2 + 139 - 24);
        assert_eq!(screen.text_x(RowId::Temperature, &metrics), 2);

        // Sliding moves right rows by the same offset
        screen.set_offset(RowId::Day, 12).unwrap();
        assert_eq!(screen.text_x(RowId::Day, &metrics), 12 + 139 - 24);
    }

    #[test]
    fn test_render_draws_non_empty_rows() {
        let mut screen = Screen::default();
        let metrics = FontMetrics::default();
        let mut backend = Recorder::default();
        screen.set_text(RowId::Hour, "two").unwrap();
        screen.set_text(RowId::Battery, "45%").unwrap();

        assert_eq!(screen.render(&mut backend, &metrics), Ok(true));
        assert_eq!(backend.clears, 1);
        assert_eq!(backend.flushes, 1);
        assert_eq!(backend.draws.len(), 2);

        let (x, y, style, text) = &backend.draws[0];
        assert_eq!((*x, *y, *style, text.as_str()), (2, 26, TextStyle::LargeBold, "two"));
        let (x, y, style, text) = &backend.draws[1];
        assert_eq!((*x, *y, *style, text.as_str()), (2 + 139 - 21, 144, TextStyle::Small, "45%"));

        // Nothing changed, nothing drawn
        assert_eq!(screen.render(&mut backend, &metrics), Ok(false));
        assert_eq!(backend.flushes, 1);
    }

    #[test]
    fn test_render_waits_for_backend() {
        let mut screen = Screen::default();
        let mut backend = Recorder {
            not_ready: true,
            ..Recorder::default()
        };
        let result = screen.render(&mut backend, &FontMetrics::default());
        assert_eq!(result, Err(BackendError::NotInitialized));
        assert!(screen.is_dirty());
    }
}
