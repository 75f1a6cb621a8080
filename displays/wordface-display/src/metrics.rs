//! Fixed-advance text measurement
//!
//! Approximates the face fonts with one advance per style and a half
//! advance for narrow glyphs. Good enough for collision checks, which only
//! need to be conservative.

use wordface_core::traits::{TextMeasure, TextStyle};

/// Per-style glyph advances in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FontMetrics {
    pub small: u16,
    pub small_bold: u16,
    pub large_bold: u16,
    pub large_light: u16,
}

impl Default for FontMetrics {
    fn default() -> Self {
        Self {
            small: 7,
            small_bold: 8,
            large_bold: 22,
            large_light: 20,
        }
    }
}

impl FontMetrics {
    /// Full advance for `style`
    pub const fn advance(&self, style: TextStyle) -> u16 {
        match style {
            TextStyle::Small => self.small,
            TextStyle::SmallBold => self.small_bold,
            TextStyle::LargeBold => self.large_bold,
            TextStyle::LargeLight => self.large_light,
        }
    }

    fn glyph_width(&self, ch: char, style: TextStyle) -> u16 {
        let advance = self.advance(style);
        if is_narrow(ch) {
            advance.div_ceil(2)
        } else {
            advance
        }
    }
}

fn is_narrow(ch: char) -> bool {
    matches!(ch, ' ' | 'i' | 'l' | 'j' | 't' | 'f' | 'r' | '1' | '\'' | '.' | ',')
}

impl TextMeasure for FontMetrics {
    /// Width of `text` on one line, never more than `available_width`
    fn measure_width(&self, text: &str, style: TextStyle, available_width: u16) -> u16 {
        text.chars()
            .fold(0u16, |width, ch| width.saturating_add(self.glyph_width(ch, style)))
            .min(available_width)
    }
}
