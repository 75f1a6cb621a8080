//! Text measurement trait

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Font styles used on the face
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TextStyle {
    /// 18 px regular (date, condition, battery)
    #[default]
    Small,
    /// 18 px bold (day, temperature, steps)
    SmallBold,
    /// 42 px bold (hour)
    LargeBold,
    /// 42 px light (minutes)
    LargeLight,
}

/// Trait for measuring rendered text
pub trait TextMeasure {
    /// Rendered width of `text` in pixels, laid out in a box `available_width` wide
    fn measure_width(&self, text: &str, style: TextStyle, available_width: u16) -> u16;
}
