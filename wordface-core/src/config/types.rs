//! Configuration type definitions
//!
//! Defaults reproduce the stock face. With the `toml` feature a
//! configuration can be loaded from a TOML document; any key left out
//! keeps its default.

use crate::traits::{RowId, TextStyle};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors in a face configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Document is not valid TOML or does not match the schema
    Parse,
    /// Tick period or startup delay is zero
    InvalidTickPeriod,
    /// Iteration range has `min > max`
    InvalidIterations,
    /// Quiet window hour outside 0-23
    InvalidHour,
    /// Update interval is zero or longer than an hour
    InvalidInterval,
    /// Screen narrower than the edge margin
    InvalidWidth,
}

/// How rows transition to new text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AnimationStyle {
    /// Random characters settle left to right into the new text
    #[default]
    Scramble,
    /// Old text slides out to the left, new text slides in from the right
    Slide,
}

/// Number of scramble steps a character takes before locking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IterationRange {
    /// Steps for the first character
    pub min: u8,
    /// Steps for the last character
    pub max: u8,
}

impl IterationRange {
    /// Full-length reveal
    pub const NORMAL: Self = Self { min: 6, max: 12 };
    /// Short reveal for secondary rows
    pub const FAST: Self = Self { min: 3, max: 5 };

    pub const fn new(min: u8, max: u8) -> Self {
        Self { min, max }
    }

    pub const fn is_valid(&self) -> bool {
        self.min <= self.max
    }
}

/// Animation timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AnimationConfig {
    /// Row transition style
    pub style: AnimationStyle,
    /// Period between animation ticks (ms)
    pub tick_ms: u32,
    /// Delay before the first tick after a row starts (ms)
    pub startup_delay_ms: u32,
    /// Iterations for a normal reveal
    pub normal: IterationRange,
    /// Iterations for a fast reveal
    pub fast: IterationRange,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            style: AnimationStyle::Scramble,
            tick_ms: 70,
            startup_delay_ms: 10,
            normal: IterationRange::NORMAL,
            fast: IterationRange::FAST,
        }
    }
}

/// Hours during which animations are suppressed
///
/// The window is `[start_hour, end_hour)` and may wrap past midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct QuietWindow {
    pub enabled: bool,
    pub start_hour: u8,
    pub end_hour: u8,
}

impl Default for QuietWindow {
    fn default() -> Self {
        Self {
            enabled: true,
            start_hour: 0,
            end_hour: 6,
        }
    }
}

impl QuietWindow {
    /// Check whether `hour` falls inside the window
    pub fn contains(&self, hour: u8) -> bool {
        if !self.enabled {
            return false;
        }
        if self.start_hour <= self.end_hour {
            hour >= self.start_hour && hour < self.end_hour
        } else {
            hour >= self.start_hour || hour < self.end_hour
        }
    }
}

/// Placement of a row, used by the slide animation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RowGeometry {
    /// Resting x position (px)
    pub x: i16,
    /// Row width (px); text enters from `width` and leaves past `-width`
    pub width: i16,
    /// Ticks to hold before sliding out
    pub movement_delay: u8,
}

/// Screen geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LayoutConfig {
    /// Width available to a paired line (px)
    pub screen_width: u16,
    /// Smallest gap tolerated between paired texts (px)
    pub min_gap: u16,
    /// Space lost to the left and right insets (px)
    pub edge_margin: u16,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            screen_width: 144,
            min_gap: 8,
            edge_margin: 2,
        }
    }
}

impl LayoutConfig {
    /// Font style of a row
    pub const fn row_style(&self, row: RowId) -> TextStyle {
        match row {
            RowId::Day | RowId::Temperature | RowId::Steps => TextStyle::SmallBold,
            RowId::Date | RowId::Condition | RowId::Battery => TextStyle::Small,
            RowId::Hour => TextStyle::LargeBold,
            RowId::FirstMinute | RowId::SecondMinute => TextStyle::LargeLight,
        }
    }

    /// Placement of a row
    pub fn row_geometry(&self, row: RowId) -> RowGeometry {
        const PADDING: i16 = 5;
        let width = self.screen_width.min(i16::MAX as u16) as i16;
        let (row_width, movement_delay) = match row {
            RowId::Day | RowId::Date | RowId::Battery => (width - PADDING, 6),
            RowId::Hour => (width, 6),
            RowId::FirstMinute => (width, 3),
            RowId::SecondMinute => (width, 0),
            RowId::Temperature | RowId::Condition => (width * 3 / 4, 6),
            RowId::Steps => (width / 2, 6),
        };
        RowGeometry {
            x: 2,
            width: row_width,
            movement_delay,
        }
    }
}

/// Throttles for external field updates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct UpdateConfig {
    /// Minimum minutes between step row updates
    pub step_interval_min: u8,
    /// Minutes between weather refresh requests
    pub weather_refresh_min: u8,
}

impl Default for UpdateConfig {
    fn default() -> Self {
        Self {
            step_interval_min: 5,
            weather_refresh_min: 30,
        }
    }
}

/// Complete face configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FaceConfig {
    pub animation: AnimationConfig,
    pub quiet: QuietWindow,
    pub layout: LayoutConfig,
    pub updates: UpdateConfig,
}

impl FaceConfig {
    /// Parse and validate a TOML document
    #[cfg(feature = "toml")]
    pub fn from_toml(input: &str) -> Result<Self, ConfigError> {
        let config: FaceConfig = toml::from_str(input).map_err(|_| ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration for values the engine cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.animation.tick_ms == 0 || self.animation.startup_delay_ms == 0 {
            return Err(ConfigError::InvalidTickPeriod);
        }
        if !self.animation.normal.is_valid() || !self.animation.fast.is_valid() {
            return Err(ConfigError::InvalidIterations);
        }
        if self.quiet.start_hour > 23 || self.quiet.end_hour > 23 {
            return Err(ConfigError::InvalidHour);
        }
        let interval_ok = |minutes: u8| (1..=60).contains(&minutes);
        if !interval_ok(self.updates.step_interval_min)
            || !interval_ok(self.updates.weather_refresh_min)
        {
            return Err(ConfigError::InvalidInterval);
        }
        if self.layout.screen_width <= self.layout.edge_margin {
            return Err(ConfigError::InvalidWidth);
        }
        Ok(())
    }
}
