//! Wall clock trait

/// Broken-down local time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LocalTime {
    /// Hour of day (0-23)
    pub hour: u8,
    /// Minute of hour (0-59)
    pub minute: u8,
    /// Day of week (0 = Sunday)
    pub weekday: u8,
    /// Day of month (1-31)
    pub day_of_month: u8,
}

impl LocalTime {
    /// Create a local time
    pub const fn new(hour: u8, minute: u8, weekday: u8, day_of_month: u8) -> Self {
        Self {
            hour,
            minute,
            weekday,
            day_of_month,
        }
    }
}

/// Trait for reading the current local time
pub trait WallClock {
    fn now(&self) -> LocalTime;
}
