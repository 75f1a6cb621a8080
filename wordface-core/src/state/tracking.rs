//! Last values seen from each field source

/// Most recent value of every input, `None` until first reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LastSeen {
    pub hour: Option<u8>,
    pub minute: Option<u8>,
    pub weekday: Option<u8>,
    pub day_of_month: Option<u8>,
    pub battery: Option<u8>,
    pub steps: Option<u32>,
    /// Minute of the hour the step row last changed
    pub step_minute: Option<u8>,
    pub temperature: Option<i32>,
}

impl LastSeen {
    /// Check whether at least `interval` minutes have passed since the
    /// last step update
    ///
    /// Distance is measured forward around the hour, so 58 -> 3 is five
    /// minutes. Intervals of an hour or more are treated as 59 minutes.
    pub fn step_update_due(&self, minute: u8, interval: u8) -> bool {
        match self.step_minute {
            None => true,
            Some(last) => {
                let distance = (minute % 60 + 60 - last % 60) % 60;
                distance >= interval.min(59)
            }
        }
    }
}
