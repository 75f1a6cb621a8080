//! Double-buffered text slot
//!
//! Each row's text is formatted into one of two buffers. The buffer last
//! handed to the display is never written; new values always go into the
//! other one, and only [`StringSlot::present`] moves the display across.

use heapless::String;

use super::clamp_into;

/// Two alternating buffers feeding one display row
///
/// One writer (the engine) and one reader (the display). `active` names the
/// buffer the next write lands in; `shown` is the buffer the display was
/// last given, if any.
#[derive(Debug, Clone)]
pub struct StringSlot<const N: usize> {
    buffers: [String<N>; 2],
    active: usize,
    latest: Option<usize>,
    shown: Option<usize>,
}

impl<const N: usize> Default for StringSlot<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> StringSlot<N> {
    /// Create an empty slot
    pub fn new() -> Self {
        Self {
            buffers: [String::new(), String::new()],
            active: 0,
            latest: None,
            shown: None,
        }
    }

    /// Write a new value, clamped to `N - 1` characters
    ///
    /// Lands in the buffer the display is not referencing, then flips
    /// `active`. Returns the stored text.
    pub fn write(&mut self, value: &str) -> &str {
        let target = match self.shown {
            Some(shown) if shown == self.active => 1 - shown,
            _ => self.active,
        };
        clamp_into(&mut self.buffers[target], value, N.saturating_sub(1));
        self.latest = Some(target);
        self.active = 1 - target;
        self.buffers[target].as_str()
    }

    /// Hand the most recent value to the display
    ///
    /// Returns the text the display should show from now on.
    pub fn present(&mut self) -> &str {
        if let Some(latest) = self.latest {
            self.shown = Some(latest);
        }
        self.displayed()
    }

    /// Most recently written value (empty before the first write)
    pub fn latest(&self) -> &str {
        self.latest.map_or("", |i| self.buffers[i].as_str())
    }

    /// Value the display was last given (empty before the first present)
    pub fn displayed(&self) -> &str {
        self.shown.map_or("", |i| self.buffers[i].as_str())
    }

    /// Check whether a value has ever been written
    pub fn has_value(&self) -> bool {
        self.latest.is_some()
    }

    /// Index of the buffer the next write lands in
    pub fn active_index(&self) -> usize {
        self.active
    }
}
