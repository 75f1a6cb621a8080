//! One-shot timer trait

/// Errors that can occur when arming a timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimerError {
    /// No timer slots left
    Exhausted,
    /// Timer service not running
    Unavailable,
}

/// Trait for a single-threaded one-shot timer service
///
/// When a scheduled timer expires the platform hands its handle back to
/// [`WatchFace::on_timer`](crate::state::WatchFace::on_timer).
pub trait TimerService {
    /// Identifies an armed timer
    type Handle: Copy + Eq;

    /// Arm a timer that fires once after `delay_ms`
    fn schedule(&mut self, delay_ms: u32) -> Result<Self::Handle, TimerError>;

    /// Cancel an armed timer (no-op if it already fired)
    fn cancel(&mut self, handle: Self::Handle);
}
