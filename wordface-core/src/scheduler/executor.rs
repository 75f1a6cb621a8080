//! Tick scheduling state
//!
//! The scheduler is `Idle` (no timer armed) or `Running` (exactly one timer
//! armed). Arming always cancels the previous timer first, so at most one
//! handle is ever outstanding. Quiet mode is recomputed from the supplied
//! time on every decision and blocks arming entirely.

use crate::config::{AnimationConfig, QuietWindow};
use crate::logging::{debug, trace, warn};
use crate::traits::{LocalTime, TimerService};

/// Scheduler state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SchedulerState {
    /// No timer armed
    Idle,
    /// A tick is pending
    Running,
}

/// Result of finishing a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TickOutcome {
    /// Rows still moving, next tick armed
    Rearmed,
    /// Nothing left to animate (or the timer could not be armed)
    Idle,
}

/// Shared tick driver for all rows
#[derive(Debug)]
pub struct AnimationScheduler<T: TimerService> {
    timer: T,
    active: Option<T::Handle>,
    quiet_mode: bool,
    quiet: QuietWindow,
    tick_ms: u32,
    startup_delay_ms: u32,
}

impl<T: TimerService> AnimationScheduler<T> {
    /// Create an idle scheduler
    pub fn new(timer: T, animation: &AnimationConfig, quiet: QuietWindow) -> Self {
        Self {
            timer,
            active: None,
            quiet_mode: false,
            quiet,
            tick_ms: animation.tick_ms,
            startup_delay_ms: animation.startup_delay_ms,
        }
    }

    pub fn state(&self) -> SchedulerState {
        if self.active.is_some() {
            SchedulerState::Running
        } else {
            SchedulerState::Idle
        }
    }

    /// Quiet mode as of the last decision
    pub fn quiet_mode(&self) -> bool {
        self.quiet_mode
    }

    /// Recompute quiet mode from `now`
    pub fn refresh_quiet(&mut self, now: &LocalTime) -> bool {
        let quiet = self.quiet.contains(now.hour);
        if quiet != self.quiet_mode {
            debug!("quiet mode {}", quiet);
        }
        self.quiet_mode = quiet;
        quiet
    }

    /// Make sure a tick is pending after rows were started
    ///
    /// Re-arms with the short startup delay even when a tick is already
    /// pending. Returns false if quiet mode blocks arming or the timer
    /// service refuses.
    pub fn ensure_running(&mut self, now: &LocalTime) -> bool {
        if self.refresh_quiet(now) {
            self.cancel();
            return false;
        }
        self.arm(self.startup_delay_ms)
    }

    /// Claim a fired timer
    ///
    /// Returns false for a handle that is not the one currently armed;
    /// such ticks must be ignored.
    pub fn accept(&mut self, handle: T::Handle) -> bool {
        if self.active == Some(handle) {
            self.active = None;
            true
        } else {
            trace!("ignoring stale timer");
            false
        }
    }

    /// Complete an accepted tick
    pub fn finish_tick(&mut self, any_animating: bool) -> TickOutcome {
        if any_animating && self.arm(self.tick_ms) {
            TickOutcome::Rearmed
        } else {
            if !any_animating {
                debug!("all rows settled, scheduler idle");
            }
            TickOutcome::Idle
        }
    }

    /// Cancel the pending tick, if any
    pub fn cancel(&mut self) {
        if let Some(handle) = self.active.take() {
            self.timer.cancel(handle);
            trace!("timer cancelled");
        }
    }

    pub fn is_armed(&self, handle: T::Handle) -> bool {
        self.active == Some(handle)
    }

    /// Cancel any pending tick and give the timer service back
    pub fn into_timer(mut self) -> T {
        self.cancel();
        self.timer
    }

    pub fn timer(&self) -> &T {
        &self.timer
    }

    pub fn timer_mut(&mut self) -> &mut T {
        &mut self.timer
    }

    fn arm(&mut self, delay_ms: u32) -> bool {
        self.cancel();
        match self.timer.schedule(delay_ms) {
            Ok(handle) => {
                self.active = Some(handle);
                trace!("timer armed for {} ms", delay_ms);
                true
            }
            Err(_e) => {
                warn!("failed to arm animation timer: {}", _e);
                false
            }
        }
    }
}
