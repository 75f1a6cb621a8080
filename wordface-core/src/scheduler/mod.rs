//! Animation tick scheduler
//!
//! Owns the one-shot timer that drives every row animation and decides,
//! from the wall clock, whether animations may run at all.

pub mod executor;

pub use executor::{AnimationScheduler, SchedulerState, TickOutcome};
