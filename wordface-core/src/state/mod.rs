//! The watch face engine
//!
//! One owned aggregate holds every row, buffer, pair and collaborator.
//! Platform callbacks are forwarded to its `on_*` handlers, each of which
//! runs to completion before returning.

pub mod face;
pub mod tracking;

pub use face::{Platform, WatchFace, WeatherUpdate};
pub use tracking::LastSeen;
