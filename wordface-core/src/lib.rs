//! Board-agnostic engine for the wordface watch face
//!
//! This crate contains everything between "a field changed" and "this text
//! is on the screen", without depending on a particular display or timer:
//!
//! - Collaborator traits (display surface, text measurement, timer, clock, RNG)
//! - Per-row reveal animations (character scramble, horizontal slide)
//! - Double-buffered row text
//! - Collision detection and collapse/uncollapse of paired lines
//! - The shared animation tick scheduler with quiet-hours suppression
//! - The [`WatchFace`](state::WatchFace) engine that owns all of the above
//! - Configuration and the persisted weather record

#![no_std]
#![deny(unsafe_code)]

mod logging;

pub mod animation;
pub mod config;
pub mod layout;
pub mod scheduler;
pub mod state;
pub mod text;
pub mod traits;

pub use state::{Platform, WatchFace, WeatherUpdate};
