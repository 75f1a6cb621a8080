//! Screen side of the wordface watch face
//!
//! This crate provides:
//! - [`Screen`], a row buffer implementing the engine's `DisplaySurface`
//! - [`DisplayBackend`] for whatever actually draws the rows
//! - [`FontMetrics`], a fixed-advance `TextMeasure` for the four face fonts
//!
//! # Architecture
//!
//! The engine writes text and horizontal offsets into the [`Screen`]. When
//! the platform is ready to paint, [`Screen::render`] places every row
//! (left rows at their offset, right rows flush against their frame) and
//! hands it to the backend.

#![no_std]
#![deny(unsafe_code)]

pub mod backend;
pub mod metrics;
pub mod screen;

pub use backend::{BackendError, DisplayBackend};
pub use metrics::FontMetrics;
pub use screen::{Align, RowPlacement, Screen};
