//! Collaborator traits
//!
//! These traits define the interface between the engine and the platform
//! it runs on: where text ends up, how wide it renders, how ticks are
//! delivered, what time it is, and where scramble characters come from.

pub mod clock;
pub mod display;
pub mod measure;
pub mod random;
pub mod timer;

pub use clock::{LocalTime, WallClock};
pub use display::{DisplayError, DisplaySurface, RowId, ROW_COUNT};
pub use measure::{TextMeasure, TextStyle};
pub use random::{random_seed_char, RandomSource, XorShift32, SEED_CHARSET};
pub use timer::{TimerError, TimerService};
