//! Configuration
//!
//! Face configuration types and the weather record persisted between runs.

pub mod cache;
pub mod types;

pub use cache::*;
pub use types::*;
