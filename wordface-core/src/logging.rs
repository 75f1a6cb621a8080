//! Logging shim
//!
//! Re-exports the `defmt` macros when the `defmt` feature is enabled and
//! provides no-op replacements otherwise, so call sites stay unconditional.

#[cfg(feature = "defmt")]
pub(crate) use defmt::{debug, trace, warn};

#[cfg(not(feature = "defmt"))]
mod noop {
    macro_rules! debug {
        ($($arg:tt)*) => {{}};
    }

    macro_rules! trace {
        ($($arg:tt)*) => {{}};
    }

    // `warn` alone would clash with the built-in lint attribute
    macro_rules! noop_warn {
        ($($arg:tt)*) => {{}};
    }

    pub(crate) use {debug, noop_warn as warn, trace};
}

#[cfg(not(feature = "defmt"))]
pub(crate) use noop::{debug, trace, warn};
