//! English word formatters for the wordface watch face
//!
//! Pure lookup-table functions that turn clock, calendar and sensor values
//! into the short phrases shown on the face:
//!
//! ```text
//! 14:07  wed 21     ->  "two" / "oh" / "seven"   "wednesday"  "twenty first"
//! battery 45 %      ->  "forty five pc"  or  "45%"
//! 12 480 steps      ->  "twelve ks"
//! ```
//!
//! Every function is deterministic and allocation-free; results are
//! returned as fixed-capacity [`Word`] strings.

#![no_std]
#![deny(unsafe_code)]

pub mod calendar;
pub mod numbers;
pub mod readings;

pub use calendar::{
    date_to_short, day_of_month_to_words, day_to_short, day_to_word, hour_to_12h_word,
    minute_to_formal_words,
};
pub use numbers::number_to_words;
pub use readings::{battery_full, battery_short, steps_to_magnitude, temperature_words};

/// Capacity of a formatted word, in bytes
pub const WORD_LEN: usize = 32;

/// A formatted phrase
pub type Word = heapless::String<WORD_LEN>;

/// Append `text`, dropping it if the word is already full
pub(crate) fn push(out: &mut Word, text: &str) {
    let _ = out.push_str(text);
}

/// Build a word from a static string
pub(crate) fn word(text: &str) -> Word {
    let mut out = Word::new();
    push(&mut out, text);
    out
}
