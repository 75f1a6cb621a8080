//! Clock and calendar phrases
//!
//! Weekdays are numbered from Sunday = 0, days of the month from 1.

use core::fmt::Write;

use crate::numbers::{push_cardinal, ONES, TEENS, TENS};
use crate::{push, word, Word};

const DAYS: [&str; 7] = [
    "sunday",
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
];

const DAYS_SHORT: [&str; 7] = ["sun", "mon", "tue", "wed", "thu", "fri", "sat"];

const FIRSTS: [&str; 9] = [
    "first", "second", "third", "fourth", "fifth", "sixth", "seventh", "eighth", "ninth",
];

const TEEN_THS: [&str; 10] = [
    "tenth",
    "eleventh",
    "twelfth",
    "thirteenth",
    "fourteenth",
    "fifteenth",
    "sixteenth",
    "seventeenth",
    "eighteenth",
    "nineteenth",
];

/// Full weekday name ("wednesday")
pub fn day_to_word(weekday: u8) -> Word {
    word(DAYS[(weekday % 7) as usize])
}

/// Three-letter weekday ("wed")
pub fn day_to_short(weekday: u8) -> Word {
    word(DAYS_SHORT[(weekday % 7) as usize])
}

/// Ordinal day of the month in words ("twenty first")
///
/// Out-of-range days render as "first".
pub fn day_of_month_to_words(day: u8) -> Word {
    match day {
        1..=9 => word(FIRSTS[(day - 1) as usize]),
        10..=19 => word(TEEN_THS[(day - 10) as usize]),
        20 => word("twentieth"),
        30 => word("thirtieth"),
        21..=31 => {
            let mut out = word(TENS[(day / 10) as usize]);
            push(&mut out, " ");
            push(&mut out, FIRSTS[(day % 10 - 1) as usize]);
            out
        }
        _ => word(FIRSTS[0]),
    }
}

/// Numeric day of the month with ordinal suffix ("28th", "22nd")
pub fn date_to_short(day: u8) -> Word {
    let suffix = match day {
        1 | 21 | 31 => "st",
        2 | 22 => "nd",
        3 | 23 => "rd",
        _ => "th",
    };
    let mut out = Word::new();
    let _ = write!(out, "{}{}", day, suffix);
    out
}

/// Hour on a twelve-hour dial ("twelve" for midnight and noon)
pub fn hour_to_12h_word(hour: u8) -> Word {
    let mut out = Word::new();
    match hour % 12 {
        0 => push(&mut out, TEENS[2]),
        h => push_cardinal(&mut out, h as u32),
    }
    out
}

/// Minute split across the two minute rows
///
/// `0` reads "o'clock", single digits and teens fill the first row only,
/// larger values put the tens on the first row and the units on the second.
pub fn minute_to_formal_words(minute: u8) -> (Word, Word) {
    let minute = minute % 60;
    match minute {
        0 => (word("o'clock"), Word::new()),
        1..=9 => (word(ONES[minute as usize]), Word::new()),
        10..=19 => (word(TEENS[(minute - 10) as usize]), Word::new()),
        _ => {
            let units = minute % 10;
            let second = if units == 0 {
                Word::new()
            } else {
                word(ONES[units as usize])
            };
            (word(TENS[(minute / 10) as usize]), second)
        }
    }
}
