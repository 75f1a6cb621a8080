//! Cardinal numbers as English words

use core::fmt::Write;

use crate::{push, Word};

pub(crate) const ONES: [&str; 10] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

pub(crate) const TEENS: [&str; 10] = [
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

pub(crate) const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

/// Spell out a number ("-3" -> "minus three", "45" -> "forty five")
///
/// Values of a thousand or more fall back to digits.
pub fn number_to_words(num: i32) -> Word {
    let mut out = Word::new();
    if num < 0 {
        push(&mut out, "minus ");
    }
    push_cardinal(&mut out, num.unsigned_abs());
    out
}

/// Append the cardinal form of `n`
pub(crate) fn push_cardinal(out: &mut Word, n: u32) {
    match n {
        0..=9 => push(out, ONES[n as usize]),
        10..=19 => push(out, TEENS[(n - 10) as usize]),
        20..=99 => {
            push(out, TENS[(n / 10) as usize]);
            if n % 10 != 0 {
                push(out, " ");
                push(out, ONES[(n % 10) as usize]);
            }
        }
        100..=999 => {
            push(out, ONES[(n / 100) as usize]);
            push(out, " hundred");
            if n % 100 != 0 {
                push(out, " ");
                push_cardinal(out, n % 100);
            }
        }
        _ => {
            let _ = write!(out, "{}", n);
        }
    }
}
