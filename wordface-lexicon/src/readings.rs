//! Sensor readings: battery, steps, temperature

use core::fmt::Write;

use crate::numbers::{number_to_words, push_cardinal, ONES, TEENS};
use crate::{push, Word};

/// Spelled-out battery level ("forty five pc")
pub fn battery_full(percent: u8) -> Word {
    let mut out = number_to_words(percent as i32);
    push(&mut out, " pc");
    out
}

/// Bare battery percentage ("45%")
pub fn battery_short(percent: u8) -> Word {
    let mut out = Word::new();
    let _ = write!(out, "{}%", percent);
    out
}

/// Temperature in words ("minus three c")
pub fn temperature_words(celsius: i32) -> Word {
    let mut out = number_to_words(celsius);
    push(&mut out, " c");
    out
}

/// Step count rounded to one significant magnitude
///
/// Units are `s` (single steps), `ds` (tens), `cs` (hundreds) and `ks`
/// (thousands): 7 -> "seven s", 48 -> "five ds", 12 480 -> "twelve ks".
pub fn steps_to_magnitude(steps: u32) -> Word {
    let mut out = Word::new();
    match steps {
        0..=9 => {
            push(&mut out, ONES[steps as usize]);
            push(&mut out, " s");
        }
        10..=99 => push_rounded(&mut out, (steps + 5) / 10, " ds"),
        100..=999 => push_rounded(&mut out, (steps + 50) / 100, " cs"),
        _ => {
            let thousands = steps.saturating_add(500) / 1000;
            match thousands {
                0..=9 => push(&mut out, ONES[thousands as usize]),
                10..=19 => push(&mut out, TEENS[(thousands - 10) as usize]),
                _ => push_cardinal(&mut out, thousands),
            }
            push(&mut out, " ks");
        }
    }
    out
}

/// Rounding up to ten reads as "ten" rather than moving to the next unit
fn push_rounded(out: &mut Word, rounded: u32, unit: &str) {
    if rounded < 10 {
        push(out, ONES[rounded as usize]);
    } else {
        push(out, TEENS[0]);
    }
    push(out, unit);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_battery_forms() {
        assert_eq!(battery_full(45).as_str(), "forty five pc");
        assert_eq!(battery_full(100).as_str(), "one hundred pc");
        assert_eq!(battery_short(45).as_str(), "45%");
        assert_eq!(battery_short(0).as_str(), "0%");
    }

    #[test]
    fn test_temperature() {
        assert_eq!(temperature_words(21).as_str(), "twenty one c");
        assert_eq!(temperature_words(-3).as_str(), "minus three c");
        assert_eq!(temperature_words(0).as_str(), "zero c");
    }

    #[test]
    fn test_steps_small() {
        assert_eq!(steps_to_magnitude(0).as_str(), "zero s");
        assert_eq!(steps_to_magnitude(7).as_str(), "seven s");
    }

    #[test]
    fn test_steps_tens_and_hundreds() {
        assert_eq!(steps_to_magnitude(12).as_str(), "one ds");
        assert_eq!(steps_to_magnitude(15).as_str(), "two ds");
        assert_eq!(steps_to_magnitude(48).as_str(), "five ds");
        assert_eq!(steps_to_magnitude(97).as_str(), "ten ds");
        assert_eq!(steps_to_magnitude(340).as_str(), "three cs");
        assert_eq!(steps_to_magnitude(960).as_str(), "ten cs");
    }

    #[test]
    fn test_steps_thousands() {
        assert_eq!(steps_to_magnitude(1499).as_str(), "one ks");
        assert_eq!(steps_to_magnitude(12_480).as_str(), "twelve ks");
        assert_eq!(steps_to_magnitude(19_600).as_str(), "twenty ks");
        assert_eq!(steps_to_magnitude(23_000).as_str(), "twenty three ks");
        assert_eq!(steps_to_magnitude(40_100).as_str(), "forty ks");
        assert_eq!(steps_to_magnitude(120_000).as_str(), "one hundred twenty ks");
    }
}
