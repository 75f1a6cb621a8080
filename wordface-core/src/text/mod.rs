//! Fixed-capacity row text
//!
//! Every string the engine stores lives in a fixed buffer. Oversized input
//! is clamped, never rejected.

pub mod slot;

pub use slot::StringSlot;

use heapless::String;

/// Row buffer size in bytes
pub const ROW_CAPACITY: usize = 64;

/// Longest text a row will hold, in characters
pub const MAX_ROW_CHARS: usize = ROW_CAPACITY - 1;

/// Text of one row
pub type RowText = String<ROW_CAPACITY>;

/// Replace `dst` with at most `max_chars` characters of `src`
///
/// Stops early at a character boundary if the buffer fills up.
pub fn clamp_into<const N: usize>(dst: &mut String<N>, src: &str, max_chars: usize) {
    dst.clear();
    for ch in src.chars().take(max_chars) {
        if dst.push(ch).is_err() {
            break;
        }
    }
}

/// Copy `src` into a row buffer, clamped to [`MAX_ROW_CHARS`]
pub fn row_text(src: &str) -> RowText {
    let mut text = RowText::new();
    clamp_into(&mut text, src, MAX_ROW_CHARS);
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_short_text_unchanged() {
        assert_eq!(row_text("forty five pc").as_str(), "forty five pc");
    }

    #[test]
    fn test_clamp_to_char_limit() {
        let long = "abcdefghijabcdefghijabcdefghijabcdefghijabcdefghijabcdefghijabcdefghij";
        let text = row_text(long);
        assert_eq!(text.len(), MAX_ROW_CHARS);
        assert!(long.starts_with(text.as_str()));
    }

    #[test]
    fn test_clamp_multibyte_stays_on_boundary() {
        let mut dst: String<5> = String::new();
        clamp_into(&mut dst, "ééé", 10);
        assert_eq!(dst.as_str(), "éé");
    }
}
