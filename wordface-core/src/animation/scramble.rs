//! Scramble-reveal animation
//!
//! Every character of the new text starts as a random glyph and locks onto
//! its target after a number of steps that grows from left to right, so the
//! text settles as a wave:
//!
//! ```text
//! tick 0   q7z
//! tick 4   k2a
//! tick 8   te4
//! tick 13  ten
//! ```

use heapless::Vec;

use super::slot::CharacterSlot;
use crate::config::IterationRange;
use crate::logging::warn;
use crate::text::{clamp_into, RowText, MAX_ROW_CHARS};
use crate::traits::{random_seed_char, DisplaySurface, RandomSource, RowId};

/// Scramble state machine for one row
#[derive(Debug, Clone)]
pub struct ScrambleAnimator {
    row: RowId,
    normal: IterationRange,
    fast: IterationRange,
    slots: Vec<CharacterSlot, MAX_ROW_CHARS>,
    target: RowText,
    frame: RowText,
    animating: bool,
}

impl ScrambleAnimator {
    /// Create an idle animator for `row`
    pub fn new(row: RowId, normal: IterationRange, fast: IterationRange) -> Self {
        Self {
            row,
            normal,
            fast,
            slots: Vec::new(),
            target: RowText::new(),
            frame: RowText::new(),
            animating: false,
        }
    }

    /// Begin revealing `target`
    ///
    /// Unless `force_restart` is set, positions where the row already shows
    /// the right character lock immediately. Spaces are always locked.
    /// The first scrambled frame is drawn before returning.
    pub fn start<D: DisplaySurface, R: RandomSource>(
        &mut self,
        target: &str,
        fast: bool,
        force_restart: bool,
        display: &mut D,
        rng: &mut R,
    ) {
        clamp_into(&mut self.target, target, MAX_ROW_CHARS);
        let range = if fast { self.fast } else { self.normal };
        let spread = range.max.saturating_sub(range.min) as usize;

        let previous = display.text(self.row);
        let reuse = !force_restart && !previous.is_empty();
        let mut previous = previous.chars();

        let length = self.target.chars().count();
        let span = length.saturating_sub(1).max(1);

        self.slots.clear();
        for (index, ch) in self.target.chars().enumerate() {
            let shown = if reuse { previous.next() } else { None };
            let slot = if ch == ' ' || shown == Some(ch) {
                CharacterSlot::settled(ch)
            } else {
                // Later characters settle later
                let wave = (index * spread / span) as u8;
                let jitter = (rng.next_u32() & 1) as u8;
                let iterations = range.min.saturating_add(wave).saturating_add(jitter);
                CharacterSlot::scrambling(ch, random_seed_char(rng), iterations)
            };
            let _ = self.slots.push(slot);
        }

        self.animating = self.slots.iter().any(|slot| !slot.locked);
        self.render(display);
    }

    /// Step every unlocked character once
    ///
    /// Returns true while any character is still scrambling. Once it
    /// returns false the row shows exactly the target text.
    pub fn advance<D: DisplaySurface, R: RandomSource>(
        &mut self,
        display: &mut D,
        rng: &mut R,
    ) -> bool {
        if !self.animating {
            return false;
        }

        for slot in self.slots.iter_mut().filter(|slot| !slot.locked) {
            if slot.iterations_left == 0 {
                slot.lock();
            } else {
                slot.iterations_left -= 1;
                slot.current = random_seed_char(rng);
            }
        }

        self.animating = self.slots.iter().any(|slot| !slot.locked);
        self.render(display);
        self.animating
    }

    /// Show `text` immediately with no animation
    pub fn settle<D: DisplaySurface>(&mut self, text: &str, display: &mut D) {
        clamp_into(&mut self.target, text, MAX_ROW_CHARS);
        self.slots.clear();
        for ch in self.target.chars() {
            let _ = self.slots.push(CharacterSlot::settled(ch));
        }
        self.animating = false;
        self.render(display);
    }

    /// Lock every character and show the target
    pub fn finish<D: DisplaySurface>(&mut self, display: &mut D) {
        self.slots.iter_mut().for_each(CharacterSlot::lock);
        self.animating = false;
        self.render(display);
    }

    fn render<D: DisplaySurface>(&mut self, display: &mut D) {
        self.frame.clear();
        for slot in &self.slots {
            let _ = self.frame.push(slot.glyph());
        }
        if display.set_text(self.row, &self.frame).is_err() {
            warn!("display write failed for row {}", self.row);
        }
    }

    /// Text the row is settling on
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Frame most recently drawn
    pub fn frame(&self) -> &str {
        &self.frame
    }

    /// Per-character state
    pub fn slots(&self) -> &[CharacterSlot] {
        &self.slots
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    pub fn row(&self) -> RowId {
        self.row
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::testing::{Surface, TEST_SEED};
    use crate::traits::XorShift32;

    fn animator() -> ScrambleAnimator {
        ScrambleAnimator::new(RowId::Hour, IterationRange::NORMAL, IterationRange::FAST)
    }

    fn run_to_end(anim: &mut ScrambleAnimator, display: &mut Surface, rng: &mut XorShift32) -> u32 {
        let mut ticks = 0;
        while anim.advance(display, rng) {
            ticks += 1;
            assert!(ticks < 100, "animation did not converge");
        }
        ticks
    }

    #[test]
    fn test_start_renders_immediately() {
        let mut display = Surface::default();
        let mut rng = XorShift32::new(TEST_SEED);
        let mut anim = animator();

        anim.start("ten", false, false, &mut display, &mut rng);
        assert!(anim.is_animating());
        assert_eq!(display.text(RowId::Hour).chars().count(), 3);
        assert_eq!(display.writes, 1);
    }

    #[test]
    fn test_converges_to_target() {
        let mut display = Surface::default();
        let mut rng = XorShift32::new(TEST_SEED);
        let mut anim = animator();

        anim.start("twenty three", false, true, &mut display, &mut rng);
        let ticks = run_to_end(&mut anim, &mut display, &mut rng);

        // Last character gets at most max + 1 steps, then one tick to lock
        assert!(ticks <= 13);
        assert_eq!(display.text(RowId::Hour), "twenty three");
        assert!(!anim.advance(&mut display, &mut rng));
    }

    #[test]
    fn test_left_to_right_wave() {
        let mut display = Surface::default();
        let mut rng = XorShift32::new(TEST_SEED);
        let mut anim = animator();

        anim.start("ten", false, true, &mut display, &mut rng);
        let slots = anim.slots();
        assert!(slots.iter().all(|slot| !slot.locked));
        assert!((6..=7).contains(&slots[0].iterations_left));
        assert!((9..=10).contains(&slots[1].iterations_left));
        assert!((12..=13).contains(&slots[2].iterations_left));

        for _ in 0..6 {
            anim.advance(&mut display, &mut rng);
        }
        assert!(!anim.slots()[2].locked);

        for _ in 0..2 {
            anim.advance(&mut display, &mut rng);
        }
        assert!(anim.slots()[0].locked);
        assert!(!anim.slots()[2].locked);
    }

    #[test]
    fn test_fast_mode_uses_short_range() {
        let mut display = Surface::default();
        let mut rng = XorShift32::new(TEST_SEED);
        let mut anim = animator();

        anim.start("wed", true, true, &mut display, &mut rng);
        for slot in anim.slots() {
            assert!((3..=6).contains(&slot.iterations_left));
        }
        assert!(run_to_end(&mut anim, &mut display, &mut rng) <= 6);
    }

    #[test]
    fn test_unchanged_characters_lock_immediately() {
        let mut display = Surface::default();
        let mut rng = XorShift32::new(TEST_SEED);
        let mut anim = animator();

        display.set_text(RowId::Hour, "twenty one").unwrap();
        anim.start("twenty two", false, false, &mut display, &mut rng);

        let slots = anim.slots();
        for (index, slot) in slots.iter().enumerate() {
            let same = "twenty one".as_bytes()[index] == "twenty two".as_bytes()[index];
            assert_eq!(slot.locked, same, "position {}", index);
        }
        assert!(display.text(RowId::Hour).starts_with("twenty "));
    }

    #[test]
    fn test_force_restart_ignores_existing_text() {
        let mut display = Surface::default();
        let mut rng = XorShift32::new(TEST_SEED);
        let mut anim = animator();

        display.set_text(RowId::Hour, "twelve").unwrap();
        anim.start("twelve", false, true, &mut display, &mut rng);
        assert!(anim.slots().iter().all(|slot| !slot.locked));
    }

    #[test]
    fn test_same_text_without_force_is_already_done() {
        let mut display = Surface::default();
        let mut rng = XorShift32::new(TEST_SEED);
        let mut anim = animator();

        display.set_text(RowId::Hour, "nine").unwrap();
        anim.start("nine", false, false, &mut display, &mut rng);
        assert!(!anim.is_animating());
        assert_eq!(display.text(RowId::Hour), "nine");
    }

    #[test]
    fn test_spaces_are_prelocked() {
        let mut display = Surface::default();
        let mut rng = XorShift32::new(TEST_SEED);
        let mut anim = animator();

        anim.start("forty two", false, true, &mut display, &mut rng);
        assert!(anim.slots()[5].locked);
        assert_eq!(display.text(RowId::Hour).chars().nth(5), Some(' '));
    }

    #[test]
    fn test_oversized_target_is_truncated() {
        let mut display = Surface::default();
        let mut rng = XorShift32::new(TEST_SEED);
        let mut anim = animator();

        let long = "abcdefghijabcdefghijabcdefghijabcdefghijabcdefghijabcdefghijabcdefghij";
        anim.start(long, true, true, &mut display, &mut rng);
        assert_eq!(anim.slots().len(), MAX_ROW_CHARS);
        run_to_end(&mut anim, &mut display, &mut rng);
        assert_eq!(display.text(RowId::Hour), &long[..MAX_ROW_CHARS]);
    }

    #[test]
    fn test_empty_target() {
        let mut display = Surface::default();
        let mut rng = XorShift32::new(TEST_SEED);
        let mut anim = animator();

        display.set_text(RowId::Hour, "five").unwrap();
        anim.start("", false, false, &mut display, &mut rng);
        assert!(!anim.is_animating());
        assert_eq!(display.text(RowId::Hour), "");
    }

    #[test]
    fn test_restart_mid_animation_reseeds() {
        let mut display = Surface::default();
        let mut rng = XorShift32::new(TEST_SEED);
        let mut anim = animator();

        anim.start("eleven", false, true, &mut display, &mut rng);
        anim.advance(&mut display, &mut rng);
        anim.start("twelve", false, true, &mut display, &mut rng);
        assert_eq!(anim.target(), "twelve");
        run_to_end(&mut anim, &mut display, &mut rng);
        assert_eq!(display.text(RowId::Hour), "twelve");
    }

    #[test]
    fn test_settle_and_finish() {
        let mut display = Surface::default();
        let mut rng = XorShift32::new(TEST_SEED);
        let mut anim = animator();

        anim.settle("three", &mut display);
        assert!(!anim.is_animating());
        assert_eq!(display.text(RowId::Hour), "three");

        anim.start("four", false, true, &mut display, &mut rng);
        anim.finish(&mut display);
        assert!(!anim.is_animating());
        assert_eq!(display.text(RowId::Hour), "four");
    }

    #[test]
    fn test_unavailable_display_does_not_panic() {
        let mut display = Surface::unavailable();
        let mut rng = XorShift32::new(TEST_SEED);
        let mut anim = animator();

        anim.start("ten", false, true, &mut display, &mut rng);
        run_to_end(&mut anim, &mut display, &mut rng);
        assert_eq!(anim.frame(), "ten");
    }
}
