//! Horizontal slide animation
//!
//! The old text holds for a few ticks, accelerates off the left edge, and
//! the new text decelerates in from the right.

use crate::config::RowGeometry;
use crate::logging::warn;
use crate::text::{clamp_into, RowText, MAX_ROW_CHARS};
use crate::traits::{DisplaySurface, RowId};

/// Slide phases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SlidePhase {
    /// Entering from the right
    MovingIn,
    /// At rest
    InFrame,
    /// Holding before leaving
    PrepareToMove,
    /// Leaving to the left
    MovingOut,
}

/// Slide state machine for one row
#[derive(Debug, Clone)]
pub struct SlideAnimator {
    row: RowId,
    geometry: RowGeometry,
    phase: SlidePhase,
    x: i16,
    shown: RowText,
    pending: Option<RowText>,
    delay_count: u8,
}

impl SlideAnimator {
    /// Create an animator resting at the row's position
    pub fn new(row: RowId, geometry: RowGeometry) -> Self {
        Self {
            row,
            geometry,
            phase: SlidePhase::InFrame,
            x: geometry.x,
            shown: RowText::new(),
            pending: None,
            delay_count: 0,
        }
    }

    /// Begin moving to `target`
    ///
    /// If the row already shows text it slides out first; otherwise the new
    /// text enters straight away.
    pub fn start<D: DisplaySurface>(&mut self, target: &str, display: &mut D) {
        let mut text = RowText::new();
        clamp_into(&mut text, target, MAX_ROW_CHARS);

        if display.text(self.row).is_empty() {
            self.pending = None;
            self.shown = text;
            self.write_text(display);
            self.x = self.geometry.width;
            self.write_offset(display);
            self.phase = SlidePhase::MovingIn;
        } else {
            self.pending = Some(text);
            self.phase = SlidePhase::PrepareToMove;
        }
    }

    /// Move one step; returns false once the row is at rest
    pub fn advance<D: DisplaySurface>(&mut self, display: &mut D) -> bool {
        let rest = self.geometry.x;
        match self.phase {
            SlidePhase::InFrame => return false,
            SlidePhase::PrepareToMove => {
                self.x = rest;
                self.delay_count = self.delay_count.saturating_add(1);
                if self.delay_count > self.geometry.movement_delay {
                    self.phase = SlidePhase::MovingOut;
                    self.delay_count = 0;
                }
            }
            SlidePhase::MovingIn => {
                self.x -= self.speed();
                if self.x <= rest {
                    self.x = rest;
                    self.phase = SlidePhase::InFrame;
                }
            }
            SlidePhase::MovingOut => {
                self.x -= self.speed();
                if self.x <= -self.geometry.width {
                    self.x = self.geometry.width;
                    self.phase = SlidePhase::MovingIn;
                    if let Some(next) = self.pending.take() {
                        self.shown = next;
                        self.write_text(display);
                    }
                }
            }
        }
        self.write_offset(display);
        true
    }

    /// Show `text` at rest immediately
    pub fn settle<D: DisplaySurface>(&mut self, text: &str, display: &mut D) {
        clamp_into(&mut self.shown, text, MAX_ROW_CHARS);
        self.pending = None;
        self.write_text(display);
        self.rest(display);
    }

    /// Jump to the end of the current slide
    pub fn finish<D: DisplaySurface>(&mut self, display: &mut D) {
        if let Some(next) = self.pending.take() {
            self.shown = next;
            self.write_text(display);
        }
        self.rest(display);
    }

    fn rest<D: DisplaySurface>(&mut self, display: &mut D) {
        self.x = self.geometry.x;
        self.delay_count = 0;
        self.phase = SlidePhase::InFrame;
        self.write_offset(display);
    }

    /// Speed falls off as the row approaches its resting position
    fn speed(&self) -> i16 {
        (self.x - self.geometry.x).abs() / 3 + 1
    }

    fn write_text<D: DisplaySurface>(&self, display: &mut D) {
        if display.set_text(self.row, &self.shown).is_err() {
            warn!("display write failed for row {}", self.row);
        }
    }

    fn write_offset<D: DisplaySurface>(&self, display: &mut D) {
        if display.set_offset(self.row, self.x).is_err() {
            warn!("display offset failed for row {}", self.row);
        }
    }

    /// Text the row ends up showing
    pub fn target(&self) -> &str {
        self.pending.as_deref().unwrap_or(self.shown.as_str())
    }

    pub fn phase(&self) -> SlidePhase {
        self.phase
    }

    /// Current horizontal offset
    pub fn x(&self) -> i16 {
        self.x
    }

    pub fn is_animating(&self) -> bool {
        self.phase != SlidePhase::InFrame
    }

    pub fn row(&self) -> RowId {
        self.row
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::testing::Surface;

    fn animator() -> SlideAnimator {
        SlideAnimator::new(
            RowId::Day,
            RowGeometry {
                x: 2,
                width: 139,
                movement_delay: 2,
            },
        )
    }

    #[test]
    fn test_first_text_slides_in() {
        let mut display = Surface::default();
        let mut anim = animator();

        anim.start("monday", &mut display);
        assert_eq!(anim.phase(), SlidePhase::MovingIn);
        assert_eq!(display.text(RowId::Day), "monday");
        assert_eq!(display.offset(RowId::Day), 139);

        let mut ticks = 0;
        while anim.advance(&mut display) {
            ticks += 1;
            assert!(ticks < 50);
        }
        assert_eq!(anim.phase(), SlidePhase::InFrame);
        assert_eq!(display.offset(RowId::Day), 2);
    }

    #[test]
    fn test_existing_text_holds_then_slides_out() {
        let mut display = Surface::default();
        let mut anim = animator();
        anim.settle("monday", &mut display);

        anim.start("tuesday", &mut display);
        assert_eq!(anim.phase(), SlidePhase::PrepareToMove);
        assert_eq!(anim.target(), "tuesday");
        assert_eq!(display.text(RowId::Day), "monday");

        // Holds for movement_delay + 1 ticks
        for _ in 0..3 {
            assert!(anim.advance(&mut display));
        }
        assert_eq!(anim.phase(), SlidePhase::MovingOut);
        assert_eq!(display.text(RowId::Day), "monday");

        while anim.phase() == SlidePhase::MovingOut {
            anim.advance(&mut display);
        }
        assert_eq!(anim.phase(), SlidePhase::MovingIn);
        assert_eq!(display.text(RowId::Day), "tuesday");

        while anim.advance(&mut display) {}
        assert_eq!(display.offset(RowId::Day), 2);
    }

    #[test]
    fn test_settle_and_finish() {
        let mut display = Surface::default();
        let mut anim = animator();
        anim.settle("friday", &mut display);
        assert!(!anim.is_animating());
        assert_eq!(display.offset(RowId::Day), 2);

        anim.start("saturday", &mut display);
        anim.advance(&mut display);
        anim.finish(&mut display);
        assert!(!anim.is_animating());
        assert_eq!(display.text(RowId::Day), "saturday");
        assert_eq!(display.offset(RowId::Day), 2);
    }
}
