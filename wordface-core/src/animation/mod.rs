//! Row animations
//!
//! A row moves to new text either by scrambling its characters or by
//! sliding. The style is chosen once from configuration and the scheduler
//! drives every row through the same `start` / `advance` interface.

pub mod scramble;
pub mod slide;
pub mod slot;

pub use scramble::ScrambleAnimator;
pub use slide::{SlideAnimator, SlidePhase};
pub use slot::CharacterSlot;

use crate::config::{AnimationStyle, FaceConfig};
use crate::traits::{DisplaySurface, RandomSource, RowId};

/// Animation state for one row
#[derive(Debug, Clone)]
pub enum RowAnimator {
    Scramble(ScrambleAnimator),
    Slide(SlideAnimator),
}

impl RowAnimator {
    /// Create the configured animator for `row`
    pub fn for_row(row: RowId, config: &FaceConfig) -> Self {
        match config.animation.style {
            AnimationStyle::Scramble => RowAnimator::Scramble(ScrambleAnimator::new(
                row,
                config.animation.normal,
                config.animation.fast,
            )),
            AnimationStyle::Slide => {
                RowAnimator::Slide(SlideAnimator::new(row, config.layout.row_geometry(row)))
            }
        }
    }

    /// Begin moving the row to `target`
    ///
    /// `fast` and `force_restart` only affect the scramble style.
    pub fn start<D: DisplaySurface, R: RandomSource>(
        &mut self,
        target: &str,
        fast: bool,
        force_restart: bool,
        display: &mut D,
        rng: &mut R,
    ) {
        match self {
            RowAnimator::Scramble(anim) => anim.start(target, fast, force_restart, display, rng),
            RowAnimator::Slide(anim) => anim.start(target, display),
        }
    }

    /// Advance one tick; returns true while the row is still moving
    pub fn advance<D: DisplaySurface, R: RandomSource>(
        &mut self,
        display: &mut D,
        rng: &mut R,
    ) -> bool {
        match self {
            RowAnimator::Scramble(anim) => anim.advance(display, rng),
            RowAnimator::Slide(anim) => anim.advance(display),
        }
    }

    /// Show `text` immediately, abandoning any animation in flight
    pub fn settle<D: DisplaySurface>(&mut self, text: &str, display: &mut D) {
        match self {
            RowAnimator::Scramble(anim) => anim.settle(text, display),
            RowAnimator::Slide(anim) => anim.settle(text, display),
        }
    }

    /// Jump to the end of the animation in flight
    pub fn finish<D: DisplaySurface>(&mut self, display: &mut D) {
        match self {
            RowAnimator::Scramble(anim) => anim.finish(display),
            RowAnimator::Slide(anim) => anim.finish(display),
        }
    }

    /// Text the row is moving to (or showing, when idle)
    pub fn target(&self) -> &str {
        match self {
            RowAnimator::Scramble(anim) => anim.target(),
            RowAnimator::Slide(anim) => anim.target(),
        }
    }

    pub fn is_animating(&self) -> bool {
        match self {
            RowAnimator::Scramble(anim) => anim.is_animating(),
            RowAnimator::Slide(anim) => anim.is_animating(),
        }
    }

    pub fn row(&self) -> RowId {
        match self {
            RowAnimator::Scramble(anim) => anim.row(),
            RowAnimator::Slide(anim) => anim.row(),
        }
    }
}
