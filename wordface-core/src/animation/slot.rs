//! Per-character animation state

/// One glyph position in a scrambling row
///
/// Once `locked`, the slot shows `target` and never changes again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CharacterSlot {
    /// Character the slot settles on
    pub target: char,
    /// Character currently shown while scrambling
    pub current: char,
    /// Scramble steps left before locking
    pub iterations_left: u8,
    /// Slot has settled on `target`
    pub locked: bool,
}

impl CharacterSlot {
    /// A slot already showing its target
    pub const fn settled(target: char) -> Self {
        Self {
            target,
            current: target,
            iterations_left: 0,
            locked: true,
        }
    }

    /// A slot that scrambles for `iterations` steps starting from `seed`
    pub const fn scrambling(target: char, seed: char, iterations: u8) -> Self {
        Self {
            target,
            current: seed,
            iterations_left: iterations,
            locked: false,
        }
    }

    /// Character to draw right now
    pub const fn glyph(&self) -> char {
        if self.locked {
            self.target
        } else {
            self.current
        }
    }

    /// Settle on the target
    pub fn lock(&mut self) {
        self.current = self.target;
        self.iterations_left = 0;
        self.locked = true;
    }
}
