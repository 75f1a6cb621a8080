//! Collapse/uncollapse hysteresis for one line pair
//!
//! | state     | collision | action                          |
//! |-----------|-----------|---------------------------------|
//! | expanded  | true      | collapse right side, re-animate |
//! | expanded  | false     | none                            |
//! | collapsed | false     | expand right side, re-animate   |
//! | collapsed | true      | none                            |
//!
//! `collapsed` records the last decision taken; it only moves when a fresh
//! verdict disagrees with it, so a pair never flickers between forms on
//! consecutive evaluations.

use wordface_lexicon::{
    battery_full, battery_short, date_to_short, day_of_month_to_words, day_to_short, day_to_word,
    Word,
};

use super::collision::CollisionOracle;
use crate::config::LayoutConfig;
use crate::traits::{RowId, TextMeasure, TextStyle};

/// Number of collision-prone line pairs
pub const PAIR_COUNT: usize = 3;

/// Line pairs that can collide
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PairId {
    /// Temperature (left) and weekday (right)
    DayTemperature,
    /// Weather condition (left) and date (right)
    DateCondition,
    /// Step count (left) and battery (right)
    BatterySteps,
}

impl PairId {
    pub const ALL: [PairId; PAIR_COUNT] = [
        PairId::DayTemperature,
        PairId::DateCondition,
        PairId::BatterySteps,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Outcome of evaluating a pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PairDecision {
    /// Keep the current form
    Unchanged,
    /// Switch the right side to its abbreviated form
    Collapse,
    /// Switch the right side back to its full form
    Expand,
}

impl PairDecision {
    /// Check whether the right side has to be redrawn
    pub fn changed(self) -> bool {
        self != PairDecision::Unchanged
    }
}

/// Static description of a line pair
#[derive(Debug, Clone, Copy)]
pub struct PairSpec {
    /// Left-aligned row
    pub left: RowId,
    /// Right-aligned row, the one that collapses
    pub right: RowId,
    pub left_style: TextStyle,
    pub right_style: TextStyle,
    /// Full form of the right value
    pub full: fn(u8) -> Word,
    /// Abbreviated form of the right value
    pub short: fn(u8) -> Word,
}

impl PairSpec {
    /// Description of `id` under `layout`
    pub fn for_pair(id: PairId, layout: &LayoutConfig) -> Self {
        let (left, right, full, short): (RowId, RowId, fn(u8) -> Word, fn(u8) -> Word) = match id
        {
            PairId::DayTemperature => (RowId::Temperature, RowId::Day, day_to_word, day_to_short),
            PairId::DateCondition => (
                RowId::Condition,
                RowId::Date,
                day_of_month_to_words,
                date_to_short,
            ),
            PairId::BatterySteps => (RowId::Steps, RowId::Battery, battery_full, battery_short),
        };
        Self {
            left,
            right,
            left_style: layout.row_style(left),
            right_style: layout.row_style(right),
            full,
            short,
        }
    }
}

/// Collapse state of one line pair
#[derive(Debug, Clone)]
pub struct PairedLine {
    id: PairId,
    spec: PairSpec,
    collapsed: bool,
}

impl PairedLine {
    /// Create an expanded pair
    pub fn new(id: PairId, layout: &LayoutConfig) -> Self {
        Self {
            id,
            spec: PairSpec::for_pair(id, layout),
            collapsed: false,
        }
    }

    /// Measure `left` against the full right text and apply the verdict
    pub fn evaluate<M: TextMeasure + ?Sized>(
        &mut self,
        oracle: &CollisionOracle,
        measure: &M,
        available_width: u16,
        left: &str,
        right_full: &str,
    ) -> PairDecision {
        let collision = oracle.would_collide(
            measure,
            left,
            right_full,
            self.spec.left_style,
            self.spec.right_style,
            available_width,
        );
        self.transition(collision)
    }

    /// Apply a collision verdict
    pub fn transition(&mut self, collision: bool) -> PairDecision {
        match (self.collapsed, collision) {
            (false, true) => {
                self.collapsed = true;
                PairDecision::Collapse
            }
            (true, false) => {
                self.collapsed = false;
                PairDecision::Expand
            }
            _ => PairDecision::Unchanged,
        }
    }

    /// Right-side text for `value` in the current form
    pub fn right_text(&self, value: u8) -> Word {
        if self.collapsed {
            (self.spec.short)(value)
        } else {
            (self.spec.full)(value)
        }
    }

    /// Full right-side text for `value`
    pub fn full_text(&self, value: u8) -> Word {
        (self.spec.full)(value)
    }

    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    pub fn spec(&self) -> &PairSpec {
        &self.spec
    }

    pub fn id(&self) -> PairId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::testing::TableMeasure;

    fn pair(id: PairId) -> PairedLine {
        PairedLine::new(id, &LayoutConfig::default())
    }

    #[test]
    fn test_expanded_stays_expanded_without_collision() {
        let mut line = pair(PairId::DayTemperature);
        assert_eq!(line.transition(false), PairDecision::Unchanged);
        assert!(!line.is_collapsed());
    }

    #[test]
    fn test_hysteresis_cycle() {
        let mut line = pair(PairId::DayTemperature);
        assert_eq!(line.transition(true), PairDecision::Collapse);
        assert!(line.is_collapsed());
        assert_eq!(line.transition(true), PairDecision::Unchanged);
        assert!(line.is_collapsed());
        assert_eq!(line.transition(false), PairDecision::Expand);
        assert!(!line.is_collapsed());
        assert_eq!(line.transition(false), PairDecision::Unchanged);
    }

    #[test]
    fn test_pair_specs() {
        let layout = LayoutConfig::default();
        let day = PairSpec::for_pair(PairId::DayTemperature, &layout);
        assert_eq!((day.left, day.right), (RowId::Temperature, RowId::Day));
        assert_eq!(day.left_style, TextStyle::SmallBold);
        assert_eq!(day.right_style, TextStyle::SmallBold);

        let battery = PairSpec::for_pair(PairId::BatterySteps, &layout);
        assert_eq!((battery.left, battery.right), (RowId::Steps, RowId::Battery));
        assert_eq!(battery.left_style, TextStyle::SmallBold);
        assert_eq!(battery.right_style, TextStyle::Small);
    }

    #[test]
    fn test_right_text_follows_state() {
        let mut day = pair(PairId::DayTemperature);
        assert_eq!(day.right_text(3).as_str(), "wednesday");
        day.transition(true);
        assert_eq!(day.right_text(3).as_str(), "wed");

        let mut date = pair(PairId::DateCondition);
        date.transition(true);
        assert_eq!(date.right_text(28).as_str(), "28th");
        assert_eq!(date.full_text(28).as_str(), "twenty eighth");

        let mut battery = pair(PairId::BatterySteps);
        assert_eq!(battery.right_text(45).as_str(), "forty five pc");
        battery.transition(true);
        assert_eq!(battery.right_text(45).as_str(), "45%");
    }

    #[test]
    fn test_evaluate_collapses_on_overlap() {
        let measure = TableMeasure::new(&[("wednesday", 70), ("forty five pc", 130)]);
        let oracle = CollisionOracle::from_layout(&LayoutConfig::default());
        let mut line = pair(PairId::DayTemperature);

        let decision = line.evaluate(&oracle, &measure, 180, "forty five pc", "wednesday");
        assert_eq!(decision, PairDecision::Collapse);
        assert_eq!(line.right_text(3).as_str(), "wed");

        let decision = line.evaluate(&oracle, &measure, 180, "ten c", "wednesday");
        assert_eq!(decision, PairDecision::Expand);
    }

    #[test]
    fn test_decision_changed() {
        assert!(!PairDecision::Unchanged.changed());
        assert!(PairDecision::Collapse.changed());
        assert!(PairDecision::Expand.changed());
    }
}
