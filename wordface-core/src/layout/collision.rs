//! Width-based overlap test

use crate::config::LayoutConfig;
use crate::traits::{TextMeasure, TextStyle};

/// Decides whether two texts sharing a line would overlap
///
/// Stateless: the same inputs and the same measurer always give the same
/// answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CollisionOracle {
    min_gap: u16,
    edge_margin: u16,
}

impl CollisionOracle {
    pub const fn new(min_gap: u16, edge_margin: u16) -> Self {
        Self {
            min_gap,
            edge_margin,
        }
    }

    pub const fn from_layout(layout: &LayoutConfig) -> Self {
        Self::new(layout.min_gap, layout.edge_margin)
    }

    /// Check whether `left` and `right` overlap on a line `available_width` wide
    ///
    /// Never reports a collision when either side is empty. Only a real
    /// overlap counts; texts that merely come close do not.
    pub fn would_collide<M: TextMeasure + ?Sized>(
        &self,
        measure: &M,
        left: &str,
        right: &str,
        left_style: TextStyle,
        right_style: TextStyle,
        available_width: u16,
    ) -> bool {
        if left.is_empty() || right.is_empty() {
            return false;
        }
        let left_width = measure.measure_width(left, left_style, available_width) as u32;
        let right_width = measure.measure_width(right, right_style, available_width) as u32;
        let usable = available_width.saturating_sub(self.edge_margin) as u32;
        left_width + right_width + self.min_gap as u32 > usable
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::testing::TableMeasure;

    fn oracle() -> CollisionOracle {
        CollisionOracle::from_layout(&LayoutConfig::default())
    }

    #[test]
    fn test_overlap_detected() {
        let measure = TableMeasure::new(&[("wednesday", 70), ("forty five pc", 130)]);
        assert!(oracle().would_collide(
            &measure,
            "wednesday",
            "forty five pc",
            TextStyle::SmallBold,
            TextStyle::Small,
            180,
        ));
    }

    #[test]
    fn test_comfortable_fit() {
        let measure = TableMeasure::new(&[("ten c", 40), ("monday", 50)]);
        assert!(!oracle().would_collide(
            &measure,
            "ten c",
            "monday",
            TextStyle::SmallBold,
            TextStyle::SmallBold,
            144,
        ));
    }

    #[test]
    fn test_boundary_is_not_a_collision() {
        // 60 + 74 + 8 == 144 - 2
        let measure = TableMeasure::new(&[("left", 60), ("right", 74)]);
        let collide = |width| {
            oracle().would_collide(
                &measure,
                "left",
                "right",
                TextStyle::Small,
                TextStyle::Small,
                width,
            )
        };
        assert!(!collide(144));
        assert!(collide(143));
    }

    #[test]
    fn test_empty_side_never_collides() {
        let measure = TableMeasure::new(&[("wednesday", 500)]);
        let oracle = oracle();
        assert!(!oracle.would_collide(&measure, "", "wednesday", TextStyle::Small, TextStyle::Small, 10));
        assert!(!oracle.would_collide(&measure, "wednesday", "", TextStyle::Small, TextStyle::Small, 10));
    }
}
