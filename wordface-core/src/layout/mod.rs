//! Collision-aware layout of paired lines
//!
//! Three lines of the face carry two fields each, one left-aligned and one
//! right-aligned. When they would overlap, the right field switches to its
//! abbreviated form until the overlap goes away.

pub mod collision;
pub mod pair;

pub use collision::CollisionOracle;
pub use pair::{PairDecision, PairId, PairSpec, PairedLine, PAIR_COUNT};
