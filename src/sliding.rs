//! Sliding-block puzzle ("rush hour")
//!
//! Pieces are runs of equal lowercase labels that slide along their own axis
//! through empty cells. The puzzle is solved once the target piece covers the
//! goal region at the right end of the exit row.

pub mod board;
pub mod heuristic;
pub mod moves;

pub use board::{Orientation, SlidingBoard};
pub use moves::SlideMove;

/// The board used by the classic exercise
pub const CLASSIC_START: &str = "  o aa|  o   |xxo   |ppp  q|     q|     q";
