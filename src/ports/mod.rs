//! Ports - the trait seams between boards and search strategies
//!
//! The searches in [`crate::search`] are written against these traits, and
//! the board modules implement them.

pub mod search_space;
pub mod strategy;

pub use search_space::{Heuristic, SearchState};
pub use strategy::Strategy;
