//! Single-agent and adversarial search strategies
//!
//! - [`breadth_first`] and [`a_star`] find shortest move sequences over any
//!   [`SearchState`](crate::ports::SearchState).
//! - [`GameTreeSearch`] runs minimax or alpha-beta on a connect-k board.
//!
//! The free functions at the bottom are the entry points used by the CLI.

pub mod adversarial;
pub mod astar;
pub mod bfs;
pub mod path;

pub use adversarial::{Decision, GameTreeSearch};
pub use astar::{SearchNode, a_star};
pub use bfs::breadth_first;
pub use path::PathTracker;

use serde::{Deserialize, Serialize};

use crate::{
    Result,
    config::SearchLimits,
    connect::{ConnectBoard, Player},
    sliding::SlidingBoard,
};

/// A path from the start state to a goal state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution<S> {
    /// States from start to goal, both inclusive
    pub path: Vec<S>,
    /// States taken off the frontier and expanded
    pub expanded: usize,
}

impl<S> Solution<S> {
    /// Number of moves along the path
    pub fn moves(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    pub fn goal(&self) -> Option<&S> {
        self.path.last()
    }
}

/// Solve a sliding puzzle with breadth-first search.
///
/// # Examples
///
/// ```
/// use boardsearch::{sliding::SlidingBoard, solve_bfs};
///
/// let start = SlidingBoard::parse("      |      |xx    |      |      |      ").unwrap();
/// assert_eq!(solve_bfs(&start).unwrap().moves(), 1);
/// ```
///
/// # Errors
///
/// Returns [`Error::Unsolvable`](crate::Error::Unsolvable) if no goal board
/// is reachable.
pub fn solve_bfs(start: &SlidingBoard) -> Result<Solution<SlidingBoard>> {
    breadth_first(start, SearchLimits::unlimited())
}

/// Solve a sliding puzzle with A*.
///
/// # Errors
///
/// Returns [`Error::Unsolvable`](crate::Error::Unsolvable) if no goal board
/// is reachable.
pub fn solve_astar(start: &SlidingBoard) -> Result<Solution<SlidingBoard>> {
    a_star(start, SearchLimits::unlimited())
}

/// Best successor for `mover` under plain minimax.
///
/// # Errors
///
/// Returns [`Error::GameOver`](crate::Error::GameOver) for a decided board
/// and [`Error::NoLegalMove`](crate::Error::NoLegalMove) when every column is
/// full.
pub fn choose_move_minimax(board: &ConnectBoard, mover: Player) -> Result<ConnectBoard> {
    Ok(GameTreeSearch::new(mover).minimax(board)?.board)
}

/// Best successor for `mover` under alpha-beta pruning.
///
/// # Errors
///
/// Same as [`choose_move_minimax`].
pub fn choose_move_alphabeta(board: &ConnectBoard, mover: Player) -> Result<ConnectBoard> {
    Ok(GameTreeSearch::new(mover).alphabeta(board)?.board)
}
