//! Board-game search engine
//!
//! This crate provides:
//! - A sliding-block ("rush hour") puzzle board with move generation
//! - A connect-k column-drop game board
//! - Breadth-first and A* search over any [`ports::SearchState`]
//! - Minimax and alpha-beta game-tree search for the connect-k game
//! - Players and a match loop for simulated games
//!
//! Boards are values: every move produces a new board, and equality and
//! hashing only consider the cell content.

pub mod cli;
pub mod config;
pub mod connect;
pub mod error;
pub mod grid;
pub mod pipeline;
pub mod ports;
pub mod report;
pub mod search;
pub mod sliding;

pub use config::{AdversarialConfig, ConnectConfig, PuzzleConfig, SearchLimits};
pub use connect::{ConnectBoard, Outcome, Player};
pub use error::{Error, Result};
pub use search::{
    Decision, GameTreeSearch, Solution, choose_move_alphabeta, choose_move_minimax, solve_astar,
    solve_bfs,
};
pub use sliding::SlidingBoard;
