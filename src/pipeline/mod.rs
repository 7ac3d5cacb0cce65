//! Game-playing pipeline
//!
//! This module provides:
//! - Strategy implementations (random baseline, minimax, alpha-beta)
//! - A match loop that alternates two strategies and records the game

pub mod gameplay;
pub mod players;

pub use gameplay::{Match, MatchRecord, MoveRecord};
pub use players::{AlphaBetaPlayer, MinimaxPlayer, RandomPlayer};

pub use crate::ports::Strategy;
