//! CLI infrastructure for the board search toolkit
//!
//! This module provides the command-line interface for inspecting boards,
//! solving sliding puzzles and playing connect-k games.

pub mod commands;
pub mod output;
