//! Column-drop connect-k game

mod board;
mod moves;

pub use board::{ConnectBoard, Outcome, Player};
pub use moves::ColumnDrop;
