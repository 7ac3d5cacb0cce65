//! Move generation for the column-drop game

use serde::{Deserialize, Serialize};

use super::board::{ConnectBoard, Player};
use crate::grid::EMPTY;

/// Where a piece dropped into `column` comes to rest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColumnDrop {
    pub column: usize,
    pub row: usize,
}

impl ConnectBoard {
    /// Landing cell for `column`, `None` when the column is full
    pub fn legal_target(&self, column: usize) -> Option<ColumnDrop> {
        self.first_empty(column).map(|row| ColumnDrop { column, row })
    }

    /// All legal drops, by ascending column
    pub fn legal_drops(&self) -> Vec<ColumnDrop> {
        (0..self.config().cols)
            .filter_map(|column| self.legal_target(column))
            .collect()
    }

    /// One successor per non-full column, ascending, with `player` to move.
    ///
    /// A decided board still lists its successors; callers check
    /// [`ConnectBoard::winner`] first.
    pub fn successors(&self, player: Player) -> Vec<ConnectBoard> {
        self.legal_drops()
            .into_iter()
            .map(|drop| self.put(drop.column, drop.row, player))
            .collect()
    }

    /// Column in which `next` differs from `self`, if it is a single drop away
    pub fn column_played(&self, next: &ConnectBoard) -> Option<usize> {
        self.legal_drops()
            .into_iter()
            .find(|drop| {
                let landed = next.cell(drop.row as isize, drop.column as isize);
                landed.is_some_and(|c| c != EMPTY)
            })
            .map(|drop| drop.column)
    }
}
