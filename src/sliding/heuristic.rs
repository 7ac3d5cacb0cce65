//! Admissible distance estimate for the A* search

use super::board::{Orientation, SlidingBoard};
use crate::{grid::Position, ports::Heuristic};

impl SlidingBoard {
    /// Lower bound on the number of slides left before the goal.
    ///
    /// The target's remaining distance is counted in slides, not cells: one
    /// slide covers any number of empty cells, so an unfinished target adds
    /// exactly 1. When the target sits on the exit row and the cell right
    /// past its head is occupied, the piece in that cell has to move as well,
    /// adding a fixed penalty of 1.
    pub fn remaining_estimate(&self) -> usize {
        if self.is_goal() {
            return 0;
        }

        let config = self.config();
        let cells = self.piece_cells(config.target);
        let on_exit_row = !cells.is_empty()
            && self.orientation(config.target) == Some(Orientation::Horizontal)
            && cells[0].row == config.exit_row;

        let blocked = on_exit_row
            && cells
                .iter()
                .max()
                .and_then(|head| head.offset(0, 1))
                .filter(|next| next.col < config.cols)
                .is_some_and(|next: Position| !self.grid().is_empty_at(next));

        1 + usize::from(blocked)
    }
}

impl Heuristic for SlidingBoard {
    fn estimate(&self) -> usize {
        self.remaining_estimate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn goal_board_costs_nothing() {
        let board = SlidingBoard::parse("      |      |    xx|      |      |      ").unwrap();
        assert_eq!(board.estimate(), 0);
    }

    #[test]
    fn free_path_costs_one_slide() {
        let board = SlidingBoard::parse("      |      |xx    |      |      |      ").unwrap();
        assert_eq!(board.estimate(), 1);
    }

    #[test]
    fn adjacent_blocker_adds_penalty() {
        let board = SlidingBoard::parse("      |  a   |xxa   |      |      |      ").unwrap();
        assert_eq!(board.estimate(), 2);

        // a blocker further away is not counted
        let board = SlidingBoard::parse("      |    a |xx  a |      |      |      ").unwrap();
        assert_eq!(board.estimate(), 1);
    }

    #[test]
    fn target_off_the_exit_row() {
        let board = SlidingBoard::parse("xx    |      |      |      |      |      ").unwrap();
        assert_eq!(board.estimate(), 1);
    }
}
