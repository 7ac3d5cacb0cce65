//! Move generation for sliding pieces

use serde::{Deserialize, Serialize};

use super::board::{Orientation, SlidingBoard, orientation_of};
use crate::{grid::Position, ports::SearchState};

/// A slide of one piece so that it covers `target`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlideMove {
    pub piece: char,
    pub target: Position,
}

impl SlidingBoard {
    /// Cells `piece` can slide onto.
    ///
    /// Walks outward along the piece's axis, first from the tail towards the
    /// lower coordinates, then from the head towards the higher ones,
    /// stopping at the first occupied cell or the edge. Each direction lists
    /// the nearest cell first. Unknown labels have no targets.
    pub fn legal_targets(&self, piece: char) -> Vec<Position> {
        let cells = self.piece_cells(piece);
        let (Some(&tail), Some(&head), Some(orientation)) = (
            cells.iter().min(),
            cells.iter().max(),
            orientation_of(&cells),
        ) else {
            return Vec::new();
        };

        let (d_row, d_col) = match orientation {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
        };

        let mut targets = Vec::new();
        self.walk_empty(tail, -d_row, -d_col, &mut targets);
        self.walk_empty(head, d_row, d_col, &mut targets);
        targets
    }

    fn walk_empty(&self, from: Position, d_row: isize, d_col: isize, out: &mut Vec<Position>) {
        let mut current = from;
        while let Some(next) = current.offset(d_row, d_col) {
            if !self.grid().is_empty_at(next) {
                break;
            }
            out.push(next);
            current = next;
        }
    }

    /// Every legal slide, pieces in ascending label order
    pub fn legal_moves(&self) -> Vec<SlideMove> {
        self.pieces()
            .into_iter()
            .flat_map(|piece| {
                self.legal_targets(piece)
                    .into_iter()
                    .map(move |target| SlideMove { piece, target })
            })
            .collect()
    }

    /// Successor boards for a single piece
    pub fn successors_for(&self, piece: char) -> Vec<SlidingBoard> {
        let cells = self.piece_cells(piece);
        self.legal_targets(piece)
            .into_iter()
            .map(|target| self.translated(piece, &cells, target))
            .collect()
    }

    /// One successor per legal slide, in [`SlidingBoard::legal_moves`] order
    pub fn successors(&self) -> Vec<SlidingBoard> {
        self.pieces()
            .into_iter()
            .flat_map(|piece| self.successors_for(piece))
            .collect()
    }
}

impl SearchState for SlidingBoard {
    fn key(&self) -> String {
        self.serialize()
    }

    fn is_goal(&self) -> bool {
        SlidingBoard::is_goal(self)
    }

    fn successors(&self) -> Vec<Self> {
        SlidingBoard::successors(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const START: &str = "  o aa|  o   |xxo   |ppp  q|     q|     q";

    #[test]
    fn targets_stop_at_occupied_cells() {
        let board = SlidingBoard::parse(START).unwrap();

        // a: tail side (0,3) then blocked by o; head at the edge
        assert_eq!(board.legal_targets('a'), vec![Position::new(0, 3)]);
        // x is boxed in by the edge and o
        assert!(board.legal_targets('x').is_empty());
        // p slides right until q's column
        assert_eq!(
            board.legal_targets('p'),
            vec![Position::new(3, 3), Position::new(3, 4)]
        );
        assert_eq!(
            board.legal_targets('q'),
            vec![Position::new(2, 5), Position::new(1, 5)]
        );
        assert!(board.legal_targets('z').is_empty());
    }

    #[test]
    fn successors_follow_label_order() {
        let board = SlidingBoard::parse(START).unwrap();
        let moves = board.legal_moves();
        let pieces: Vec<char> = moves.iter().map(|m| m.piece).collect();
        assert_eq!(pieces, vec!['a', 'p', 'p', 'q', 'q']);

        let successors = board.successors();
        assert_eq!(successors.len(), moves.len());
        for (next, mv) in successors.iter().zip(&moves) {
            assert_eq!(next.grid().get(mv.target), Some(mv.piece));
            assert_eq!(
                next.piece_cells(mv.piece).len(),
                board.piece_cells(mv.piece).len()
            );
        }
    }

    #[test]
    fn successors_agree_with_clone_with_move() {
        let board = SlidingBoard::parse(START).unwrap();
        for mv in board.legal_moves() {
            let expected = board.clone_with_move(mv.piece, mv.target).unwrap();
            assert!(board.successors_for(mv.piece).contains(&expected));
        }
    }

    #[test]
    fn boxed_in_board_has_no_successors() {
        let board = SlidingBoard::parse("aaaaaa|bbbbbb|xxcccc|dddddd|eeeeee|ffffff").unwrap();
        assert!(board.successors().is_empty());
    }
}
