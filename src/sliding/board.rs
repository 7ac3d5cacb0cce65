//! Sliding-block board representation and move application

use std::{
    collections::BTreeSet,
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
};

use crate::{
    Error, Result,
    config::PuzzleConfig,
    grid::{EMPTY, Grid, Position},
};

/// Axis along which a piece slides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A sliding-block puzzle configuration.
///
/// The board owns its grid and the puzzle rules it is played under. Boards
/// are values: applying a move returns a new board and leaves `self`
/// untouched. Equality and hashing only look at the cell content, so a board
/// reached by moves equals the same board parsed from text.
#[derive(Debug, Clone)]
pub struct SlidingBoard {
    grid: Grid,
    config: PuzzleConfig,
}

impl SlidingBoard {
    /// Parse a board under the default 6x6 rules.
    ///
    /// # Examples
    ///
    /// ```
    /// use boardsearch::sliding::SlidingBoard;
    ///
    /// let board = SlidingBoard::parse("  o aa|  o   |xxo   |ppp  q|     q|     q").unwrap();
    /// assert_eq!(board.cell(2, 0), Some('x'));
    /// assert!(!board.is_goal());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns a malformed-board error (see [`Error::is_malformed_board`]) if
    /// the row count, a row length or a character does not fit the rules.
    pub fn parse(text: &str) -> Result<Self> {
        Self::parse_with(text, PuzzleConfig::default())
    }

    /// Parse a board under custom rules.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] for inconsistent rules, or a
    /// malformed-board error for text that does not match them.
    pub fn parse_with(text: &str, config: PuzzleConfig) -> Result<Self> {
        config.validate()?;
        let grid = Grid::parse(text, config.rows, config.cols, classify)?;
        Ok(Self { grid, config })
    }

    /// Compact text form; `parse(serialize(b)) == b`
    pub fn serialize(&self) -> String {
        self.grid.serialize()
    }

    /// Label at a signed coordinate, `None` outside the board
    pub fn cell(&self, row: isize, col: isize) -> Option<char> {
        self.grid.cell(row, col)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn config(&self) -> &PuzzleConfig {
        &self.config
    }

    /// Labels of all pieces on the board, ascending
    pub fn pieces(&self) -> BTreeSet<char> {
        self.grid.labels()
    }

    /// Cells occupied by `piece` in row-major order (tail first, head last)
    pub fn piece_cells(&self, piece: char) -> Vec<Position> {
        if piece == EMPTY {
            return Vec::new();
        }
        self.grid.positions_of(piece)
    }

    /// Orientation derived from the occupied cells.
    ///
    /// A piece whose cells share one row is horizontal, which includes
    /// single-cell pieces. Returns `None` for labels not on the board.
    pub fn orientation(&self, piece: char) -> Option<Orientation> {
        orientation_of(&self.piece_cells(piece))
    }

    /// True iff the goal region is completely covered by the target piece
    pub fn is_goal(&self) -> bool {
        let row = self.config.exit_row;
        self.config
            .goal_columns()
            .all(|col| self.grid.get(Position::new(row, col)) == Some(self.config.target))
    }

    /// Slide `piece` so that it covers `target`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownPiece`] if the label is not on the board and
    /// [`Error::IllegalMove`] if `target` is not reachable through empty
    /// cells along the piece's axis.
    #[must_use = "clone_with_move returns a new board; the original is unchanged"]
    pub fn clone_with_move(&self, piece: char, target: Position) -> Result<SlidingBoard> {
        let cells = self.piece_cells(piece);
        if cells.is_empty() {
            return Err(Error::UnknownPiece { piece });
        }
        if !self.legal_targets(piece).contains(&target) {
            return Err(Error::IllegalMove {
                piece,
                row: target.row,
                column: target.col,
            });
        }
        Ok(self.translated(piece, &cells, target))
    }

    /// Apply a move whose target is known to be legal.
    ///
    /// The shift is the smaller of the head-to-target and tail-to-target
    /// offsets, which is exactly the translation that makes the piece cover
    /// `target` from whichever end faces it.
    pub(crate) fn translated(&self, piece: char, cells: &[Position], target: Position) -> SlidingBoard {
        let (Some(&tail), Some(&head)) = (cells.iter().min(), cells.iter().max()) else {
            return self.clone();
        };

        let from_head = signed_distance(head, target);
        let from_tail = signed_distance(tail, target);
        let shift = if from_tail.abs() < from_head.abs() {
            from_tail
        } else {
            from_head
        };

        let (d_row, d_col) = match orientation_of(cells) {
            Some(Orientation::Vertical) => (shift, 0),
            _ => (0, shift),
        };

        let mut next = self.clone();
        for &pos in cells {
            next.grid.set(pos, EMPTY);
        }
        for &pos in cells {
            if let Some(moved) = pos.offset(d_row, d_col) {
                next.grid.set(moved, piece);
            }
        }
        next
    }
}

fn classify(c: char) -> Option<char> {
    match c {
        ' ' | '.' => Some(EMPTY),
        'a'..='z' => Some(c),
        _ => None,
    }
}

pub(crate) fn orientation_of(cells: &[Position]) -> Option<Orientation> {
    let first = cells.first()?;
    if cells.iter().all(|p| p.row == first.row) {
        Some(Orientation::Horizontal)
    } else {
        Some(Orientation::Vertical)
    }
}

// Pieces move along one axis, so the row and column offsets can be summed.
fn signed_distance(from: Position, to: Position) -> isize {
    (to.row as isize - from.row as isize) + (to.col as isize - from.col as isize)
}

impl PartialEq for SlidingBoard {
    fn eq(&self, other: &Self) -> bool {
        self.grid == other.grid
    }
}

impl Eq for SlidingBoard {}

impl Hash for SlidingBoard {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.grid.hash(state);
    }
}

impl FromStr for SlidingBoard {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for SlidingBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.grid.rows() {
            if row > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", self.grid.row(row).collect::<String>())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const START: &str = "  o aa|  o   |xxo   |ppp  q|     q|     q";

    #[test]
    fn parse_classic_board() {
        let board = SlidingBoard::parse(START).unwrap();
        assert_eq!(
            board.pieces().into_iter().collect::<String>(),
            "aopqx"
        );
        assert_eq!(board.orientation('x'), Some(Orientation::Horizontal));
        assert_eq!(board.orientation('o'), Some(Orientation::Vertical));
        assert_eq!(board.orientation('z'), None);
        assert_eq!(board.serialize(), START);
    }

    #[test]
    fn parse_rejects_uppercase_labels() {
        let err = SlidingBoard::parse("  O aa|  o   |xxo   |ppp  q|     q|     q").unwrap_err();
        assert!(err.is_malformed_board());
    }

    #[test]
    fn goal_detection() {
        let board = SlidingBoard::parse("      |      |    xx|      |      |      ").unwrap();
        assert!(board.is_goal());
        let board = SlidingBoard::parse("      |      |   xx |      |      |      ").unwrap();
        assert!(!board.is_goal());
    }

    #[test]
    fn move_towards_head_and_tail() {
        let board = SlidingBoard::parse("      |      |  xx  |      |      |      ").unwrap();

        let right = board.clone_with_move('x', Position::new(2, 5)).unwrap();
        assert_eq!(right.serialize(), "      |      |    xx|      |      |      ");

        let left = board.clone_with_move('x', Position::new(2, 0)).unwrap();
        assert_eq!(left.serialize(), "      |      |xx    |      |      |      ");

        // parent untouched
        assert_eq!(board.serialize(), "      |      |  xx  |      |      |      ");
    }

    #[test]
    fn vertical_piece_moves_along_column() {
        let board = SlidingBoard::parse(START).unwrap();
        let moved = board.clone_with_move('o', Position::new(3, 2));
        assert!(moved.is_err(), "p blocks o from below");

        let moved = board.clone_with_move('q', Position::new(2, 5)).unwrap();
        assert_eq!(moved.piece_cells('q').len(), 3);
        assert_eq!(moved.cell(2, 5), Some('q'));
        assert_eq!(moved.cell(5, 5), Some(' '));
    }

    #[test]
    fn unknown_piece_is_reported() {
        let board = SlidingBoard::parse(START).unwrap();
        let err = board.clone_with_move('z', Position::new(0, 0)).unwrap_err();
        assert!(matches!(err, Error::UnknownPiece { piece: 'z' }));
    }

    #[test]
    fn equality_ignores_construction_path() {
        let board = SlidingBoard::parse("      |      |  xx  |      |      |      ").unwrap();
        let there = board.clone_with_move('x', Position::new(2, 0)).unwrap();
        let back = there.clone_with_move('x', Position::new(2, 3)).unwrap();
        assert_eq!(back, board);
    }
}
