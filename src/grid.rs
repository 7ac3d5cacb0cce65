//! Fixed-size character grid shared by both board types
//!
//! A grid is a row-major block of single-character cell labels. Its text form
//! joins the rows with [`DELIMITER`]; parsing is purely structural and only
//! checks the row count, the row lengths and the cell alphabet.

use std::{collections::BTreeSet, fmt};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Label of an empty cell
pub const EMPTY: char = ' ';

/// Character separating rows in the compact text form
pub const DELIMITER: char = '|';

/// A cell coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Shift by a signed offset, or `None` when the result would be negative.
    pub fn offset(self, d_row: isize, d_col: isize) -> Option<Position> {
        Some(Position {
            row: self.row.checked_add_signed(d_row)?,
            col: self.col.checked_add_signed(d_col)?,
        })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Immutable-per-step grid of cell labels.
///
/// Equality and hashing are derived from the dimensions and the cell content,
/// so two grids with the same text form are the same value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<char>,
}

impl Grid {
    /// Create a grid where every cell is empty
    pub fn empty(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![EMPTY; rows * cols],
        }
    }

    /// Parse the compact text form.
    ///
    /// `classify` maps every input character to the label stored in the grid,
    /// or `None` for characters outside the alphabet.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RowCount`], [`Error::RowLength`] or
    /// [`Error::InvalidCellCharacter`] when the text does not describe a
    /// `rows` x `cols` grid over the accepted alphabet.
    pub fn parse<F>(text: &str, rows: usize, cols: usize, classify: F) -> Result<Self>
    where
        F: Fn(char) -> Option<char>,
    {
        let lines: Vec<&str> = text.split(DELIMITER).collect();
        if lines.len() != rows {
            return Err(Error::RowCount {
                expected: rows,
                got: lines.len(),
                context: text.to_string(),
            });
        }

        let mut cells = Vec::with_capacity(rows * cols);
        for (row, line) in lines.iter().enumerate() {
            let length = line.chars().count();
            if length != cols {
                return Err(Error::RowLength {
                    row,
                    expected: cols,
                    got: length,
                    context: text.to_string(),
                });
            }
            for (column, c) in line.chars().enumerate() {
                let label = classify(c).ok_or_else(|| Error::InvalidCellCharacter {
                    character: c,
                    row,
                    column,
                    context: text.to_string(),
                })?;
                cells.push(label);
            }
        }

        Ok(Self { rows, cols, cells })
    }

    /// Compact text form, the inverse of [`Grid::parse`]
    pub fn serialize(&self) -> String {
        self.cells
            .chunks(self.cols.max(1))
            .map(|row| row.iter().collect::<String>())
            .collect::<Vec<_>>()
            .join(&DELIMITER.to_string())
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Label at a signed coordinate; `None` outside the grid.
    pub fn cell(&self, row: isize, col: isize) -> Option<char> {
        if row < 0 || col < 0 {
            return None;
        }
        self.get(Position::new(row as usize, col as usize))
    }

    /// Label at a position; `None` outside the grid.
    pub fn get(&self, pos: Position) -> Option<char> {
        if pos.row < self.rows && pos.col < self.cols {
            Some(self.cells[pos.row * self.cols + pos.col])
        } else {
            None
        }
    }

    pub fn is_empty_at(&self, pos: Position) -> bool {
        self.get(pos) == Some(EMPTY)
    }

    /// Overwrite a cell. Positions outside the grid are ignored.
    pub(crate) fn set(&mut self, pos: Position, label: char) {
        if pos.row < self.rows && pos.col < self.cols {
            self.cells[pos.row * self.cols + pos.col] = label;
        }
    }

    /// All cells holding `label`, in row-major order
    pub fn positions_of(&self, label: char) -> Vec<Position> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c == label)
            .map(|(i, _)| Position::new(i / self.cols, i % self.cols))
            .collect()
    }

    /// Distinct non-empty labels, ascending
    pub fn labels(&self) -> BTreeSet<char> {
        self.cells.iter().copied().filter(|&c| c != EMPTY).collect()
    }

    pub fn count(&self, label: char) -> usize {
        self.cells.iter().filter(|&&c| c == label).count()
    }

    /// Iterate one row as characters
    pub fn row(&self, row: usize) -> impl Iterator<Item = char> + '_ {
        self.cells
            .iter()
            .skip(row * self.cols)
            .take(if row < self.rows { self.cols } else { 0 })
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(c: char) -> Option<char> {
        match c {
            ' ' | '.' => Some(EMPTY),
            'a'..='z' => Some(c),
            _ => None,
        }
    }

    #[test]
    fn parse_and_serialize_round_trip() {
        let text = "ab |  c";
        let grid = Grid::parse(text, 2, 3, classify).unwrap();
        assert_eq!(grid.serialize(), text);
        assert_eq!(grid.cell(0, 1), Some('b'));
        assert_eq!(grid.cell(1, 2), Some('c'));
    }

    #[test]
    fn dots_normalise_to_empty() {
        let grid = Grid::parse("a.|..", 2, 2, classify).unwrap();
        assert_eq!(grid.serialize(), "a |  ");
    }

    #[test]
    fn out_of_bounds_cells_are_none() {
        let grid = Grid::empty(2, 2);
        assert_eq!(grid.cell(-1, 0), None);
        assert_eq!(grid.cell(0, 2), None);
        assert_eq!(grid.cell(2, 0), None);
        assert_eq!(grid.cell(1, 1), Some(EMPTY));
    }

    #[test]
    fn parse_rejects_wrong_shape() {
        let err = Grid::parse("ab|c", 2, 2, classify).unwrap_err();
        assert!(matches!(err, Error::RowLength { row: 1, .. }));

        let err = Grid::parse("ab", 2, 2, classify).unwrap_err();
        assert!(matches!(err, Error::RowCount { expected: 2, got: 1, .. }));
    }

    #[test]
    fn parse_rejects_unknown_character() {
        let err = Grid::parse("a#|  ", 2, 2, classify).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidCellCharacter {
                character: '#',
                row: 0,
                column: 1,
                ..
            }
        ));
        assert!(err.is_malformed_board());
    }

    #[test]
    fn labels_and_positions() {
        let grid = Grid::parse("bb |a  ", 2, 3, classify).unwrap();
        assert_eq!(grid.labels().into_iter().collect::<Vec<_>>(), vec!['a', 'b']);
        assert_eq!(
            grid.positions_of('b'),
            vec![Position::new(0, 0), Position::new(0, 1)]
        );
        assert_eq!(grid.count(EMPTY), 3);
        assert_eq!(grid.row(1).collect::<String>(), "a  ");
    }
}
