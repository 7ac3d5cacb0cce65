//! Connect-k board state, parsing and outcome detection

use std::{
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    config::ConnectConfig,
    grid::{EMPTY, Grid, Position},
};

/// A player of the column-drop game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Cell label used on the board
    pub fn label(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }

    pub fn from_label(c: char) -> Option<Player> {
        match c {
            'X' | 'x' => Some(Player::X),
            'O' | 'o' => Some(Player::O),
            _ => None,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Final result of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win(Player),
    Tie,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Win(player) => write!(f, "{player} wins!"),
            Outcome::Tie => write!(f, "TIE"),
        }
    }
}

/// A connect-k board.
///
/// The text form lists the columns separated by `|`, each column written
/// bottom cell first. Internally every grid row stores one game column, so
/// `grid.get((column, height))` is the cell at that column and height.
/// Equality and hashing use the cell content only.
#[derive(Debug, Clone)]
pub struct ConnectBoard {
    grid: Grid,
    config: ConnectConfig,
}

impl ConnectBoard {
    /// Empty board under the default 4x3, connect-3 rules
    pub fn new() -> Self {
        Self::with_config(ConnectConfig::default())
    }

    /// Empty board under custom rules
    pub fn with_config(config: ConnectConfig) -> Self {
        Self {
            grid: Grid::empty(config.cols, config.rows),
            config,
        }
    }

    /// Parse a board under the default rules.
    ///
    /// # Examples
    ///
    /// ```
    /// use boardsearch::connect::{ConnectBoard, Outcome, Player};
    ///
    /// let board = ConnectBoard::parse("X  |X  |X  |OO ").unwrap();
    /// assert_eq!(board.winner(), Some(Outcome::Win(Player::X)));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns a malformed-board error if the column count, a column height
    /// or a character does not fit the rules.
    pub fn parse(text: &str) -> Result<Self> {
        Self::parse_with(text, ConnectConfig::default())
    }

    /// Parse a board under custom rules.
    ///
    /// # Errors
    ///
    /// Returns a malformed-board error for text that does not match `config`.
    pub fn parse_with(text: &str, config: ConnectConfig) -> Result<Self> {
        let grid = Grid::parse(text, config.cols, config.rows, classify)?;
        Ok(Self { grid, config })
    }

    /// Compact text form; `parse(serialize(b)) == b`
    pub fn serialize(&self) -> String {
        self.grid.serialize()
    }

    pub fn config(&self) -> &ConnectConfig {
        &self.config
    }

    /// Label at `row` (0 is the bottom) and `col`, `None` outside the board
    pub fn cell(&self, row: isize, col: isize) -> Option<char> {
        self.grid.cell(col, row)
    }

    /// One horizontal row across all columns, left to right
    pub fn row(&self, row: usize) -> Vec<char> {
        (0..self.config.cols)
            .filter_map(|col| self.grid.get(Position::new(col, row)))
            .collect()
    }

    /// Number of empty cells left
    pub fn empties(&self) -> usize {
        self.grid.count(EMPTY)
    }

    pub fn is_full(&self) -> bool {
        self.empties() == 0
    }

    /// Height at which a piece dropped into `column` comes to rest.
    ///
    /// `None` when the top cell is occupied or the column does not exist.
    pub fn first_empty(&self, column: usize) -> Option<usize> {
        let top = self.config.rows.checked_sub(1)?;
        if !self.grid.is_empty_at(Position::new(column, top)) {
            return None;
        }
        let mut row = top;
        while row > 0 && self.grid.is_empty_at(Position::new(column, row - 1)) {
            row -= 1;
        }
        Some(row)
    }

    /// Drop a piece for `player` into `column`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ColumnFull`] when the column has no room.
    #[must_use = "place returns a new board; the original is unchanged"]
    pub fn place(&self, column: usize, player: Player) -> Result<ConnectBoard> {
        let row = self
            .first_empty(column)
            .ok_or(Error::ColumnFull { column })?;
        Ok(self.put(column, row, player))
    }

    pub(crate) fn put(&self, column: usize, row: usize, player: Player) -> ConnectBoard {
        let mut next = self.clone();
        next.grid.set(Position::new(column, row), player.label());
        next
    }

    fn has_run(&self, label: char, col: isize, row: isize, d_col: isize, d_row: isize) -> bool {
        (1..self.config.connect as isize)
            .all(|step| self.cell(row + step * d_row, col + step * d_col) == Some(label))
    }

    /// Outcome of the board, if decided.
    ///
    /// Returns the label owning a run of `connect` pieces (scanning columns
    /// left to right, then rows bottom up), [`Outcome::Tie`] for a full board
    /// without a run, and `None` while play continues.
    pub fn winner(&self) -> Option<Outcome> {
        const DIRECTIONS: [(isize, isize); 4] = [(1, 0), (0, 1), (1, 1), (-1, 1)];

        for col in 0..self.config.cols as isize {
            for row in 0..self.config.rows as isize {
                let Some(label) = self.cell(row, col).filter(|&c| c != EMPTY) else {
                    continue;
                };
                if DIRECTIONS
                    .iter()
                    .any(|&(d_col, d_row)| self.has_run(label, col, row, d_col, d_row))
                {
                    return Player::from_label(label).map(Outcome::Win);
                }
            }
        }

        if self.is_full() {
            Some(Outcome::Tie)
        } else {
            None
        }
    }

    /// True iff some player owns a winning run
    pub fn is_goal(&self) -> bool {
        matches!(self.winner(), Some(Outcome::Win(_)))
    }
}

fn classify(c: char) -> Option<char> {
    match c {
        ' ' | '.' => Some(EMPTY),
        _ => Player::from_label(c).map(Player::label),
    }
}

impl Default for ConnectBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for ConnectBoard {
    fn eq(&self, other: &Self) -> bool {
        self.grid == other.grid
    }
}

impl Eq for ConnectBoard {}

impl Hash for ConnectBoard {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.grid.hash(state);
    }
}

impl FromStr for ConnectBoard {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for ConnectBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..self.config.rows).rev() {
            write!(f, "{}", self.row(row).into_iter().collect::<String>())?;
            if row > 0 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_board_round_trip() {
        let board = ConnectBoard::new();
        assert_eq!(board.serialize(), "   |   |   |   ");
        assert_eq!(ConnectBoard::parse(&board.serialize()).unwrap(), board);
        assert_eq!(board.empties(), 12);
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn parse_normalises_labels() {
        let board = ConnectBoard::parse("xo.|...|...|...").unwrap();
        assert_eq!(board.serialize(), "XO |   |   |   ");
        assert_eq!(board.cell(0, 0), Some('X'));
        assert_eq!(board.cell(1, 0), Some('O'));
        assert_eq!(board.cell(3, 0), None);
        assert_eq!(board.cell(0, -1), None);
    }

    #[test]
    fn parse_rejects_bad_shapes() {
        assert!(ConnectBoard::parse("   |   |   ").unwrap_err().is_malformed_board());
        assert!(ConnectBoard::parse("    |   |   |   ").unwrap_err().is_malformed_board());
        assert!(ConnectBoard::parse("Z  |   |   |   ").unwrap_err().is_malformed_board());
    }

    #[test]
    fn first_empty_and_place() {
        let board = ConnectBoard::parse("XO |XOX|   |   ").unwrap();
        assert_eq!(board.first_empty(0), Some(2));
        assert_eq!(board.first_empty(1), None);
        assert_eq!(board.first_empty(2), Some(0));
        assert_eq!(board.first_empty(9), None);

        let next = board.place(0, Player::O).unwrap();
        assert_eq!(next.serialize(), "XOO|XOX|   |   ");
        assert!(matches!(
            board.place(1, Player::X),
            Err(Error::ColumnFull { column: 1 })
        ));
    }

    #[test]
    fn detects_horizontal_vertical_and_diagonal_runs() {
        // horizontal along the bottom
        let board = ConnectBoard::parse("O  |X  |X  |X  ").unwrap();
        assert_eq!(board.winner(), Some(Outcome::Win(Player::X)));

        // vertical
        let board = ConnectBoard::parse("OOO|X  |X  |   ").unwrap();
        assert_eq!(board.winner(), Some(Outcome::Win(Player::O)));

        // rising diagonal
        let board = ConnectBoard::parse("X  |OX |OOX|   ").unwrap();
        assert_eq!(board.winner(), Some(Outcome::Win(Player::X)));

        // falling diagonal
        let board = ConnectBoard::parse("XXO|XO |O  |   ").unwrap();
        assert_eq!(board.winner(), Some(Outcome::Win(Player::O)));
        assert!(board.is_goal());
    }

    #[test]
    fn full_board_without_run_is_a_tie() {
        let board = ConnectBoard::parse("XOX|OXO|OXO|XOX").unwrap();
        assert_eq!(board.winner(), Some(Outcome::Tie));
        assert!(!board.is_goal());
    }

    #[test]
    fn display_puts_top_row_first() {
        let board = ConnectBoard::parse("XO |   |   |   ").unwrap();
        assert_eq!(board.to_string(), "    \nO   \nX   ");
    }
}
