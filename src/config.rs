//! Rule and search configuration.
//!
//! Every config type carries the constants of the classic exercises in its
//! `Default` implementation and exposes builder-style `with_*` setters.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Rules of the sliding-block puzzle.
///
/// # Examples
///
/// ```
/// use boardsearch::config::PuzzleConfig;
///
/// let config = PuzzleConfig::default().with_target('x').with_exit_row(2);
/// assert_eq!(config.rows, 6);
/// assert_eq!(config.goal_columns(), 4..6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PuzzleConfig {
    /// Number of rows on the board
    pub rows: usize,
    /// Number of columns on the board
    pub cols: usize,
    /// Row (0-based, top first) through which the target piece escapes
    pub exit_row: usize,
    /// Label of the piece that has to reach the exit
    pub target: char,
    /// Width of the goal region at the right edge of the exit row
    pub goal_width: usize,
}

impl PuzzleConfig {
    /// Create a configuration for a board of the given size, keeping the
    /// remaining defaults.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            ..Self::default()
        }
    }

    pub fn with_exit_row(mut self, exit_row: usize) -> Self {
        self.exit_row = exit_row;
        self
    }

    pub fn with_target(mut self, target: char) -> Self {
        self.target = target;
        self
    }

    pub fn with_goal_width(mut self, goal_width: usize) -> Self {
        self.goal_width = goal_width;
        self
    }

    /// Columns of the exit row that make up the goal region.
    pub fn goal_columns(&self) -> std::ops::Range<usize> {
        self.cols.saturating_sub(self.goal_width)..self.cols
    }

    /// Check that the goal region fits on the board.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] for an empty board, an exit row
    /// outside the grid, or a goal region wider than a row.
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(Error::InvalidConfiguration {
                message: format!("puzzle board must not be empty ({}x{})", self.rows, self.cols),
            });
        }
        if self.exit_row >= self.rows {
            return Err(Error::InvalidConfiguration {
                message: format!(
                    "exit row {} is outside a board with {} rows",
                    self.exit_row, self.rows
                ),
            });
        }
        if self.goal_width == 0 || self.goal_width > self.cols {
            return Err(Error::InvalidConfiguration {
                message: format!(
                    "goal width {} must be between 1 and {}",
                    self.goal_width, self.cols
                ),
            });
        }
        Ok(())
    }
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            rows: 6,
            cols: 6,
            exit_row: 2,
            target: 'x',
            goal_width: 2,
        }
    }
}

/// Rules of the connect-k column-drop game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConnectConfig {
    /// Number of columns
    pub cols: usize,
    /// Height of every column
    pub rows: usize,
    /// Run length needed to win
    pub connect: usize,
}

impl ConnectConfig {
    /// Create a game configuration.
    ///
    /// Whether the board can actually hold a winning run is a configuration
    /// precondition, checked here once and never during search.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] when the board is empty or the
    /// run length is zero or longer than both board dimensions.
    pub fn new(cols: usize, rows: usize, connect: usize) -> Result<Self> {
        if cols == 0 || rows == 0 {
            return Err(Error::InvalidConfiguration {
                message: format!("connect board must not be empty ({cols}x{rows})"),
            });
        }
        if connect == 0 || connect > cols.max(rows) {
            return Err(Error::InvalidConfiguration {
                message: format!(
                    "run length {connect} does not fit a board of {cols} columns and {rows} rows"
                ),
            });
        }
        Ok(Self {
            cols,
            rows,
            connect,
        })
    }
}

impl Default for ConnectConfig {
    fn default() -> Self {
        Self {
            cols: 4,
            rows: 3,
            connect: 3,
        }
    }
}

/// Utility values used by the adversarial searches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdversarialConfig {
    /// Value of a win for the searching player (a loss is worth the negation)
    pub win: f64,
    /// Value of a tie; small and positive so a draw beats a loss
    pub tie: f64,
    /// Multiplier applied once per ply, favouring fast wins and slow losses
    pub discount: f64,
}

impl AdversarialConfig {
    pub fn with_win(mut self, win: f64) -> Self {
        self.win = win;
        self
    }

    pub fn with_tie(mut self, tie: f64) -> Self {
        self.tie = tie;
        self
    }

    pub fn with_discount(mut self, discount: f64) -> Self {
        self.discount = discount;
        self
    }

    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] unless `0 < discount < 1`,
    /// `win` is positive and `0 <= tie < win`.
    pub fn validate(&self) -> Result<()> {
        if !(self.discount > 0.0 && self.discount < 1.0) {
            return Err(Error::InvalidConfiguration {
                message: format!("discount {} must lie strictly between 0 and 1", self.discount),
            });
        }
        if !(self.win > 0.0 && self.win.is_finite()) {
            return Err(Error::InvalidConfiguration {
                message: format!("win utility {} must be positive and finite", self.win),
            });
        }
        if !(self.tie >= 0.0 && self.tie < self.win) {
            return Err(Error::InvalidConfiguration {
                message: format!("tie utility {} must lie in [0, {})", self.tie, self.win),
            });
        }
        Ok(())
    }
}

impl Default for AdversarialConfig {
    fn default() -> Self {
        Self {
            win: 1000.0,
            tie: 1.0,
            discount: 0.7,
        }
    }
}

/// External limits for the single-agent searches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchLimits {
    /// Stop once this many boards have been expanded
    pub max_expansions: Option<usize>,
}

impl SearchLimits {
    pub fn unlimited() -> Self {
        Self::default()
    }

    pub fn with_max_expansions(mut self, max_expansions: usize) -> Self {
        self.max_expansions = Some(max_expansions);
        self
    }

    pub(crate) fn exceeded(&self, expanded: usize) -> bool {
        self.max_expansions.is_some_and(|max| expanded >= max)
    }
}
