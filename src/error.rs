//! Error types for the boardsearch crate

use thiserror::Error;

/// Main error type for the boardsearch crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("malformed board '{context}': expected {expected} rows, got {got}")]
    RowCount {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("malformed board '{context}': row {row} has {got} cells, expected {expected}")]
    RowLength {
        row: usize,
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("malformed board '{context}': invalid character '{character}' at row {row}, column {column}")]
    InvalidCellCharacter {
        character: char,
        row: usize,
        column: usize,
        context: String,
    },

    #[error("no solution: search exhausted {expanded} reachable boards without reaching the goal")]
    Unsolvable { expanded: usize },

    #[error("search stopped after expanding {expanded} boards (budget exhausted)")]
    BudgetExhausted { expanded: usize },

    #[error("piece '{piece}' is not on the board")]
    UnknownPiece { piece: char },

    #[error("illegal move: piece '{piece}' cannot reach row {row}, column {column}")]
    IllegalMove { piece: char, row: usize, column: usize },

    #[error("column {column} is full or out of range")]
    ColumnFull { column: usize },

    #[error("no legal move available for {label}")]
    NoLegalMove { label: char },

    #[error("game already over")]
    GameOver,

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// True for the structural parse failures (row count, row length, alphabet)
    pub fn is_malformed_board(&self) -> bool {
        matches!(
            self,
            Error::RowCount { .. } | Error::RowLength { .. } | Error::InvalidCellCharacter { .. }
        )
    }
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
