//! Exportable summary of a solved puzzle

use std::{fmt, path::Path};

use serde::{Deserialize, Serialize};

use crate::{Result, config::PuzzleConfig, search::Solution, sliding::SlidingBoard};

/// Which single-agent search produced a solution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Bfs,
    Astar,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Bfs => write!(f, "bfs"),
            Algorithm::Astar => write!(f, "astar"),
        }
    }
}

/// A puzzle solution in plain data form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveReport {
    pub algorithm: Algorithm,
    pub moves: usize,
    pub expanded: usize,
    /// Rules the boards were parsed under
    #[serde(default)]
    pub config: PuzzleConfig,
    /// Boards in compact text form, start first
    pub path: Vec<String>,
}

impl SolveReport {
    pub fn new(algorithm: Algorithm, solution: &Solution<SlidingBoard>) -> Self {
        Self {
            algorithm,
            moves: solution.moves(),
            expanded: solution.expanded,
            config: solution
                .path
                .first()
                .map(|board| *board.config())
                .unwrap_or_default(),
            path: solution.path.iter().map(SlidingBoard::serialize).collect(),
        }
    }

    /// Parse the stored path back into boards under the recorded rules
    pub fn boards(&self) -> Result<Vec<SlidingBoard>> {
        self.path
            .iter()
            .map(|text| SlidingBoard::parse_with(text, self.config))
            .collect()
    }

    /// Save report to JSON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Load report from JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let report = serde_json::from_reader(file)?;
        Ok(report)
    }
}
