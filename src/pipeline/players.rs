//! Strategy implementations for the connect-k game

use rand::{Rng, SeedableRng, random, rngs::StdRng};

use crate::{
    Error, Result,
    config::AdversarialConfig,
    connect::{ConnectBoard, Player},
    ports::Strategy,
    search::{Decision, GameTreeSearch},
};

/// Plays a uniformly random legal drop (baseline)
pub struct RandomPlayer {
    name: String,
    label: Player,
    rng: StdRng,
}

impl RandomPlayer {
    pub fn new(label: Player) -> Self {
        Self::with_seed(label, random())
    }

    /// Create a random player with a deterministic seed
    pub fn with_seed(label: Player, seed: u64) -> Self {
        Self {
            name: "random".to_string(),
            label,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Strategy for RandomPlayer {
    fn choose(&mut self, board: &ConnectBoard) -> Result<ConnectBoard> {
        if board.winner().is_some() {
            return Err(Error::GameOver);
        }
        let mut moves = board.successors(self.label);
        if moves.is_empty() {
            return Err(Error::NoLegalMove {
                label: self.label.label(),
            });
        }
        let index = self.rng.random_range(0..moves.len());
        Ok(moves.swap_remove(index))
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn label(&self) -> Player {
        self.label
    }
}

/// Plays the plain minimax choice
pub struct MinimaxPlayer {
    name: String,
    search: GameTreeSearch,
    last: Option<Decision>,
}

impl MinimaxPlayer {
    pub fn new(label: Player) -> Self {
        Self {
            name: "minimax".to_string(),
            search: GameTreeSearch::new(label),
            last: None,
        }
    }

    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] for utilities that fail
    /// [`AdversarialConfig::validate`].
    pub fn with_config(label: Player, config: AdversarialConfig) -> Result<Self> {
        Ok(Self {
            name: "minimax".to_string(),
            search: GameTreeSearch::with_config(label, config)?,
            last: None,
        })
    }

    /// The decision behind the most recent move
    pub fn last_decision(&self) -> Option<&Decision> {
        self.last.as_ref()
    }
}

impl Strategy for MinimaxPlayer {
    fn choose(&mut self, board: &ConnectBoard) -> Result<ConnectBoard> {
        let decision = self.search.minimax(board)?;
        let next = decision.board.clone();
        self.last = Some(decision);
        Ok(next)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn label(&self) -> Player {
        self.search.mover()
    }
}

/// Plays the alpha-beta choice
pub struct AlphaBetaPlayer {
    name: String,
    search: GameTreeSearch,
    last: Option<Decision>,
}

impl AlphaBetaPlayer {
    pub fn new(label: Player) -> Self {
        Self {
            name: "alphabeta".to_string(),
            search: GameTreeSearch::new(label),
            last: None,
        }
    }

    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] for utilities that fail
    /// [`AdversarialConfig::validate`].
    pub fn with_config(label: Player, config: AdversarialConfig) -> Result<Self> {
        Ok(Self {
            name: "alphabeta".to_string(),
            search: GameTreeSearch::with_config(label, config)?,
            last: None,
        })
    }

    /// The decision behind the most recent move
    pub fn last_decision(&self) -> Option<&Decision> {
        self.last.as_ref()
    }
}

impl Strategy for AlphaBetaPlayer {
    fn choose(&mut self, board: &ConnectBoard) -> Result<ConnectBoard> {
        let decision = self.search.alphabeta(board)?;
        let next = decision.board.clone();
        self.last = Some(decision);
        Ok(next)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn label(&self) -> Player {
        self.search.mover()
    }
}
