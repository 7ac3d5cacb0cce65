//! Minimax and alpha-beta game-tree search for the connect-k game

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    Error, Result,
    config::AdversarialConfig,
    connect::{ConnectBoard, Outcome, Player},
};

/// Result of a game-tree search from one board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    /// Successor board the mover should play
    #[serde(with = "board_text")]
    pub board: ConnectBoard,
    /// Discounted value of that successor from the mover's point of view
    pub value: f64,
    /// Boards visited, the searched board included
    pub nodes: usize,
}

/// Game-tree search from the point of view of `mover`.
///
/// Values are always expressed for `mover`: a won leaf is worth `win`, a lost
/// one `-win` and a tie `tie`, multiplied by `discount` once per level
/// between the leaf and the searched board plus once at the leaf itself.
/// Every search starts from scratch; only the node counter survives until
/// the next call resets it.
#[derive(Debug, Clone)]
pub struct GameTreeSearch {
    mover: Player,
    config: AdversarialConfig,
    nodes: usize,
}

impl GameTreeSearch {
    pub fn new(mover: Player) -> Self {
        Self {
            mover,
            config: AdversarialConfig::default(),
            nodes: 0,
        }
    }

    /// Search with custom utilities.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] when `config` fails
    /// [`AdversarialConfig::validate`], e.g. for a discount of 1 or more.
    pub fn with_config(mover: Player, config: AdversarialConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            mover,
            config,
            nodes: 0,
        })
    }

    pub fn mover(&self) -> Player {
        self.mover
    }

    /// Undiscounted value of a finished game for the mover
    pub fn utility(&self, outcome: Outcome) -> f64 {
        match outcome {
            Outcome::Win(player) if player == self.mover => self.config.win,
            Outcome::Win(_) => -self.config.win,
            Outcome::Tie => self.config.tie,
        }
    }

    fn leaf_value(&self, outcome: Outcome, ply: i32) -> f64 {
        self.utility(outcome) * self.config.discount.powi(ply + 1)
    }

    // Children of a playable root, or the reason the root cannot be searched.
    fn root_successors(&self, board: &ConnectBoard) -> Result<Vec<ConnectBoard>> {
        if board.winner().is_some() {
            return Err(Error::GameOver);
        }
        let successors = board.successors(self.mover);
        if successors.is_empty() {
            return Err(Error::NoLegalMove {
                label: self.mover.label(),
            });
        }
        Ok(successors)
    }

    /// Value of every legal successor under plain minimax, in column order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GameOver`] for a decided board and
    /// [`Error::NoLegalMove`] when the mover cannot drop anywhere.
    pub fn evaluate_moves(&mut self, board: &ConnectBoard) -> Result<Vec<(ConnectBoard, f64)>> {
        self.nodes = 1;
        let successors = self.root_successors(board)?;
        let opponent = self.mover.opponent();
        Ok(successors
            .into_iter()
            .map(|next| {
                let value = self.minimax_value(&next, opponent, 1);
                (next, value)
            })
            .collect())
    }

    /// Pick the best successor with plain minimax.
    ///
    /// Among equally valued successors the first one (lowest column) wins.
    ///
    /// # Errors
    ///
    /// See [`GameTreeSearch::evaluate_moves`].
    pub fn minimax(&mut self, board: &ConnectBoard) -> Result<Decision> {
        let mut best: Option<(ConnectBoard, f64)> = None;
        for (next, value) in self.evaluate_moves(board)? {
            if best.as_ref().is_none_or(|(_, best_value)| value > *best_value) {
                best = Some((next, value));
            }
        }
        let (board, value) = best.ok_or(Error::NoLegalMove {
            label: self.mover.label(),
        })?;
        debug!(mover = %self.mover, value, nodes = self.nodes, "minimax decision");
        Ok(Decision {
            board,
            value,
            nodes: self.nodes,
        })
    }

    /// Pick the best successor with alpha-beta pruning.
    ///
    /// Chooses the same board with the same value as [`GameTreeSearch::minimax`]
    /// while visiting at most as many boards.
    ///
    /// # Errors
    ///
    /// See [`GameTreeSearch::evaluate_moves`].
    pub fn alphabeta(&mut self, board: &ConnectBoard) -> Result<Decision> {
        self.nodes = 1;
        let opponent = self.mover.opponent();
        let mut alpha = f64::NEG_INFINITY;
        let mut best: Option<(ConnectBoard, f64)> = None;

        for next in self.root_successors(board)? {
            let value = self.alphabeta_value(&next, opponent, 1, alpha, f64::INFINITY);
            if best.as_ref().is_none_or(|(_, best_value)| value > *best_value) {
                best = Some((next, value));
            }
            alpha = alpha.max(value);
        }

        let (board, value) = best.ok_or(Error::NoLegalMove {
            label: self.mover.label(),
        })?;
        debug!(mover = %self.mover, value, nodes = self.nodes, "alpha-beta decision");
        Ok(Decision {
            board,
            value,
            nodes: self.nodes,
        })
    }

    fn minimax_value(&mut self, board: &ConnectBoard, to_move: Player, ply: i32) -> f64 {
        self.nodes += 1;
        if let Some(outcome) = board.winner() {
            return self.leaf_value(outcome, ply);
        }

        let successors = board.successors(to_move);
        if successors.is_empty() {
            return self.leaf_value(Outcome::Tie, ply);
        }

        let maximizing = to_move == self.mover;
        let mut best = if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
        for next in &successors {
            let value = self.minimax_value(next, to_move.opponent(), ply + 1);
            best = if maximizing {
                best.max(value)
            } else {
                best.min(value)
            };
        }
        best
    }

    fn alphabeta_value(
        &mut self,
        board: &ConnectBoard,
        to_move: Player,
        ply: i32,
        mut alpha: f64,
        mut beta: f64,
    ) -> f64 {
        self.nodes += 1;
        if let Some(outcome) = board.winner() {
            return self.leaf_value(outcome, ply);
        }

        let successors = board.successors(to_move);
        if successors.is_empty() {
            return self.leaf_value(Outcome::Tie, ply);
        }

        if to_move == self.mover {
            let mut best = f64::NEG_INFINITY;
            for next in &successors {
                best = best.max(self.alphabeta_value(next, to_move.opponent(), ply + 1, alpha, beta));
                alpha = alpha.max(best);
                if beta <= alpha {
                    break;
                }
            }
            best
        } else {
            let mut best = f64::INFINITY;
            for next in &successors {
                best = best.min(self.alphabeta_value(next, to_move.opponent(), ply + 1, alpha, beta));
                beta = beta.min(best);
                if beta <= alpha {
                    break;
                }
            }
            best
        }
    }
}

// The board travels as its compact text together with the rules it was
// parsed under, so boards of any size load back unchanged.
mod board_text {
    use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error as _};

    use crate::{config::ConnectConfig, connect::ConnectBoard};

    #[derive(Serialize)]
    struct Borrowed<'a> {
        text: String,
        config: &'a ConnectConfig,
    }

    #[derive(Deserialize)]
    struct Owned {
        text: String,
        #[serde(default)]
        config: ConnectConfig,
    }

    pub fn serialize<S: Serializer>(board: &ConnectBoard, serializer: S) -> Result<S::Ok, S::Error> {
        Borrowed {
            text: board.serialize(),
            config: board.config(),
        }
        .serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<ConnectBoard, D::Error> {
        let Owned { text, config } = Owned::deserialize(deserializer)?;
        ConnectBoard::parse_with(&text, config).map_err(D::Error::custom)
    }
}
