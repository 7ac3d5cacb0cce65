//! Game loop pitting two strategies against each other

use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    Error, Result,
    connect::{ConnectBoard, Outcome, Player},
    ports::Strategy,
};

/// One move of a finished game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub player: Player,
    pub strategy: String,
    pub column: usize,
    /// Wall-clock time the strategy spent choosing
    pub seconds: f64,
}

/// Everything that happened in one game
#[derive(Debug, Clone)]
pub struct MatchRecord {
    /// Start board followed by the board after every move
    pub boards: Vec<ConnectBoard>,
    pub outcome: Outcome,
    pub moves: Vec<MoveRecord>,
}

impl MatchRecord {
    /// Number of moves played
    pub fn plies(&self) -> usize {
        self.moves.len()
    }

    /// Total thinking time of `player`
    pub fn seconds_for(&self, player: Player) -> f64 {
        self.moves
            .iter()
            .filter(|m| m.player == player)
            .map(|m| m.seconds)
            .sum()
    }
}

/// Two strategies taking turns, `first` moving first
pub struct Match {
    first: Box<dyn Strategy>,
    second: Box<dyn Strategy>,
}

impl Match {
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if both strategies play the
    /// same label.
    pub fn new(first: Box<dyn Strategy>, second: Box<dyn Strategy>) -> Result<Self> {
        if first.label() == second.label() {
            return Err(Error::InvalidConfiguration {
                message: format!(
                    "both strategies play {}; a match needs one X and one O",
                    first.label()
                ),
            });
        }
        Ok(Self { first, second })
    }

    /// Play from `start` until a win or a tie.
    ///
    /// Every move fills one cell, so the game ends after at most as many
    /// plies as the start board has empty cells.
    ///
    /// # Errors
    ///
    /// Propagates strategy errors, and returns
    /// [`Error::InvalidConfiguration`] if a strategy answers with a board that
    /// is not a single drop of its own label.
    pub fn play(&mut self, start: &ConnectBoard) -> Result<MatchRecord> {
        let mut boards = vec![start.clone()];
        let mut moves = Vec::new();
        let mut board = start.clone();
        let mut first_to_move = true;

        info!(
            first = self.first.name(),
            second = self.second.name(),
            "starting game"
        );

        let outcome = loop {
            if let Some(outcome) = board.winner() {
                break outcome;
            }

            let strategy: &mut dyn Strategy = if first_to_move {
                self.first.as_mut()
            } else {
                self.second.as_mut()
            };

            let started = Instant::now();
            let next = strategy.choose(&board)?;
            let seconds = started.elapsed().as_secs_f64();

            let player = strategy.label();
            let column = board
                .column_played(&next)
                .filter(|&column| board.place(column, player).is_ok_and(|b| b == next))
                .ok_or_else(|| Error::InvalidConfiguration {
                    message: format!(
                        "strategy '{}' answered with a board that is not a single {} drop",
                        strategy.name(),
                        player
                    ),
                })?;

            debug!(%player, column, seconds, "move played");
            moves.push(MoveRecord {
                player,
                strategy: strategy.name().to_string(),
                column,
                seconds,
            });
            boards.push(next.clone());
            board = next;
            first_to_move = !first_to_move;
        };

        info!(%outcome, plies = moves.len(), "game finished");
        Ok(MatchRecord {
            boards,
            outcome,
            moves,
        })
    }
}
