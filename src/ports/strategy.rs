//! Strategy port - how a player picks its move in the connect-k game

use crate::{
    Result,
    connect::{ConnectBoard, Player},
};

/// A player of the column-drop game.
///
/// Given the current board, a strategy returns the successor board it wants
/// to play. Strategies keep no game state between turns; every call decides
/// from the board alone (a random player only advances its RNG).
///
/// # Examples
///
/// ```no_run
/// use boardsearch::{
///     connect::{ConnectBoard, Player},
///     ports::Strategy,
/// };
///
/// struct FirstColumn;
///
/// impl Strategy for FirstColumn {
///     fn choose(&mut self, board: &ConnectBoard) -> boardsearch::Result<ConnectBoard> {
///         board
///             .successors(Player::X)
///             .into_iter()
///             .next()
///             .ok_or(boardsearch::Error::NoLegalMove { label: 'X' })
///     }
///
///     fn name(&self) -> &str {
///         "first-column"
///     }
///
///     fn label(&self) -> Player {
///         Player::X
///     }
/// }
/// ```
pub trait Strategy {
    /// Select the successor board to play.
    ///
    /// # Errors
    ///
    /// Returns an error when the board is already decided or the player has
    /// no legal drop.
    fn choose(&mut self, board: &ConnectBoard) -> Result<ConnectBoard>;

    /// Display name used in match reports
    fn name(&self) -> &str;

    /// The label this strategy plays
    fn label(&self) -> Player;
}
