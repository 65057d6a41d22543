//! Game status derived from a board snapshot and turn parity.

use super::Player;
use serde::{Deserialize, Serialize};

/// Status line of the viewed board.
///
/// Displays as `Winner: X`, `Draw` or `Next player: O`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum GameStatus {
    /// A line is complete.
    #[display("Winner: {_0}")]
    Winner(Player),
    /// The board is full and no line is complete.
    #[display("Draw")]
    Draw,
    /// Game is ongoing.
    #[display("Next player: {_0}")]
    NextPlayer(Player),
}

impl GameStatus {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Winner(player) => Some(*player),
            _ => None,
        }
    }

    /// Returns true if no further marks can be placed.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::NextPlayer(_))
    }
}
