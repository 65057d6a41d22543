//! Outcomes of player actions on the game state.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// What happened when a cell was activated.
///
/// Only [`Activation::Placed`] changes the game; the other variants
/// describe why the activation was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Activation {
    /// The mark was placed and recorded.
    #[display("Mark placed")]
    Placed,
    /// The viewed board already has a winning line.
    #[display("Game is already decided")]
    GameDecided,
    /// The square already holds a mark.
    #[display("Square is already occupied")]
    CellOccupied,
}

impl Activation {
    /// Returns true if the activation changed the game.
    pub fn is_placed(self) -> bool {
        self == Activation::Placed
    }
}

/// Error returned when navigating the move history.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum HistoryError {
    /// The requested move does not exist.
    #[display("Move #{requested} is out of range (history has {len} records)")]
    MoveOutOfRange {
        /// Requested move number.
        requested: usize,
        /// Current history length.
        len: usize,
    },
    /// A recorded game breaks the history invariants.
    #[display("Recorded history is invalid: {reason}")]
    InvalidHistory {
        /// Descriptions of the violated invariants.
        reason: String,
    },
}
