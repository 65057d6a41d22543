//! Board snapshots recorded by the move history.

use super::{Board, Position};
use serde::{Deserialize, Serialize};

/// One entry of the move history: the board after the move and where it was played.
///
/// The first record of every history holds the empty board and no placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    board: Board,
    placed: Option<Position>,
}

impl MoveRecord {
    /// The record every game starts from.
    pub fn start() -> Self {
        Self {
            board: Board::new(),
            placed: None,
        }
    }

    /// Creates a record for a mark placed at `placed`.
    pub fn new(board: Board, placed: Position) -> Self {
        Self {
            board,
            placed: Some(placed),
        }
    }

    /// Board snapshot after this move.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Where the mark was placed, or `None` for the starting record.
    pub fn placed(&self) -> Option<Position> {
        self.placed
    }
}
