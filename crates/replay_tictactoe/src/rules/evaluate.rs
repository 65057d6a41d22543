//! Snapshot evaluation and move admission.

use super::super::{Board, Position};
use super::draw::is_full;
use super::win::{WinningLine, winning_line};
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// Result of judging one board snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    /// The first completed line in table order, if any.
    pub winning_line: Option<WinningLine>,
    /// No completed line and no empty square.
    pub is_draw: bool,
}

impl Evaluation {
    /// Returns true once the game on this board is won or drawn.
    pub fn is_decided(&self) -> bool {
        self.winning_line.is_some() || self.is_draw
    }
}

/// Evaluates a board snapshot.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Evaluation {
    let winning_line = winning_line(board);
    let is_draw = winning_line.is_none() && is_full(board);
    trace!(?winning_line, is_draw, "Evaluated board");
    Evaluation {
        winning_line,
        is_draw,
    }
}

/// Returns true if a mark may be placed at `pos` on `board`.
///
/// A decided game or an occupied square rejects the move.
#[instrument(skip(board))]
pub fn can_activate(board: &Board, pos: Position) -> bool {
    evaluate(board).winning_line.is_none() && board.is_empty(pos)
}
