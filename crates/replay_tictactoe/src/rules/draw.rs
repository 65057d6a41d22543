//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Square};
use super::win::winning_line;
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// A full board with no winning line is a draw.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    winning_line(board).is_none() && is_full(board)
}
