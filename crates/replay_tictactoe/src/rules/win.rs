//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Three positions that win the game when held by one player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine([Position; 3]);

impl WinningLine {
    /// The positions of the line, in table order.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// Board indices of the line.
    pub fn indices(&self) -> [usize; 3] {
        self.0.map(Position::to_index)
    }

    /// Returns true if `pos` is part of this line.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }
}

/// The eight winning lines, in the order they are checked.
///
/// Rows top to bottom, then columns left to right, then the two diagonals.
pub const LINES: [WinningLine; 8] = [
    // Rows
    WinningLine([Position::TopLeft, Position::TopCenter, Position::TopRight]),
    WinningLine([Position::MiddleLeft, Position::Center, Position::MiddleRight]),
    WinningLine([Position::BottomLeft, Position::BottomCenter, Position::BottomRight]),
    // Columns
    WinningLine([Position::TopLeft, Position::MiddleLeft, Position::BottomLeft]),
    WinningLine([Position::TopCenter, Position::Center, Position::BottomCenter]),
    WinningLine([Position::TopRight, Position::MiddleRight, Position::BottomRight]),
    // Diagonals
    WinningLine([Position::TopLeft, Position::Center, Position::BottomRight]),
    WinningLine([Position::TopRight, Position::Center, Position::BottomLeft]),
];

/// Returns the first completed line on the board, if any.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<WinningLine> {
    LINES.iter().copied().find(|line| {
        let [a, b, c] = line.positions();
        let sq = board.get(a);
        sq != Square::Empty && sq == board.get(b) && sq == board.get(c)
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    winning_line(board).and_then(|line| board.get(line.positions()[0]).player())
}
