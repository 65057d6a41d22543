//! Cursor invariant: the viewed move is always a recorded one.

use super::super::GameState;
use super::Invariant;

/// Invariant: `current_move` indexes an existing history record.
pub struct CursorInBoundsInvariant;

impl Invariant<GameState> for CursorInBoundsInvariant {
    fn holds(game: &GameState) -> bool {
        game.current_move() < game.history().len()
    }

    fn description() -> &'static str {
        "Viewed move is within the history"
    }
}
