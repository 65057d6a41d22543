//! Rooted history invariant: every history starts from the empty board.

use super::super::{GameState, Square};
use super::Invariant;

/// Invariant: History is never empty and its first record is the empty
/// board with no placement.
pub struct RootedHistoryInvariant;

impl Invariant<GameState> for RootedHistoryInvariant {
    fn holds(game: &GameState) -> bool {
        game.history().first().is_some_and(|root| {
            root.placed().is_none() && root.board().squares().iter().all(|s| *s == Square::Empty)
        })
    }

    fn description() -> &'static str {
        "History starts with the empty board"
    }
}
